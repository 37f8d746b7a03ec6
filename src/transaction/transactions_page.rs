//! The page listing recorded transactions with the cash flow summary.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_INCOME_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_currency,
    },
    ledger::Ledger,
    navigation::NavBar,
    transaction::{
        core::{Transaction, TransactionType},
        summary::CashFlowSummary,
    },
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The ledger to list transactions from.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Render the recorded transactions, newest first, below the cash flow summary.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let (transactions, summary) = {
        let ledger = state
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)?;

        (ledger.transactions().to_vec(), ledger.summary())
    };

    Ok(transactions_view(&transactions, &summary).into_response())
}

fn transactions_view(transactions: &[Transaction], summary: &CashFlowSummary) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-6"
            {
                (summary_cards_view(summary))

                div class="flex justify-between items-center"
                {
                    h2 class="text-xl font-bold" { "Lançamentos" }

                    a
                        href=(endpoints::NEW_TRANSACTION_VIEW)
                        class={ (BUTTON_INCOME_STYLE) " max-w-fit" }
                    {
                        "Nova Transação"
                    }
                }

                @if transactions.is_empty() {
                    p id="no-transactions" class="text-gray-500" { "Nenhum lançamento registrado." }
                } @else {
                    (transactions_table_view(transactions))
                }
            }
        }
    };

    base("Lançamentos", &content)
}

fn summary_cards_view(summary: &CashFlowSummary) -> Markup {
    let balance_style = if summary.balance < 0.0 {
        "text-rose-600"
    } else {
        "text-gray-900 dark:text-white"
    };

    let card = |id: &str, title: &str, amount: f64, amount_style: &str| {
        html! {
            div
                id=(id)
                class="p-4 bg-white border border-gray-200 rounded-lg shadow-sm
                    dark:bg-gray-800 dark:border-gray-700"
            {
                h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
                p class={ "text-2xl font-bold " (amount_style) } { (format_currency(amount)) }
            }
        }
    };

    html! {
        section class="grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            (card("total-income", "Receitas", summary.total_income, "text-emerald-600"))
            (card("total-expense", "Despesas", summary.total_expense, "text-rose-600"))
            (card("balance", "Saldo", summary.balance, balance_style))
        }
    }
}

fn transactions_table_view(transactions: &[Transaction]) -> Markup {
    html! {
        div class="relative overflow-x-auto shadow-md rounded-lg"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Descrição" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Profissional" }
                        th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Valor" }
                    }
                }

                tbody
                {
                    @for transaction in transactions.iter().rev() {
                        @let (amount, amount_style) = match transaction.transaction_type {
                            TransactionType::Income => (transaction.amount, "text-emerald-600"),
                            TransactionType::Expense => (-transaction.amount, "text-rose-600"),
                        };

                        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE) { (transaction.description) }
                            td class=(TABLE_CELL_STYLE) { (transaction.category) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                @if let Some(professional) = transaction.professional {
                                    (professional)
                                }
                            }
                            td class={ (TABLE_CELL_STYLE) " text-right font-medium " (amount_style) }
                            {
                                (format_currency(amount))
                            }
                        }
                    }
                }
            }
        }
    }
}
