use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_CLOSE_STYLE, BUTTON_EXPENSE_STYLE, BUTTON_INCOME_STYLE, FORM_CHOICE_LABEL_STYLE,
        FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, FORM_TOGGLE_GROUP_STYLE,
        FORM_TOGGLE_INPUT_STYLE, FORM_TOGGLE_LABEL_STYLE, loading_spinner,
    },
    transaction::{
        core::{CATEGORIES, Professional, TransactionType},
        draft::TransactionDraft,
    },
};

/// The ID of the form element, htmx swaps the whole form when a submission
/// is rejected.
pub const TRANSACTION_FORM_ID: &str = "transaction-form";

/// Render the form for recording a transaction, filled in from `draft`.
///
/// The error of the last failed submission, if any, is shown above the
/// submit button.
pub fn transaction_form_view(draft: &TransactionDraft) -> Markup {
    let submit_style = match draft.transaction_type() {
        TransactionType::Income => BUTTON_INCOME_STYLE,
        TransactionType::Expense => BUTTON_EXPENSE_STYLE,
    };
    let spinner = loading_spinner();

    html! {
        form
            id=(TRANSACTION_FORM_ID)
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="w-full space-y-4"
        {
            div class="flex justify-between items-center mb-6"
            {
                h2 class="text-xl font-bold" { "Nova Transação" }

                a
                    href=(endpoints::TRANSACTIONS_VIEW)
                    id="close-form"
                    aria-label="Fechar"
                    class=(BUTTON_CLOSE_STYLE)
                {
                    "×"
                }
            }

            fieldset class=(FORM_TOGGLE_GROUP_STYLE)
            {
                legend class="sr-only" { "Tipo" }

                @for transaction_type in TransactionType::ALL {
                    @let id = format!("transaction-type-{}", transaction_type.as_str().to_lowercase());
                    @let text_style = match transaction_type {
                        TransactionType::Income => "peer-checked:text-emerald-600",
                        TransactionType::Expense => "peer-checked:text-rose-600",
                    };

                    div class="flex-1"
                    {
                        input
                            name="type"
                            id=(id)
                            type="radio"
                            value=(transaction_type.as_str())
                            checked[draft.transaction_type() == transaction_type]
                            class=(FORM_TOGGLE_INPUT_STYLE);

                        label for=(id) class={ (FORM_TOGGLE_LABEL_STYLE) " " (text_style) }
                        {
                            (transaction_type.label())
                        }
                    }
                }
            }

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Profissional Responsável" }

                div class="flex gap-2"
                {
                    @for professional in Professional::ALL {
                        @let id = format!("professional-{}", professional.as_str().to_lowercase());

                        div class="flex-1"
                        {
                            input
                                name="professional"
                                id=(id)
                                type="radio"
                                value=(professional.as_str())
                                checked[draft.professional() == Some(professional)]
                                class=(FORM_TOGGLE_INPUT_STYLE);

                            label for=(id) class=(FORM_CHOICE_LABEL_STYLE)
                            {
                                (professional.as_str())
                            }
                        }
                    }
                }
            }

            div
            {
                label for="description" class="sr-only" { "Descrição" }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Descrição (ex: Limpeza de Pele)"
                    value=(draft.description())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-4"
            {
                div class="flex-1"
                {
                    label for="amount" class="sr-only" { "Valor" }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="Valor"
                        value=(draft.amount())
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="flex-1"
                {
                    label for="date" class="sr-only" { "Data" }

                    input
                        name="date"
                        id="date"
                        type="date"
                        value=(draft.date())
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class="sr-only" { "Categoria" }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[draft.category().is_empty()] { "Selecione uma Categoria" }

                    @for category in CATEGORIES {
                        option value=(category) selected[draft.category() == category] { (category) }
                    }
                }
            }

            @if let Some(error) = draft.error() {
                p id="form-error" class=(FORM_ERROR_STYLE) { (error) }
            }

            button type="submit" class=(submit_style)
            {
                span id="indicator" class="inline htmx-indicator" { (spinner) }
                "Salvar Lançamento"
            }
        }
    }
}
