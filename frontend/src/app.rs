use yew::prelude::*;

use crate::components::{ConfirmModal, ExpenseDetail, ExpenseForm, ExpenseList, NotificationToast};
use crate::config::ClientConfig;
use crate::hooks::{use_expenses, ExpenseContext, UseExpensesResult};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let UseExpensesResult {
        state,
        actions,
        context,
    } = use_expenses(&props.config);

    html! {
        <ContextProvider<ExpenseContext> context={context}>
            <div class="app container">
                <button class="btn btn-primary add-expense-btn" onclick={actions.add.reform(|_: MouseEvent| ())}>
                    {"Add Expense"}
                </button>

                <ExpenseForm
                    target={state.editing.clone()}
                    is_open={state.form_open}
                    on_close={actions.close_form.clone()}
                />

                <ExpenseList
                    expenses={state.expenses.clone()}
                    on_show={actions.show.clone()}
                    on_edit={actions.edit.clone()}
                    on_delete={actions.delete.clone()}
                />

                if let Some(expense) = state.viewing.clone() {
                    <ExpenseDetail
                        expense={expense}
                        is_open={state.detail_open}
                        on_close={actions.close_detail.clone()}
                    />
                }

                <ConfirmModal
                    is_open={state.confirm_open}
                    on_close={actions.close_confirm.clone()}
                    on_confirm={actions.confirm_delete.clone()}
                />

                if let Some(notification) = state.notification.clone() {
                    <NotificationToast
                        notification={notification}
                        on_dismiss={actions.dismiss_notification.clone()}
                    />
                }
            </div>
        </ContextProvider<ExpenseContext>>
    }
}
