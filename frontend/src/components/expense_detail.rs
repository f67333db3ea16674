use shared::Expense;
use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct ExpenseDetailProps {
    pub expense: Expense,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ExpenseDetail)]
pub fn expense_detail(props: &ExpenseDetailProps) -> Html {
    let expense = &props.expense;
    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()}>
            <div class="expense-detail">
                <h2 class="modal-title">{"Expense Details"}</h2>
                <p><strong>{"Description: "}</strong>{ &expense.description }</p>
                <p><strong>{"Amount: "}</strong>{ format!("${}", expense.amount) }</p>
                <p><strong>{"Category: "}</strong>{ &expense.category }</p>
                <p><strong>{"Date: "}</strong>{ &expense.date }</p>
                <button type="button" class="btn btn-danger" onclick={on_close_click}>
                    {"Close"}
                </button>
            </div>
        </Modal>
    }
}
