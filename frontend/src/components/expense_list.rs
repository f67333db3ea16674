use shared::{Expense, ExpenseId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub on_show: Callback<Expense>,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<ExpenseId>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    html! {
        <section class="expense-list">
            <h1>{"Expenses"}</h1>
            <ul>
                {for props.expenses.iter().map(|expense| {
                    let on_show = {
                        let expense = expense.clone();
                        props.on_show.reform(move |_: MouseEvent| expense.clone())
                    };
                    let on_edit = {
                        let expense = expense.clone();
                        props.on_edit.reform(move |_: MouseEvent| expense.clone())
                    };
                    let on_delete = {
                        let id = expense.id.clone();
                        props.on_delete.reform(move |_: MouseEvent| id.clone())
                    };

                    html! {
                        <li key={expense.id.to_string()} class="expense-row">
                            <span>{ format!("{}: ${}", expense.description, expense.amount) }</span>
                            <div class="row-actions">
                                <button type="button" class="btn btn-show" onclick={on_show}>{"Show"}</button>
                                <button type="button" class="btn btn-edit" onclick={on_edit}>{"Edit"}</button>
                                <button type="button" class="btn btn-delete" onclick={on_delete}>{"Delete"}</button>
                            </div>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
