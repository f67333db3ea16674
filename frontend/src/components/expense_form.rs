use shared::{Expense, ExpenseField};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::modal::Modal;
use crate::form::{FormAction, FormMode, FormState};
use crate::hooks::use_expenses::ExpenseContext;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// Record being edited; `None` creates a new one
    pub target: Option<Expense>,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let context = use_context::<ExpenseContext>();
    let form = use_reducer(FormState::default);
    let mode = FormMode::of(props.target.as_ref());

    // Reseed the draft every time a different record is targeted
    {
        let form = form.clone();
        let target = props.target.clone();
        let target_id = target.as_ref().map(|expense| expense.id.clone());
        use_effect_with(target_id, move |_| {
            form.dispatch(FormAction::SyncTarget(target));
            || ()
        });
    }

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match ExpenseField::from_name(&input.name()) {
                Some(field) => form.dispatch(FormAction::SetField(field, input.value())),
                None => log::warn!("input event from unknown field {:?}", input.name()),
            }
        })
    };

    // Closing discards the draft
    let close = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            form.dispatch(FormAction::Reset);
            on_close.emit(());
        })
    };

    let on_submit = {
        let form = form.clone();
        let target_id = props.target.as_ref().map(|expense| expense.id.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(context) = context.clone() else {
                log::error!("expense form rendered outside of ExpenseContext");
                return;
            };
            // The inputs are `required`, so the browser normally blocks this
            if form.submitting || !form.draft.is_complete() {
                return;
            }

            form.dispatch(FormAction::SubmitStarted);

            let draft = form.draft.clone();
            let target_id = target_id.clone();
            let form_dispatcher = form.dispatcher();

            spawn_local(async move {
                let dispatcher = context.dispatcher.clone();
                let sink = move |action| dispatcher.dispatch(action);
                let released = {
                    let form_dispatcher = form_dispatcher.clone();
                    let target_id = target_id.clone();
                    move |_: &Expense| {
                        form_dispatcher.dispatch(FormAction::SubmitSucceeded(target_id.clone()))
                    }
                };

                let result = context
                    .controller
                    .submit_draft(target_id.as_ref(), &draft, &sink, &released)
                    .await;
                if result.is_err() {
                    form_dispatcher.dispatch(FormAction::SubmitFailed);
                }
            });
        })
    };

    let on_cancel = close.reform(|_: MouseEvent| ());

    html! {
        <Modal is_open={props.is_open} on_close={close}>
            <form class="expense-form" onsubmit={on_submit}>
                {for ExpenseField::ALL.into_iter().map(|field| html! {
                    <div class="form-group">
                        <label for={field.name()}>{ field.label() }</label>
                        <input
                            id={field.name()}
                            name={field.name()}
                            type={field.input_type()}
                            step={(field == ExpenseField::Amount).then_some("0.01")}
                            value={form.draft.get(field).to_string()}
                            oninput={on_input.clone()}
                            disabled={form.submitting}
                            required=true
                        />
                    </div>
                })}
                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={form.submitting}>
                        { mode.submit_label() }
                    </button>
                    <button type="button" class="btn btn-danger" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
