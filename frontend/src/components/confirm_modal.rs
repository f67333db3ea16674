use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Invoked on confirm. The dialog does not close itself; the owner closes
    /// it once the action has succeeded.
    pub on_confirm: Callback<()>,
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());

    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()}>
            <div class="confirm-modal-content">
                <h2 class="modal-title">{"Confirm Deletion"}</h2>
                <p>{"Are you sure you want to delete this expense?"}</p>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button type="button" class="btn btn-danger" onclick={on_confirm}>
                        {"Confirm"}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
