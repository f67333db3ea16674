use gloo::timers::callback::Timeout;
use shared::Notification;
use yew::prelude::*;

/// How long a toast stays on screen
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notification: Notification,
    pub on_dismiss: Callback<u64>,
}

fn dismiss(id: u64, on_dismiss: Callback<u64>) -> impl FnOnce() {
    move || on_dismiss.emit(id)
}

/// Start the auto-dismiss timer for one notification. Dropping the returned
/// handle cancels it.
pub fn schedule_dismiss(id: u64, on_dismiss: Callback<u64>) -> Timeout {
    Timeout::new(NOTIFICATION_TIMEOUT_MS, dismiss(id, on_dismiss))
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    // One timer per notification id. The cleanup drops it, both on unmount
    // and when a newer toast replaces this one.
    use_effect_with(props.notification.id, {
        let on_dismiss = props.on_dismiss.clone();
        move |id| {
            let timeout = schedule_dismiss(*id, on_dismiss);
            move || drop(timeout)
        }
    });

    let severity = props.notification.severity.css_class();

    html! {
        <div class={classes!("notification", severity)} role="status">
            { &props.notification.message }
        </div>
    }
}
