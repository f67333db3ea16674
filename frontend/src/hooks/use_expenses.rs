use std::rc::Rc;

use shared::{Expense, ExpenseId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::ClientConfig;
use crate::controller::ExpenseController;
use crate::services::api::ApiClient;
use crate::state::{AppAction, AppState};

/// Shared with descendants through `ContextProvider`, so the form can submit
/// without the app threading the controller through props.
#[derive(Clone)]
pub struct ExpenseContext {
    pub controller: Rc<ExpenseController<ApiClient>>,
    pub dispatcher: UseReducerDispatcher<AppState>,
}

impl PartialEq for ExpenseContext {
    fn eq(&self, other: &Self) -> bool {
        // The dispatcher is stable for the lifetime of the app
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

#[derive(Clone, PartialEq)]
pub struct ExpenseActions {
    pub refresh: Callback<()>,
    pub add: Callback<()>,
    pub edit: Callback<Expense>,
    pub show: Callback<Expense>,
    pub delete: Callback<ExpenseId>,
    pub confirm_delete: Callback<()>,
    pub close_form: Callback<()>,
    pub close_detail: Callback<()>,
    pub close_confirm: Callback<()>,
    pub dismiss_notification: Callback<u64>,
}

pub struct UseExpensesResult {
    pub state: UseReducerHandle<AppState>,
    pub actions: ExpenseActions,
    pub context: ExpenseContext,
}

#[hook]
pub fn use_expenses(config: &ClientConfig) -> UseExpensesResult {
    let state = use_reducer(AppState::default);
    let controller = {
        let config = config.clone();
        use_memo((), move |_| ExpenseController::new(ApiClient::from_config(&config)))
    };
    let dispatcher = state.dispatcher();

    let refresh = {
        let controller = controller.clone();
        let dispatcher = dispatcher.clone();

        use_callback((), move |_, _| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let sink = move |action| dispatcher.dispatch(action);
                controller.fetch_collection(&sink).await;
            });
        })
    };

    // Load the collection once on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let confirm_delete = {
        let controller = controller.clone();
        let dispatcher = dispatcher.clone();

        use_callback(state.pending_delete.clone(), move |_, pending| {
            let pending = pending.clone();
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let sink = move |action| dispatcher.dispatch(action);
                // Failure is surfaced through a notification
                let _ = controller.confirm_pending(pending.as_ref(), &sink).await;
            });
        })
    };

    let send = |action: AppAction| {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(action.clone()))
    };

    let edit = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |expense: Expense| dispatcher.dispatch(AppAction::RequestEdit(expense)))
    };

    let show = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |expense: Expense| {
            dispatcher.dispatch(AppAction::RequestDetail(expense))
        })
    };

    let delete = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: ExpenseId| dispatcher.dispatch(AppAction::RequestDelete(id)))
    };

    let dismiss_notification = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: u64| dispatcher.dispatch(AppAction::DismissNotification(id)))
    };

    let actions = ExpenseActions {
        refresh,
        add: send(AppAction::RequestCreate),
        edit,
        show,
        delete,
        confirm_delete,
        close_form: send(AppAction::CloseForm),
        close_detail: send(AppAction::CloseDetail),
        close_confirm: send(AppAction::CloseConfirm),
        dismiss_notification,
    };

    let context = ExpenseContext {
        controller,
        dispatcher,
    };

    UseExpensesResult {
        state,
        actions,
        context,
    }
}
