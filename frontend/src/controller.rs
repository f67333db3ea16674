//! Async orchestration between the expense API and `AppState`.
//!
//! Every operation reports its effects as `AppAction`s through a dispatch
//! sink. In the browser the sink is the reducer dispatcher; in tests it is a
//! closure that applies actions to a local state.

use std::cell::Cell;

use shared::{Expense, ExpenseDraft, ExpenseId, Severity};

use crate::services::api::{ApiError, ExpenseApi};
use crate::state::AppAction;

pub const EXPENSE_ADDED: &str = "Expense added successfully!";
pub const EXPENSE_UPDATED: &str = "Expense updated successfully!";
pub const EXPENSE_DELETED: &str = "Expense deleted successfully!";
pub const ADD_FAILED: &str = "Failed to add expense.";
pub const UPDATE_FAILED: &str = "Failed to update expense.";
pub const DELETE_FAILED: &str = "Failed to delete expense.";

/// Hands out increasing request numbers for collection fetches
#[derive(Debug, Default)]
pub struct FetchSequence {
    last: Cell<u64>,
}

impl FetchSequence {
    pub fn next(&self) -> u64 {
        let next = self.last.get() + 1;
        self.last.set(next);
        next
    }
}

pub struct ExpenseController<A> {
    api: A,
    fetches: FetchSequence,
}

impl<A: ExpenseApi> ExpenseController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            fetches: FetchSequence::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the full collection. Failures are logged only; the previous
    /// snapshot stays in place.
    pub async fn fetch_collection(&self, dispatch: &dyn Fn(AppAction)) {
        let request = self.fetches.next();
        match self.api.list().await {
            Ok(expenses) => {
                log::debug!("fetch {} returned {} expenses", request, expenses.len());
                dispatch(AppAction::CollectionLoaded { request, expenses });
            }
            Err(e) => {
                log::error!("There was an error fetching the expenses: {}", e);
            }
        }
    }

    /// Submit the form draft. `target` selects update (`Some`) or create (`None`).
    ///
    /// On success the form is closed, a success toast is raised and `on_saved`
    /// runs before the collection is re-fetched, so the caller can release its
    /// draft while the fetch is still in flight. On failure only an error toast
    /// is raised and the caller keeps its draft.
    pub async fn submit_draft(
        &self,
        target: Option<&ExpenseId>,
        draft: &ExpenseDraft,
        dispatch: &dyn Fn(AppAction),
        on_saved: &dyn Fn(&Expense),
    ) -> Result<Expense, ApiError> {
        let (result, succeeded, failed) = match target {
            Some(id) => (
                self.api.update(id, draft).await,
                EXPENSE_UPDATED,
                UPDATE_FAILED,
            ),
            None => (self.api.create(draft).await, EXPENSE_ADDED, ADD_FAILED),
        };

        match result {
            Ok(expense) => {
                log::info!("saved expense {}", expense.id);
                notify(dispatch, succeeded, Severity::Success);
                dispatch(AppAction::CloseForm);
                on_saved(&expense);
                self.fetch_collection(dispatch).await;
                Ok(expense)
            }
            Err(e) => {
                log::error!("There was an error saving the expense: {}", e);
                notify(dispatch, failed, Severity::Error);
                Err(e)
            }
        }
    }

    /// Delete whatever is pending confirmation. Returns `None` without touching
    /// the API or the state when nothing is selected.
    pub async fn confirm_pending(
        &self,
        pending: Option<&ExpenseId>,
        dispatch: &dyn Fn(AppAction),
    ) -> Option<Result<(), ApiError>> {
        let Some(id) = pending else {
            log::warn!("confirm clicked with nothing selected for deletion");
            return None;
        };
        Some(self.confirm_delete(id, dispatch).await)
    }

    /// Delete the record awaiting confirmation.
    ///
    /// The confirm dialog closes only on success; after a failure it stays
    /// open with the same pending id so the user can retry or cancel.
    pub async fn confirm_delete(
        &self,
        id: &ExpenseId,
        dispatch: &dyn Fn(AppAction),
    ) -> Result<(), ApiError> {
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("deleted expense {}", id);
                notify(dispatch, EXPENSE_DELETED, Severity::Success);
                dispatch(AppAction::DeleteCompleted);
                self.fetch_collection(dispatch).await;
                Ok(())
            }
            Err(e) => {
                log::error!("There was an error deleting expense {}: {}", id, e);
                notify(dispatch, DELETE_FAILED, Severity::Error);
                Err(e)
            }
        }
    }
}

fn notify(dispatch: &dyn Fn(AppAction), message: &str, severity: Severity) {
    dispatch(AppAction::Notify {
        message: message.to_string(),
        severity,
    });
}
