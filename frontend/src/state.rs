//! Application-wide state.
//!
//! `AppState` is the single owner of the expense collection and of every piece
//! of transient UI state (which record is selected, which modal is open, the
//! current toast). It changes only through `AppAction`, which keeps it free of
//! browser types so it can be exercised directly in tests.

use std::rc::Rc;

use shared::{Expense, ExpenseId, Notification, Severity};
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Server-ordered snapshot, replaced wholesale on every successful fetch
    pub expenses: Vec<Expense>,
    /// Record the form is editing; `None` means the form creates
    pub editing: Option<Expense>,
    /// Record shown in the detail modal
    pub viewing: Option<Expense>,
    /// Record awaiting delete confirmation
    pub pending_delete: Option<ExpenseId>,
    pub form_open: bool,
    pub detail_open: bool,
    pub confirm_open: bool,
    pub notification: Option<Notification>,
    last_applied_fetch: u64,
    last_notification_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// A list response arrived for fetch number `request`
    CollectionLoaded { request: u64, expenses: Vec<Expense> },
    RequestCreate,
    RequestEdit(Expense),
    CloseForm,
    RequestDetail(Expense),
    CloseDetail,
    RequestDelete(ExpenseId),
    /// The pending delete went through
    DeleteCompleted,
    CloseConfirm,
    Notify { message: String, severity: Severity },
    DismissNotification(u64),
}

impl AppState {
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::CollectionLoaded { request, expenses } => {
                // Responses can land out of order; an older snapshot never
                // overwrites a newer one.
                if request > self.last_applied_fetch {
                    self.last_applied_fetch = request;
                    self.expenses = expenses;
                } else {
                    log::debug!(
                        "dropping stale collection response {} (already applied {})",
                        request,
                        self.last_applied_fetch
                    );
                }
            }
            AppAction::RequestCreate => {
                self.editing = None;
                self.form_open = true;
            }
            AppAction::RequestEdit(expense) => {
                self.editing = Some(expense);
                self.form_open = true;
            }
            AppAction::CloseForm => {
                self.form_open = false;
                self.editing = None;
            }
            AppAction::RequestDetail(expense) => {
                self.viewing = Some(expense);
                self.detail_open = true;
            }
            AppAction::CloseDetail => {
                self.detail_open = false;
            }
            AppAction::RequestDelete(id) => {
                self.pending_delete = Some(id);
                self.confirm_open = true;
            }
            AppAction::DeleteCompleted | AppAction::CloseConfirm => {
                self.confirm_open = false;
                self.pending_delete = None;
            }
            AppAction::Notify { message, severity } => {
                self.last_notification_id += 1;
                self.notification = Some(Notification {
                    id: self.last_notification_id,
                    message,
                    severity,
                });
            }
            AppAction::DismissNotification(id) => {
                if self.notification.as_ref().is_some_and(|n| n.id == id) {
                    self.notification = None;
                }
            }
        }
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::expense;
    use pretty_assertions::assert_eq;

    fn applied(actions: impl IntoIterator<Item = AppAction>) -> AppState {
        let mut state = AppState::default();
        for action in actions {
            state.apply(action);
        }
        state
    }

    #[test]
    fn test_initial_state_is_closed_and_empty() {
        let state = AppState::default();
        assert!(state.expenses.is_empty());
        assert!(!state.form_open && !state.detail_open && !state.confirm_open);
        assert_eq!(state.notification, None);
    }

    #[test]
    fn test_collection_is_replaced_wholesale() {
        let state = applied([
            AppAction::CollectionLoaded {
                request: 1,
                expenses: vec![expense(1, "Coffee"), expense(2, "Lunch")],
            },
            AppAction::CollectionLoaded {
                request: 2,
                expenses: vec![expense(3, "Dinner")],
            },
        ]);
        assert_eq!(state.expenses, vec![expense(3, "Dinner")]);
    }

    #[test]
    fn test_stale_collection_response_is_ignored() {
        let state = applied([
            AppAction::CollectionLoaded {
                request: 2,
                expenses: vec![expense(1, "Newer")],
            },
            AppAction::CollectionLoaded {
                request: 1,
                expenses: vec![expense(1, "Older")],
            },
        ]);
        assert_eq!(state.expenses, vec![expense(1, "Newer")]);
    }

    #[test]
    fn test_edit_then_close_clears_selection() {
        let mut state = applied([AppAction::RequestEdit(expense(1, "Coffee"))]);
        assert!(state.form_open);
        assert_eq!(state.editing, Some(expense(1, "Coffee")));

        state.apply(AppAction::CloseForm);
        assert!(!state.form_open);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_create_opens_form_without_target() {
        let state = applied([
            AppAction::RequestEdit(expense(1, "Coffee")),
            AppAction::CloseForm,
            AppAction::RequestCreate,
        ]);
        assert!(state.form_open);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_detail_close_keeps_last_record() {
        let state = applied([
            AppAction::RequestDetail(expense(4, "Taxi")),
            AppAction::CloseDetail,
        ]);
        assert!(!state.detail_open);
        assert_eq!(state.viewing, Some(expense(4, "Taxi")));
    }

    #[test]
    fn test_delete_request_and_cancel() {
        let mut state = applied([AppAction::RequestDelete(ExpenseId::from(7))]);
        assert!(state.confirm_open);
        assert_eq!(state.pending_delete, Some(ExpenseId::from(7)));

        state.apply(AppAction::CloseConfirm);
        assert!(!state.confirm_open);
        assert_eq!(state.pending_delete, None);
    }

    #[test]
    fn test_modal_flags_are_independent() {
        let state = applied([
            AppAction::RequestEdit(expense(1, "Coffee")),
            AppAction::RequestDetail(expense(2, "Lunch")),
            AppAction::RequestDelete(ExpenseId::from(3)),
            AppAction::CloseDetail,
        ]);
        assert!(state.form_open);
        assert!(!state.detail_open);
        assert!(state.confirm_open);
    }

    #[test]
    fn test_notification_dismissed_by_its_own_timer_only() {
        let mut state = applied([AppAction::Notify {
            message: "first".to_string(),
            severity: Severity::Success,
        }]);
        let first = state.notification.clone().unwrap();

        state.apply(AppAction::Notify {
            message: "second".to_string(),
            severity: Severity::Error,
        });
        let second = state.notification.clone().unwrap();
        assert_ne!(first.id, second.id);

        // The first toast's timer fires late and must not hide the second
        state.apply(AppAction::DismissNotification(first.id));
        assert_eq!(state.notification.as_ref(), Some(&second));

        state.apply(AppAction::DismissNotification(second.id));
        assert_eq!(state.notification, None);
    }

    #[test]
    fn test_reducer_returns_new_state() {
        let state = Rc::new(AppState::default());
        let next = state.clone().reduce(AppAction::RequestCreate);
        assert!(!state.form_open);
        assert!(next.form_open);
    }
}
