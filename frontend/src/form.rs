use std::rc::Rc;

use shared::{Expense, ExpenseDraft, ExpenseField, ExpenseId};
use yew::Reducible;

/// Whether submitting the form inserts a new record or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub fn of(target: Option<&Expense>) -> Self {
        match target {
            Some(_) => FormMode::Update,
            None => FormMode::Create,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Create => "Add Expense",
            FormMode::Update => "Update Expense",
        }
    }
}

/// State local to the record form: the draft plus the identity of the record
/// it was seeded from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub draft: ExpenseDraft,
    pub submitting: bool,
    seeded_from: Option<ExpenseId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SyncTarget(Option<Expense>),
    SetField(ExpenseField, String),
    SubmitStarted,
    /// The save for this target finished; carries the target it was made for
    SubmitSucceeded(Option<ExpenseId>),
    SubmitFailed,
    Reset,
}

impl FormState {
    /// Reseed the draft when the target record changes identity.
    ///
    /// Returns true if the draft was replaced. Re-syncing with the same target
    /// keeps whatever the user has typed.
    pub fn sync_target(&mut self, target: Option<&Expense>) -> bool {
        let target_id = target.map(|expense| &expense.id);
        if self.seeded_from.as_ref() == target_id {
            return false;
        }

        self.draft = target.map(ExpenseDraft::from).unwrap_or_default();
        self.seeded_from = target_id.cloned();
        true
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SyncTarget(target) => {
                self.sync_target(target.as_ref());
            }
            FormAction::SetField(field, value) => self.draft.set(field, value),
            FormAction::SubmitStarted => self.submitting = true,
            // A draft seeded from some other record since the save began is left alone
            FormAction::SubmitSucceeded(saved) if saved != self.seeded_from => {
                self.submitting = false;
            }
            FormAction::SubmitSucceeded(_) | FormAction::Reset => {
                self.draft = ExpenseDraft::default();
                self.seeded_from = None;
                self.submitting = false;
            }
            // Keep the draft so the user can retry
            FormAction::SubmitFailed => self.submitting = false,
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

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

    #[test]
    fn test_mode_is_derived_from_target() {
        assert_eq!(FormMode::of(None), FormMode::Create);
        assert_eq!(FormMode::of(Some(&expense(1, "Coffee"))), FormMode::Update);
        assert_eq!(FormMode::Update.submit_label(), "Update Expense");
    }

    #[test]
    fn test_switching_targets_never_mixes_drafts() {
        let r = expense(1, "Coffee");
        let mut r_prime = expense(2, "Train ticket");
        r_prime.category = "Travel".to_string();
        r_prime.date = "2024-02-10".to_string();

        let mut form = FormState::default();
        form.apply(FormAction::SyncTarget(Some(r.clone())));
        form.apply(FormAction::SetField(ExpenseField::Amount, "5".to_string()));
        form.apply(FormAction::SyncTarget(Some(r_prime.clone())));

        assert_eq!(form.draft, ExpenseDraft::from(&r_prime));
    }

    #[test]
    fn test_same_target_keeps_edits() {
        let r = expense(1, "Coffee");
        let mut form = FormState::default();
        assert!(form.sync_target(Some(&r)));

        form.apply(FormAction::SetField(ExpenseField::Description, "Espresso".to_string()));
        assert!(!form.sync_target(Some(&r)));
        assert_eq!(form.draft.description, "Espresso");
    }

    #[test]
    fn test_clearing_target_empties_draft() {
        let mut form = FormState::default();
        form.sync_target(Some(&expense(1, "Coffee")));
        assert!(form.sync_target(None));
        assert_eq!(form.draft, ExpenseDraft::default());
    }

    #[test]
    fn test_reopening_same_record_after_reset_reseeds() {
        let r = expense(1, "Coffee");
        let mut form = FormState::default();
        form.sync_target(Some(&r));
        form.apply(FormAction::SetField(ExpenseField::Description, "typo".to_string()));

        // Cancel, then edit the same row again
        form.apply(FormAction::Reset);
        form.sync_target(None);
        form.sync_target(Some(&r));
        assert_eq!(form.draft, ExpenseDraft::from(&r));
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = FormState::default();
        form.apply(FormAction::SetField(ExpenseField::Description, "Coffee".to_string()));
        form.apply(FormAction::SubmitStarted);
        assert!(form.submitting);

        form.apply(FormAction::SubmitFailed);
        assert!(!form.submitting);
        assert_eq!(form.draft.description, "Coffee");
    }

    #[test]
    fn test_successful_submit_clears_draft() {
        let mut form = FormState::default();
        form.apply(FormAction::SetField(ExpenseField::Description, "Coffee".to_string()));
        form.apply(FormAction::SubmitStarted);
        form.apply(FormAction::SubmitSucceeded(None));
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_success_for_previous_target_keeps_new_draft() {
        let r = expense(1, "Coffee");
        let r_prime = expense(2, "Train ticket");
        let mut form = FormState::default();
        form.sync_target(Some(&r));
        form.apply(FormAction::SubmitStarted);

        // The form was reopened on another record before the save settled
        form.sync_target(Some(&r_prime));
        form.apply(FormAction::SubmitSucceeded(Some(r.id.clone())));

        assert!(!form.submitting);
        assert_eq!(form.draft, ExpenseDraft::from(&r_prime));
    }
}
