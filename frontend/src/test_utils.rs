//! Test helpers: an in-memory expense API and record factories.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;
use shared::{Amount, Expense, ExpenseDraft, ExpenseId};

use crate::services::api::{ApiError, ExpenseApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

/// Behaves like the remote collection: assigns ids on create, replaces on
/// update, answers 404 for unknown ids. Any operation can be made to fail.
pub struct InMemoryApi {
    expenses: RefCell<Vec<Expense>>,
    next_id: Cell<i64>,
    failing: RefCell<HashSet<Operation>>,
    calls: RefCell<Vec<Operation>>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::with_expenses(Vec::new())
    }

    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        let next_id = expenses
            .iter()
            .filter_map(|expense| match expense.id {
                ExpenseId::Number(n) => Some(n),
                ExpenseId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            expenses: RefCell::new(expenses),
            next_id: Cell::new(next_id),
            failing: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn fail(&self, operation: Operation) {
        self.failing.borrow_mut().insert(operation);
    }

    pub fn recover(&self, operation: Operation) {
        self.failing.borrow_mut().remove(&operation);
    }

    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.borrow().clone()
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: Operation) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(operation);
        if self.failing.borrow().contains(&operation) {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

fn not_found(id: &ExpenseId) -> ApiError {
    ApiError::Rejected {
        status: 404,
        body: format!("expense {} not found", id),
    }
}

fn from_draft(id: ExpenseId, draft: &ExpenseDraft) -> Expense {
    let payload = draft.to_payload();
    Expense {
        id,
        description: payload.description,
        amount: payload.amount,
        category: payload.category,
        date: payload.date,
    }
}

#[async_trait(?Send)]
impl ExpenseApi for InMemoryApi {
    async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        self.record(Operation::List)?;
        Ok(self.snapshot())
    }

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        self.record(Operation::Create)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let expense = from_draft(ExpenseId::Number(id), draft);
        self.expenses.borrow_mut().push(expense.clone());
        Ok(expense)
    }

    async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        self.record(Operation::Update)?;
        let mut expenses = self.expenses.borrow_mut();
        let slot = expenses
            .iter_mut()
            .find(|expense| &expense.id == id)
            .ok_or_else(|| not_found(id))?;

        *slot = from_draft(id.clone(), draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), ApiError> {
        self.record(Operation::Delete)?;
        let mut expenses = self.expenses.borrow_mut();
        let before = expenses.len();
        expenses.retain(|expense| &expense.id != id);
        if expenses.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

/// Expense with a numeric id and fixed amount/category/date
pub fn expense(id: i64, description: &str) -> Expense {
    Expense {
        id: ExpenseId::Number(id),
        description: description.to_string(),
        amount: Amount::from(4.5),
        category: "Food".to_string(),
        date: "2024-01-01".to_string(),
    }
}

pub fn draft(description: &str, amount: &str, category: &str, date: &str) -> ExpenseDraft {
    ExpenseDraft {
        description: description.to_string(),
        amount: amount.to_string(),
        category: category.to_string(),
        date: date.to_string(),
    }
}
