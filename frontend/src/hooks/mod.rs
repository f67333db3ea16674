pub mod use_expenses;

pub use use_expenses::{use_expenses, ExpenseActions, ExpenseContext, UseExpensesResult};
