use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection endpoint for expense records
pub const EXPENSES_PATH: &str = "/api/expenses";

/// Path of a single expense record: `/api/expenses/{id}`
pub fn expense_path(id: &ExpenseId) -> String {
    format!("{}/{}", EXPENSES_PATH, id)
}

/// Server-assigned expense identifier.
///
/// The API may hand out numeric or string ids; the JSON kind it arrived as is kept
/// so the id round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpenseId::Number(n) => write!(f, "{}", n),
            ExpenseId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ExpenseId {
    fn from(value: i64) -> Self {
        ExpenseId::Number(value)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        ExpenseId::Text(value.to_string())
    }
}

/// Currency-like amount, sent by the server either as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl Amount {
    /// Build an amount from user input: numeric text becomes a JSON number,
    /// anything else is passed through as-is and left for the server to judge.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .and_then(|value| {
                // Keep integers integral so "12" is sent as 12, not 12.0
                if let Ok(int) = trimmed.parse::<i64>() {
                    Some(serde_json::Number::from(int))
                } else {
                    serde_json::Number::from_f64(value)
                }
            })
            .map(Amount::Number)
            .unwrap_or_else(|| Amount::Text(input.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Amount::Number)
            .unwrap_or_else(|| Amount::Text(value.to_string()))
    }
}

/// An expense record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Amount,
    pub category: String,
    /// Calendar date, ISO-8601 (YYYY-MM-DD)
    pub date: String,
}

/// Named fields of the expense form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseField {
    Description,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    pub const ALL: [ExpenseField; 4] = [
        ExpenseField::Description,
        ExpenseField::Amount,
        ExpenseField::Category,
        ExpenseField::Date,
    ];

    /// HTML input name for this field
    pub fn name(self) -> &'static str {
        match self {
            ExpenseField::Description => "description",
            ExpenseField::Amount => "amount",
            ExpenseField::Category => "category",
            ExpenseField::Date => "date",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpenseField::Description => "Description",
            ExpenseField::Amount => "Amount",
            ExpenseField::Category => "Category",
            ExpenseField::Date => "Date",
        }
    }

    /// HTML input type used to edit this field
    pub fn input_type(self) -> &'static str {
        match self {
            ExpenseField::Amount => "number",
            ExpenseField::Date => "date",
            ExpenseField::Description | ExpenseField::Category => "text",
        }
    }
}

/// In-progress, unsaved form contents. Every field is raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    pub fn get(&self, field: ExpenseField) -> &str {
        match field {
            ExpenseField::Description => &self.description,
            ExpenseField::Amount => &self.amount,
            ExpenseField::Category => &self.category,
            ExpenseField::Date => &self.date,
        }
    }

    /// Replace exactly one field, leaving the others untouched
    pub fn set(&mut self, field: ExpenseField, value: String) {
        match field {
            ExpenseField::Description => self.description = value,
            ExpenseField::Amount => self.amount = value,
            ExpenseField::Category => self.category = value,
            ExpenseField::Date => self.date = value,
        }
    }

    /// All four fields are required; whitespace-only counts as missing
    pub fn is_complete(&self) -> bool {
        ExpenseField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }

    pub fn to_payload(&self) -> ExpensePayload {
        ExpensePayload {
            description: self.description.clone(),
            amount: Amount::from_input(&self.amount),
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            date: normalize_date(&expense.date),
        }
    }
}

/// Request body for create and update: `{description, amount, category, date}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub description: String,
    pub amount: Amount,
    pub category: String,
    pub date: String,
}

/// Reduce a server date to the `YYYY-MM-DD` form a date input accepts.
///
/// Some backends return full timestamps for date columns. Anything that
/// cannot be parsed is returned unchanged.
pub fn normalize_date(raw: &str) -> String {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return datetime.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return datetime.date().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Styling and meaning of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A transient toast message. `id` distinguishes successive notifications
/// so a timer started for one never dismisses the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}
