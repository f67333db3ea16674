pub mod confirm_modal;
pub mod expense_detail;
pub mod expense_form;
pub mod expense_list;
pub mod modal;
pub mod notification;

pub use confirm_modal::ConfirmModal;
pub use expense_detail::ExpenseDetail;
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use modal::Modal;
pub use notification::NotificationToast;
