pub mod bill_model;
pub mod credit_model;
pub mod debt_model;
pub mod emi_model;
pub mod user_model;

pub use bill_model::Bill;
pub use credit_model::{CreditFactors, CreditHistoryEvent, CreditScore};
pub use debt_model::HiddenDebtItem;
pub use emi_model::{Emi, Priority};
pub use user_model::User;
