pub mod auth_controller;
pub mod bill_controller;
pub mod credit_controller;
pub mod debt_controller;
pub mod emi_controller;
pub mod user_controller;
