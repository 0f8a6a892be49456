pub mod auth_types;
pub mod bill_types;
pub mod credit_types;
