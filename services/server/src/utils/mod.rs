pub mod dates;
pub mod jwt;
