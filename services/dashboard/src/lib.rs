pub mod actions;
pub mod config;
pub mod render;
pub mod sections;
pub mod session;
pub mod sync;
pub mod view;
