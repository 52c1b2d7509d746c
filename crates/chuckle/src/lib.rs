pub mod action;
pub mod errors;
pub mod models;
pub mod providers;
