pub mod catalog;
pub mod config;
pub mod convert;
pub mod health;
pub mod history;
pub mod keychain;
pub mod models;
