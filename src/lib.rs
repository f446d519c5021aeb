pub mod aggregate;
pub mod config;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod record;
pub mod selection;
pub mod views;
