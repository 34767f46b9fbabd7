pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod geo;
pub mod messages;
pub mod monitor;
pub mod position;
pub mod session;
pub mod view;
