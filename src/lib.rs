pub mod app;
pub mod client;
pub mod conf;
pub mod notification;
pub mod trigger;
