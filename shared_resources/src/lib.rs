pub mod call;
pub mod config;
pub mod notification;
pub mod request;
