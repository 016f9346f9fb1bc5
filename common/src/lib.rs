pub mod env_config;
pub mod error;
pub mod form;
pub mod http;
pub mod session;
