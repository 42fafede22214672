pub mod answers;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod credentials;
pub mod dispatcher;
pub mod flows;
pub mod math;
pub mod message;
pub mod session;
