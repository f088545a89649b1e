pub mod error;
pub mod grammar;
pub mod security_token;
