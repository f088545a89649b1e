mod common;
mod config_to_token;
