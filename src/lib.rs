//! # Security Token Library
//!
//! Parses delimited `key=value&key=value` security tokens, validates the
//! audience and expires-on claims, and hands back an immutable
//! [`SecurityToken`].
//!
//! Modules:
//! - `token` — the token value, its wire grammar and error kinds
//! - `parser` — percent decoding and claim extraction
//! - `config` — YAML configuration selecting the grammar and logging
//! - `helpers` — epoch/time conversion
//! - `utils` — logging setup, config loading, shared constants

pub mod config;
pub mod helpers;
pub mod parser;
pub mod token;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::parser::parser::{construct, decode_pairs, parse_token};
pub use crate::token::error::{TokenError, TokenErrorKind};
pub use crate::token::grammar::{GrammarKind, TokenGrammar};
pub use crate::token::security_token::SecurityToken;
