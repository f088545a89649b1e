use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::helpers::time::unix_seconds_to_utc;
use crate::parser::decode::url_decode;
use crate::token::error::{TokenError, TOKEN_STRING_PARAMETER};
use crate::token::grammar::TokenGrammar;
use crate::token::security_token::SecurityToken;

/// Build a [`SecurityToken`] from the five wire parameters.
///
/// A missing token string is reported before the grammar is looked at.
pub fn construct(
    token_string: Option<&str>,
    audience_field_name: &str,
    expires_on_field_name: &str,
    key_value_separator: &str,
    pair_separator: &str,
) -> Result<SecurityToken, TokenError> {
    let token_string = require_token_string(token_string)?;
    let grammar = TokenGrammar::new(
        audience_field_name,
        expires_on_field_name,
        key_value_separator,
        pair_separator,
    )
    .inspect_err(|e| warn!(error = %e, "token grammar rejected"))?;

    parse_token(Some(token_string), &grammar)
}

/// Parse and validate a token according to `grammar`.
///
/// Either every claim checks out and a complete token is returned,
/// or nothing is built.
pub fn parse_token(
    token_string: Option<&str>,
    grammar: &TokenGrammar,
) -> Result<SecurityToken, TokenError> {
    let token_string = require_token_string(token_string)?;

    extract_claims(token_string, grammar)
        .map(|(audience, expires_at_utc)| {
            debug!(
                audience = %audience,
                expires_at = %expires_at_utc.to_rfc3339(),
                "security token parsed"
            );
            SecurityToken::new(token_string.to_owned(), audience, expires_at_utc)
        })
        .inspect_err(|e| warn!(kind = ?e.kind(), error = %e, "security token rejected"))
}

/// Split and decode every `key<kv>value` pair of the token.
///
/// Segments are kept exactly as `split` yields them, so an empty pair is an
/// encoding error rather than being skipped. Decoded keys must be unique.
pub fn decode_pairs(
    token_string: &str,
    grammar: &TokenGrammar,
) -> Result<HashMap<String, String>, TokenError> {
    let mut claims = HashMap::new();

    for pair in token_string.split(grammar.pair_separator()) {
        let parts: Vec<&str> = pair.split(grammar.key_value_separator()).collect();
        let [raw_key, raw_value] = parts.as_slice() else {
            return Err(TokenError::InvalidEncoding {
                parameter: TOKEN_STRING_PARAMETER,
            });
        };

        let key = url_decode(raw_key)?;
        let value = url_decode(raw_value)?;

        match claims.entry(key) {
            Entry::Occupied(entry) => {
                return Err(TokenError::DuplicateKey {
                    key: entry.key().to_owned(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }

    Ok(claims)
}

fn require_token_string(token_string: Option<&str>) -> Result<&str, TokenError> {
    token_string.ok_or_else(|| {
        let e = TokenError::ArgumentNull {
            parameter: TOKEN_STRING_PARAMETER,
        };
        warn!(error = %e, "security token rejected");
        e
    })
}

fn extract_claims(
    token_string: &str,
    grammar: &TokenGrammar,
) -> Result<(String, DateTime<Utc>), TokenError> {
    let mut claims = decode_pairs(token_string, grammar)?;

    let expires_on = claims
        .remove(grammar.expires_on_field_name())
        .ok_or_else(|| TokenError::MissingExpiresOn {
            field: grammar.expires_on_field_name().to_owned(),
        })?;

    // audience and expires-on may legally share one field name
    let audience = if grammar.audience_field_name() == grammar.expires_on_field_name() {
        expires_on.clone()
    } else {
        claims
            .remove(grammar.audience_field_name())
            .ok_or_else(|| TokenError::MissingAudience {
                field: grammar.audience_field_name().to_owned(),
            })?
    };

    let seconds = parse_expires_on(&expires_on)?;
    let expires_at_utc = unix_seconds_to_utc(seconds)?;

    Ok((audience, expires_at_utc))
}

fn parse_expires_on(value: &str) -> Result<f64, TokenError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| TokenError::NumberFormat {
            value: value.to_owned(),
            reason: e.to_string(),
        })
}
