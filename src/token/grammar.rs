use serde::Deserialize;

use crate::token::error::TokenError;
use crate::utils::constants::{
    SWT_AUDIENCE_FIELD, SWT_EXPIRES_ON_FIELD, SWT_KEY_VALUE_SEPARATOR, SWT_PAIR_SEPARATOR,
};

/// Wire grammar of a delimited token: which claims to read and how pairs are separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrammar {
    audience_field_name: String,
    expires_on_field_name: String,
    key_value_separator: String,
    pair_separator: String,
}

impl TokenGrammar {
    pub fn new(
        audience_field_name: impl Into<String>,
        expires_on_field_name: impl Into<String>,
        key_value_separator: impl Into<String>,
        pair_separator: impl Into<String>,
    ) -> Result<Self, TokenError> {
        let grammar = Self {
            audience_field_name: audience_field_name.into(),
            expires_on_field_name: expires_on_field_name.into(),
            key_value_separator: key_value_separator.into(),
            pair_separator: pair_separator.into(),
        };
        grammar.validate()?;
        Ok(grammar)
    }

    /// `Audience=...&ExpiresOn=...`
    pub fn simple_web_token() -> Self {
        Self {
            audience_field_name: SWT_AUDIENCE_FIELD.to_owned(),
            expires_on_field_name: SWT_EXPIRES_ON_FIELD.to_owned(),
            key_value_separator: SWT_KEY_VALUE_SEPARATOR.to_owned(),
            pair_separator: SWT_PAIR_SEPARATOR.to_owned(),
        }
    }

    pub fn audience_field_name(&self) -> &str {
        &self.audience_field_name
    }

    pub fn expires_on_field_name(&self) -> &str {
        &self.expires_on_field_name
    }

    pub fn key_value_separator(&self) -> &str {
        &self.key_value_separator
    }

    pub fn pair_separator(&self) -> &str {
        &self.pair_separator
    }

    fn validate(&self) -> Result<(), TokenError> {
        let required = [
            ("audience_field_name", &self.audience_field_name),
            ("expires_on_field_name", &self.expires_on_field_name),
            ("key_value_separator", &self.key_value_separator),
            ("pair_separator", &self.pair_separator),
        ];
        if let Some((parameter, _)) = required.iter().find(|(_, v)| v.is_empty()) {
            return Err(TokenError::ArgumentNull { parameter: *parameter });
        }

        if self.key_value_separator == self.pair_separator {
            return Err(TokenError::InvalidGrammar {
                reason: format!(
                    "key_value_separator and pair_separator are both '{}'",
                    self.pair_separator
                ),
            });
        }
        Ok(())
    }
}

impl Default for TokenGrammar {
    fn default() -> Self {
        Self::simple_web_token()
    }
}

/// Grammar selection as written in the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrammarKind {
    #[default]
    SimpleWebToken,
    Custom {
        audience_field: String,
        expires_on_field: String,
        key_value_separator: String,
        pair_separator: String,
    },
}

impl GrammarKind {
    pub fn to_grammar(&self) -> Result<TokenGrammar, TokenError> {
        match self {
            GrammarKind::SimpleWebToken => Ok(TokenGrammar::simple_web_token()),
            GrammarKind::Custom {
                audience_field,
                expires_on_field,
                key_value_separator,
                pair_separator,
            } => TokenGrammar::new(
                audience_field.as_str(),
                expires_on_field.as_str(),
                key_value_separator.as_str(),
                pair_separator.as_str(),
            ),
        }
    }
}
