use thiserror::Error;

/// Name reported for the raw token argument in argument errors.
pub const TOKEN_STRING_PARAMETER: &str = "token_string";

/// Every way building a [`SecurityToken`](crate::token::security_token::SecurityToken) can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("value cannot be null (parameter '{parameter}')")]
    ArgumentNull { parameter: &'static str },

    #[error("invalid encoding (parameter '{parameter}')")]
    InvalidEncoding { parameter: &'static str },

    #[error("token missing expires-on field '{field}'")]
    MissingExpiresOn { field: String },

    #[error("token missing audience field '{field}'")]
    MissingAudience { field: String },

    #[error("an item with the same key '{key}' has already been added")]
    DuplicateKey { key: String },

    #[error("cannot decode '{segment}': {reason}")]
    Decoding { segment: String, reason: String },

    #[error("expires-on value '{value}' is not a valid number: {reason}")]
    NumberFormat { value: String, reason: String },

    #[error("expires-on value '{value}' is outside the representable time range")]
    ExpiryOutOfRange { value: String },

    #[error("invalid token grammar: {reason}")]
    InvalidGrammar { reason: String },
}

/// Fieldless discriminant of [`TokenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenErrorKind {
    ArgumentNull,
    InvalidEncoding,
    MissingExpiresOn,
    MissingAudience,
    DuplicateKey,
    Decoding,
    NumberFormat,
    ExpiryOutOfRange,
    InvalidGrammar,
}

impl TokenError {
    pub fn kind(&self) -> TokenErrorKind {
        match self {
            TokenError::ArgumentNull { .. } => TokenErrorKind::ArgumentNull,
            TokenError::InvalidEncoding { .. } => TokenErrorKind::InvalidEncoding,
            TokenError::MissingExpiresOn { .. } => TokenErrorKind::MissingExpiresOn,
            TokenError::MissingAudience { .. } => TokenErrorKind::MissingAudience,
            TokenError::DuplicateKey { .. } => TokenErrorKind::DuplicateKey,
            TokenError::Decoding { .. } => TokenErrorKind::Decoding,
            TokenError::NumberFormat { .. } => TokenErrorKind::NumberFormat,
            TokenError::ExpiryOutOfRange { .. } => TokenErrorKind::ExpiryOutOfRange,
            TokenError::InvalidGrammar { .. } => TokenErrorKind::InvalidGrammar,
        }
    }

    /// `true` for the argument-style failures (null, encoding, missing claims).
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self.kind(),
            TokenErrorKind::ArgumentNull
                | TokenErrorKind::InvalidEncoding
                | TokenErrorKind::MissingExpiresOn
                | TokenErrorKind::MissingAudience
        )
    }
}
