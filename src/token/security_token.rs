use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::parser::parser::parse_token;
use crate::token::error::TokenError;
use crate::token::grammar::TokenGrammar;

/// Validated token: raw text plus its audience and absolute expiry.
///
/// Values only come out of the parser, so `audience` and `expires_at_utc`
/// are always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityToken {
    audience: String,
    expires_at_utc: DateTime<Utc>,
    token_string: String, // original, undecoded
}

impl SecurityToken {
    pub(crate) fn new(token_string: String, audience: String, expires_at_utc: DateTime<Utc>) -> Self {
        Self {
            audience,
            expires_at_utc,
            token_string,
        }
    }

    pub fn parse(token_string: &str, grammar: &TokenGrammar) -> Result<Self, TokenError> {
        parse_token(Some(token_string), grammar)
    }

    pub fn token_string(&self) -> &str {
        &self.token_string
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn expires_at_utc(&self) -> DateTime<Utc> {
        self.expires_at_utc
    }

    /// Expired once `now` reaches `expires_at_utc`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at_utc
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Negative once the token is expired.
    pub fn time_to_expiry(&self, now: DateTime<Utc>) -> TimeDelta {
        self.expires_at_utc - now
    }
}

impl FromStr for SecurityToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &TokenGrammar::simple_web_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::helpers::time::UNIX_EPOCH;

    #[test]
    fn test_from_str_uses_simple_web_token_grammar() {
        let token: SecurityToken = "Audience=http%3A%2F%2Fcontoso.com%2F&ExpiresOn=1700000000"
            .parse()
            .unwrap();
        assert_eq!(token.audience(), "http://contoso.com/");
        assert_eq!(
            token.expires_at_utc(),
            Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap()
        );
    }

    #[test]
    fn test_expiry_helpers() {
        let token = SecurityToken::new(
            "raw".into(),
            "aud".into(),
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        );
        let before = Utc.with_ymd_and_hms(2029, 12, 31, 23, 59, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 1).unwrap();

        assert!(!token.is_expired_at(before));
        assert!(token.is_expired_at(token.expires_at_utc()));
        assert!(token.is_expired_at(after));
        assert_eq!(token.time_to_expiry(before), TimeDelta::seconds(60));
        assert_eq!(token.time_to_expiry(after), TimeDelta::seconds(-1));
    }

    #[test]
    fn test_serialize_exposes_claims() {
        let token = SecurityToken::new(
            "Audience=a&ExpiresOn=0".into(),
            "a".into(),
            UNIX_EPOCH,
        );
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["audience"], "a");
        assert_eq!(json["expires_at_utc"], "1970-01-01T00:00:00Z");
        assert_eq!(json["token_string"], "Audience=a&ExpiresOn=0");
    }
}
