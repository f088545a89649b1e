// tests/common/mod.rs
use crate::token::grammar::TokenGrammar;

/// Percent-encode every key and value and join them with the grammar's separators.
pub fn encode_token(pairs: &[(&str, &str)], grammar: &TokenGrammar) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}{}{}",
                urlencoding::encode(k),
                grammar.key_value_separator(),
                urlencoding::encode(v)
            )
        })
        .collect::<Vec<_>>()
        .join(grammar.pair_separator())
}

/// Token carrying only the two claims the grammar asks for.
pub fn claims_token(audience: &str, expires_on: &str, grammar: &TokenGrammar) -> String {
    encode_token(
        &[
            (grammar.audience_field_name(), audience),
            (grammar.expires_on_field_name(), expires_on),
        ],
        grammar,
    )
}
