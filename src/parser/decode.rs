use std::borrow::Cow;

use crate::token::error::TokenError;

/// URL-decode one key or value segment.
///
/// `%XX` escapes are decoded and `+` becomes a space. A `%` that is not
/// followed by two hex digits, or escapes that decode to invalid UTF-8,
/// are reported instead of being passed through.
pub fn url_decode(segment: &str) -> Result<String, TokenError> {
    check_escapes(segment)?;

    let spaced: Cow<'_, str> = if segment.contains('+') {
        Cow::Owned(segment.replace('+', " "))
    } else {
        Cow::Borrowed(segment)
    };

    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|e| TokenError::Decoding {
            segment: segment.to_owned(),
            reason: e.to_string(),
        })
}

fn check_escapes(segment: &str) -> Result<(), TokenError> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    i += 3;
                    continue;
                }
                _ => {
                    return Err(TokenError::Decoding {
                        segment: segment.to_owned(),
                        reason: format!("malformed escape sequence at byte {}", i),
                    })
                }
            }
        }
        i += 1;
    }
    Ok(())
}
