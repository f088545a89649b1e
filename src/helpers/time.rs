use chrono::{DateTime, TimeDelta, Utc};

use crate::token::error::TokenError;

/// Zero point for expires-on claims.
pub const UNIX_EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Convert (possibly fractional) seconds since the epoch into an absolute UTC instant.
pub fn unix_seconds_to_utc(seconds: f64) -> Result<DateTime<Utc>, TokenError> {
    let out_of_range = || TokenError::ExpiryOutOfRange {
        value: seconds.to_string(),
    };

    if !seconds.is_finite() {
        return Err(out_of_range());
    }

    let whole = seconds.trunc();
    // i64::MAX as f64 rounds up, so the bound is exclusive
    if whole >= i64::MAX as f64 || whole < i64::MIN as f64 {
        return Err(out_of_range());
    }
    let nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as i64;

    let offset = TimeDelta::try_seconds(whole as i64)
        .ok_or_else(out_of_range)?
        .checked_add(&TimeDelta::nanoseconds(nanos))
        .ok_or_else(out_of_range)?;

    UNIX_EPOCH.checked_add_signed(offset).ok_or_else(out_of_range)
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_whole_seconds() {
        let t = unix_seconds_to_utc(1_700_000_000.0).unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());
        assert_eq!(unix_seconds_to_utc(0.0).unwrap(), UNIX_EPOCH);
    }

    #[test]
    fn test_fractional_seconds_are_kept() {
        let t = unix_seconds_to_utc(1.5).unwrap();
        assert_eq!(t, UNIX_EPOCH + TimeDelta::milliseconds(1500));

        let t = unix_seconds_to_utc(-0.25).unwrap();
        assert_eq!(t, UNIX_EPOCH - TimeDelta::milliseconds(250));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            unix_seconds_to_utc(f64::INFINITY),
            Err(TokenError::ExpiryOutOfRange { .. })
        ));
        assert!(matches!(
            unix_seconds_to_utc(f64::NAN),
            Err(TokenError::ExpiryOutOfRange { .. })
        ));
        assert!(matches!(
            unix_seconds_to_utc(1e300),
            Err(TokenError::ExpiryOutOfRange { .. })
        ));
        assert!(matches!(
            unix_seconds_to_utc(1e17),
            Err(TokenError::ExpiryOutOfRange { .. })
        ));
    }
}
