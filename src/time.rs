//! Conversion of wall-clock timestamps to epoch seconds.

use chrono::NaiveDateTime;

use crate::error::AppError;

/// Layout accepted by [`convert_to_epoch_time`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Byte offsets of the separators in "YYYY-MM-DD HH:MM:SS".
const SEPARATORS: [(usize, u8); 5] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':')];

/// Convert a `YYYY-MM-DD HH:MM:SS` string to seconds since the Unix epoch.
///
/// The date-time is read as UTC regardless of the host timezone. Every field
/// must be zero padded.
pub fn convert_to_epoch_time(time_string: &str) -> Result<i64, AppError> {
    check_layout(time_string)?;

    let naive = NaiveDateTime::parse_from_str(time_string, TIMESTAMP_FORMAT).map_err(|e| {
        AppError::InvalidTimestamp {
            input: time_string.to_string(),
            reason: e.to_string(),
        }
    })?;

    // chrono folds a leap second into second 59; count it as the next second.
    let leap = i64::from(&time_string[17..] == "60");

    Ok(naive.and_utc().timestamp() + leap)
}

fn check_layout(time_string: &str) -> Result<(), AppError> {
    let invalid = |reason: &str| AppError::InvalidTimestamp {
        input: time_string.to_string(),
        reason: reason.to_string(),
    };

    let bytes = time_string.as_bytes();
    if bytes.len() != 19 {
        return Err(invalid("expected format YYYY-MM-DD HH:MM:SS"));
    }

    for (i, b) in bytes.iter().enumerate() {
        let ok = match SEPARATORS.iter().find(|(pos, _)| *pos == i) {
            Some((_, sep)) => b == sep,
            None => b.is_ascii_digit(),
        };
        if !ok {
            return Err(invalid("expected format YYYY-MM-DD HH:MM:SS"));
        }
    }

    Ok(())
}
