//! Comparing a field value against a textual threshold.
//!
//! The threshold literal is interpreted according to the kind of the value
//! it is compared with:
//!
//! | Kind | Threshold | Compared |
//! |---|---|---|
//! | unsigned | unsigned decimal, no sign | value |
//! | signed | signed decimal | value |
//! | duration | duration expression, else integer nanoseconds | nanoseconds |
//! | string | signed decimal | character count |
//! | sequence, map, array | signed decimal | element count |
//! | float | decimal or hex (`0x1p4`) float | value |
//! | timestamp | `YYYY-MM-DDThh:mm:ss±hh:mm` | instant |
//!
//! Every comparison is inclusive. Optional wrappers are dereferenced until
//! a value or an absent wrapper is reached. Any other kind, or a threshold
//! that does not parse, fails the check.

use super::duration::{DurationError, parse_duration};
use crate::value::{FieldValue, ValueKind};
use chrono::{DateTime, FixedOffset};
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;
use tracing::debug;

/// Layout of timestamp thresholds. Fractional seconds are optional.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Why a threshold could not be compared. Only surfaces in logs.
#[derive(Debug, Error)]
pub(crate) enum ThresholdError {
    #[error("sign not allowed in unsigned threshold")]
    Signed,

    #[error(transparent)]
    Integer(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("float threshold out of range")]
    FloatRange,

    #[error("neither a duration nor integer nanoseconds: {0}")]
    Duration(#[source] DurationError),

    #[error("timestamp threshold does not match YYYY-MM-DDThh:mm:ss±hh:mm")]
    TimestampLayout,

    #[error(transparent)]
    Timestamp(#[from] chrono::ParseError),

    #[error("value is absent")]
    Absent,

    #[error("{0} values have no maximum")]
    Unsupported(ValueKind),
}

/// Returns true if `value` does not exceed the threshold in `literal`.
///
/// A malformed threshold or an unsupported kind returns `false`; the reason
/// is logged at debug level. Nested optional wrappers are dereferenced down
/// to the value they hold; an absent one at any level fails.
///
/// # Examples
///
/// ```
/// use condval::rules::is_within_max;
/// use condval::value::Inspect;
///
/// assert!(is_within_max(10u32.field_value(), "10"));
/// assert!(!is_within_max("héllo".field_value(), "4"));
/// assert!(is_within_max(std::time::Duration::from_secs(90).field_value(), "1m30s"));
/// assert!(!is_within_max(5u32.field_value(), "five"));
/// ```
pub fn is_within_max(value: FieldValue<'_>, literal: &str) -> bool {
    match compare(value, literal) {
        Ok(within) => within,
        Err(error) => {
            debug!(
                kind = %value.kind(),
                threshold = literal,
                %error,
                "threshold comparison failed"
            );
            false
        }
    }
}

fn compare(value: FieldValue<'_>, literal: &str) -> Result<bool, ThresholdError> {
    match value {
        FieldValue::Unsigned(v) => {
            if literal.starts_with('+') {
                return Err(ThresholdError::Signed);
            }
            Ok(v <= literal.parse::<u64>()?)
        }
        FieldValue::Signed(v) => Ok(v <= literal.parse::<i64>()?),
        FieldValue::Duration(nanos) => Ok(nanos <= i128::from(duration_threshold(literal)?)),
        FieldValue::String(s) => Ok(count_within(s.chars().count(), literal.parse()?)),
        FieldValue::Sequence(len) | FieldValue::Map(len) | FieldValue::Array { len, .. } => {
            Ok(count_within(len, literal.parse()?))
        }
        FieldValue::Float(v) => Ok(v <= float_threshold(literal)?),
        FieldValue::Timestamp(t) => Ok(t <= timestamp_threshold(literal)?),
        FieldValue::Nullable(Some(inner)) => compare(inner.field_value(), literal),
        FieldValue::Nullable(None) => Err(ThresholdError::Absent),
        FieldValue::Bool(_) | FieldValue::Record(_) | FieldValue::Opaque { .. } => {
            Err(ThresholdError::Unsupported(value.kind()))
        }
    }
}

fn count_within(count: usize, max: i64) -> bool {
    i64::try_from(count).is_ok_and(|count| count <= max)
}

fn duration_threshold(literal: &str) -> Result<i64, ThresholdError> {
    match parse_duration(literal) {
        Ok(nanos) => Ok(nanos),
        Err(error) => literal
            .parse::<i64>()
            .map_err(|_| ThresholdError::Duration(error)),
    }
}

fn float_threshold(literal: &str) -> Result<f64, ThresholdError> {
    let max = match literal.parse::<f64>() {
        Ok(max) => max,
        Err(error) => parse_hex_float(literal).ok_or(ThresholdError::Float(error))?,
    };
    // Overflowing literals parse to infinity; only spelled-out infinities count.
    if max.is_infinite() && !literal.to_ascii_lowercase().contains("inf") {
        return Err(ThresholdError::FloatRange);
    }
    Ok(max)
}

/// Parses `[+-]0x<hex>[.<hex>]p[+-]<dec>`. Mantissas longer than 13 hex
/// digits are rounded.
fn parse_hex_float(literal: &str) -> Option<f64> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))?;
    let (mantissa, exponent) = digits.split_once(['p', 'P'])?;
    let exponent: i32 = exponent.parse().ok()?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut value = 0.0_f64;
    for c in whole.chars().chain(fraction.chars()) {
        value = value.mul_add(16.0, f64::from(c.to_digit(16)?));
    }
    if value != 0.0 {
        let shift = i32::try_from(fraction.len())
            .ok()?
            .checked_mul(4)
            .and_then(|bits| exponent.checked_sub(bits))?;
        value *= 2.0_f64.powi(shift);
    }
    Some(if negative { -value } else { value })
}

fn timestamp_threshold(literal: &str) -> Result<DateTime<FixedOffset>, ThresholdError> {
    if !has_timestamp_layout(literal) {
        return Err(ThresholdError::TimestampLayout);
    }
    Ok(DateTime::parse_from_str(literal, TIMESTAMP_FORMAT)?)
}

/// `YYYY-MM-DDThh:mm:ss`, optional `.` and digits, then `±hh:mm`.
/// chrono alone also accepts unpadded fields, signed years and `+hhmm`.
fn has_timestamp_layout(literal: &str) -> bool {
    const HEAD: &[u8] = b"0000-00-00T00:00:00";
    const OFFSET: &[u8] = b"+00:00";

    let bytes = literal.as_bytes();
    if bytes.len() < HEAD.len() + OFFSET.len() {
        return false;
    }
    let (rest, offset) = bytes.split_at(bytes.len() - OFFSET.len());
    let (head, fraction) = rest.split_at(HEAD.len());

    let fits = |actual: &[u8], layout: &[u8]| {
        actual.iter().zip(layout).all(|(&a, &l)| match l {
            b'0' => a.is_ascii_digit(),
            b'+' => a == b'+' || a == b'-',
            _ => a == l,
        })
    };

    let fraction_ok = match fraction.split_first() {
        None => true,
        Some((b'.', digits)) => !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
        Some(_) => false,
    };

    fits(head, HEAD) && fits(offset, OFFSET) && fraction_ok
}
