use crate::processing::types::{ActivityRecord, TrackerError};
use std::time::Duration;

/// Shape of an incoming log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `"<steps>,<duration>"`
    StepOnly,
    /// `"<steps>,<activity>,<duration>"`
    Training,
}

impl LogFormat {
    pub fn field_count(self) -> usize {
        match self {
            LogFormat::StepOnly => 2,
            LogFormat::Training => 3,
        }
    }
}

/// Split a delimited log line into a typed record.
///
/// Checks run in a fixed order and the first failure wins: field count,
/// then steps, then duration. The activity token of a training log is
/// copied verbatim.
pub fn parse_record(line: &str, format: LogFormat) -> Result<ActivityRecord, TrackerError> {
    let fields: Vec<&str> = line.split(',').collect();
    let expected = format.field_count();
    if fields.len() != expected {
        return Err(TrackerError::MalformedInput {
            expected,
            found: fields.len(),
        });
    }

    let steps = parse_steps(fields[0])?;
    let activity = match format {
        LogFormat::StepOnly => None,
        LogFormat::Training => Some(fields[1].to_string()),
    };

    let nanos = parse_duration(fields[expected - 1])?;
    if nanos <= 0 {
        return Err(TrackerError::InvalidDuration);
    }
    let nanos = u64::try_from(nanos).map_err(|_| TrackerError::InvalidDuration)?;

    Ok(ActivityRecord {
        steps,
        activity,
        duration: Duration::from_nanos(nanos),
    })
}

fn parse_steps(raw: &str) -> Result<u32, TrackerError> {
    let steps: i64 = raw
        .parse()
        .map_err(|_| TrackerError::InvalidSteps(format!("not a number: {raw:?}")))?;
    if steps <= 0 {
        return Err(TrackerError::InvalidSteps(format!(
            "must be greater than zero, got {steps}"
        )));
    }
    u32::try_from(steps).map_err(|_| TrackerError::InvalidSteps(format!("out of range: {steps}")))
}

const NANOS_PER_UNIT: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 3_600 * 1_000_000_000),
];

/// Parse a compound duration expression such as `1h30m`, `0h45m10s` or
/// `1.5h` into signed nanoseconds.
///
/// Grammar: an optional sign, then one or more `<decimal><unit>` groups.
/// A bare `0` is accepted without a unit. Magnitudes past `i64::MAX`
/// nanoseconds are rejected.
pub fn parse_duration(raw: &str) -> Result<i128, TrackerError> {
    let malformed = || TrackerError::MalformedDuration(raw.to_string());

    let (negative, mut rest) = match raw.as_bytes().first().copied() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if rest == "0" {
        return Ok(0);
    }
    if rest.is_empty() {
        return Err(malformed());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let int_part = &rest[..int_len];
        rest = &rest[int_len..];

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            frac_part = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(malformed());
        }

        let unit_len = rest
            .char_indices()
            .find(|(_, c)| *c == '.' || c.is_ascii_digit())
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let scale = NANOS_PER_UNIT
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(malformed)?;

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| malformed())?
        };
        let mut value = whole.checked_mul(scale).ok_or_else(malformed)?;
        value = value
            .checked_add(fraction_nanos(frac_part, scale))
            .ok_or_else(malformed)?;

        total = total.checked_add(value).ok_or_else(malformed)?;
        if total > i64::MAX as u128 {
            return Err(malformed());
        }
    }

    let signed = total as i128;
    Ok(if negative { -signed } else { signed })
}

/// Digits past nanosecond resolution are dropped.
fn fraction_nanos(digits: &str, scale: u128) -> u128 {
    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for digit in digits.bytes().take(18) {
        numerator = numerator * 10 + u128::from(digit - b'0');
        denominator *= 10;
    }
    numerator * scale / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: i128 = 1_000_000_000;

    #[test]
    fn compound_durations_sum_their_parts() {
        assert_eq!(parse_duration("0h30m00s").unwrap(), 30 * 60 * SECOND);
        assert_eq!(parse_duration("1h30m").unwrap(), 90 * 60 * SECOND);
        assert_eq!(parse_duration("1.5h").unwrap(), 90 * 60 * SECOND);
        assert_eq!(parse_duration("250ms").unwrap(), SECOND / 4);
        assert_eq!(parse_duration("-1h").unwrap(), -3_600 * SECOND);
        assert_eq!(parse_duration("0").unwrap(), 0);
    }

    #[test]
    fn unitless_or_garbage_durations_are_malformed() {
        for raw in ["", "90", "1x", "h", "1h30", ".h", "-", "1hh"] {
            assert!(
                matches!(parse_duration(raw), Err(TrackerError::MalformedDuration(_))),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn field_count_is_checked_first() {
        let err = parse_record("abc,Walking,1h,extra", LogFormat::Training).unwrap_err();
        assert_eq!(
            err,
            TrackerError::MalformedInput {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn steps_are_checked_before_duration() {
        let err = parse_record("abc,nonsense", LogFormat::StepOnly).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidSteps(_)));

        let err = parse_record("-5,1h", LogFormat::StepOnly).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidSteps(_)));
    }

    #[test]
    fn zero_and_negative_durations_are_invalid() {
        assert_eq!(
            parse_record("100,0s", LogFormat::StepOnly).unwrap_err(),
            TrackerError::InvalidDuration
        );
        assert_eq!(
            parse_record("100,Running,-30m", LogFormat::Training).unwrap_err(),
            TrackerError::InvalidDuration
        );
    }

    #[test]
    fn unknown_activity_tokens_survive_parsing() {
        let record = parse_record("3000,Sport,1h0m0s", LogFormat::Training).unwrap();
        assert_eq!(record.steps, 3000);
        assert_eq!(record.activity.as_deref(), Some("Sport"));
        assert_eq!(record.duration, Duration::from_secs(3_600));
    }

    #[test]
    fn parsing_is_repeatable() {
        let first = parse_record("6025,0h30m00s", LogFormat::StepOnly).unwrap();
        let second = parse_record("6025,0h30m00s", LogFormat::StepOnly).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.activity, None);
    }
}
