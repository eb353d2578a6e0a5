//! Byte-count parsing and MiB conversion.

use crate::extract::error::ExtractError;
use serde_json::Value;

const MIB: u64 = 1 << 20;

/// Converts a byte count to mebibytes, rounding halves to the even value.
///
/// Integer arithmetic throughout: 64-bit byte counts would lose precision
/// in an f64 round-trip. Exact multiples of 2^20 convert with no drift.
pub fn bytes_to_mib(bytes: u64) -> u64 {
    let quotient = bytes / MIB;
    let remainder = bytes % MIB;
    let half = MIB / 2;
    if remainder > half || (remainder == half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Reads a JSON value as a non-negative integer. Multipass encodes byte
/// counts as decimal strings (`"5116440064"`); other layouts use plain JSON
/// numbers. Anything else is a format error carrying the field's logical
/// path.
pub fn integer_field(field: &'static str, value: &Value) -> Result<u64, ExtractError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ExtractError::Format {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exact_multiples_have_no_drift() {
        assert_eq!(bytes_to_mib(0), 0);
        assert_eq!(bytes_to_mib(MIB), 1);
        assert_eq!(bytes_to_mib(4096 * MIB), 4096);
        assert_eq!(bytes_to_mib(10240 * MIB), 10240);
    }

    #[test]
    fn test_rounding_away_from_half() {
        assert_eq!(bytes_to_mib(MIB - 1), 1);
        assert_eq!(bytes_to_mib(MIB + 1), 1);
        assert_eq!(bytes_to_mib(MIB / 2 + 1), 1);
        assert_eq!(bytes_to_mib(MIB / 2 - 1), 0);
    }

    #[test]
    fn test_halves_round_to_even() {
        // 0.5 MiB -> 0, 1.5 MiB -> 2, 2.5 MiB -> 2, 3.5 MiB -> 4
        assert_eq!(bytes_to_mib(MIB / 2), 0);
        assert_eq!(bytes_to_mib(MIB + MIB / 2), 2);
        assert_eq!(bytes_to_mib(2 * MIB + MIB / 2), 2);
        assert_eq!(bytes_to_mib(3 * MIB + MIB / 2), 4);
    }

    #[test]
    fn test_large_counts_stay_exact() {
        // 16 EiB - 1 MiB, far beyond f64's 53-bit mantissa.
        let bytes = u64::MAX - (u64::MAX % MIB);
        assert_eq!(bytes_to_mib(bytes), bytes / MIB);
    }

    #[test]
    fn test_integer_field_accepts_strings_and_numbers() {
        assert_eq!(integer_field("cpu_count", &json!("4")).unwrap(), 4);
        assert_eq!(integer_field("cpu_count", &json!(4)).unwrap(), 4);
        assert_eq!(integer_field("cpu_count", &json!(" 4 ")).unwrap(), 4);
    }

    #[test]
    fn test_integer_field_rejects_non_integers() {
        for value in [json!("four"), json!(-1), json!(1.5), json!({}), json!(null)] {
            let err = integer_field("cpu_count", &value).unwrap_err();
            assert!(matches!(err, ExtractError::Format { field: "cpu_count", .. }));
        }
    }
}
