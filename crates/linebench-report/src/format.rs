// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

const NANOS_PER_MILLI: u128 = 1_000_000;

/// Milliseconds with a six digit nanosecond remainder, e.g. `12.000345`
#[must_use]
pub fn format_nanos(nanos: u128) -> String {
    format!("{}.{:06}", nanos / NANOS_PER_MILLI, nanos % NANOS_PER_MILLI)
}

/// [`format_nanos`] of a [`Duration`]
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    format_nanos(duration.as_nanos())
}

/// Bytes as MiB with two decimals
#[must_use]
pub fn format_memory_mb(bytes: f64) -> String {
    format!("{:.2}", bytes / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nanos() {
        assert_eq!(format_nanos(12_000_345), "12.000345");
        assert_eq!(format_nanos(0), "0.000000");
        assert_eq!(format_nanos(999_999), "0.999999");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.500000");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(0.0), "0.00");
        assert_eq!(format_memory_mb(1_572_864.0), "1.50");
    }
}
