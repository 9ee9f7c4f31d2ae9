// SPDX-License-Identifier: MIT OR Apache-2.0

use linebench_core::BenchmarkReport;

/// Pretty JSON array of `reports`
///
/// # Errors
///
/// Returns the serializer error; the result model itself always serializes.
pub fn to_json(reports: &[BenchmarkReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linebench_core::{BenchmarkResult, Breakdown, ProcessingMode, ProcessingSummary, ScenarioResult};
    use std::time::Duration;

    #[test]
    fn test_json_shape() {
        let scenario = ScenarioResult::new(
            "By Sex",
            Duration::from_nanos(1_500),
            2,
            [("Male", 0), ("Female", 2)].into_iter().collect::<Breakdown>(),
        );
        let result = BenchmarkResult::new(
            "Lines",
            Duration::from_millis(3),
            0,
            ProcessingSummary::new(2, 1, vec![scenario]),
            1,
            None,
        );
        let json = to_json(&[BenchmarkReport::new(ProcessingMode::SinglePass, vec![result])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["mode"], "single-pass");
        assert_eq!(first["results"][0]["strategy_name"], "Lines");
        assert_eq!(first["results"][0]["duration_nanos"], 3_000_000);
        assert_eq!(first["results"][0]["summary"]["invalid_lines"], 1);
        let sex = &first["results"][0]["summary"]["scenarios"][0];
        assert_eq!(sex["breakdown"]["Female"], 2);
        assert!(json.contains('\n'));
    }
}
