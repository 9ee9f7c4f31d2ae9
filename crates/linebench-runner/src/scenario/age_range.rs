// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Scenario, ScenarioData};
use ahash::AHashMap;
use linebench_core::{Breakdown, CsvRecord};

/// Counts records per age range, reported in sorted order
#[derive(Debug, Clone, Default)]
pub struct AgeRangeScenario {
    count: u64,
    by_range: AHashMap<String, u64>,
}

impl Scenario for AgeRangeScenario {
    fn name(&self) -> &str {
        "By Age Range"
    }

    fn accept(&mut self, record: &CsvRecord) {
        self.count += 1;
        if let Some(n) = self.by_range.get_mut(record.age_range()) {
            *n += 1;
        } else {
            self.by_range.insert(record.age_range().to_string(), 1);
        }
    }

    fn snapshot(&self) -> ScenarioData {
        ScenarioData {
            count: self.count,
            breakdown: sorted(&self.by_range),
        }
    }
}

pub(super) fn sorted(counts: &AHashMap<String, u64>) -> Breakdown {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_breakdown() {
        let mut scenario = AgeRangeScenario::default();
        for range in ["20-29", "< 9", "10-19", "20-29"] {
            scenario.accept(&CsvRecord::new("AC", "X", "OUTRO", range, "M", 1));
        }
        let data = scenario.snapshot();
        assert_eq!(data.count, 4);
        let entries: Vec<(&str, u64)> = data.breakdown.iter().collect();
        assert_eq!(entries, [("10-19", 1), ("20-29", 2), ("< 9", 1)]);
    }
}
