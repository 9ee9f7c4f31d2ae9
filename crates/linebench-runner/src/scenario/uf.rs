// SPDX-License-Identifier: MIT OR Apache-2.0

use super::age_range::sorted;
use super::{Scenario, ScenarioData};
use ahash::AHashMap;
use linebench_core::CsvRecord;

/// Counts records per federative unit, reported in sorted order
#[derive(Debug, Clone, Default)]
pub struct UfScenario {
    count: u64,
    by_uf: AHashMap<String, u64>,
}

impl Scenario for UfScenario {
    fn name(&self) -> &str {
        "By UF"
    }

    fn accept(&mut self, record: &CsvRecord) {
        self.count += 1;
        *self.by_uf.entry(record.uf().to_string()).or_insert(0) += 1;
    }

    fn snapshot(&self) -> ScenarioData {
        ScenarioData {
            count: self.count,
            breakdown: sorted(&self.by_uf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_state() {
        let mut scenario = UfScenario::default();
        for uf in ["SP", "AC", "SP"] {
            scenario.accept(&CsvRecord::new(uf, "X", "OUTRO", "< 9", "M", 1));
        }
        assert_eq!(scenario.snapshot().breakdown.to_string(), "{AC=1, SP=2}");
    }
}
