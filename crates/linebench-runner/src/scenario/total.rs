// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Scenario, ScenarioData};
use linebench_core::CsvRecord;

/// Counts every record
#[derive(Debug, Clone, Default)]
pub struct TotalRecordsScenario {
    count: u64,
}

impl Scenario for TotalRecordsScenario {
    fn name(&self) -> &str {
        "Total Records"
    }

    fn accept(&mut self, _record: &CsvRecord) {
        self.count += 1;
    }

    fn snapshot(&self) -> ScenarioData {
        ScenarioData::count(self.count)
    }
}
