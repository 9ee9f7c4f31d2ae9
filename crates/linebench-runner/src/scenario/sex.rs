// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Scenario, ScenarioData};
use linebench_core::CsvRecord;

const CATEGORIES: [&str; 3] = ["Male", "Female", "Other"];

/// Counts records per sex in the fixed order Male, Female, Other
///
/// `M` and `F` match case-insensitively; any other value counts as Other.
/// Categories with no records are still reported.
#[derive(Debug, Clone, Default)]
pub struct SexScenario {
    count: u64,
    by_sex: [u64; 3],
}

impl Scenario for SexScenario {
    fn name(&self) -> &str {
        "By Sex"
    }

    fn accept(&mut self, record: &CsvRecord) {
        self.count += 1;
        let slot = match record.sex() {
            s if s.eq_ignore_ascii_case("M") => 0,
            s if s.eq_ignore_ascii_case("F") => 1,
            _ => 2,
        };
        self.by_sex[slot] += 1;
    }

    fn snapshot(&self) -> ScenarioData {
        ScenarioData {
            count: self.count,
            breakdown: CATEGORIES.into_iter().zip(self.by_sex).collect(),
        }
    }
}
