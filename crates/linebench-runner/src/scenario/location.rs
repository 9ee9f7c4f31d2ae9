// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Scenario, ScenarioData};
use linebench_core::CsvRecord;

/// Counts deaths that happened neither in a hospital nor at home
#[derive(Debug, Clone, Default)]
pub struct NonHospitalOrHomeScenario {
    count: u64,
}

impl Scenario for NonHospitalOrHomeScenario {
    fn name(&self) -> &str {
        "Non Hospital or Home"
    }

    fn accept(&mut self, record: &CsvRecord) {
        let location = record.death_location();
        if !location.eq_ignore_ascii_case("HOSPITAL") && !location.eq_ignore_ascii_case("DOMICILIO") {
            self.count += 1;
        }
    }

    fn snapshot(&self) -> ScenarioData {
        ScenarioData::count(self.count)
    }
}
