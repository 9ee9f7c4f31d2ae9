// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pluggable record accumulators
//!
//! A [`Scenario`] sees every valid record of one read pass and keeps a count,
//! optionally broken down by category. A [`ScenarioCatalog`] builds fresh
//! instances for every pass, so no state leaks between passes or strategies.

use linebench_core::{Breakdown, CsvRecord};

mod age_range;
mod location;
mod sex;
mod total;
mod uf;

pub use age_range::AgeRangeScenario;
pub use location::NonHospitalOrHomeScenario;
pub use sex::SexScenario;
pub use total::TotalRecordsScenario;
pub use uf::UfScenario;

/// Count and category distribution accumulated by a scenario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioData {
    /// Number of records the scenario counted
    pub count: u64,
    /// Per-category counts, empty for plain counters
    pub breakdown: Breakdown,
}

impl ScenarioData {
    /// Data without a breakdown
    #[must_use]
    pub const fn count(count: u64) -> Self {
        Self {
            count,
            breakdown: Breakdown::new(),
        }
    }
}

/// Per-record accumulator
pub trait Scenario {
    /// Name shown in reports
    fn name(&self) -> &str;

    /// Observe one valid record
    fn accept(&mut self, record: &CsvRecord);

    /// Snapshot of the accumulated state
    fn snapshot(&self) -> ScenarioData;
}

impl std::fmt::Debug for dyn Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Scenario").field(&self.name()).finish()
    }
}

/// Factory for the scenarios of one read pass
pub trait ScenarioCatalog {
    /// Fresh scenario instances, in report order
    fn create_scenarios(&self) -> Vec<Box<dyn Scenario>>;
}

impl<F> ScenarioCatalog for F
where
    F: Fn() -> Vec<Box<dyn Scenario>>,
{
    fn create_scenarios(&self) -> Vec<Box<dyn Scenario>> {
        self()
    }
}

/// The five dataset scenarios
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScenarioCatalog;

impl ScenarioCatalog for DefaultScenarioCatalog {
    fn create_scenarios(&self) -> Vec<Box<dyn Scenario>> {
        vec![
            Box::new(TotalRecordsScenario::default()),
            Box::new(NonHospitalOrHomeScenario::default()),
            Box::new(AgeRangeScenario::default()),
            Box::new(SexScenario::default()),
            Box::new(UfScenario::default()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let names: Vec<String> = DefaultScenarioCatalog
            .create_scenarios()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, [
            "Total Records",
            "Non Hospital or Home",
            "By Age Range",
            "By Sex",
            "By UF"
        ]);
    }

    #[test]
    fn test_catalog_builds_fresh_instances() {
        let catalog = DefaultScenarioCatalog;
        let mut first = catalog.create_scenarios();
        let record = CsvRecord::new("AC", "OUTRAS", "OUTRO", "< 9", "F", 1);
        for scenario in &mut first {
            scenario.accept(&record);
        }
        for scenario in catalog.create_scenarios() {
            assert_eq!(scenario.snapshot().count, 0, "{}", scenario.name());
        }
    }

    #[test]
    fn test_closure_catalog() {
        let catalog = || -> Vec<Box<dyn Scenario>> { vec![Box::new(TotalRecordsScenario::default())] };
        assert_eq!(catalog.create_scenarios().len(), 1);
    }
}
