// SPDX-License-Identifier: MIT OR Apache-2.0
//! Structured record produced from one valid CSV line

/// One parsed row of the mortality dataset
///
/// Five text columns followed by an integer total. Records are created fresh
/// for every valid line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CsvRecord {
    uf: String,
    disease_type: String,
    death_location: String,
    age_range: String,
    sex: String,
    total: i64,
}

impl CsvRecord {
    /// Create a record from its six columns
    #[must_use]
    pub fn new(
        uf: impl Into<String>,
        disease_type: impl Into<String>,
        death_location: impl Into<String>,
        age_range: impl Into<String>,
        sex: impl Into<String>,
        total: i64,
    ) -> Self {
        Self {
            uf: uf.into(),
            disease_type: disease_type.into(),
            death_location: death_location.into(),
            age_range: age_range.into(),
            sex: sex.into(),
            total,
        }
    }

    /// Federative unit (state code)
    #[must_use]
    pub fn uf(&self) -> &str {
        &self.uf
    }

    /// Disease type column
    #[must_use]
    pub fn disease_type(&self) -> &str {
        &self.disease_type
    }

    /// Place of death column
    #[must_use]
    pub fn death_location(&self) -> &str {
        &self.death_location
    }

    /// Age range bucket
    #[must_use]
    pub fn age_range(&self) -> &str {
        &self.age_range
    }

    /// Sex column as found in the file
    #[must_use]
    pub fn sex(&self) -> &str {
        &self.sex
    }

    /// Numeric total column
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.total
    }
}
