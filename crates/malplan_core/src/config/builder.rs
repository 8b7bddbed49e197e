//! Region and project builders
//!
//! Fluent construction of the context objects the host normally loads from
//! its own storage. Mostly used by tests, benches and demo inputs.

use crate::model::{CasesDatum, FormValue, POPULATION_KEY, Project, Region, Scenario};

use super::keys;

/// Builder for a single region
#[derive(Debug, Clone)]
pub struct RegionBuilder {
    region: Region,
}

impl RegionBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            region: Region {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Set any form value
    #[must_use]
    pub fn form_value(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.region.form_values.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn population(self, population: f64) -> Self {
        self.form_value(POPULATION_KEY, population)
    }

    #[must_use]
    pub fn routine_distribution(self, enabled: bool) -> Self {
        self.form_value(keys::ROUTINE_COVERAGE, enabled)
    }

    /// Procurement buffer as a percentage
    #[must_use]
    pub fn procurement_buffer(self, percent: f64) -> Self {
        self.form_value(keys::PROCUREMENT_BUFFER, percent)
    }

    /// Add one case observation
    #[must_use]
    pub fn case(mut self, scenario: Scenario, year: u8, cases_per_1000: f64) -> Self {
        self.region
            .cases
            .push(CasesDatum::new(scenario, year, cases_per_1000));
        self
    }

    /// Add consecutive yearly observations starting at year 1
    #[must_use]
    pub fn cases(mut self, scenario: Scenario, per_year: impl IntoIterator<Item = f64>) -> Self {
        for (year, cases_per_1000) in (1u8..).zip(per_year) {
            self = self.case(scenario, year, cases_per_1000);
        }
        self
    }

    /// Add observations for the post-intervention years only (2, 3, 4, ...)
    #[must_use]
    pub fn post_intervention_cases(
        mut self,
        scenario: Scenario,
        per_year: impl IntoIterator<Item = f64>,
    ) -> Self {
        for (year, cases_per_1000) in (2u8..).zip(per_year) {
            self = self.case(scenario, year, cases_per_1000);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Region {
        self.region
    }
}

/// Builder for a project context
#[derive(Debug, Clone, Default)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            project: Project {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub fn budget(mut self, budget: f64) -> Self {
        self.project.budget = Some(budget);
        self
    }

    #[must_use]
    pub fn region(mut self, region: RegionBuilder) -> Self {
        self.project.regions.push(region.build());
        self
    }

    #[must_use]
    pub fn build(self) -> Project {
        self.project
    }
}
