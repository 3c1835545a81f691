//! Camp Training - training programs
//!
//! Requirements are public to read and officer-only to write. Performance
//! metric thresholds are officer-only in both directions. Code uniqueness is
//! the registry's job, not the program's.

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use camp_access::{authorize, Operation, Principal};
use camp_types::{CampResult, ProgramCode};
use serde::Serialize;
use tracing::{debug, info};

/// A named training program.
#[derive(Clone, Debug, Serialize)]
pub struct TrainingProgram {
    code: ProgramCode,
    name: String,
    duration: String,
    requirements: Vec<String>,
    performance_metrics: BTreeMap<String, f64>,
}

impl TrainingProgram {
    /// Create a program with no requirements or metrics.
    pub fn new(
        code: impl Into<ProgramCode>,
        name: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            duration: duration.into(),
            requirements: Vec::new(),
            performance_metrics: BTreeMap::new(),
        }
    }

    /// Unique program code.
    pub fn code(&self) -> &ProgramCode {
        &self.code
    }

    /// Program name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form duration, e.g. `"8 weeks"`.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Copy of the requirements, in the order they were added.
    pub fn requirements(&self) -> Vec<String> {
        self.requirements.clone()
    }

    /// Officer-gated append to the requirements.
    pub fn add_requirement(&mut self, requirement: &str, caller: Option<&Principal>) -> CampResult<()> {
        let officer = authorize(caller, Operation::AddRequirement, None)?;
        self.requirements.push(requirement.to_string());
        info!(program = %self.code, by = %officer.id, "Requirement added");
        Ok(())
    }

    /// Insert or overwrite the threshold for `metric_name`.
    pub fn add_performance_metric(
        &mut self,
        metric_name: &str,
        threshold: f64,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        let officer = authorize(caller, Operation::AddPerformanceMetric, None)?;
        self.performance_metrics
            .insert(metric_name.to_string(), threshold);
        info!(
            program = %self.code,
            metric = metric_name,
            threshold,
            by = %officer.id,
            "Performance metric set"
        );
        Ok(())
    }

    /// Officer-gated copy of the metric thresholds.
    pub fn get_performance_metrics(&self, caller: Option<&Principal>) -> CampResult<BTreeMap<String, f64>> {
        authorize(caller, Operation::ViewPerformanceMetrics, None)?;
        debug!(program = %self.code, "Performance metrics read");
        Ok(self.performance_metrics.clone())
    }
}
