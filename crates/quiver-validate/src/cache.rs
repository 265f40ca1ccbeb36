//! Report Cache
//!
//! Memoizes validation reports per declared type. Computing a report may
//! recursively request reports for other types (superclasses, parameter
//! types), so no lock is held while the compute closure runs. Re-entering
//! the computation of a key that is already in progress is reported as
//! [`CycleDetected`] instead of recursing forever.

use crate::report::ValidationReport;
use dashmap::{DashMap, DashSet};
use quiver_domain::ClassName;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// A report was requested for a type whose report is still being computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation of {key} re-entered while already in progress")]
pub struct CycleDetected {
    pub key: ClassName,
}

/// Memoization table from declared type to its report
#[derive(Debug)]
pub struct ReportCache {
    name: &'static str,
    reports: DashMap<ClassName, Arc<ValidationReport>>,
    in_flight: DashSet<ClassName>,
}

impl ReportCache {
    /// Create an empty cache; `name` only labels log output
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            reports: DashMap::new(),
            in_flight: DashSet::new(),
        }
    }

    /// Cached report for `key`, computing and storing it on first request
    pub fn get_or_compute<F>(
        &self,
        key: &ClassName,
        compute: F,
    ) -> Result<Arc<ValidationReport>, CycleDetected>
    where
        F: FnOnce() -> ValidationReport,
    {
        if let Some(report) = self.get(key) {
            trace!(cache = self.name, %key, "report cache hit");
            return Ok(report);
        }

        if !self.in_flight.insert(key.clone()) {
            return Err(CycleDetected { key: key.clone() });
        }
        let _in_flight = InFlight {
            set: &self.in_flight,
            key,
        };

        debug!(cache = self.name, %key, "report cache miss, validating");
        let report = Arc::new(compute());
        let stored = self
            .reports
            .entry(key.clone())
            .or_insert(report)
            .value()
            .clone();
        debug!(
            cache = self.name,
            %key,
            clean = stored.is_clean(),
            "report cached"
        );
        Ok(stored)
    }

    pub fn get(&self, key: &ClassName) -> Option<Arc<ValidationReport>> {
        self.reports.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, key: &ClassName) -> bool {
        self.reports.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Drop every cached report
    ///
    /// Must not be called while a computation is in progress.
    pub fn clear(&self) {
        debug!(cache = self.name, entries = self.reports.len(), "clearing report cache");
        self.reports.clear();
    }
}

/// Removes the key from the in-flight set when the computation ends,
/// including by panic
struct InFlight<'a> {
    set: &'a DashSet<ClassName>,
    key: &'a ClassName,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set.remove(self.key);
    }
}
