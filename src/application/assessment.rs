//! Assessment service: Owns the report generator and the busy-state timings.
//!
//! The random generator is injected at construction so a seeded service produces the
//! same processed-data panel sequence every run.

use std::sync::Mutex;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::config::Config;
use crate::domain::AssessmentReport;
use crate::MindcheckError;

/// Busy-state durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Wait after the intake form is submitted
    pub ingest: Duration,
    /// Wait after the analysis button is pressed
    pub analysis: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            ingest: Duration::from_secs(5),
            analysis: Duration::from_secs(7),
        }
    }
}

/// Service producing assessment reports.
pub struct AssessmentService {
    rng: Mutex<ChaCha20Rng>,
    timings: Timings,
}

impl AssessmentService {
    /// Create a service with an explicit generator.
    #[must_use]
    pub fn new(rng: ChaCha20Rng, timings: Timings) -> Self {
        Self {
            rng: Mutex::new(rng),
            timings,
        }
    }

    /// Create a service from configuration, seeding from entropy unless a seed is set.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => {
                tracing::info!("Using fixed report seed");
                ChaCha20Rng::seed_from_u64(seed)
            }
            None => ChaCha20Rng::from_entropy(),
        };
        Self::new(rng, config.timings)
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Generate a report immediately.
    ///
    /// # Errors
    /// Returns error if the generator lock is poisoned.
    pub fn generate_report(&self) -> Result<AssessmentReport, MindcheckError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| MindcheckError::LockPoisoned("report generator"))?;
        let report = AssessmentReport::generate(&mut *rng);

        tracing::info!(
            conditions = report.conditions.len(),
            "Generated assessment report"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> AssessmentService {
        AssessmentService::new(ChaCha20Rng::seed_from_u64(seed), Timings::default())
    }

    #[test]
    fn test_seeded_services_agree() {
        let a = seeded(11).generate_report().expect("report");
        let b = seeded(11).generate_report().expect("report");
        assert_eq!(a.processed, b.processed);
    }

    #[test]
    fn test_successive_reports_redraw_panel() {
        let service = seeded(5);
        let first = service.generate_report().expect("report");
        let differs = (0..20).any(|_| {
            service.generate_report().expect("report").processed != first.processed
        });
        assert!(differs);
    }

    #[test]
    fn test_default_timings() {
        let timings = Timings::default();
        assert_eq!(timings.ingest, Duration::from_secs(5));
        assert_eq!(timings.analysis, Duration::from_secs(7));
    }
}
