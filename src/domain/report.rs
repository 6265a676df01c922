//! Assessment report assembled after the analysis delay.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use super::condition::{ConditionRecord, CONDITIONS};
use super::processed::ProcessedData;

/// Line shown once after the intake form has been ingested.
pub const INGEST_CONFIRMATION: &str = "Your Data is Ingested Into The Model.";

/// Emergency banner. There is only one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyStatus {
    pub heading: &'static str,
    pub message: &'static str,
}

impl EmergencyStatus {
    pub const NONE_DETECTED: Self = Self {
        heading: "Emergency Status",
        message: "No Immediate Emergency Detected.",
    };
}

/// Full report: the fixed condition table, the banner and one panel draw.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub conditions: &'static [ConditionRecord],
    pub emergency: EmergencyStatus,
    pub processed: ProcessedData,
    pub generated_at: DateTime<Utc>,
}

impl AssessmentReport {
    /// Build a report. Takes no intake values; only the panel depends on `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            conditions: &CONDITIONS,
            emergency: EmergencyStatus::NONE_DETECTED,
            processed: ProcessedData::draw(rng),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_report_uses_full_table() {
        let report = AssessmentReport::generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(report.conditions.len(), 14);
        assert_eq!(report.conditions[0], CONDITIONS[0]);
        assert_eq!(report.emergency, EmergencyStatus::NONE_DETECTED);
    }

    #[test]
    fn test_report_serializes() {
        let report = AssessmentReport::generate(&mut StdRng::seed_from_u64(1));
        let json = serde_json::to_value(&report).expect("Should serialize");
        assert_eq!(json["conditions"].as_array().map(Vec::len), Some(14));
        assert_eq!(json["emergency"]["message"], "No Immediate Emergency Detected.");
        assert_eq!(json["processed"]["gender"], "Female");
    }
}
