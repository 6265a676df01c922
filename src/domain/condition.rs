//! Condition records shown on the assessment report.
//!
//! The table is fixed at compile time; records are never created or mutated at runtime.

use serde::Serialize;

/// Display severity attached to a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Whether the card gets the emphasised presentation class.
    #[must_use]
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Moderate | Self::Severe)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mild => write!(f, "Mild"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Severe => write!(f, "Severe"),
        }
    }
}

/// Urgency labels that receive the urgency presentation class.
///
/// Matching is exact, so the combined "Monitor closely, therapy required" label used by the
/// table does not qualify.
pub const FLAGGED_URGENCIES: [&str; 2] = ["Monitor closely", "Therapy required"];

/// One row of the static report table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionRecord {
    pub name: &'static str,
    pub severity: Severity,
    /// Canned probability in [0, 1]
    pub probability: f64,
    pub urgency: &'static str,
}

/// CSS class applied to a card element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClass {
    Severity,
    Urgency,
}

impl CardClass {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Urgency => "urgency",
        }
    }
}

impl ConditionRecord {
    const fn new(
        name: &'static str,
        severity: Severity,
        probability: f64,
        urgency: &'static str,
    ) -> Self {
        Self {
            name,
            severity,
            probability,
            urgency,
        }
    }

    /// Class for the severity line.
    #[must_use]
    pub fn severity_class(&self) -> CardClass {
        if self.severity.is_elevated() {
            CardClass::Severity
        } else {
            CardClass::Urgency
        }
    }

    /// Class for the urgency line.
    #[must_use]
    pub fn urgency_class(&self) -> CardClass {
        if FLAGGED_URGENCIES.contains(&self.urgency) {
            CardClass::Urgency
        } else {
            CardClass::Severity
        }
    }

    /// The "clinical insight" sentence printed on the card.
    ///
    /// The probability uses the shortest decimal form, so 0.70 prints as `0.7`.
    #[must_use]
    pub fn clinical_insight(&self) -> String {
        format!("{} with probability {}", self.name, self.probability)
    }
}

const MONITOR: &str = "Monitor closely, therapy required";
const ROUTINE: &str = "Routine psychological support suggested";

/// All conditions, in display order.
pub const CONDITIONS: [ConditionRecord; 14] = [
    ConditionRecord::new("Major Depressive Disorder (MDD)", Severity::Moderate, 0.70, MONITOR),
    ConditionRecord::new("Dysthymia", Severity::Moderate, 0.68, MONITOR),
    ConditionRecord::new("Seasonal Affective Disorder (SAD)", Severity::Mild, 0.49, ROUTINE),
    ConditionRecord::new("Generalized Anxiety Disorder (GAD)", Severity::Mild, 0.49, ROUTINE),
    ConditionRecord::new("Panic Disorder", Severity::Mild, 0.44, ROUTINE),
    ConditionRecord::new("PTSD", Severity::Mild, 0.45, ROUTINE),
    ConditionRecord::new("Insomnia", Severity::Moderate, 0.62, ROUTINE),
    ConditionRecord::new("Hypersomnia", Severity::Moderate, 0.62, ROUTINE),
    ConditionRecord::new("Sleep Apnea", Severity::Severe, 0.71, MONITOR),
    ConditionRecord::new("Suicidal Ideation", Severity::Moderate, 0.70, MONITOR),
    ConditionRecord::new("High-Risk Crisis", Severity::Moderate, 0.61, ROUTINE),
    ConditionRecord::new("Chronic Stress", Severity::Moderate, 0.59, ROUTINE),
    ConditionRecord::new("Adjustment Disorder", Severity::Mild, 0.46, ROUTINE),
    ConditionRecord::new("Burnout", Severity::Mild, 0.46, ROUTINE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_fourteen_rows_in_order() {
        assert_eq!(CONDITIONS.len(), 14);
        assert_eq!(CONDITIONS[0].name, "Major Depressive Disorder (MDD)");
        assert_eq!(CONDITIONS[8].name, "Sleep Apnea");
        assert_eq!(CONDITIONS[13].name, "Burnout");
    }

    #[test]
    fn test_probabilities_in_unit_interval() {
        for record in &CONDITIONS {
            assert!((0.0..=1.0).contains(&record.probability), "{}", record.name);
        }
    }

    #[test]
    fn test_severity_class() {
        assert_eq!(CONDITIONS[0].severity_class(), CardClass::Severity);
        assert_eq!(CONDITIONS[8].severity_class(), CardClass::Severity);
        assert_eq!(CONDITIONS[2].severity_class(), CardClass::Urgency);
    }

    #[test]
    fn test_urgency_class_requires_exact_match() {
        // Combined label never matches the flagged list.
        for record in &CONDITIONS {
            assert_eq!(record.urgency_class(), CardClass::Severity);
        }

        let flagged = ConditionRecord::new("X", Severity::Mild, 0.1, "Therapy required");
        assert_eq!(flagged.urgency_class(), CardClass::Urgency);
    }

    #[test]
    fn test_clinical_insight_uses_shortest_probability() {
        assert_eq!(
            CONDITIONS[0].clinical_insight(),
            "Major Depressive Disorder (MDD) with probability 0.7"
        );
        assert_eq!(
            CONDITIONS[1].clinical_insight(),
            "Dysthymia with probability 0.68"
        );
    }
}
