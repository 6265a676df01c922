//! Symptom intake form values.
//!
//! Screening scores (PHQ-9, GAD-7, Epworth) and the self-reported severity selects.
//! Values are clamped to each widget's range instead of being rejected.

use serde::{Deserialize, Serialize};

/// Reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const OPTIONS: [Gender; 2] = [Gender::Male, Gender::Female];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|g| g.as_str() == s.trim())
    }
}

/// Suicidal thoughts radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SuicidalThoughts {
    #[default]
    No,
    Yes,
}

impl SuicidalThoughts {
    pub const OPTIONS: [SuicidalThoughts; 2] = [SuicidalThoughts::No, SuicidalThoughts::Yes];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|v| v.as_str() == s.trim())
    }
}

/// Inclusive range of an integer slider or select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Clamp a raw number into the range, rounding to the nearest step.
    #[must_use]
    pub fn clamp(&self, value: f64) -> u8 {
        value.round().clamp(f64::from(self.min), f64::from(self.max)) as u8
    }
}

pub const BMI_MIN: f64 = 15.0;
pub const BMI_MAX: f64 = 30.0;

pub const PHQ_RANGE: ScoreRange = ScoreRange::new(0, 27);
pub const GAD_RANGE: ScoreRange = ScoreRange::new(0, 21);
pub const EPWORTH_RANGE: ScoreRange = ScoreRange::new(0, 24);
pub const SEVERITY_RANGE: ScoreRange = ScoreRange::new(0, 4);
pub const ANXIOUSNESS_RANGE: ScoreRange = ScoreRange::new(0, 1);

/// Clamp a BMI entry into the widget range.
#[must_use]
pub fn clamp_bmi(value: f64) -> f64 {
    value.clamp(BMI_MIN, BMI_MAX)
}

/// Current widget values for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub gender: Gender,
    pub bmi: f64,
    /// PHQ-9 (depression), 0-27
    pub phq_score: u8,
    /// GAD-7 (anxiety), 0-21
    pub gad_score: u8,
    /// Epworth sleepiness scale, 0-24
    pub epworth_score: u8,
    pub depression_severity: u8,
    pub anxiety_severity: u8,
    pub suicidal: SuicidalThoughts,
    pub depressiveness: u8,
    pub anxiousness: u8,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            bmi: 25.0,
            phq_score: 10,
            gad_score: 8,
            epworth_score: 6,
            depression_severity: 0,
            anxiety_severity: 0,
            suicidal: SuicidalThoughts::No,
            depressiveness: 0,
            anxiousness: 0,
        }
    }
}

/// Untyped submission as it arrives from the browser.
///
/// Every field is optional text; [`IntakeForm::apply`] decides what to keep.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeSubmission {
    pub gender: Option<String>,
    pub bmi: Option<String>,
    pub phq_score: Option<String>,
    pub gad_score: Option<String>,
    pub epworth_score: Option<String>,
    pub depression_severity: Option<String>,
    pub anxiety_severity: Option<String>,
    pub suicidal: Option<String>,
    pub depressiveness: Option<String>,
    pub anxiousness: Option<String>,
}

fn parse_number(raw: Option<&String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl IntakeForm {
    /// Merge a submission into the current values.
    ///
    /// Numbers are clamped to their widget range. Missing or unparseable fields keep the
    /// previous value, so a submission can never fail.
    pub fn apply(&mut self, submission: &IntakeSubmission) {
        if let Some(gender) = submission.gender.as_deref().and_then(Gender::parse) {
            self.gender = gender;
        }
        if let Some(bmi) = parse_number(submission.bmi.as_ref()) {
            self.bmi = clamp_bmi(bmi);
        }

        let scores = [
            (&submission.phq_score, PHQ_RANGE, &mut self.phq_score),
            (&submission.gad_score, GAD_RANGE, &mut self.gad_score),
            (&submission.epworth_score, EPWORTH_RANGE, &mut self.epworth_score),
            (
                &submission.depression_severity,
                SEVERITY_RANGE,
                &mut self.depression_severity,
            ),
            (
                &submission.anxiety_severity,
                SEVERITY_RANGE,
                &mut self.anxiety_severity,
            ),
            (
                &submission.depressiveness,
                SEVERITY_RANGE,
                &mut self.depressiveness,
            ),
            (
                &submission.anxiousness,
                ANXIOUSNESS_RANGE,
                &mut self.anxiousness,
            ),
        ];
        for (raw, range, slot) in scores {
            if let Some(value) = parse_number(raw.as_ref()) {
                *slot = range.clamp(value);
            }
        }

        if let Some(suicidal) = submission.suicidal.as_deref().and_then(SuicidalThoughts::parse) {
            self.suicidal = suicidal;
        }
    }
}
