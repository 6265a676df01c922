//! Domain layer: Core assessment types.
//!
//! Pure Rust types with no I/O. The condition table and panel literals are constants;
//! intake values are clamped on entry.

mod condition;
mod intake;
mod processed;
mod report;

pub use condition::{CardClass, ConditionRecord, Severity, CONDITIONS, FLAGGED_URGENCIES};
pub use intake::{
    clamp_bmi, Gender, IntakeForm, IntakeSubmission, ScoreRange, SuicidalThoughts, ANXIOUSNESS_RANGE,
    BMI_MAX, BMI_MIN, EPWORTH_RANGE, GAD_RANGE, PHQ_RANGE, SEVERITY_RANGE,
};
pub use processed::{
    round2, DrawRange, PanelLiterals, ProcessedData, BMI_DRAW, BMI_RANGE_LABEL, EPWORTH_DRAW,
    EPWORTH_RANGE_LABEL, GAD_DRAW, GAD_RANGE_LABEL, PANEL_LITERALS, PHQ_DRAW, PHQ_RANGE_LABEL,
};
pub use report::{AssessmentReport, EmergencyStatus, INGEST_CONFIRMATION};
