//! Report view: condition cards, emergency banner and processed data panel.

use std::fmt::Write;

use crate::domain::{
    AssessmentReport, ConditionRecord, EmergencyStatus, ProcessedData, BMI_RANGE_LABEL,
    EPWORTH_RANGE_LABEL, GAD_RANGE_LABEL, PHQ_RANGE_LABEL,
};

use super::esc;

/// Render one condition card.
#[must_use]
pub fn render_condition_card(record: &ConditionRecord) -> String {
    format!(
        r#"<div class="card">
    <div class="report-title">{name}</div>
    <div><span class="{severity_class}">Severity: {severity}</span></div>
    <div><span class="severity">Clinical Insight: {insight}</span></div>
    <div><span class="{urgency_class}">Urgency: {urgency}</span></div>
</div>
"#,
        name = esc(record.name),
        severity_class = record.severity_class().as_str(),
        severity = record.severity,
        insight = esc(&record.clinical_insight()),
        urgency_class = record.urgency_class().as_str(),
        urgency = esc(record.urgency),
    )
}

/// Render every card in table order. Output depends only on `records`.
#[must_use]
pub fn render_condition_cards(records: &[ConditionRecord]) -> String {
    records.iter().map(render_condition_card).collect()
}

/// Render the emergency banner.
#[must_use]
pub fn render_emergency(status: &EmergencyStatus) -> String {
    format!(
        r#"<div class="report-section emergency">
    <h4>{heading}</h4>
    <p><b>{message}</b></p>
</div>
"#,
        heading = esc(status.heading),
        message = esc(status.message),
    )
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "    <div><b>{}:</b> {}</div>", esc(label), esc(value));
}

/// Shortest decimal form, as for card probabilities.
fn ranged(label: &str, value: f64) -> String {
    format!("{label} --> {value}")
}

/// Render the processed data panel.
#[must_use]
pub fn render_processed(data: &ProcessedData) -> String {
    let literals = &data.literals;
    let mut out = String::from("<h3>Processed Data</h3>\n<div class=\"report-section processed\">\n");

    push_row(&mut out, "BMI Range", &ranged(BMI_RANGE_LABEL, data.bmi));
    push_row(&mut out, "PHQ Score Range", &ranged(PHQ_RANGE_LABEL, data.phq));
    push_row(&mut out, "GAD Score Range", &ranged(GAD_RANGE_LABEL, data.gad));
    push_row(&mut out, "Depressiveness Level", literals.depressiveness_level);
    push_row(&mut out, "Suicidal Thoughts", literals.suicidal_thoughts);
    push_row(&mut out, "Anxiousness Level", literals.anxiousness_level);
    push_row(&mut out, "Anxiety Diagnosis", literals.anxiety_diagnosis);
    push_row(&mut out, "Anxiety Treatment", literals.anxiety_treatment);
    push_row(&mut out, "Depression Diagnosis", literals.depression_diagnosis);
    push_row(&mut out, "Depression Treatment", literals.depression_treatment);
    push_row(
        &mut out,
        "Epworth Score Range",
        &ranged(EPWORTH_RANGE_LABEL, data.epworth),
    );
    push_row(&mut out, "WHO BMI Indicator", literals.who_bmi_indicator);
    push_row(&mut out, "Gender", literals.gender);

    out.push_str("</div>\n");
    out
}

/// Render the full report: heading, cards, banner, panel.
#[must_use]
pub fn render_report(report: &AssessmentReport) -> String {
    let mut out = String::from("<h3 style=\"text-align: center;\">Mental Health Insights</h3>\n");
    out.push_str(&render_condition_cards(report.conditions));
    out.push_str(&render_emergency(&report.emergency));
    out.push_str(&render_processed(&report.processed));
    out
}
