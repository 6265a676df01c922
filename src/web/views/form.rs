//! Intake form view.

use std::fmt::Write;

use crate::domain::{
    Gender, IntakeForm, ScoreRange, SuicidalThoughts, ANXIOUSNESS_RANGE, BMI_MAX, BMI_MIN,
    EPWORTH_RANGE, GAD_RANGE, PHQ_RANGE, SEVERITY_RANGE,
};

use super::esc;

fn select<'a, I>(out: &mut String, name: &str, label: &str, options: I, current: &str)
where
    I: IntoIterator<Item = &'a str>,
{
    let _ = writeln!(
        out,
        r#"<div class="field"><label for="{name}">{label}</label><select id="{name}" name="{name}">"#,
        label = esc(label),
    );
    for option in options {
        let selected = if option == current { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = esc(option),
        );
    }
    out.push_str("</select></div>\n");
}

fn score_select(out: &mut String, name: &str, label: &str, range: ScoreRange, current: u8) {
    let options: Vec<String> = (range.min..=range.max).map(|v| v.to_string()).collect();
    select(
        out,
        name,
        label,
        options.iter().map(String::as_str),
        &current.to_string(),
    );
}

fn slider(out: &mut String, name: &str, label: &str, range: ScoreRange, current: u8) {
    let _ = writeln!(
        out,
        r#"<div class="field"><label for="{name}">{label}: <output id="{name}_value">{current}</output></label><input type="range" id="{name}" name="{name}" min="{min}" max="{max}" step="1" value="{current}" oninput="document.getElementById('{name}_value').value = this.value"></div>"#,
        label = esc(label),
        min = range.min,
        max = range.max,
    );
}

/// Render the intake form. Submission is disabled while a busy state runs.
#[must_use]
pub fn render_intake_form(form: &IntakeForm, busy: bool) -> String {
    let mut left = String::new();
    select(
        &mut left,
        "gender",
        "Gender",
        Gender::OPTIONS.iter().map(Gender::as_str),
        form.gender.as_str(),
    );
    let _ = writeln!(
        left,
        r#"<div class="field"><label for="bmi">BMI</label><input type="number" id="bmi" name="bmi" min="{BMI_MIN:.1}" max="{BMI_MAX:.1}" step="0.01" value="{bmi:.2}"></div>"#,
        bmi = form.bmi,
    );
    slider(&mut left, "phq_score", "PHQ-9 Score (Depression)", PHQ_RANGE, form.phq_score);
    slider(&mut left, "gad_score", "GAD-7 Score (Anxiety)", GAD_RANGE, form.gad_score);
    slider(
        &mut left,
        "epworth_score",
        "Epworth Sleepiness Scale",
        EPWORTH_RANGE,
        form.epworth_score,
    );

    let mut right = String::new();
    score_select(
        &mut right,
        "depression_severity",
        "Depression Severity",
        SEVERITY_RANGE,
        form.depression_severity,
    );
    score_select(
        &mut right,
        "anxiety_severity",
        "Anxiety Severity",
        SEVERITY_RANGE,
        form.anxiety_severity,
    );
    right.push_str(r#"<div class="field"><span>Suicidal Thoughts</span>"#);
    for option in SuicidalThoughts::OPTIONS {
        let checked = if option == form.suicidal { " checked" } else { "" };
        let _ = write!(
            right,
            r#"<label><input type="radio" name="suicidal" value="{value}"{checked}> {value}</label>"#,
            value = option.as_str(),
        );
    }
    right.push_str("</div>\n");
    score_select(
        &mut right,
        "depressiveness",
        "Depressiveness Level",
        SEVERITY_RANGE,
        form.depressiveness,
    );
    score_select(
        &mut right,
        "anxiousness",
        "Anxiousness Level",
        ANXIOUSNESS_RANGE,
        form.anxiousness,
    );

    let disabled = if busy { " disabled" } else { "" };
    format!(
        r#"<form method="post" action="/ingest" class="intake">
<div class="columns">
<div class="column">
{left}</div>
<div class="column">
{right}</div>
</div>
<button type="submit"{disabled}>Ingest Your Data</button>
</form>
"#
    )
}
