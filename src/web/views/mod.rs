//! View components: HTML fragments assembled into the single page.

pub mod form;
pub mod report;

use crate::application::TaskKind;
use crate::domain::INGEST_CONFIRMATION;
use crate::web::session::{BusyView, Notice, PageView};
use crate::web::styles::MedicalTheme;

/// Seconds between self-refreshes while a busy state runs.
const BUSY_REFRESH_SECS: u32 = 1;

/// Escape HTML special characters.
#[must_use]
pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_disclaimer() -> &'static str {
    r#"<footer class="disclaimer">
<p>DISCLAIMER: This tool provides indicative estimates and does not replace professional medical evaluation.</p>
<p>The report content is illustrative and is not derived from the values entered above.</p>
</footer>
"#
}

fn render_busy(busy: &BusyView) -> String {
    format!(
        r#"<div class="busy">
<p>{text}</p>
<progress value="{fraction:.2}" max="1">{percent:.0}%</progress>
<form method="post" action="/cancel"><button type="submit" class="secondary">Cancel</button></form>
</div>
"#,
        text = esc(busy.kind.spinner_text()),
        fraction = busy.fraction,
        percent = busy.fraction * 100.0,
    )
}

fn render_notice(notice: &Notice) -> String {
    let text = match notice {
        Notice::Ingested => INGEST_CONFIRMATION.to_string(),
        Notice::Cancelled(_) => "Cancelled.".to_string(),
        Notice::Failed(message) => format!("Something went wrong: {message}"),
    };
    format!("<p class=\"notice\">{}</p>\n", esc(&text))
}

/// Render the whole page for one session.
#[must_use]
pub fn render_page(view: &PageView) -> String {
    let busy_kind = view.busy.map(|b| b.kind);

    // Busy output and notices sit under the control that triggered them.
    let mut intake_status = String::new();
    let mut analysis_status = String::new();
    if let Some(busy) = &view.busy {
        let slot = match busy.kind {
            TaskKind::Ingest => &mut intake_status,
            TaskKind::Analysis => &mut analysis_status,
        };
        slot.push_str(&render_busy(busy));
    }
    if let Some(notice) = &view.notice {
        let slot = match notice {
            Notice::Ingested | Notice::Cancelled(TaskKind::Ingest) => &mut intake_status,
            Notice::Cancelled(TaskKind::Analysis) | Notice::Failed(_) => &mut analysis_status,
        };
        slot.push_str(&render_notice(notice));
    }

    let refresh = if busy_kind.is_some() {
        format!("<meta http-equiv=\"refresh\" content=\"{BUSY_REFRESH_SECS}\">")
    } else {
        String::new()
    };
    let disabled = if busy_kind.is_some() { " disabled" } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}
<title>Mental Health Assessment Tool</title>
<style>{css}</style>
</head>
<body>
<main>
<h1>Mental Health Assessment Tool</h1>
<h3 class="subheader">Enter your symptoms and score information</h3>
{form}{intake_status}
<h2 style="text-align: center;">Mental Health Report</h2>
<form method="post" action="/analyze"><button type="submit"{disabled}>Analyze Mental Health</button></form>
{analysis_status}{report}
{disclaimer}</main>
</body>
</html>
"#,
        css = MedicalTheme::stylesheet(),
        form = form::render_intake_form(&view.form, busy_kind.is_some()),
        report = view
            .report
            .as_ref()
            .map(report::render_report)
            .unwrap_or_default(),
        disclaimer = render_disclaimer(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssessmentReport, IntakeForm};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn idle_view() -> PageView {
        PageView {
            form: IntakeForm::default(),
            busy: None,
            notice: None,
            report: None,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(esc("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_idle_page() {
        let html = render_page(&idle_view());
        assert!(html.contains("<h1>Mental Health Assessment Tool</h1>"));
        assert!(html.contains("Analyze Mental Health"));
        assert!(!html.contains("http-equiv=\"refresh\""));
        assert!(!html.contains(INGEST_CONFIRMATION));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_busy_page_refreshes_and_shows_spinner() {
        let view = PageView {
            busy: Some(BusyView {
                kind: TaskKind::Ingest,
                fraction: 0.4,
            }),
            ..idle_view()
        };
        let html = render_page(&view);
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("Analyzing your mental health data..."));
        assert!(html.contains("value=\"0.40\""));
        assert!(html.contains("action=\"/cancel\""));
    }

    #[test]
    fn test_confirmation_appears_once() {
        let view = PageView {
            notice: Some(Notice::Ingested),
            ..idle_view()
        };
        let html = render_page(&view);
        assert_eq!(html.matches(INGEST_CONFIRMATION).count(), 1);
    }

    #[test]
    fn test_report_page() {
        let view = PageView {
            report: Some(AssessmentReport::generate(&mut StdRng::seed_from_u64(3))),
            ..idle_view()
        };
        let html = render_page(&view);
        assert_eq!(html.matches("<div class=\"card\">").count(), 14);
        assert!(html.contains("No Immediate Emergency Detected."));
    }
}
