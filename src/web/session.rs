//! Per-browser session state machine.
//!
//! Handles:
//! - Intake form values (persist across page loads)
//! - The running busy state, if any
//! - One-shot notices and the report, each shown on exactly one page render

use std::sync::Arc;

use crate::application::{
    AssessmentService, TaskHandle, TaskKind, TaskOutcome, TaskProgress, TimedWorker,
};
use crate::domain::{AssessmentReport, IntakeForm, IntakeSubmission};

/// Message shown once above the report area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Intake finished
    Ingested,
    /// User cancelled the busy state
    Cancelled(TaskKind),
    /// The busy state finished but its outcome could not be produced
    Failed(String),
}

/// Busy state as displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusyView {
    pub kind: TaskKind,
    pub fraction: f64,
}

/// Everything one page render needs.
#[derive(Debug, Clone)]
pub struct PageView {
    pub form: IntakeForm,
    pub busy: Option<BusyView>,
    pub notice: Option<Notice>,
    pub report: Option<AssessmentReport>,
}

/// State for one browser session.
#[derive(Default)]
pub struct AssessmentSession {
    form: IntakeForm,
    pending: Option<TaskHandle>,
    notice: Option<Notice>,
    report: Option<AssessmentReport>,
}

impl AssessmentSession {
    #[must_use]
    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Store the submitted values and start the ingest wait.
    ///
    /// The values are clamped into the form and go no further.
    pub fn submit_intake(&mut self, submission: &IntakeSubmission, service: &AssessmentService) {
        self.form.apply(submission);
        let task = TimedWorker::spawn(TaskKind::Ingest, service.timings().ingest, || {
            TaskOutcome::Ingested
        });
        self.start(task);
    }

    /// Start the analysis wait; the report is generated when it elapses.
    pub fn request_analysis(&mut self, service: &Arc<AssessmentService>) {
        let service = Arc::clone(service);
        let task = TimedWorker::spawn(
            TaskKind::Analysis,
            service.timings().analysis,
            move || match service.generate_report() {
                Ok(report) => TaskOutcome::Report(Box::new(report)),
                Err(e) => TaskOutcome::Failed(e.to_string()),
            },
        );
        self.start(task);
    }

    fn start(&mut self, task: TaskHandle) {
        // A new interaction reruns the page: previous output and any running wait go away.
        if let Some(mut previous) = self.pending.take() {
            previous.cancel();
        }
        self.notice = None;
        self.report = None;
        self.pending = Some(task);
    }

    /// Cancel the running busy state. Returns false when nothing was running.
    ///
    /// A task that already finished keeps its outcome; only a wait still in progress is
    /// cancelled.
    pub fn cancel(&mut self) -> bool {
        self.poll();
        match self.pending.take() {
            Some(mut task) => {
                task.cancel();
                self.notice = Some(Notice::Cancelled(task.kind()));
                true
            }
            None => false,
        }
    }

    /// Drain worker progress and apply any finished outcome.
    pub fn poll(&mut self) {
        loop {
            let progress = match self.pending.as_mut().and_then(TaskHandle::try_recv) {
                Some(p) => p,
                None => break,
            };

            match progress {
                TaskProgress::Started => {}
                TaskProgress::Complete(outcome) => {
                    self.pending = None;
                    match outcome {
                        TaskOutcome::Ingested => self.notice = Some(Notice::Ingested),
                        TaskOutcome::Report(report) => self.report = Some(*report),
                        TaskOutcome::Failed(message) => {
                            tracing::error!("Busy state failed: {}", message);
                            self.notice = Some(Notice::Failed(message));
                        }
                    }
                    break;
                }
                TaskProgress::Cancelled => {
                    if let Some(task) = self.pending.take() {
                        self.notice = Some(Notice::Cancelled(task.kind()));
                    }
                    break;
                }
            }
        }
    }

    /// Snapshot for rendering. One-shot output is handed out once and then cleared.
    pub fn take_view(&mut self) -> PageView {
        self.poll();
        PageView {
            form: self.form.clone(),
            busy: self.pending.as_ref().map(|task| BusyView {
                kind: task.kind(),
                fraction: task.fraction(),
            }),
            notice: self.notice.take(),
            report: self.report.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Timings;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::time::Duration;

    fn fast_service() -> Arc<AssessmentService> {
        Arc::new(AssessmentService::new(
            ChaCha20Rng::seed_from_u64(1),
            Timings {
                ingest: Duration::from_millis(10),
                analysis: Duration::from_millis(10),
            },
        ))
    }

    async fn settle(session: &mut AssessmentSession) {
        for _ in 0..200 {
            session.poll();
            if !session.is_busy() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("busy state never finished");
    }

    #[tokio::test]
    async fn test_ingest_confirmation_shown_once() {
        let service = fast_service();
        let mut session = AssessmentSession::default();
        session.submit_intake(&IntakeSubmission::default(), &service);

        let view = session.take_view();
        assert!(view.busy.is_some());
        assert!(view.notice.is_none());

        settle(&mut session).await;
        assert_eq!(session.take_view().notice, Some(Notice::Ingested));
        assert_eq!(session.take_view().notice, None);
    }

    #[tokio::test]
    async fn test_submission_clamps_into_form() {
        let service = fast_service();
        let mut session = AssessmentSession::default();
        session.submit_intake(
            &IntakeSubmission {
                bmi: Some("14.0".into()),
                ..Default::default()
            },
            &service,
        );
        assert!((session.form().bmi - 15.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_analysis_produces_report() {
        let service = fast_service();
        let mut session = AssessmentSession::default();
        session.request_analysis(&service);
        settle(&mut session).await;

        let view = session.take_view();
        let report = view.report.expect("report ready");
        assert_eq!(report.conditions.len(), 14);
        assert!(session.take_view().report.is_none());
    }

    #[tokio::test]
    async fn test_cancel_reports_kind() {
        let service = Arc::new(AssessmentService::new(
            ChaCha20Rng::seed_from_u64(1),
            Timings::default(),
        ));
        let mut session = AssessmentSession::default();
        session.request_analysis(&service);
        assert!(session.cancel());
        assert!(!session.cancel());

        let view = session.take_view();
        assert!(view.busy.is_none());
        assert_eq!(view.notice, Some(Notice::Cancelled(TaskKind::Analysis)));
        assert!(view.report.is_none());
    }

    #[tokio::test]
    async fn test_cancel_after_completion_keeps_report() {
        let service = fast_service();
        let mut session = AssessmentSession::default();
        session.request_analysis(&service);

        // Finished but not yet picked up by a page render.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!session.cancel());

        let view = session.take_view();
        assert!(view.notice.is_none());
        assert_eq!(view.report.expect("report kept").conditions.len(), 14);
    }

    #[tokio::test]
    async fn test_new_request_replaces_running_task() {
        let service = fast_service();
        let mut session = AssessmentSession::default();
        session.submit_intake(&IntakeSubmission::default(), &service);
        session.request_analysis(&service);

        settle(&mut session).await;
        let view = session.take_view();
        assert!(view.report.is_some());
        assert!(view.notice.is_none());
    }
}
