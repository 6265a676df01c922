//! Timed background worker for the page's busy states.
//!
//! Each busy state is a task on the tokio runtime that waits a fixed duration and then
//! produces its outcome. The page polls the handle for progress instead of blocking the
//! request, and the task can be cancelled at any point before it completes.

use std::time::{Duration, Instant};

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::domain::AssessmentReport;

/// Which busy state a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Intake form submission
    Ingest,
    /// "Analyze Mental Health" button
    Analysis,
}

impl TaskKind {
    /// Spinner text shown while the task runs.
    #[must_use]
    pub fn spinner_text(&self) -> &'static str {
        match self {
            Self::Ingest => "Analyzing your mental health data... ",
            Self::Analysis => "Analyzing your Data ...",
        }
    }
}

/// Result of a finished task.
#[derive(Debug, Clone)]
pub enum TaskOutcome {
    /// Intake accepted
    Ingested,
    /// Report ready for display
    Report(Box<AssessmentReport>),
    /// Producing the outcome failed
    Failed(String),
}

/// Progress updates from the worker.
#[derive(Debug, Clone)]
pub enum TaskProgress {
    /// Waiting has begun
    Started,
    /// Wait elapsed and the outcome is ready
    Complete(TaskOutcome),
    /// Cancelled before the wait elapsed
    Cancelled,
}

/// Handle to a running task.
///
/// Dropping the handle cancels the task.
pub struct TaskHandle {
    kind: TaskKind,
    started_at: Instant,
    duration: Duration,
    progress_rx: mpsc::UnboundedReceiver<TaskProgress>,
    cancel_tx: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl TaskHandle {
    #[must_use]
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Try to receive the next progress update (non-blocking).
    pub fn try_recv(&mut self) -> Option<TaskProgress> {
        self.progress_rx.try_recv().ok()
    }

    /// Fraction of the wait elapsed, in [0, 1].
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.started_at.elapsed().as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Ask the task to stop. Returns false if it was already asked.
    pub fn cancel(&mut self) -> bool {
        match self.cancel_tx.take() {
            Some(tx) => {
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }
}

/// Worker that runs busy states in the background.
pub struct TimedWorker;

impl TimedWorker {
    /// Spawn a task that waits `duration`, then calls `finish` for its outcome.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(kind: TaskKind, duration: Duration, finish: F) -> TaskHandle
    where
        F: FnOnce() -> TaskOutcome + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let started_at = Instant::now();

        let handle = tokio::spawn(async move {
            Self::run(kind, duration, finish, tx, cancel_rx).await;
        });

        TaskHandle {
            kind,
            started_at,
            duration,
            progress_rx: rx,
            cancel_tx: Some(cancel_tx),
            _handle: handle,
        }
    }

    async fn run<F>(
        kind: TaskKind,
        duration: Duration,
        finish: F,
        tx: mpsc::UnboundedSender<TaskProgress>,
        cancel_rx: oneshot::Receiver<()>,
    ) where
        F: FnOnce() -> TaskOutcome + Send + 'static,
    {
        let _ = tx.send(TaskProgress::Started);
        tracing::debug!(?kind, ?duration, "Busy state started");

        tokio::select! {
            () = tokio::time::sleep(duration) => {
                let outcome = finish();
                tracing::debug!(?kind, "Busy state complete");
                let _ = tx.send(TaskProgress::Complete(outcome));
            }
            // Fires on an explicit cancel and when the handle is dropped.
            _ = cancel_rx => {
                tracing::info!(?kind, "Busy state cancelled");
                let _ = tx.send(TaskProgress::Cancelled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drain_until_done(handle: &mut TaskHandle) -> TaskProgress {
        loop {
            if let Some(progress) = handle.try_recv() {
                if !matches!(progress, TaskProgress::Started) {
                    return progress;
                }
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_completes_after_duration() {
        let mut handle = TimedWorker::spawn(TaskKind::Ingest, Duration::from_millis(20), || {
            TaskOutcome::Ingested
        });
        assert_eq!(handle.kind(), TaskKind::Ingest);

        let progress = drain_until_done(&mut handle).await;
        assert!(matches!(progress, TaskProgress::Complete(TaskOutcome::Ingested)));
        assert!((handle.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_cancel_stops_task() {
        let mut handle = TimedWorker::spawn(TaskKind::Analysis, Duration::from_secs(30), || {
            TaskOutcome::Ingested
        });
        assert!(handle.cancel());
        assert!(!handle.cancel());

        let progress = drain_until_done(&mut handle).await;
        assert!(matches!(progress, TaskProgress::Cancelled));
        assert!(handle.fraction() < 1.0);
    }

    #[test]
    fn test_spinner_text() {
        assert_eq!(
            TaskKind::Ingest.spinner_text(),
            "Analyzing your mental health data... "
        );
        assert_eq!(TaskKind::Analysis.spinner_text(), "Analyzing your Data ...");
    }
}
