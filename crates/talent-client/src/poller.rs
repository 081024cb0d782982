//! Bounded polling of the asynchronous resume feedback task.

use tokio::time::sleep;
use tracing::{debug, info, warn};

use talent_core::AppError;
use talent_core::config::PollingConfig;
use talent_core::result::AppResult;
use talent_core::types::ResumeId;
use talent_entity::resume::{ResumeFeedback, TaskState};

use crate::client::ApiClient;

/// Starts a feedback task and waits for it at a fixed interval.
///
/// Each attempt sleeps first, then reads the task status. There is no
/// backoff; the wait is bounded by `max_attempts * interval`.
#[derive(Debug, Clone)]
pub struct FeedbackPoller {
    client: ApiClient,
    config: PollingConfig,
}

impl FeedbackPoller {
    pub fn new(client: ApiClient, config: PollingConfig) -> Self {
        Self { client, config }
    }

    /// Queue feedback generation for a resume and return the finished feedback.
    pub async fn run(&self, resume_id: ResumeId) -> AppResult<ResumeFeedback> {
        let task = self.client.resume_feedback_async(resume_id).await?;
        info!(task_id = %task.task_id, resume_id = %resume_id, "Feedback task queued");

        for attempt in 1..=self.config.max_attempts {
            sleep(self.config.interval()).await;

            let status = self.client.task_status(&task.task_id).await?;
            match status.state() {
                TaskState::Succeeded => {
                    info!(task_id = %task.task_id, attempt, "Feedback task finished");
                    return self.client.resume_feedback(resume_id).await;
                }
                TaskState::Failed => {
                    warn!(task_id = %task.task_id, "Feedback task failed");
                    return Err(AppError::task_failed("Async feedback task failed"));
                }
                TaskState::Pending => {
                    debug!(task_id = %task.task_id, attempt, state = %status.state_str(), "Feedback task pending");
                }
            }
        }

        warn!(task_id = %task.task_id, attempts = self.config.max_attempts, "Feedback task timed out");
        Err(AppError::timeout("Task timeout"))
    }
}
