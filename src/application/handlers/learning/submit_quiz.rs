//! SubmitQuizHandler - Command handler for scored quiz attempts.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::foundation::{
    ClientId, DomainError, Percentage, QuizId, Timestamp, ValidationError,
};
use crate::domain::learning::{LearningError, QuizAnswer, QuizAttempt};
use crate::ports::{ActivityLedger, LearningCatalog, ProfileReader};

/// Command to submit a scored quiz attempt.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub client_id: ClientId,
    pub quiz_id: QuizId,
    /// Raw score; negative or non-finite is rejected, above 100 is capped.
    pub score: f64,
    pub answers: Vec<QuizAnswer>,
    /// When the attempt was completed; defaults to now, never later than now.
    pub completed_at: Option<Timestamp>,
}

/// Result of a quiz submission.
#[derive(Debug, Clone)]
pub struct SubmitQuizResult {
    pub attempt: QuizAttempt,
    pub passed: bool,
}

/// Handler for quiz submissions.
///
/// Each attempt is appended as-is; repeated attempts on one quiz are all kept.
pub struct SubmitQuizHandler {
    profiles: Arc<dyn ProfileReader>,
    catalog: Arc<dyn LearningCatalog>,
    ledger: Arc<dyn ActivityLedger>,
    passing_score: f64,
}

impl SubmitQuizHandler {
    pub fn new(
        profiles: Arc<dyn ProfileReader>,
        catalog: Arc<dyn LearningCatalog>,
        ledger: Arc<dyn ActivityLedger>,
        passing_score: f64,
    ) -> Self {
        Self {
            profiles,
            catalog,
            ledger,
            passing_score,
        }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<SubmitQuizResult, LearningError> {
        // 1. Validate before touching any collaborator
        Percentage::capped("score", cmd.score)?;
        let now = Timestamp::now();
        let completed_at = match cmd.completed_at {
            Some(at) if now.is_before(&at) => {
                return Err(
                    ValidationError::invalid_format("completed_at", "is in the future").into(),
                );
            }
            Some(at) => at,
            None => now,
        };

        // 2. Client and quiz must exist
        self.profiles
            .find_by_id(&cmd.client_id)
            .await
            .map_err(|e| unavailable("profile lookup", e))?
            .ok_or_else(|| LearningError::ClientNotFound(cmd.client_id.clone()))?;

        let quiz = self
            .catalog
            .find_quiz(&cmd.quiz_id)
            .await
            .map_err(|e| unavailable("catalog lookup", e))?
            .ok_or_else(|| LearningError::QuizNotFound(cmd.quiz_id.clone()))?;

        // 3. Append
        let attempt = QuizAttempt::record(&quiz, cmd.score, cmd.answers, completed_at)?;
        self.ledger
            .append_quiz_attempt(&cmd.client_id, &attempt)
            .await
            .map_err(|e| unavailable("activity append", e))?;

        let passed = attempt.is_passing(self.passing_score);
        debug!(
            client_id = %cmd.client_id,
            quiz_id = %cmd.quiz_id,
            score = attempt.score.value(),
            passed,
            "Recorded quiz attempt"
        );

        Ok(SubmitQuizResult { attempt, passed })
    }
}

fn unavailable(operation: &str, err: DomainError) -> LearningError {
    error!(operation, error = %err, "Learning collaborator failed");
    LearningError::from(err)
}
