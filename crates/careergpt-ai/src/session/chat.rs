//! Question submission and answer handling.

use careergpt_common::{new_correlation_id, HistoryEntry, Message};
use tracing::{debug, info, warn};

use crate::prompt::build_prompt;
use crate::AnswerClient;

use super::manager::ChatSession;
use super::types::{BusyGuard, SubmitError, FALLBACK_ANSWER};

impl ChatSession {
    /// Submit a question and wait for its answer.
    ///
    /// Rejections happen before the first await and leave the session
    /// untouched. Once accepted, the question and its history entry are
    /// appended, the draft is cleared and a single request is made. A failed
    /// request produces [`FALLBACK_ANSWER`]. The returned message is the
    /// answer that was appended.
    pub async fn submit_question(
        &self,
        client: &dyn AnswerClient,
        text: &str,
    ) -> Result<Message, SubmitError> {
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyQuestion);
        }

        let _guard = BusyGuard::acquire(&self.busy)?;
        let request_id = new_correlation_id();

        {
            let mut state = self.lock();
            state.transcript.push(Message::question(text));
            state.history.push(HistoryEntry::new(text));
            state.draft.clear();
        }

        info!(%request_id, len = text.len(), "question submitted");

        let answer = match client.generate(&build_prompt(text)).await {
            Ok(answer) => {
                debug!(%request_id, len = answer.len(), "answer received");
                Message::answer(answer)
            }
            Err(e) => {
                warn!(%request_id, error = %e, "answer generation failed");
                Message::answer(FALLBACK_ANSWER)
            }
        };

        let mut state = self.lock();
        state.last_answer = Some(answer.text().to_string());
        state.transcript.push(answer.clone());
        Ok(answer)
    }

    /// Submit whatever is in the draft buffer.
    pub async fn submit_draft(&self, client: &dyn AnswerClient) -> Result<Message, SubmitError> {
        let draft = self.draft();
        self.submit_question(client, &draft).await
    }
}
