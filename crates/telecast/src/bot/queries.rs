//! Answering queries.

use telecast_core::{ApiResult, CapabilitySet, Request, params, serde_params};

use super::Bot;
use crate::options::CallbackAnswer;

impl Bot {
    /// `answerCallbackQuery`: must be called for every callback query,
    /// even with an empty answer.
    pub fn answer_callback_query(
        &self,
        callback_query_id: &str,
        answer: &CallbackAnswer,
    ) -> ApiResult<Request> {
        let mut params = params! { "callback_query_id" => callback_query_id };
        params.merge(serde_params(answer)?);
        Ok(self.request("answerCallbackQuery", params, CapabilitySet::EMPTY))
    }
}
