// Task endpoints
//
// Several mutating operations answer with an asynchronous task id. The
// status fetch is a single GET; callers decide whether and when to ask
// again.

use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

impl ApiClient {
    /// Fetch the raw status of an asynchronous task by id.
    ///
    /// `GET /api/v1/task/{id}`
    pub async fn task_status(&self, task_id: &str) -> Result<Value, Error> {
        debug!(task_id, "fetching task status");
        self.get_enveloped(&format!("/api/v1/task/{task_id}")).await
    }
}
