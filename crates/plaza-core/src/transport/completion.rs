// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::error::{TransportError, TransportResult};
use std::fmt;

type Callback = Box<dyn FnOnce(TransportResult) + Send + 'static>;

/// A single-shot completion callback attached to a submitted request.
///
/// Calling [`complete`](Completion::complete) consumes the value, so the
/// callback cannot run twice. If the value is dropped without being completed
/// (an executor panicked, a queue was torn down), the callback runs with
/// [`TransportError::Dropped`].
pub struct Completion {
    callback: Option<Callback>,
}

impl Completion {
    /// Wraps a callback.
    pub fn new(callback: impl FnOnce(TransportResult) + Send + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Delivers the result of the request.
    pub fn complete(mut self, result: TransportResult) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            log::warn!("Completion dropped before the request finished; reporting failure.");
            callback(Err(TransportError::Dropped));
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PayloadNode;
    use std::sync::{Arc, Mutex};

    fn recording() -> (Arc<Mutex<Vec<TransportResult>>>, Completion) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let completion = Completion::new(move |result| sink.lock().unwrap().push(result));
        (log, completion)
    }

    #[test]
    fn test_complete_runs_callback_once() {
        let (log, completion) = recording();
        completion.complete(Ok(PayloadNode::new(serde_json::json!({}))));

        let results = log.lock().unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
    }

    #[test]
    fn test_drop_reports_dropped() {
        let (log, completion) = recording();
        drop(completion);

        let results = log.lock().unwrap();
        assert_eq!(results.as_slice(), &[Err(TransportError::Dropped)]);
    }

    #[test]
    fn test_debug_shows_pending_flag() {
        let (_log, completion) = recording();
        assert_eq!(format!("{completion:?}"), "Completion { pending: true }");
        completion.complete(Err(TransportError::Shutdown));
    }
}
