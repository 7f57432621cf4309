use crate::domain::{AppError, CompletionError};
use crate::ports::CompletionClient;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Responder = dyn Fn(&str) -> String + Send + Sync;
type PromptFilter = dyn Fn(&str) -> bool + Send + Sync;

/// Completion client that answers from a closure and records every prompt.
#[derive(Clone)]
pub struct FakeCompletionClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
    fail_on_call: Option<usize>,
    fail_when: Option<Arc<PromptFilter>>,
    responder: Arc<Responder>,
}

impl FakeCompletionClient {
    /// Replies `Draft: <prompt>`.
    pub fn new() -> Self {
        Self::with_responder(|prompt| format!("Draft: {}", prompt))
    }

    pub fn with_responder(responder: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(vec![])),
            calls: Arc::new(AtomicUsize::new(0)),
            fail_on_call: None,
            fail_when: None,
            responder: Arc::new(responder),
        }
    }

    /// Fail the `call`-th request (1-based) with a 500 status.
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Fail every prompt matching `filter` with a 500 naming the prompt.
    ///
    /// The responder still runs first, so its delays apply to failing calls too.
    pub fn failing_when(mut self, filter: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.fail_when = Some(Arc::new(filter));
        self
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail_on_call == Some(call) {
            return Err(CompletionError::Status { status: 500, message: "Server error".into() }.into());
        }
        let reply = (self.responder)(prompt);
        if self.fail_when.as_ref().is_some_and(|filter| filter(prompt)) {
            return Err(CompletionError::Status { status: 500, message: format!("rejected: {}", prompt) }
                .into());
        }
        Ok(reply.trim().to_string())
    }
}
