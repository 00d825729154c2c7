//! Scripted in-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body }));
        self
    }

    pub(crate) fn fail_network(self) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError::Network("connection refused".to_owned())));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}
