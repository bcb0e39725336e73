//! Stub transport shared by the integration tests.
//!
//! Records every request and replays canned responses in order. Once the
//! queue is down to its last response, that one is repeated.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use stockfighter::prelude::*;

pub const API_URL: &str = "https://stub.test/ob/api";
pub const GM_URL: &str = "https://stub.test/gm";
pub const API_KEY: &str = "stub-key";

#[derive(Clone)]
enum Canned {
    Reply(RawResponse),
    Fail(String),
}

pub struct StubTransport {
    responses: Mutex<VecDeque<Canned>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A transport answering every request with `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Self {
        Self::new().then(status, body)
    }

    /// Queue another response.
    pub fn then(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Canned::Reply(RawResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// A transport whose every send fails before reaching the service.
    pub fn failing(message: &str) -> Self {
        let stub = Self::new();
        stub.responses
            .lock()
            .unwrap()
            .push_back(Canned::Fail(message.to_string()));
        stub
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        let next = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };
        match next {
            Some(Canned::Reply(raw)) => Ok(raw),
            Some(Canned::Fail(message)) => Err(TransportError::Connection(message)),
            None => Err(TransportError::Connection("no canned response".to_string())),
        }
    }
}

/// An authenticated client on `transport`.
pub fn client(transport: StubTransport) -> StockfighterClient<StubTransport> {
    StockfighterClientBuilder::new()
        .api_url(API_URL)
        .gm_url(GM_URL)
        .api_key(API_KEY)
        .build_with_transport(transport)
        .unwrap()
}

/// A client with no API key.
pub fn anonymous_client(transport: StubTransport) -> StockfighterClient<StubTransport> {
    StockfighterClientBuilder::new()
        .api_url(API_URL)
        .gm_url(GM_URL)
        .build_with_transport(transport)
        .unwrap()
}
