//! Common test support utilities and fixtures
//!
//! Provides a scripted in-memory transport so client behavior can be checked
//! without network access.

#![allow(dead_code)]

use async_trait::async_trait;
use github_rest::transport::{RequestOptions, Transport, TransportError, TransportResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request as seen by the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub options: RequestOptions,
}

type Outcome = Result<TransportResponse, TransportError>;

/// Transport that records every request and replays scripted outcomes
///
/// Once the script is exhausted every request gets `200 []`.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(TransportResponse::new(status, body)))
    }

    /// Queue a fully built response
    pub fn respond_with(self, response: TransportResponse) -> Self {
        self.push(Ok(response))
    }

    /// Queue a transport failure
    pub fn fail(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Outcome) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request
    pub fn last(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was recorded")
    }

    pub fn last_url(&self) -> String {
        self.last().url
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, url: &str, options: &RequestOptions) -> Outcome {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            options: options.clone(),
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, "[]")))
    }
}
