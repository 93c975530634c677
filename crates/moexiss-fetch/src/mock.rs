//! In-memory transports for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

use crate::{Transport, TransportError};

/// Replays scripted responses in order and records every request.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Bytes, TransportError>>>,
    requests: Mutex<Vec<(Url, bool)>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, body: impl Into<String>) -> Self {
        self.push(Ok(Bytes::from(body.into())))
    }

    pub(crate) fn fail(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: Result<Bytes, TransportError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Requested URLs, in order.
    pub(crate) fn urls(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// `authorized` flags of the requests, in order.
    pub(crate) fn authorized(&self) -> Vec<bool> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, authorized)| *authorized)
            .collect()
    }

    /// Value of the `start` parameter of each request, if present.
    pub(crate) fn offsets(&self) -> Vec<Option<String>> {
        self.urls()
            .iter()
            .map(|url| {
                url.query_pairs()
                    .find(|(name, _)| name == "start")
                    .map(|(_, value)| value.into_owned())
            })
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url, authorized: bool) -> Result<Bytes, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.clone(), authorized));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::ServerError { status: 599 }))
    }
}

/// Never answers.
#[derive(Debug)]
pub(crate) struct PendingTransport;

#[async_trait]
impl Transport for PendingTransport {
    async fn get(&self, _url: &Url, _authorized: bool) -> Result<Bytes, TransportError> {
        futures::future::pending().await
    }
}

/// Renders a response body with one `{columns, data}` block.
pub(crate) fn block(name: &str, columns: &[&str], rows: serde_json::Value) -> String {
    serde_json::json!({ name: { "columns": columns, "data": rows } }).to_string()
}
