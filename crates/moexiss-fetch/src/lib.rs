//! HTTP transport, request building and pagination for the MOEX ISS client.
//!
//! This crate provides the retrieval pipeline:
//!
//! - [`Transport`] - The seam between the client and the network
//! - [`HttpTransport`] - `reqwest` transport with passport authentication and retries
//! - [`IssRequest`] - ISS URL builder
//! - [`IssResponse`] - Block extraction from a response body
//! - [`Paginator`] - Offset-based pagination session
//! - [`IssClient`] - Typed services
//! - [`Ticker`] - A code resolved to its market

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
#[cfg(test)]
mod mock;
mod paginate;
mod request;
mod response;
mod service;
mod ticker;

pub use client::{
    ClientConfig, Credentials, DEFAULT_AUTH_URL, DEFAULT_BASE_URL, HttpTransport, Transport,
    TransportError,
};
pub use paginate::{PageState, Paginator};
pub use request::IssRequest;
pub use response::IssResponse;
pub use service::{HistoryScope, IssClient};
pub use ticker::Ticker;

pub use tokio_util::sync::CancellationToken;
