//! Offset-based pagination over ISS tables.

use std::marker::PhantomData;

use bytes::Bytes;
use futures::stream::{self, Stream};
use moexiss_table::TableRecord;
use moexiss_types::{HistoryCursor, IssError, Result};
use reqwest::Url;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{IssRequest, IssResponse, Transport};

/// Lifecycle of a pagination session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    /// No page requested yet.
    #[default]
    Idle,
    /// A page request is in flight.
    Fetching,
    /// At least one page was received and more may follow.
    Accumulating,
    /// The service signalled the end of the data.
    Done,
    /// A page failed; the session cannot continue.
    Failed,
}

impl PageState {
    /// Returns true once no further pages will be produced.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// A pagination session for one query.
///
/// Each page is requested with the current row offset as the `start` parameter. The offset
/// advances by the number of rows received. The session ends on an empty page or, when the
/// response carries a `<block>.cursor` table, as soon as the offset reaches its `TOTAL`.
///
/// Pages are fetched one at a time; the next request is issued only after the previous page
/// was decoded.
pub struct Paginator<'a, T: Transport + ?Sized, R> {
    transport: &'a T,
    base: Url,
    request: IssRequest,
    block: String,
    offset: usize,
    pages: usize,
    state: PageState,
    cancel: Option<CancellationToken>,
    _record: PhantomData<fn() -> R>,
}

impl<T: Transport + ?Sized, R> std::fmt::Debug for Paginator<'_, T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("request", &self.request)
            .field("block", &self.block)
            .field("offset", &self.offset)
            .field("pages", &self.pages)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Transport + ?Sized, R: TableRecord> Paginator<'a, T, R> {
    /// Creates a session reading `block` from the responses to `request`.
    ///
    /// The offset starts at the request's own `start`, so a session can be pre-seeded.
    pub fn new(transport: &'a T, base: Url, request: IssRequest, block: impl Into<String>) -> Self {
        Self {
            transport,
            base,
            offset: request.start_offset(),
            request,
            block: block.into(),
            pages: 0,
            state: PageState::Idle,
            cancel: None,
            _record: PhantomData,
        }
    }

    /// Aborts the session when `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Returns the current row offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the session state.
    #[must_use]
    pub const fn state(&self) -> PageState {
        self.state
    }

    /// Returns the number of non-empty pages received.
    #[must_use]
    pub const fn pages(&self) -> usize {
        self.pages
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` once the data is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error of the failed page, [`IssError::Cancelled`] if
    /// the cancellation token fired, and [`IssError::SessionFailed`] on any call after a
    /// failure.
    pub async fn next_page(&mut self) -> Result<Option<Vec<R>>> {
        match self.state {
            PageState::Done => return Ok(None),
            PageState::Failed => return Err(IssError::SessionFailed),
            PageState::Idle | PageState::Fetching | PageState::Accumulating => {}
        }

        self.state = PageState::Fetching;
        match self.fetch_page().await {
            Ok((rows, _)) if rows.is_empty() => {
                debug!(block = %self.block, offset = self.offset, "empty page, pagination done");
                self.state = PageState::Done;
                Ok(None)
            }
            Ok((rows, cursor)) => {
                self.offset += rows.len();
                self.pages += 1;
                self.state = match cursor {
                    Some(cursor) if !cursor.has_more(self.offset) => {
                        debug!(block = %self.block, total = cursor.total, "cursor exhausted");
                        PageState::Done
                    }
                    _ => PageState::Accumulating,
                };
                Ok(Some(rows))
            }
            Err(e) => {
                warn!(block = %self.block, offset = self.offset, error = %e, "page failed");
                self.state = PageState::Failed;
                Err(e)
            }
        }
    }

    /// Fetches every remaining page and returns all rows in order.
    ///
    /// # Errors
    ///
    /// Returns the first page error. Rows of earlier pages are discarded.
    pub async fn fetch_all(mut self) -> Result<Vec<R>> {
        let mut rows = Vec::new();
        while let Some(page) = self.next_page().await? {
            rows.extend(page);
        }
        debug!(block = %self.block, pages = self.pages, rows = rows.len(), "pagination complete");
        Ok(rows)
    }

    /// Converts the session into a stream of pages.
    ///
    /// The stream ends after the last page or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<R>>> + 'a
    where
        R: 'a,
    {
        stream::unfold(self, |mut pager| async move {
            if pager.state.is_terminal() {
                return None;
            }
            match pager.next_page().await {
                Ok(Some(rows)) => Some((Ok(rows), pager)),
                Ok(None) => None,
                Err(e) => Some((Err(e), pager)),
            }
        })
    }

    async fn fetch_page(&self) -> Result<(Vec<R>, Option<HistoryCursor>)> {
        let url = self
            .request
            .clone()
            .start(self.offset)
            .url(&self.base)
            .map_err(IssError::transport)?;
        debug!(%url, "fetching page");

        let body = self.send(&url).await?;
        let response = IssResponse::from_slice(&body)?;
        let rows = response.records::<R>(&self.block)?;
        let cursor = response.cursor(&self.block)?;
        Ok((rows, cursor))
    }

    async fn send(&self, url: &Url) -> Result<Bytes> {
        let request = self.transport.get(url, self.request.requires_auth());
        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(IssError::Cancelled),
                body = request => body.map_err(IssError::transport),
            },
            None => request.await.map_err(IssError::transport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransportError;
    use crate::mock::{PendingTransport, ScriptedTransport, block};
    use futures::StreamExt;
    use moexiss_table::TableError;
    use serde_json::json;
    use std::time::Duration;

    moexiss_table::table_record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Quote {
            sec_id: String => "SECID",
            price: f64 => "PRICE",
        }
    }

    const COLUMNS: &[&str] = &["SECID", "PRICE"];

    fn page(rows: serde_json::Value) -> String {
        block("quotes", COLUMNS, rows)
    }

    fn base() -> Url {
        Url::parse("https://iss.moex.com/iss/").unwrap()
    }

    fn pager(transport: &ScriptedTransport) -> Paginator<'_, ScriptedTransport, Quote> {
        Paginator::new(transport, base(), IssRequest::stock(), "quotes")
    }

    fn quote(sec_id: &str, price: f64) -> Quote {
        Quote {
            sec_id: sec_id.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_until_empty_page() {
        let transport = ScriptedTransport::new()
            .respond(page(json!([["r1", 1.0], ["r2", 2.0]])))
            .respond(page(json!([["r3", 3.0]])))
            .respond(page(json!([])));

        let rows = pager(&transport).fetch_all().await.unwrap();

        assert_eq!(
            rows,
            vec![quote("r1", 1.0), quote("r2", 2.0), quote("r3", 3.0)]
        );
        assert_eq!(
            transport.offsets(),
            vec![None, Some("2".to_string()), Some("3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_never_returns_partial_rows() {
        let transport = ScriptedTransport::new()
            .respond(page(json!([["r1", 1.0]])))
            .fail(TransportError::ServerError { status: 502 });

        let result = pager(&transport).fetch_all().await;

        assert!(matches!(result, Err(IssError::Transport(_))));
        assert_eq!(transport.urls().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_session_stays_failed() {
        let transport = ScriptedTransport::new()
            .respond(block("quotes", COLUMNS, json!([["r1"]])))
            .respond(page(json!([["r2", 2.0]])));
        let mut pager = pager(&transport);

        let first = pager.next_page().await;
        assert!(matches!(
            first,
            Err(IssError::Table(TableError::Shape { row: 0, .. }))
        ));
        assert_eq!(pager.state(), PageState::Failed);
        assert!(matches!(
            pager.next_page().await,
            Err(IssError::SessionFailed)
        ));
        assert_eq!(transport.urls().len(), 1);
    }

    #[tokio::test]
    async fn test_states_and_offset() {
        let transport = ScriptedTransport::new()
            .respond(page(json!([["r1", 1.0], ["r2", 2.0]])))
            .respond(page(json!([])));
        let mut pager = pager(&transport);
        assert_eq!(pager.state(), PageState::Idle);

        assert_eq!(pager.next_page().await.unwrap().map(|p| p.len()), Some(2));
        assert_eq!(pager.state(), PageState::Accumulating);
        assert_eq!(pager.offset(), 2);

        assert_eq!(pager.next_page().await.unwrap(), None);
        assert_eq!(pager.state(), PageState::Done);
        assert_eq!(pager.pages(), 1);

        assert_eq!(pager.next_page().await.unwrap(), None);
        assert_eq!(transport.urls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let transport = ScriptedTransport::new().respond(page(json!([])));
        let rows = pager(&transport).fetch_all().await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(transport.urls().len(), 1);
    }

    #[tokio::test]
    async fn test_cursor_ends_session_without_empty_page() {
        let body = json!({
            "quotes": { "columns": COLUMNS, "data": [["r1", 1.0], ["r2", 2.0]] },
            "quotes.cursor": { "columns": ["INDEX", "TOTAL", "PAGESIZE"], "data": [[0, 2, 100]] }
        });
        let transport = ScriptedTransport::new().respond(body.to_string());

        let rows = pager(&transport).fetch_all().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(transport.urls().len(), 1);
    }

    #[tokio::test]
    async fn test_cursor_with_more_rows_continues() {
        let first = json!({
            "quotes": { "columns": COLUMNS, "data": [["r1", 1.0]] },
            "quotes.cursor": { "columns": ["INDEX", "TOTAL", "PAGESIZE"], "data": [[0, 2, 1]] }
        });
        let second = json!({
            "quotes": { "columns": COLUMNS, "data": [["r2", 2.0]] },
            "quotes.cursor": { "columns": ["INDEX", "TOTAL", "PAGESIZE"], "data": [[1, 2, 1]] }
        });
        let transport = ScriptedTransport::new()
            .respond(first.to_string())
            .respond(second.to_string());

        let rows = pager(&transport).fetch_all().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(transport.offsets(), vec![None, Some("1".to_string())]);
    }

    #[tokio::test]
    async fn test_pre_seeded_offset() {
        let transport = ScriptedTransport::new()
            .respond(page(json!([["r11", 11.0], ["r12", 12.0]])))
            .respond(page(json!([])));
        let pager: Paginator<'_, _, Quote> =
            Paginator::new(&transport, base(), IssRequest::stock().start(10), "quotes");

        pager.fetch_all().await.unwrap();

        assert_eq!(
            transport.offsets(),
            vec![Some("10".to_string()), Some("12".to_string())]
        );
    }

    #[tokio::test]
    async fn test_authorized_flag_reaches_transport() {
        let transport = ScriptedTransport::new().respond(page(json!([])));
        let pager: Paginator<'_, _, Quote> = Paginator::new(
            &transport,
            base(),
            IssRequest::stock().authorized(),
            "quotes",
        );
        pager.fetch_all().await.unwrap();
        assert_eq!(transport.authorized(), vec![true]);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let transport = ScriptedTransport::new().respond(page(json!([["r1", 1.0]])));
        let token = CancellationToken::new();
        token.cancel();
        let mut pager = pager(&transport).with_cancellation(token);

        assert!(matches!(pager.next_page().await, Err(IssError::Cancelled)));
        assert_eq!(pager.state(), PageState::Failed);
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_request() {
        let token = CancellationToken::new();
        let child = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            child.cancel();
        });

        let pager: Paginator<'_, _, Quote> =
            Paginator::new(&PendingTransport, base(), IssRequest::stock(), "quotes")
                .with_cancellation(token);

        assert!(matches!(pager.fetch_all().await, Err(IssError::Cancelled)));
    }

    #[tokio::test]
    async fn test_stream_yields_pages() {
        let transport = ScriptedTransport::new()
            .respond(page(json!([["r1", 1.0], ["r2", 2.0]])))
            .respond(page(json!([["r3", 3.0]])))
            .respond(page(json!([])));

        let pages: Vec<_> = pager(&transport).into_stream().collect().await;

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].as_ref().unwrap(), &vec![quote("r3", 3.0)]);
    }

    #[tokio::test]
    async fn test_stream_ends_after_error() {
        let transport = ScriptedTransport::new()
            .respond(page(json!([["r1", 1.0]])))
            .fail(TransportError::Forbidden)
            .respond(page(json!([["r2", 2.0]])));

        let pages: Vec<_> = pager(&transport).into_stream().collect().await;

        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_ok());
        assert!(pages[1].is_err());
        assert_eq!(transport.urls().len(), 2);
    }
}
