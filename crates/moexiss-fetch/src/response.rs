//! ISS response bodies.

use moexiss_table::{ColumnTable, TableRecord, decode};
use moexiss_types::{HistoryCursor, IssError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// A decoded ISS response: named blocks, each a column table.
///
/// Blocks are deserialised on access, so a response may carry blocks in shapes the caller
/// never reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssResponse {
    blocks: Map<String, Value>,
}

impl IssResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns [`IssError::Json`] if the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let blocks = serde_json::from_slice(body)?;
        Ok(Self { blocks })
    }

    /// Returns the names of the blocks present.
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    /// Returns true if the named block is present.
    #[must_use]
    pub fn has_block(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Returns the named block as a column table. A missing block is an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`IssError::Json`] if the block is not a `{columns, data}` object.
    pub fn table(&self, name: &str) -> Result<ColumnTable> {
        match self.blocks.get(name) {
            Some(block) => Ok(ColumnTable::deserialize(block)?),
            None => {
                debug!(block = name, "block missing from response");
                Ok(ColumnTable::default())
            }
        }
    }

    /// Decodes the named block into records.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is malformed or does not decode into `R`.
    pub fn records<R: TableRecord>(&self, name: &str) -> Result<Vec<R>> {
        let table = self.table(name)?;
        decode::<R>(&table).map_err(IssError::from)
    }

    /// Returns the paging cursor that accompanies the named block, if the service sent one.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor block is malformed.
    pub fn cursor(&self, name: &str) -> Result<Option<HistoryCursor>> {
        let cursor_block = format!("{name}.cursor");
        if !self.has_block(&cursor_block) {
            return Ok(None);
        }
        let cursors: Vec<HistoryCursor> = self.records(&cursor_block)?;
        Ok(cursors.into_iter().next())
    }
}
