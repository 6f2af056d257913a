//! Bitmask import session
//!
//! The byte-producing file read is asynchronous from the editor's point of
//! view, so two loads can be in flight at once. The session hands out
//! monotonically increasing tickets and only the most recently issued ticket
//! may apply its result: completing a stale ticket is a no-op, which gives
//! last-write-wins at the application boundary while the decoder itself
//! stays a pure function.

use pixfont_engine::Result;

use crate::FontEditState;

/// Proof of an initiated load; consumed on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportTicket(u64);

#[derive(Debug, Default)]
pub struct ImportSession {
    latest: u64,
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly initiated load, superseding any earlier in-flight one.
    pub fn begin(&mut self) -> ImportTicket {
        self.latest += 1;
        ImportTicket(self.latest)
    }

    /// True iff `ticket` is still the most recently initiated load.
    pub fn is_current(&self, ticket: ImportTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Complete a load: decode the bytes and replace the store's font.
    ///
    /// Returns `Ok(false)` without touching the store when the ticket was
    /// superseded by a newer load. Decode/validation failures propagate and
    /// also leave the store unchanged.
    pub fn complete(&mut self, ticket: ImportTicket, name: impl Into<String>, bytes: &[u8], state: &mut FontEditState) -> Result<bool> {
        if !self.is_current(ticket) {
            log::info!("discarding superseded bitmask import (ticket {})", ticket.0);
            return Ok(false);
        }
        state.import_bitmask(name, bytes)?;
        Ok(true)
    }
}
