//! Generic record listing.
//!
//! Doctors and appointments share the same render pattern: fetch a list,
//! render one row per record, and show a literal no-results message when
//! the list is empty instead of leaving the container blank. This module
//! implements that once, over any record type and row-rendering function.
//!
//! It also owns the stale-response guard: rapid successive filter input
//! fires overlapping requests, and without coordination a slow early
//! response can overwrite the container after a fast later one. Each fetch
//! takes a [`Ticket`] from [`Generations`]; only the ticket from the most
//! recent fetch is allowed to commit.

use std::sync::atomic::{AtomicU64, Ordering};

/// Renders a list of records, or the no-results markup for an empty list.
///
/// The empty markup is caller-shaped: card listings show a `<p>` message,
/// table listings a full-width placeholder row.
pub fn render_records<T, F>(records: &[T], empty_markup: &str, render_row: F) -> String
where
    F: Fn(&T) -> String,
{
    if records.is_empty() {
        return empty_markup.to_owned();
    }
    records.iter().map(|record| render_row(record)).collect()
}

/// Ticket identifying one fetch within a [`Generations`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request-generation counter for one listing container.
///
/// `begin` supersedes all previously issued tickets; `commit` accepts only
/// the newest one.
#[derive(Debug, Default)]
pub struct Generations {
    current: AtomicU64,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, superseding any in-flight one.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True when `ticket` is still the newest fetch and its result may be
    /// written to the container.
    pub fn commit(&self, ticket: Ticket) -> bool {
        let current = self.current.load(Ordering::SeqCst);
        if ticket.0 == current {
            true
        } else {
            log::debug!(
                target: "mediboard_listing",
                "msg=\"discarding stale response\" ticket={} current={}",
                ticket.0,
                current
            );
            false
        }
    }
}

/// Result of a listing refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingUpdate {
    /// Replace the container contents with this markup.
    Replace(String),
    /// A newer fetch superseded this one; leave the container alone.
    Stale,
}
