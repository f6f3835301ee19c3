//! Round-robin pool of output cells.
//!
//! A pool hands out its cells in a fixed rotation so the most recent
//! `POOL_SLOTS` results stay readable at the same time (e.g. for side-by-side
//! display) without any allocation. Call `i` writes slot `i % POOL_SLOTS` and
//! that cell is left untouched until call `i + POOL_SLOTS` reuses it.
//!
//! Tickets name the pool that issued them, so a ticket handed to another
//! pool (or another `Printer`) never resolves.
//!
//! A pool is not synchronized. It is mutated through `&mut self`, so sharing
//! one across threads requires the caller to serialize access; the crate-level
//! convenience functions keep one pool pair per thread instead.

use crate::buffer::FixedStr;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Number of cells in each pool.
pub const POOL_SLOTS: usize = 8;

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// Which formatter family a pool (and the tickets it issues) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Duration,
    Size,
}

/// Receipt for one formatting call.
///
/// Carries the call's sequence number within its family, which is enough to
/// locate the slot and to tell whether the slot has since been recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    pool: u64,
    family: Family,
    seq: u64,
}

impl Ticket {
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Zero-based index of the call within its family.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    #[inline]
    pub fn slot(&self) -> usize {
        (self.seq % POOL_SLOTS as u64) as usize
    }
}

pub struct BufferPool {
    id: u64,
    family: Family,
    cells: [FixedStr; POOL_SLOTS],
    issued: u64,
}

impl BufferPool {
    pub fn new(family: Family) -> Self {
        BufferPool {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            family,
            cells: [FixedStr::EMPTY; POOL_SLOTS],
            issued: 0,
        }
    }

    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Number of cells handed out so far.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Claims the next cell in the rotation.
    ///
    /// The returned cell still holds the result from `POOL_SLOTS` calls ago;
    /// the caller is expected to overwrite it.
    pub fn next_cell(&mut self) -> (Ticket, &mut FixedStr) {
        let ticket = Ticket {
            pool: self.id,
            family: self.family,
            seq: self.issued,
        };
        self.issued += 1;
        if ticket.seq != 0 && ticket.slot() == 0 {
            trace!(family = ?self.family, seq = ticket.seq, "output pool wrapped");
        }
        (ticket, &mut self.cells[ticket.slot()])
    }

    /// Whether the ticket's cell still holds the result it was issued for.
    #[inline]
    pub fn is_live(&self, ticket: Ticket) -> bool {
        ticket.pool == self.id
            && ticket.family == self.family
            && ticket.seq < self.issued
            && self.issued - ticket.seq <= POOL_SLOTS as u64
    }

    /// Looks up the result for `ticket`, or `None` once its cell has been recycled.
    pub fn get(&self, ticket: Ticket) -> Option<&FixedStr> {
        self.is_live(ticket).then(|| &self.cells[ticket.slot()])
    }

    /// Live results, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &FixedStr> + '_ {
        let live = self.issued.min(POOL_SLOTS as u64);
        (1..=live).map(move |back| {
            let seq = self.issued - back;
            &self.cells[(seq % POOL_SLOTS as u64) as usize]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(pool: &mut BufferPool, text: &str) -> Ticket {
        let (ticket, cell) = pool.next_cell();
        cell.overwrite(|cur| cur.extend(text.as_bytes()));
        ticket
    }

    #[test]
    fn slots_rotate_modulo_pool_size() {
        let mut pool = BufferPool::new(Family::Duration);
        let slots: Vec<usize> = (0..POOL_SLOTS * 2)
            .map(|i| fill(&mut pool, &i.to_string()).slot())
            .collect();
        let expected: Vec<usize> = (0..POOL_SLOTS).chain(0..POOL_SLOTS).collect();
        assert_eq!(slots, expected);
        assert_eq!(pool.issued(), (POOL_SLOTS * 2) as u64);
    }

    #[test]
    fn ninth_call_recycles_first() {
        let mut pool = BufferPool::new(Family::Size);
        let tickets: Vec<Ticket> = (0..POOL_SLOTS).map(|i| fill(&mut pool, &format!("r{i}"))).collect();
        for (i, t) in tickets.iter().enumerate() {
            assert_eq!(pool.get(*t).map(|s| s.as_str()), Some(format!("r{i}").as_str()));
        }

        let ninth = fill(&mut pool, "r8");
        assert_eq!(ninth.slot(), tickets[0].slot());
        assert!(pool.get(tickets[0]).is_none());
        for (i, t) in tickets.iter().enumerate().skip(1) {
            assert_eq!(pool.get(*t).map(|s| s.as_str()), Some(format!("r{i}").as_str()));
        }
        assert_eq!(pool.get(ninth).map(|s| s.as_str()), Some("r8"));
    }

    #[test]
    fn foreign_family_ticket_is_rejected() {
        let mut durations = BufferPool::new(Family::Duration);
        let sizes = BufferPool::new(Family::Size);
        let t = fill(&mut durations, "1 ns");
        assert!(durations.get(t).is_some());
        assert!(sizes.get(t).is_none());
    }

    #[test]
    fn unissued_ticket_is_not_live() {
        let mut a = BufferPool::new(Family::Duration);
        let mut b = BufferPool::new(Family::Duration);
        fill(&mut a, "x");
        let second = fill(&mut a, "y");
        fill(&mut b, "z");
        assert!(!b.is_live(second));
    }

    #[test]
    fn ticket_from_another_pool_is_rejected() {
        let mut a = BufferPool::new(Family::Duration);
        let mut b = BufferPool::new(Family::Duration);
        let from_a = fill(&mut a, "1.5 us");
        fill(&mut b, "42 ns");
        assert_eq!(from_a.slot(), 0);
        assert!(b.get(from_a).is_none());
        assert_eq!(a.get(from_a).map(|s| s.as_str()), Some("1.5 us"));
    }

    #[test]
    fn recent_lists_newest_first() {
        let mut pool = BufferPool::new(Family::Duration);
        assert_eq!(pool.recent().count(), 0);
        for i in 0..10 {
            fill(&mut pool, &i.to_string());
        }
        let recent: Vec<&str> = pool.recent().map(|s| s.as_str()).collect();
        assert_eq!(recent, ["9", "8", "7", "6", "5", "4", "3", "2"]);
    }
}
