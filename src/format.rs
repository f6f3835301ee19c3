// Human-readable formatting of durations and byte sizes.
// The `Printer` owns one output pool per formatter family; the free functions
// at the bottom run through a per-thread printer.

pub mod digits;
pub mod duration;
pub mod float;
pub mod size;


use crate::buffer::FixedStr;
use crate::pool::{BufferPool, Family, Ticket};
use duration::{write_duration, MicroUnit};
use float::{FloatFormatter, StdFloatFormatter};
use size::write_size;
use std::cell::RefCell;

/// Formats durations and sizes into two independent round-robin pools.
///
/// Each family keeps its last [`POOL_SLOTS`](crate::pool::POOL_SLOTS) results
/// readable. Formatting never allocates and never blocks; a `Printer` is a
/// single-owner value, so cross-thread use needs either one printer per thread
/// or external serialization.
pub struct Printer<F = StdFloatFormatter> {
    durations: BufferPool,
    sizes: BufferPool,
    float: F,
    micro: MicroUnit,
}

impl Printer {
    pub fn new() -> Self {
        Printer {
            durations: BufferPool::new(Family::Duration),
            sizes: BufferPool::new(Family::Size),
            float: StdFloatFormatter,
            micro: MicroUnit::build_default(),
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

impl<F: FloatFormatter> Printer<F> {
    /// A printer that hands size magnitudes to `float` instead of `core::fmt`.
    pub fn with_float_formatter(float: F) -> Self {
        Printer {
            durations: BufferPool::new(Family::Duration),
            sizes: BufferPool::new(Family::Size),
            float,
            micro: MicroUnit::build_default(),
        }
    }

    #[must_use]
    pub fn with_micro_unit(mut self, micro: MicroUnit) -> Self {
        self.micro = micro;
        self
    }

    pub fn micro_unit(&self) -> MicroUnit {
        self.micro
    }

    pub fn float_formatter(&self) -> &F {
        &self.float
    }

    /// Formats `ns` nanoseconds into the next duration cell.
    pub fn format_duration(&mut self, ns: i64) -> Ticket {
        self.duration_cell(ns).0
    }

    /// Formats `bytes` into the next size cell.
    pub fn format_size(&mut self, bytes: i64) -> Ticket {
        self.size_cell(bytes).0
    }

    /// Formats `ns` and borrows the result right away.
    pub fn duration(&mut self, ns: i64) -> &FixedStr {
        self.duration_cell(ns).1
    }

    /// Formats `bytes` and borrows the result right away.
    pub fn size(&mut self, bytes: i64) -> &FixedStr {
        self.size_cell(bytes).1
    }

    /// The result a ticket refers to, or `None` once its cell was recycled or
    /// when the ticket was issued by another printer.
    pub fn get(&self, ticket: Ticket) -> Option<&FixedStr> {
        match ticket.family() {
            Family::Duration => self.durations.get(ticket),
            Family::Size => self.sizes.get(ticket),
        }
    }

    pub fn durations(&self) -> &BufferPool {
        &self.durations
    }

    pub fn sizes(&self) -> &BufferPool {
        &self.sizes
    }

    fn duration_cell(&mut self, ns: i64) -> (Ticket, &FixedStr) {
        let micro = self.micro;
        let (ticket, cell) = self.durations.next_cell();
        cell.overwrite(|cur| write_duration(cur, ns, micro));
        (ticket, &*cell)
    }

    fn size_cell(&mut self, bytes: i64) -> (Ticket, &FixedStr) {
        let float = &self.float;
        let (ticket, cell) = self.sizes.next_cell();
        cell.overwrite(|cur| write_size(cur, bytes, float));
        (ticket, &*cell)
    }
}

thread_local! {
    static PRINTER: RefCell<Printer> = RefCell::new(Printer::new());
}

/// Formats a nanosecond duration, e.g. `1.5 us`, `12.34 ms`, `3:07.2`.
///
/// Runs through this thread's printer; the returned copy outlives the pool slot.
pub fn format_duration(ns: i64) -> FixedStr {
    PRINTER.with_borrow_mut(|printer| *printer.duration(ns))
}

/// Formats a byte count, e.g. `512 bytes`, `9.77 KB`, `-5 MB`.
///
/// Runs through this thread's printer; the returned copy outlives the pool slot.
pub fn format_size(bytes: i64) -> FixedStr {
    PRINTER.with_borrow_mut(|printer| *printer.size(bytes))
}
