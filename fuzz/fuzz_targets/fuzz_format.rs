// fuzz/fuzz_targets/fuzz_format.rs
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nanofmt::buffer::CELL_LEN;
use nanofmt::{MicroUnit, Printer, POOL_SLOTS};

#[derive(Arbitrary, Debug)]
struct Calls {
    micro_sign: bool,
    // (is_size, value) pairs, applied in order
    values: Vec<(bool, i64)>,
}

// Cap the work per case to keep runs short.
const MAX_CALLS: usize = 256;

fuzz_target!(|calls: Calls| {
    let micro = if calls.micro_sign { MicroUnit::Sign } else { MicroUnit::Ascii };
    let mut printer = Printer::new().with_micro_unit(micro);
    let mut tickets = Vec::with_capacity(MAX_CALLS);

    for &(is_size, value) in calls.values.iter().take(MAX_CALLS) {
        let ticket = if is_size {
            printer.format_size(value)
        } else {
            printer.format_duration(value)
        };
        let out = printer.get(ticket).copied();
        let out = out.expect("a fresh ticket is always live");

        assert!(!out.is_empty());
        assert!(out.len() < CELL_LEN);
        assert_eq!(out.as_bytes_with_nul().last(), Some(&0));
        assert_eq!(out.starts_with('-'), value < 0, "{value} -> {out}");
        tickets.push((ticket, out));
    }

    // Anything within the last POOL_SLOTS calls of its family must be intact.
    let durations = printer.durations().issued();
    let sizes = printer.sizes().issued();
    for (ticket, out) in tickets {
        let issued = match ticket.family() {
            nanofmt::Family::Duration => durations,
            nanofmt::Family::Size => sizes,
        };
        let live = issued - ticket.sequence() <= POOL_SLOTS as u64;
        assert_eq!(printer.get(ticket).is_some(), live);
        if live {
            assert_eq!(printer.get(ticket).copied(), Some(out));
        }
    }
});
