//! Nanosecond durations: `ns`, `us`, `ms`, `s`, `m:ss.f`, `h:mm:ss`, `Nd hh:mm:ss`.

use super::digits::{emit_seconds_frac, emit_small, emit_small_with_milli_frac, emit_tiny, emit_u64};
use crate::buffer::Cursor;

pub const NS_PER_US: u64 = 1_000;
pub const NS_PER_MS: u64 = 1_000 * NS_PER_US;
pub const NS_PER_SEC: u64 = 1_000 * NS_PER_MS;
pub const NS_PER_MIN: u64 = 60 * NS_PER_SEC;
pub const NS_PER_HOUR: u64 = 60 * NS_PER_MIN;
pub const NS_PER_DAY: u64 = 24 * NS_PER_HOUR;

/// Milliseconds into a minute from which the seconds field rounds up to 60.
const MINUTE_CARRY_MS: u64 = 59_950;

/// Suffix used for microseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MicroUnit {
    /// ` us`
    Ascii,
    /// ` µs`
    Sign,
}

impl MicroUnit {
    /// `Sign` when built with the `micro-sign` feature, `Ascii` otherwise.
    pub const fn build_default() -> Self {
        if cfg!(feature = "micro-sign") {
            MicroUnit::Sign
        } else {
            MicroUnit::Ascii
        }
    }

    #[inline]
    pub const fn suffix(self) -> &'static [u8] {
        match self {
            MicroUnit::Ascii => b" us",
            MicroUnit::Sign => " \u{b5}s".as_bytes(),
        }
    }
}

impl Default for MicroUnit {
    fn default() -> Self {
        MicroUnit::build_default()
    }
}

/// Writes `value` nanoseconds, picking the unit from its magnitude.
///
/// The sign only adds a leading `-`; unit selection uses the absolute value.
pub fn write_duration(cur: &mut Cursor<'_>, value: i64, micro: MicroUnit) {
    if value < 0 {
        cur.push(b'-');
    }
    let ns = value.unsigned_abs();

    if ns < NS_PER_US {
        emit_small(cur, ns);
        cur.extend(b" ns");
    } else if ns < NS_PER_MS {
        emit_small_with_milli_frac(cur, ns);
        cur.extend(micro.suffix());
    } else if ns < NS_PER_SEC {
        emit_small_with_milli_frac(cur, ns / NS_PER_US);
        cur.extend(b" ms");
    } else if ns < NS_PER_MIN {
        emit_small_with_milli_frac(cur, ns / NS_PER_MS);
        cur.extend(b" s");
    } else if ns < NS_PER_HOUR {
        write_minutes(cur, ns);
    } else if ns < NS_PER_DAY {
        let h = ns / NS_PER_HOUR;
        emit_tiny(cur, h, false);
        cur.push(b':');
        write_mm_ss(cur, ns);
    } else {
        let d = ns / NS_PER_DAY;
        // i64 reaches ~106751 days; anything past two digits takes the slow path.
        if d < 100 {
            emit_tiny(cur, d, false);
        } else {
            emit_u64(cur, d);
        }
        cur.push(b'd');
        emit_tiny(cur, ns / NS_PER_HOUR % 24, true);
        cur.push(b':');
        write_mm_ss(cur, ns);
    }
}

/// `m:ss` or `m:ss.f` for durations under an hour.
///
/// Seconds that round up to 60 carry into the minutes, and 59:59.95 or more
/// becomes `1:00:00`.
fn write_minutes(cur: &mut Cursor<'_>, ns: u64) {
    let m = ns / NS_PER_MIN;
    let ms = ns % NS_PER_MIN / NS_PER_MS;
    if ms >= MINUTE_CARRY_MS {
        let m = m + 1;
        if m == 60 {
            cur.extend(b"1:00:00");
        } else {
            emit_tiny(cur, m, false);
            cur.extend(b":00");
        }
        return;
    }
    emit_tiny(cur, m, false);
    cur.push(b':');
    emit_seconds_frac(cur, ms);
}

/// Zero-padded `mm:ss` of whole seconds, no fraction.
fn write_mm_ss(cur: &mut Cursor<'_>, ns: u64) {
    emit_tiny(cur, ns / NS_PER_MIN % 60, true);
    cur.push(b':');
    emit_tiny(cur, ns / NS_PER_SEC % 60, true);
}
