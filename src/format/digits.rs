//! Integer-only digit emission.
//!
//! All rounding here is round-half-up done by adding half a unit before
//! truncating (`v + 5`, `v + 50`). Float rounding would disagree at exact
//! halfway points.

use crate::buffer::Cursor;

/// Two ASCII digits for every value in `0..100`.
static INT_TABLE_100: &[u8; 200] = b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";

#[inline]
fn table_pair(v: u64) -> &'static [u8] {
    let at = v as usize * 2;
    &INT_TABLE_100[at..at + 2]
}

/// Writes `v < 100` as one or two digits.
///
/// With `zero_pad`, values below ten get a leading `0`.
#[inline]
pub fn emit_tiny(cur: &mut Cursor<'_>, v: u64, zero_pad: bool) {
    debug_assert!(v < 100, "tiny int out of range: {v}");
    if v >= 10 {
        cur.push(b'0' + (v / 10) as u8);
    } else if zero_pad {
        cur.push(b'0');
    }
    cur.push(b'0' + (v % 10) as u8);
}

/// Writes `v < 1000` as one to three digits, no leading zeros.
#[inline]
pub fn emit_small(cur: &mut Cursor<'_>, v: u64) {
    debug_assert!(v < 1000, "small int out of range: {v}");
    if v >= 100 {
        cur.extend(table_pair(v / 10));
    } else if v >= 10 {
        cur.push(b'0' + (v / 10) as u8);
    }
    cur.push(b'0' + (v % 10) as u8);
}

/// Writes `.` and the thousandths `v` rounded to hundredths.
///
/// A zero hundredths digit is not printed, so `.5` comes out instead of `.50`.
/// `v` must stay below 995; larger values round into the integer part and are
/// the caller's business.
#[inline]
pub fn emit_frac_2(cur: &mut Cursor<'_>, v: u64) {
    debug_assert!(v < 995, "two-digit fraction would carry: {v}");
    cur.push(b'.');
    let v = v + 5;
    if v / 10 % 10 == 0 {
        cur.push(b'0' + (v / 100) as u8);
    } else {
        cur.extend(table_pair(v / 10));
    }
}

/// Writes `.` and the thousandths `v` rounded to tenths. `v` must stay below 950.
#[inline]
pub fn emit_frac_1(cur: &mut Cursor<'_>, v: u64) {
    debug_assert!(v < 950, "one-digit fraction would carry: {v}");
    cur.push(b'.');
    cur.push(b'0' + ((v + 50) / 100) as u8);
}

/// Writes a milli-scaled value below 1_000_000 as `N`, `N.F` or `N.FF`.
///
/// Fractions of 0.005 or less are dropped rather than printed as `.00`, and
/// 0.995 or more rounds the integer part up. The only four-digit result is the
/// carry `999.995.. -> 1000`.
pub fn emit_small_with_milli_frac(cur: &mut Cursor<'_>, v: u64) {
    let whole = v / 1000;
    let milli = v % 1000;
    if milli >= 995 {
        let whole = whole + 1;
        if whole == 1000 {
            cur.extend(b"1000");
        } else {
            emit_small(cur, whole);
        }
    } else {
        emit_small(cur, whole);
        if milli > 5 {
            emit_frac_2(cur, milli);
        }
    }
}

/// Writes milliseconds below 60_000 as zero-padded seconds with at most one
/// fractional digit (`05`, `05.3`).
///
/// Fractions of 0.05 or less are dropped; 0.95 or more rounds the seconds up.
/// The caller must not pass values that would round up to 60 seconds.
pub fn emit_seconds_frac(cur: &mut Cursor<'_>, v: u64) {
    let whole = v / 1000;
    let milli = v % 1000;
    if milli >= 950 {
        emit_tiny(cur, whole + 1, true);
    } else {
        emit_tiny(cur, whole, true);
        if milli > 50 {
            emit_frac_1(cur, milli);
        }
    }
}

/// Writes any `u64` in decimal. Used for the unbounded leading field of very
/// long durations, never on the common paths.
pub fn emit_u64(cur: &mut Cursor<'_>, mut v: u64) {
    let mut digits = [0u8; 20];
    let mut at = digits.len();
    while v >= 100 {
        at -= 2;
        digits[at..at + 2].copy_from_slice(table_pair(v % 100));
        v /= 100;
    }
    if v >= 10 {
        at -= 2;
        digits[at..at + 2].copy_from_slice(table_pair(v));
    } else {
        at -= 1;
        digits[at] = b'0' + v as u8;
    }
    cur.extend(&digits[at..]);
}
