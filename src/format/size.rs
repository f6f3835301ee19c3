//! Byte counts: `N bytes`, then `KB`/`MB`/`GB`/`TB` with up to two decimals.

use super::digits::emit_u64;
use super::float::FloatFormatter;
use crate::buffer::Cursor;

/// Magnitudes below this print as exact byte counts, and each unit holds
/// values up to this many of itself before the next one takes over.
pub const UNIT_LIMIT: u64 = 10_000;

const KIB: u64 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
}

impl SizeUnit {
    /// The smallest unit that keeps `abs` under `UNIT_LIMIT` of it, with
    /// terabytes as the catch-all.
    pub fn for_magnitude(abs: u64) -> Self {
        if abs < UNIT_LIMIT * KIB {
            SizeUnit::Kilobyte
        } else if abs < UNIT_LIMIT * KIB * KIB {
            SizeUnit::Megabyte
        } else if abs < UNIT_LIMIT * KIB * KIB * KIB {
            SizeUnit::Gigabyte
        } else {
            SizeUnit::Terabyte
        }
    }

    pub const fn scale(self) -> f64 {
        match self {
            SizeUnit::Kilobyte => 1024.,
            SizeUnit::Megabyte => 1024. * 1024.,
            SizeUnit::Gigabyte => 1024. * 1024. * 1024.,
            SizeUnit::Terabyte => 1024. * 1024. * 1024. * 1024.,
        }
    }

    pub const fn letter(self) -> u8 {
        match self {
            SizeUnit::Kilobyte => b'K',
            SizeUnit::Megabyte => b'M',
            SizeUnit::Gigabyte => b'G',
            SizeUnit::Terabyte => b'T',
        }
    }
}

/// Writes `bytes` with a unit suffix. Negative values keep their sign.
pub fn write_size<F>(cur: &mut Cursor<'_>, bytes: i64, float: &F)
where
    F: FloatFormatter + ?Sized,
{
    let abs = bytes.unsigned_abs();
    if abs < UNIT_LIMIT {
        if bytes < 0 {
            cur.push(b'-');
        }
        emit_u64(cur, abs);
        cur.extend(b" bytes");
        return;
    }

    let unit = SizeUnit::for_magnitude(abs);
    let start = cur.position();
    // Leave room for the " XB" suffix.
    let room = cur.spare_mut().len().saturating_sub(3);
    let n = float.format_float(&mut cur.spare_mut()[..room], bytes as f64 / unit.scale(), 2);
    cur.advance(n.min(room));
    trim_fraction(cur, start);

    cur.push(b' ');
    cur.push(unit.letter());
    cur.push(b'B');
}

/// Drops trailing zeros after the decimal point, and the point itself if
/// nothing is left behind it.
fn trim_fraction(cur: &mut Cursor<'_>, start: usize) {
    let number = &cur.written()[start..];
    if !number.contains(&b'.') {
        return;
    }
    let mut end = number.len();
    while end > 0 && number[end - 1] == b'0' {
        end -= 1;
    }
    if end > 0 && number[end - 1] == b'.' {
        end -= 1;
    }
    cur.truncate(start + end);
}
