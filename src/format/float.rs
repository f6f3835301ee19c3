//! The float-to-text collaborator used by the size formatter.

use std::fmt::{self, Write};

/// Fixed-precision float formatting into a caller-provided slice.
///
/// Implementations write `value` with `precision` fractional digits into
/// `dest` and return the number of bytes written, i.e. the cursor just past
/// the last byte. Output that does not fit is truncated; it must never be
/// written outside `dest`.
pub trait FloatFormatter {
    fn format_float(&self, dest: &mut [u8], value: f64, precision: usize) -> usize;
}

/// Default collaborator built on `core::fmt`, writing straight into the slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFloatFormatter;

impl FloatFormatter for StdFloatFormatter {
    fn format_float(&self, dest: &mut [u8], value: f64, precision: usize) -> usize {
        let mut out = SliceWriter { buf: dest, pos: 0 };
        // An error only means the slice filled up; keep what fit.
        let _ = write!(out, "{value:.precision$}");
        out.pos
    }
}

struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let n = bytes.len().min(self.buf.len() - self.pos);
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        if n < bytes.len() {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64, precision: usize, room: usize) -> String {
        let mut buf = vec![0u8; room];
        let n = StdFloatFormatter.format_float(&mut buf, value, precision);
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn writes_requested_precision() {
        assert_eq!(render(9.765625, 2, 32), "9.77");
        assert_eq!(render(-5.0, 2, 32), "-5.00");
        assert_eq!(render(1234.4, 0, 32), "1234");
    }

    #[test]
    fn truncates_to_destination() {
        assert_eq!(render(12345.678, 2, 4), "1234");
        assert_eq!(render(1.0, 2, 0), "");
    }
}
