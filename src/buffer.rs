//! Fixed-capacity output cells and the write cursor the emitters advance.

use std::ffi::CStr;
use std::fmt;
use std::ops::Deref;

/// Size of one output cell in bytes, terminator included.
pub const CELL_LEN: usize = 64;

/// A formatted string stored inline in a 64-byte cell.
///
/// The text is always followed by a NUL byte inside the cell, so at most
/// `CELL_LEN - 1` bytes of text fit. The type is `Copy`: callers that need a
/// result to outlive its pool slot simply copy it out.
#[derive(Clone, Copy)]
pub struct FixedStr {
    bytes: [u8; CELL_LEN],
    len: u8,
}

impl FixedStr {
    /// An empty, NUL-terminated cell.
    pub const EMPTY: FixedStr = FixedStr {
        bytes: [0; CELL_LEN],
        len: 0,
    };

    /// Replaces the contents of the cell with whatever `write` emits through the cursor.
    ///
    /// The written bytes are checked once for UTF-8 validity; anything past the
    /// last valid character (only possible with a misbehaving float formatter)
    /// is dropped. The terminator is written after the text.
    pub fn overwrite<F>(&mut self, write: F)
    where
        F: FnOnce(&mut Cursor<'_>),
    {
        let end = {
            let mut cursor = Cursor::new(&mut self.bytes);
            write(&mut cursor);
            cursor.position()
        };
        let len = match std::str::from_utf8(&self.bytes[..end]) {
            Ok(_) => end,
            Err(e) => e.valid_up_to(),
        };
        self.bytes[len] = 0;
        self.len = len as u8;
    }

    /// The text. `overwrite` only ever stores a valid UTF-8 prefix, so the
    /// empty fallback is unreachable.
    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The text including its trailing NUL.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len as usize]
    }

    /// The text as a C string, for consumers that expect NUL-terminated data.
    pub fn as_c_str(&self) -> &CStr {
        // bytes[len] is always 0, so the search for a terminator cannot fail.
        CStr::from_bytes_until_nul(&self.bytes).unwrap_or_default()
    }
}

impl Default for FixedStr {
    fn default() -> Self {
        FixedStr::EMPTY
    }
}

impl Deref for FixedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for FixedStr {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FixedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for FixedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq for FixedStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for FixedStr {}

impl PartialEq<str> for FixedStr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for FixedStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Write position inside a cell.
///
/// Every emitter takes `&mut Cursor` and moves it forward by exactly the number
/// of bytes it writes. Writing past the last text byte of the cell is a bounds
/// violation and panics; the formatters never get close to it.
pub struct Cursor<'a> {
    buf: &'a mut [u8; CELL_LEN],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a mut [u8; CELL_LEN]) -> Self {
        Cursor { buf, pos: 0 }
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    #[inline]
    pub fn extend(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// Free space, minus the byte reserved for the terminator.
    #[inline]
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..CELL_LEN - 1]
    }

    /// Accounts for `n` bytes written directly into [`Cursor::spare_mut`].
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n < CELL_LEN);
        self.pos = (self.pos + n).min(CELL_LEN - 1);
    }

    /// Moves the cursor back to `pos`, discarding what was written after it.
    #[inline]
    pub fn truncate(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos.min(self.pos);
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_terminated() {
        let cell = FixedStr::EMPTY;
        assert_eq!(cell.as_str(), "");
        assert_eq!(cell.as_bytes_with_nul(), b"\0");
        assert!(cell.as_c_str().to_bytes().is_empty());
    }

    #[test]
    fn overwrite_terminates_text() {
        let mut cell = FixedStr::EMPTY;
        cell.overwrite(|cur| cur.extend(b"12.5 ms"));
        assert_eq!(cell, "12.5 ms");
        assert_eq!(cell.as_bytes_with_nul(), b"12.5 ms\0");
        assert_eq!(cell.as_c_str().to_str(), Ok("12.5 ms"));
    }

    #[test]
    fn overwrite_replaces_longer_text() {
        let mut cell = FixedStr::EMPTY;
        cell.overwrite(|cur| cur.extend(b"1023 bytes"));
        cell.overwrite(|cur| cur.extend(b"7 ns"));
        assert_eq!(cell.as_str(), "7 ns");
        assert_eq!(cell.as_c_str().to_bytes(), b"7 ns");
    }

    #[test]
    fn invalid_utf8_tail_is_dropped() {
        let mut cell = FixedStr::EMPTY;
        cell.overwrite(|cur| {
            cur.extend(b"42");
            cur.push(0xff);
        });
        assert_eq!(cell.as_str(), "42");
    }

    #[test]
    fn cursor_truncate_and_spare() {
        let mut raw = [0u8; CELL_LEN];
        let mut cur = Cursor::new(&mut raw);
        cur.extend(b"9.50");
        cur.truncate(3);
        assert_eq!(cur.written(), b"9.5");
        assert_eq!(cur.spare_mut().len(), CELL_LEN - 1 - 3);
        cur.spare_mut()[0] = b'!';
        cur.advance(1);
        assert_eq!(cur.written(), b"9.5!");
    }

    #[test]
    fn display_honours_padding() {
        let mut cell = FixedStr::EMPTY;
        cell.overwrite(|cur| cur.extend(b"1 us"));
        assert_eq!(format!("[{cell:>6}]"), "[  1 us]");
    }
}
