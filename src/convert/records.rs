//! Record splitting over a buffered reader
//!
//! Records end at `\n`, `\r\n` or a lone `\r`. Terminators are not part of
//! the record. A final record without a terminator is still yielded.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Lazy, single-pass iterator over the records of a reader
#[derive(Debug)]
pub struct Records<R> {
    reader: R,
    chunk: Vec<u8>,
    pending: VecDeque<String>,
}

/// Iterate the records of `reader`
pub fn records<R: BufRead>(reader: R) -> Records<R> {
    Records {
        reader,
        chunk: Vec::new(),
        pending: VecDeque::new(),
    }
}

impl<R: BufRead> Records<R> {
    /// Read up to the next `\n` and queue every record in that chunk
    fn fill(&mut self) -> io::Result<bool> {
        self.chunk.clear();
        if self.reader.read_until(b'\n', &mut self.chunk)? == 0 {
            return Ok(false);
        }

        let mut bytes = self.chunk.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending.extend(text.split('\r').map(str::to_owned));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            match self.fill() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &[u8]) -> Vec<String> {
        records(Cursor::new(input)).map(|r| r.unwrap()).collect()
    }

    #[test]
    fn splits_on_every_terminator() {
        assert_eq!(collect(b"a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn blank_records_are_kept() {
        assert_eq!(collect(b"\n\n"), vec!["", ""]);
        assert_eq!(collect(b"a\r\r\n"), vec!["a", ""]);
    }

    #[test]
    fn trailing_lone_cr_ends_the_last_record() {
        assert_eq!(collect(b"a b\r"), vec!["a b"]);
    }

    #[test]
    fn invalid_utf8_is_invalid_data() {
        let mut it = records(Cursor::new(&b"ok\n\xff\n"[..]));
        assert_eq!(it.next().unwrap().unwrap(), "ok");
        let err = it.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
