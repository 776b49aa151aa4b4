//! Record splitting for statement buffers
//!
//! Slices a raw byte buffer into delimiter-bounded records without copying.
//! The split is total: every byte buffer, including an empty one, produces a
//! well-defined sequence of records.

/// Record delimiter used by ABO statement files (`CR LF`)
pub const CRLF: [u8; 2] = [0x0d, 0x0a];

/// Iterator over the records of a byte buffer
///
/// Yields borrowed slices in original order. A delimiter at the very start
/// yields a leading empty record; a trailing delimiter does not yield a
/// trailing empty record.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    buffer: &'a [u8],
    delimiter: [u8; 2],
    cursor: usize,
    scan: usize,
}

impl<'a> Records<'a> {
    /// Create an iterator splitting `buffer` on `delimiter`
    pub fn new(buffer: &'a [u8], delimiter: [u8; 2]) -> Self {
        Records {
            buffer,
            delimiter,
            cursor: 0,
            scan: 0,
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let buffer = self.buffer;

        while self.scan + 1 < buffer.len() {
            let i = self.scan;
            if buffer[i] == self.delimiter[0] && buffer[i + 1] == self.delimiter[1] {
                let record = &buffer[self.cursor..i];
                self.cursor = i + 2;
                self.scan = i + 2;
                return Some(record);
            }
            self.scan += 1;
        }

        // Final partial record
        if self.cursor < buffer.len() {
            let record = &buffer[self.cursor..];
            self.cursor = buffer.len();
            self.scan = buffer.len();
            return Some(record);
        }

        None
    }
}

/// Split `buffer` on the `CR LF` delimiter
pub fn split_records(buffer: &[u8]) -> Records<'_> {
    Records::new(buffer, CRLF)
}

/// Split `buffer` on a custom two-byte delimiter, collecting the records
pub fn split_with(buffer: &[u8], delimiter: [u8; 2]) -> Vec<&[u8]> {
    Records::new(buffer, delimiter).collect()
}
