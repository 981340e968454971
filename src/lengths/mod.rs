pub mod fasta;
pub mod fastq;

use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("error scanning text at line {line}: {source}")]
    Scan {
        line: usize,
        #[source]
        source: io::Error,
        /// Lengths collected before the failing line.
        partial: ReadLengths,
    },
}

impl ExtractError {
    pub fn into_partial(self) -> ReadLengths {
        match self {
            ExtractError::Scan { partial, .. } => partial,
        }
    }
}

/// Per-record lengths in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadLengths(Vec<usize>);

impl ReadLengths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, len: usize) {
        self.0.push(len);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn sorted(mut self) -> SortedLengths {
        self.0.sort_unstable();
        SortedLengths(self.0)
    }
}

impl From<Vec<usize>> for ReadLengths {
    fn from(value: Vec<usize>) -> Self {
        Self(value)
    }
}

/// Lengths in ascending order. Only obtainable through [`ReadLengths::sorted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedLengths(Vec<usize>);

impl SortedLengths {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    pub fn max(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

pub trait LengthExtractor {
    fn extract(&self, reader: &mut dyn BufRead) -> Result<ReadLengths, ExtractError>;
}

/// Feeds every line (terminator stripped) of `reader` to `visit` with its
/// 1-based line number. Lines are raw bytes; only lines that get measured are
/// ever decoded. On a read error the lengths gathered so far are handed back
/// inside the error.
pub(crate) fn scan_lines<F>(
    reader: &mut dyn BufRead,
    lengths: &mut ReadLengths,
    mut visit: F,
) -> Result<(), ExtractError>
where
    F: FnMut(usize, &[u8], &mut ReadLengths),
{
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return Ok(()),
            Ok(_) => {
                line_no += 1;
                visit(line_no, trim_line_end(&buf), lengths);
            }
            Err(source) => {
                return Err(ExtractError::Scan {
                    line: line_no + 1,
                    source,
                    partial: std::mem::take(lengths),
                });
            }
        }
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Length in characters, not bytes. Invalid UTF-8 sequences count as one
/// replacement character each.
pub(crate) fn char_len(line: &[u8]) -> usize {
    String::from_utf8_lossy(line).chars().count()
}

#[cfg(test)]
#[path = "../../tests/src_inline/lengths/mod.rs"]
mod tests;
