use std::io::BufRead;

use crate::lengths::{ExtractError, LengthExtractor, ReadLengths, char_len, scan_lines};

pub const MARKER: u8 = b'>';

/// Multi-line records separated by `>` header lines.
///
/// A record whose body is empty is never emitted, so two adjacent headers
/// produce no zero-length entry. Body lines that precede the first header
/// are counted as a record of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastaLengths;

impl LengthExtractor for FastaLengths {
    fn extract(&self, reader: &mut dyn BufRead) -> Result<ReadLengths, ExtractError> {
        let mut lengths = ReadLengths::new();
        let mut current = 0usize;
        scan_lines(reader, &mut lengths, |_, line, out| {
            if line.first() == Some(&MARKER) {
                if current > 0 {
                    out.push(current);
                    current = 0;
                }
            } else {
                current += char_len(line);
            }
        })
        .map_err(|err| match err {
            ExtractError::Scan {
                line,
                source,
                mut partial,
            } => {
                // keep the record that was open when the read failed
                if current > 0 {
                    partial.push(current);
                }
                ExtractError::Scan {
                    line,
                    source,
                    partial,
                }
            }
        })?;
        if current > 0 {
            lengths.push(current);
        }
        Ok(lengths)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/lengths/fasta.rs"]
mod tests;
