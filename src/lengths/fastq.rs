use std::io::BufRead;

use tracing::debug;

use crate::lengths::{ExtractError, LengthExtractor, ReadLengths, char_len, scan_lines};

/// Four lines per record: header, sequence, separator, qualities.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastqLengths;

impl LengthExtractor for FastqLengths {
    fn extract(&self, reader: &mut dyn BufRead) -> Result<ReadLengths, ExtractError> {
        let mut lengths = ReadLengths::new();
        // sequence length of the block being read, committed on its 4th line
        let mut pending: Option<usize> = None;
        scan_lines(reader, &mut lengths, |line_no, line, out| match line_no % 4 {
            2 => pending = Some(char_len(line)),
            0 => {
                if let Some(len) = pending.take() {
                    out.push(len);
                }
            }
            _ => {}
        })?;
        if pending.is_some() {
            debug!("dropping trailing partial fastq record");
        }
        Ok(lengths)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/lengths/fastq.rs"]
mod tests;
