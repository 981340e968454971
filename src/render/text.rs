use std::io::Write;

use crate::lengths::SortedLengths;

pub const FILLER: char = '*';

/// One line per read: index, length, and a bar of `length` filler characters.
pub fn write_histogram<W: Write>(out: &mut W, lengths: &SortedLengths) -> std::io::Result<()> {
    let mut bar = String::new();
    for (i, &len) in lengths.iter().enumerate() {
        // lengths are ascending, so the bar only ever grows
        while bar.len() < len {
            bar.push(FILLER);
        }
        writeln!(out, "{:7} [{:5}] {}", i, len, &bar[..len])?;
    }
    out.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/text.rs"]
mod tests;
