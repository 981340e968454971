use std::path::Path;

use crate::input::Compression;
use crate::lengths::LengthExtractor;
use crate::lengths::fasta::FastaLengths;
use crate::lengths::fastq::FastqLengths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    Fastq,
    Fasta,
}

impl SeqFormat {
    pub const FASTQ_SUFFIXES: [&'static str; 2] = [".fastq", ".fq"];
    pub const FASTA_SUFFIXES: [&'static str; 2] = [".fasta", ".fa"];

    pub fn extractor(self) -> &'static dyn LengthExtractor {
        match self {
            SeqFormat::Fastq => &FastqLengths,
            SeqFormat::Fasta => &FastaLengths,
        }
    }
}

impl std::fmt::Display for SeqFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqFormat::Fastq => write!(f, "fastq"),
            SeqFormat::Fasta => write!(f, "fasta"),
        }
    }
}

/// Path with a trailing `.gz` removed, as used for format classification.
pub fn base_name(path: &Path) -> String {
    let name = path.to_string_lossy();
    match name.strip_suffix(Compression::GZIP_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => name.into_owned(),
    }
}

/// Case-sensitive suffix match on the decompressed name.
pub fn detect_format(path: &Path) -> Option<SeqFormat> {
    let base = base_name(path);
    if SeqFormat::FASTQ_SUFFIXES.iter().any(|s| base.ends_with(s)) {
        Some(SeqFormat::Fastq)
    } else if SeqFormat::FASTA_SUFFIXES.iter().any(|s| base.ends_with(s)) {
        Some(SeqFormat::Fasta)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/detect.rs"]
mod tests;
