pub mod detect;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not create gzip reader for {path}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
}

impl Compression {
    pub const GZIP_SUFFIX: &'static str = ".gz";

    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(Self::GZIP_SUFFIX) {
            Compression::Gzip
        } else {
            Compression::Plain
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Plain => write!(f, "plain"),
            Compression::Gzip => write!(f, "gzip"),
        }
    }
}

/// Opens `path` as a line-oriented reader, transparently decoding gzip when
/// the name ends in `.gz`. The gzip header is read eagerly so a corrupt
/// stream fails here rather than on the first line.
pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    let file = std::fs::File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if Compression::from_path(path) == Compression::Gzip {
        #[cfg(feature = "gz")]
        {
            use io::BufRead;

            let decoder = flate2::read::MultiGzDecoder::new(file);
            let mut reader = io::BufReader::new(decoder);
            reader.fill_buf().map_err(|source| InputError::Decompress {
                path: path.to_path_buf(),
                source,
            })?;
            return Ok(Box::new(reader));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
