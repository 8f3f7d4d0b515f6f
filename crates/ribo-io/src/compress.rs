//! Transparent gzip handling
//!
//! Files ending in `.gz` are decompressed on read and compressed on write.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::IoResult;

/// Check if a path indicates a gzip file (by extension)
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Path with a trailing `.gz` removed, for format detection
pub fn strip_gzip_extension(path: &Path) -> &Path {
    if is_gzip_path(path) {
        path.file_stem().map(Path::new).unwrap_or(path)
    } else {
        path
    }
}

/// Writer that can optionally gzip-compress output
pub enum MaybeGzWriter<W: Write> {
    /// Plain uncompressed writer
    Plain(W),
    /// Gzip-compressed writer
    Gzip(GzEncoder<W>),
}

impl<W: Write> Write for MaybeGzWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            MaybeGzWriter::Plain(w) => w.write(buf),
            MaybeGzWriter::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            MaybeGzWriter::Plain(w) => w.flush(),
            MaybeGzWriter::Gzip(w) => w.flush(),
        }
    }
}

impl<W: Write> MaybeGzWriter<W> {
    /// Finish compression and return the underlying writer
    pub fn finish(self) -> std::io::Result<W> {
        match self {
            MaybeGzWriter::Plain(w) => Ok(w),
            MaybeGzWriter::Gzip(w) => w.finish(),
        }
    }
}

/// Open a file for reading, decompressing `.gz` files
pub fn open_file(path: &Path) -> IoResult<Box<dyn Read>> {
    let file = File::open(path)?;

    if is_gzip_path(path) {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create a file for writing, compressing `.gz` files.
///
/// Call [`MaybeGzWriter::finish`] when done so the gzip trailer is written.
pub fn create_file(path: &Path) -> IoResult<MaybeGzWriter<BufWriter<File>>> {
    let file = BufWriter::new(File::create(path)?);

    if is_gzip_path(path) {
        Ok(MaybeGzWriter::Gzip(GzEncoder::new(file, Compression::default())))
    } else {
        Ok(MaybeGzWriter::Plain(file))
    }
}
