//! Command implementations

pub mod align;
pub mod center;

pub use align::{align, AlignReport};
pub use center::{center, CenterReport};

use std::path::{Path, PathBuf};

/// Output path next to `input`: `<stem>_<suffix>.xyz`, keeping a `.gz`
/// suffix when the input had one
pub fn default_output(input: &Path, suffix: &str) -> PathBuf {
    let gzip = ribo_io::compress::is_gzip_path(input);
    let base = if gzip { input.with_extension("") } else { input.to_path_buf() };
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("structure");
    let name = if gzip {
        format!("{stem}_{suffix}.xyz.gz")
    } else {
        format!("{stem}_{suffix}.xyz")
    };
    input.with_file_name(name)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// Unique path in the system temp directory
    pub fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ribo-cmd-{}-{}", std::process::id(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(Path::new("data/rna.xyz"), "aligned"),
            PathBuf::from("data/rna_aligned.xyz")
        );
        assert_eq!(
            default_output(Path::new("rna.xyz.gz"), "centered"),
            PathBuf::from("rna_centered.xyz.gz")
        );
        assert_eq!(
            default_output(Path::new("rna"), "aligned"),
            PathBuf::from("rna_aligned.xyz")
        );
    }
}
