//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use readscope_core::{InputError, markdown};

pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod simplify;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata before the file is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(limit) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > limit {
            return Err(InputError::TooLarge { size, limit })
                .with_context(|| format!("refusing to read {path}"));
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read a file as prose, stripping markdown when requested or when the
/// file has an `.md` extension.
pub fn read_prose(
    path: &Utf8Path,
    strip_markdown: bool,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if strip_markdown || path.extension() == Some("md") {
        tracing::debug!(file = %path, "stripping markdown");
        Ok(markdown::strip_to_prose(&content))
    } else {
        Ok(content)
    }
}
