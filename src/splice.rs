//! In-place replacement of the chart page's data assignment.
//!
//! The page is treated as plain text: the span starts at the marker, ends at
//! the brace that closes the marker's `{` (plus a `;` if one follows at once),
//! and every byte outside it is written back untouched. Braces inside
//! double-quoted strings (with backslash escapes) are not counted, so link
//! names and urls may contain them.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Byte range of the assignment found in a host text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first marker byte.
    pub start: usize,
    /// Offset one past the closing brace, or past the `;` that follows it.
    pub end: usize,
}

/// Locate the assignment opened by `marker`.
///
/// # Errors
///
/// Returns [`Error::MarkerNotFound`] if `marker` does not occur, and
/// [`Error::UnbalancedBraces`] if the text ends before the braces close.
pub fn locate(host: &str, marker: &str) -> Result<Span> {
    let start = host.find(marker).ok_or_else(|| Error::MarkerNotFound {
        marker: marker.to_string(),
    })?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let bytes = host.as_bytes();
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    let end = if bytes.get(i + 1) == Some(&b';') {
                        i + 2
                    } else {
                        i + 1
                    };
                    return Ok(Span { start, end });
                }
            }
            _ => {}
        }
    }
    Err(Error::UnbalancedBraces { start })
}

/// Replace the assignment opened by `marker` with `replacement`.
///
/// # Errors
///
/// Propagates the failures of [`locate`].
pub fn splice(host: &str, marker: &str, replacement: &str) -> Result<String> {
    let Span { start, end } = locate(host, marker)?;
    tracing::debug!(start, end, "replacing data section");

    let mut out = String::with_capacity(host.len() - (end - start) + replacement.len());
    out.push_str(&host[..start]);
    out.push_str(replacement);
    out.push_str(&host[end..]);
    Ok(out)
}

/// What [`inject_file`] did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page was rewritten with new data.
    Updated,
    /// The page already held this data and was left alone.
    Unchanged,
}

/// Splice `replacement` into the file at `path`, writing only once the new content is ready.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if the splice fails;
/// in every error case the file on disk is untouched.
pub fn inject_file(path: &Path, marker: &str, replacement: &str) -> Result<Outcome> {
    let host = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = splice(&host, marker, replacement)?;
    if updated == host {
        tracing::debug!(path = %path.display(), "data section already current");
        return Ok(Outcome::Unchanged);
    }

    fs::write(path, updated).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "updated data section");
    Ok(Outcome::Updated)
}

#[cfg(test)]
#[path = "tests/splice.rs"]
mod tests;
