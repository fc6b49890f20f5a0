//! Reading address specs from a file.

use std::fs;
use std::path::Path;

use crate::error::SweepError;
use crate::network::target::{self, Expansion};

/// One non-blank line of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLine {
    /// 1-based.
    pub line: usize,
    pub spec: String,
}

/// Reads newline-separated specs. Lines are trimmed and blank ones skipped.
///
/// There is no comment syntax. Failing to read the file is fatal for the
/// run, so no partial list is ever returned.
pub fn read_specs(path: &Path) -> Result<Vec<SpecLine>, SweepError> {
    let content = fs::read_to_string(path).map_err(|source| SweepError::FileIo {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_specs(&content))
}

pub fn parse_specs(content: &str) -> Vec<SpecLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let spec = raw.trim();
            (!spec.is_empty()).then(|| SpecLine {
                line: idx + 1,
                spec: spec.to_string(),
            })
        })
        .collect()
}

/// Expands file lines, tagging malformed entries with their line number.
pub fn expand_lines(lines: &[SpecLine]) -> Expansion {
    let specs: Vec<(Option<usize>, &str)> = lines
        .iter()
        .map(|l| (Some(l.line), l.spec.as_str()))
        .collect();
    target::expand_batch(&specs)
}
