//! Managed-block merge for the per-tool global instructions file.
//!
//! Each tool's config file (`CLAUDE.md`, `GEMINI.md`, `AGENTS.md`) may carry a
//! single installer-owned region delimited by sentinel markers. The installer
//! rebuilds that region from the selected features' fragments on every run;
//! everything outside the markers belongs to the user and is never touched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Result;

pub const START_MARKER: &str = "<!-- AGENT-TOOLS:START -->";
pub const END_MARKER: &str = "<!-- AGENT-TOOLS:END -->";

const BLOCK_HEADER: &str = "# Global Instructions";

/// Merge the given fragment files into the destination's managed block.
///
/// Fragments that do not exist are skipped. Fragment text is trimmed and
/// empty fragments are discarded; if nothing survives, the destination is
/// left untouched (including non-existence). The write is skipped when the
/// result would be byte-identical, so repeat calls are pure no-ops.
pub fn write_managed_block(dest: &Path, fragments: &[PathBuf]) -> Result<()> {
    let mut parts: Vec<String> = Vec::new();
    for fragment in fragments {
        let text = match fs::read_to_string(fragment) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }

    if parts.is_empty() {
        return Ok(());
    }

    let block = format!(
        "{START_MARKER}\n{BLOCK_HEADER}\n\n{}\n{END_MARKER}",
        parts.join("\n\n")
    );

    let existing = match fs::read_to_string(dest) {
        Ok(existing) => existing,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(dest, &block)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let updated = splice_block(&existing, &block);
    if updated != existing {
        fs::write(dest, updated)?;
    }
    Ok(())
}

/// Replace the first START..END span (inclusive) with the new block, or
/// append the block after a newline when no marker pair is present.
fn splice_block(existing: &str, block: &str) -> String {
    match (existing.find(START_MARKER), existing.find(END_MARKER)) {
        (Some(start), Some(end)) if start <= end => {
            let end = end + END_MARKER.len();
            format!("{}{}{}", &existing[..start], block, &existing[end..])
        }
        _ => format!("{existing}\n{block}"),
    }
}
