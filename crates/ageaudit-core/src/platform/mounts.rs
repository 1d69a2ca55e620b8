//! Server-label resolution for a mount point.
//!
//! Best-effort only: the label decorates report file names and log lines
//! and has no effect on inventory correctness. Every failure path resolves
//! to [`FALLBACK_LABEL`]; nothing here can abort a run.

use std::path::Path;
use std::process::Command;

use tracing::warn;

/// Label used when no mounted filesystem matches the audited path.
pub const FALLBACK_LABEL: &str = "none";

/// Resolve a short display label for the storage server backing
/// `mount_path`, by locating the matching entry in the system's
/// mounted-filesystem listing (`df -h`).
///
/// Never fails; an unavailable `df`, a non-zero exit, or an unmatched or
/// unparseable listing all yield [`FALLBACK_LABEL`] with a warning.
pub fn resolve_server_label(mount_path: &Path) -> String {
    let stdout = match Command::new("df").arg("-h").output() {
        Ok(out) if out.status.success() => out.stdout,
        Ok(out) => {
            warn!("df -h exited with {}; using fallback label", out.status);
            return FALLBACK_LABEL.to_string();
        }
        Err(err) => {
            warn!("failed to run df -h: {err}; using fallback label");
            return FALLBACK_LABEL.to_string();
        }
    };

    match parse_server_label(&String::from_utf8_lossy(&stdout), mount_path) {
        Some(label) => label,
        None => {
            warn!("no mount located at: {}", mount_path.display());
            FALLBACK_LABEL.to_string()
        }
    }
}

/// Extract the server label from mounted-filesystem listing text.
///
/// A line is a candidate when its trimmed text ends with the mount path.
/// Remote-filesystem sources look like `curlftpfs#ftp://server/`; the label
/// is the part of the first field after `#`, with the protocol prefix and
/// path separators stripped. Candidates that do not parse are skipped, and
/// the last parseable candidate wins. `None` when nothing matches.
pub fn parse_server_label(listing: &str, mount_path: &Path) -> Option<String> {
    let needle = mount_path.to_string_lossy();
    let mut label = None;

    for line in listing.lines() {
        if !line.trim().ends_with(needle.as_ref()) {
            continue;
        }
        let source = match line.split_whitespace().next() {
            Some(s) => s,
            None => continue,
        };
        let Some(remote) = source.split('#').nth(1) else {
            continue;
        };
        label = Some(remote.replace("ftp://", "").replace('/', ""));
    }

    label
}
