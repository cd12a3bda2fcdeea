//! Folder path handling for rename runs.
//!
//! Users paste folder paths from file managers and browsers, so the input may
//! be quoted, carry trailing separators, or arrive as a `file://` URI.

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// Turn user input into the folder path renames happen in.
pub fn normalize_folder(input: &str) -> PathBuf {
    let trimmed = strip_quotes(input.trim());

    let path = match strip_file_scheme(trimmed) {
        Some(rest) => decode_file_uri_path(rest),
        None => trimmed.to_string(),
    };

    PathBuf::from(trim_trailing_separators(&path))
}

/// Join a file name onto the folder.
pub fn join_in_folder(folder: &Path, file_name: &str) -> PathBuf {
    folder.join(file_name)
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn strip_file_scheme(s: &str) -> Option<&str> {
    let prefix = s.get(..FILE_SCHEME.len())?;
    prefix
        .eq_ignore_ascii_case(FILE_SCHEME)
        .then(|| &s[FILE_SCHEME.len()..])
}

fn decode_file_uri_path(rest: &str) -> String {
    let rest = match rest.get(..10) {
        Some(host) if host.eq_ignore_ascii_case("localhost/") => &rest[9..],
        _ => rest,
    };

    let decoded = percent_decode_str(rest).decode_utf8_lossy().into_owned();

    // file:///C:/Users -> C:/Users
    if has_drive_prefix(decoded.strip_prefix('/').unwrap_or("")) {
        return decoded[1..].to_string();
    }
    decoded
}

fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() && !path.is_empty() {
        // "/" stays the filesystem root
        return &path[..1];
    }
    if has_drive_prefix(trimmed) && trimmed.len() == 2 && path.len() > 2 {
        // "C:\" keeps the separator that makes it the drive root
        return &path[..3];
    }
    trimmed
}
