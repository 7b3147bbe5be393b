//! Canonical contact reducers - per-platform URL-to-handle normalization
//!
//! Each supported platform has one pure reducer that takes the raw
//! contact value from an export record and reduces it to the canonical
//! account handle used as a table key. Reducers reject non-standard
//! shapes instead of guessing, and push advisory notes for
//! recognized-but-unusual inputs.
//!
//! These are narrow platform dialects, not a general URL parser:
//! thresholds like "more than one path segment" reproduce the upstream
//! heuristics exactly.
//!
//! # Guarantees
//!
//! - Deterministic: same input always produces the same handle and notes
//! - A returned handle never contains a URL scheme or a trailing slash
//! - `reduce` never returns an empty handle

use crate::platform::Platform;

// ── Dispatch ──────────────────────────────────────────────

/// Reduce a raw contact value to its canonical handle.
///
/// Advisory notes about unusual shapes are appended to `notes`; the
/// caller attributes them to the record being processed. `None` means
/// the value was rejected and must not be used as a table key.
pub fn reduce(platform: Platform, raw: &str, notes: &mut Vec<String>) -> Option<String> {
    let handle = match platform {
        Platform::Website => Some(website(raw)),
        Platform::Instagram => instagram(raw, notes),
        // The export stores bare account names for X; nothing to reduce.
        Platform::X => Some(raw.to_string()),
        Platform::YouTube => youtube(raw),
        Platform::LinkedIn => linkedin(raw, notes),
        Platform::Facebook => facebook(raw, notes),
    };
    handle.filter(|h| !h.is_empty())
}

// ── Per-platform reducers ─────────────────────────────────

/// Websites keep their whole address: scheme and one trailing slash
/// removed, lowercased. Never rejects.
pub fn website(url: &str) -> String {
    strip_trailing_slash(strip_scheme(url)).to_lowercase()
}

/// Instagram: the single path segment after the host is the username.
pub fn instagram(url: &str, notes: &mut Vec<String>) -> Option<String> {
    let url = strip_scheme(url);
    if url.contains('?') || url.contains('#') {
        notes.push(format!(
            "account URL contains query parameters or an anchor: {url}"
        ));
    }
    let url = strip_query_and_fragment(url);
    let path = path_after_host(strip_trailing_slash(url));
    if path.split('/').count() > 1 {
        notes.push(format!("non-standard account URL: {url}"));
        return None;
    }
    Some(path.to_string())
}

/// YouTube: the last path segment is the handle or legacy username,
/// except channel URLs, which keep the `channel/<id>` pair so ids from
/// different namespaces cannot collide.
pub fn youtube(url: &str) -> Option<String> {
    let parts: Vec<&str> = strip_trailing_slash(url).split('/').collect();
    match parts.as_slice() {
        [.., "channel", id] => Some(format!("channel/{id}")),
        [.., last] => Some((*last).to_string()),
        [] => None,
    }
}

/// LinkedIn: the path after the host, at most two segments
/// (`in/<user>`, `pub/<user>`, `company/<name>`).
pub fn linkedin(url: &str, notes: &mut Vec<String>) -> Option<String> {
    if !url.contains("/in/") && !url.contains("/pub/") && !url.contains("/company/") {
        notes.push(format!("unrecognized account URL: {url}"));
    }
    let url = strip_scheme(url);
    let path = path_after_host(strip_trailing_slash(url));
    let path = strip_trailing_slash(strip_query(path));
    let path = path.strip_suffix("/about").unwrap_or(path);
    if path.split('/').count() > 2 {
        notes.push(format!("non-standard account URL: {url}"));
        return None;
    }
    Some(path.to_string())
}

/// Facebook: four URL families (`profile.php?id=`, `people/`, `p/`, and
/// bare usernames), each with its own truncation rules.
pub fn facebook(url: &str, notes: &mut Vec<String>) -> Option<String> {
    let url = strip_scheme(url);
    let path = path_after_host(strip_trailing_slash(url));

    if path.starts_with("profile.php?id=") {
        // id is assumed to be the first query parameter
        let (kept, extra) = match path.split_once('&') {
            Some((kept, _)) => (kept, true),
            None => (path, false),
        };
        if extra {
            notes.push(format!(
                "profile.php URL carries query parameters beyond id: {url}"
            ));
        }
        return Some(kept.to_string());
    }

    if path.starts_with("people/") {
        // people/<name>/<id>: keep exactly those three segments
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() < 3 {
            notes.push(format!("unrecognized account URL: {url}"));
            return None;
        }
        let kept = segments[..3].join("/");
        if kept.contains('?') || kept.contains('#') {
            notes.push(format!(
                "people URL contains query parameters or an anchor: {url}"
            ));
        }
        return Some(strip_query_and_fragment(&kept).to_string());
    }

    if path.starts_with("p/") {
        if path.contains('?') || path.contains('#') {
            notes.push(format!(
                "p/ URL contains query parameters or an anchor: {url}"
            ));
        }
        return Some(strip_trailing_slash(strip_query_and_fragment(path)).to_string());
    }

    // Bare username form.
    let path = strip_trailing_slash(strip_query(path));
    let path = path.strip_suffix("/about").unwrap_or(path);
    if path.contains('?') || path.contains('/') {
        notes.push(format!("unrecognized account URL: {url}"));
        return None;
    }
    Some(path.to_string())
}

// ── Shared helpers ────────────────────────────────────────

/// Strip a leading `scheme://` or a protocol-relative `//`.
fn strip_scheme(url: &str) -> &str {
    if let Some(rest) = url.strip_prefix("//") {
        return rest;
    }
    if let Some((scheme, rest)) = url.split_once("://") {
        if !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return rest;
        }
    }
    url
}

/// Strip at most one trailing slash.
fn strip_trailing_slash(s: &str) -> &str {
    s.strip_suffix('/').unwrap_or(s)
}

/// Everything past the first `/` (the path after the host segment).
fn path_after_host(url: &str) -> &str {
    match url.split_once('/') {
        Some((_, rest)) => rest,
        None => "",
    }
}

/// Truncate at the first `?`.
fn strip_query(s: &str) -> &str {
    match s.split_once('?') {
        Some((kept, _)) => kept,
        None => s,
    }
}

/// Truncate at the first `?`, then at the first `#`.
fn strip_query_and_fragment(s: &str) -> &str {
    let s = strip_query(s);
    match s.split_once('#') {
        Some((kept, _)) => kept,
        None => s,
    }
}
