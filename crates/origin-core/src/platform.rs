//! Platform routing - maps raw platform labels onto supported platforms
//!
//! Labels arrive as free-form strings in the export. A fixed alias table
//! (legacy brand names) is applied before lookup; labels outside the
//! supported set are a per-record problem for the caller to report, never
//! a reason to abort a run.

use std::fmt;

/// A supported contact platform.
///
/// Every variant has a canonicalization routine in [`crate::canonical`];
/// the dispatch there is an exhaustive match, so adding a variant without
/// a reducer fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Website,
    Instagram,
    X,
    YouTube,
    LinkedIn,
    Facebook,
}

impl Platform {
    /// All supported platforms, in table declaration order.
    pub const ALL: [Platform; 6] = [
        Platform::Website,
        Platform::Instagram,
        Platform::X,
        Platform::YouTube,
        Platform::LinkedIn,
        Platform::Facebook,
    ];

    /// Resolve a raw record label, applying brand aliases first.
    ///
    /// Matching is exact and case-sensitive, like the export format.
    /// Returns `None` for labels outside the supported set.
    pub fn resolve(label: &str) -> Option<Platform> {
        match alias(label) {
            "Website" => Some(Platform::Website),
            "Instagram" => Some(Platform::Instagram),
            "X" => Some(Platform::X),
            "YouTube" => Some(Platform::YouTube),
            "LinkedIn" => Some(Platform::LinkedIn),
            "Facebook" => Some(Platform::Facebook),
            _ => None,
        }
    }

    /// Platform name as used for table keys and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Website => "Website",
            Platform::Instagram => "Instagram",
            Platform::X => "X",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::Facebook => "Facebook",
        }
    }
}

/// Legacy brand names still present in older exports.
fn alias(label: &str) -> &str {
    match label {
        "Twitter" => "X",
        other => other,
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
