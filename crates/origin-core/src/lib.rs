//! Origin Core - candidate contact canonicalization and dataset assembly
//!
//! Converts a flat export of candidate contact records (one record per
//! social-media/website link) into an origin data source: per-platform
//! lookup tables mapping canonical account handles to candidate indices,
//! plus an embedded source descriptor.
//!
//! # Architecture
//!
//! ```text
//! records JSON → ContactRecord → Aggregator → OriginDataSource → JSON
//!                                    │
//!                     Platform::resolve → canonical::reduce
//!                                    │
//!                                 Report (diagnostics)
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces the same dataset
//! - **Order-preserving**: candidate indices follow first-seen order;
//!   handle collisions resolve last-write-wins
//! - **Non-fatal records**: malformed records are reported and skipped,
//!   never abort a run; only I/O failures are fatal
//! - **No empty keys**: rejected contacts never reach a table

pub mod aggregate;
pub mod canonical;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod platform;

pub use aggregate::{aggregate, Aggregator};
pub use diagnostics::{Diagnostic, DiagnosticKind, Report, Severity};
pub use error::{Error, Result};
pub use platform::Platform;

use std::collections::BTreeMap;

/// Position of a candidate in the `entry` list, assigned in first-seen
/// order and referenced by every table entry for that candidate.
pub type CandidateIndex = u32;

/// Canonical handle → candidate index, one table per platform.
///
/// A `BTreeMap` keeps serialized tables in sorted key order, so a dataset
/// has exactly one canonical rendering.
pub type PlatformTable = BTreeMap<String, CandidateIndex>;

/// One input record: a single contact link for a candidate.
///
/// Field names follow the upstream export format.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactRecord {
    /// Candidate profile URL on the exporting site.
    #[serde(rename = "Ballotpedia URL")]
    pub profile_url: String,
    /// Raw platform label, subject to alias resolution.
    pub contact_type: String,
    /// Raw contact value: a URL, or a bare account name for some platforms.
    pub contact: String,
}

impl ContactRecord {
    /// Candidate key: the trailing path segment of the profile URL.
    pub fn candidate_key(&self) -> &str {
        self.profile_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.profile_url)
    }
}

/// Metadata block describing the data provider, embedded once per dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SourceDescriptor {
    pub name: String,
    /// Logo image as a `data:` URL; opaque to everything in this crate.
    pub logo: String,
    pub website: String,
    #[serde(rename = "supportedPlatforms")]
    pub supported_platforms: Vec<String>,
}

/// The per-platform contact tables, serialized under the exact platform
/// names in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactTables {
    #[serde(rename = "Website")]
    pub website: PlatformTable,
    #[serde(rename = "Instagram")]
    pub instagram: PlatformTable,
    #[serde(rename = "X")]
    pub x: PlatformTable,
    #[serde(rename = "YouTube")]
    pub youtube: PlatformTable,
    #[serde(rename = "LinkedIn")]
    pub linkedin: PlatformTable,
    #[serde(rename = "Facebook")]
    pub facebook: PlatformTable,
}

impl ContactTables {
    pub fn table(&self, platform: Platform) -> &PlatformTable {
        match platform {
            Platform::Website => &self.website,
            Platform::Instagram => &self.instagram,
            Platform::X => &self.x,
            Platform::YouTube => &self.youtube,
            Platform::LinkedIn => &self.linkedin,
            Platform::Facebook => &self.facebook,
        }
    }

    pub fn table_mut(&mut self, platform: Platform) -> &mut PlatformTable {
        match platform {
            Platform::Website => &mut self.website,
            Platform::Instagram => &mut self.instagram,
            Platform::X => &mut self.x,
            Platform::YouTube => &mut self.youtube,
            Platform::LinkedIn => &mut self.linkedin,
            Platform::Facebook => &mut self.facebook,
        }
    }
}

/// The complete output document: built once by the aggregator, written
/// once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OriginDataSource {
    pub source: SourceDescriptor,
    /// Candidate keys in index order: `entry[i]` has `CandidateIndex` `i`.
    pub entry: Vec<String>,
    #[serde(rename = "contactTables")]
    pub contact_tables: ContactTables,
}

impl OriginDataSource {
    /// Distinct-handle count per platform, in declaration order.
    pub fn table_sizes(&self) -> [(Platform, usize); 6] {
        Platform::ALL.map(|p| (p, self.contact_tables.table(p).len()))
    }
}
