//! Dataset aggregation - folds contact records into per-platform tables
//!
//! The aggregator owns all mutable state for a run: the candidate list,
//! the key-to-index map, and one table per platform. Records are
//! processed in input order; both index assignment (first seen wins) and
//! handle collisions (last write wins) depend on that order.

use std::collections::HashMap;

use crate::canonical;
use crate::diagnostics::{DiagnosticKind, Report};
use crate::platform::Platform;
use crate::{CandidateIndex, ContactRecord, ContactTables, OriginDataSource, SourceDescriptor};

/// Accumulates candidates and per-platform contact tables over one pass.
#[derive(Debug, Default)]
pub struct Aggregator {
    entry: Vec<String>,
    index: HashMap<String, CandidateIndex>,
    tables: ContactTables,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the tables.
    ///
    /// Never fails: unsupported platforms and rejected contacts are
    /// reported and skipped, everything else lands in a table.
    pub fn ingest(&mut self, record: &ContactRecord, report: &mut Report) {
        let key = record.candidate_key().to_string();
        let index = self.index_for(&key);

        let Some(platform) = Platform::resolve(&record.contact_type) else {
            report.error(
                DiagnosticKind::UnsupportedPlatform,
                &key,
                &record.contact_type,
                format!("platform label {:?} is not supported", record.contact_type),
            );
            return;
        };

        let mut notes = Vec::new();
        let handle = canonical::reduce(platform, &record.contact, &mut notes);
        for note in notes {
            report.warn(DiagnosticKind::UnusualUrl, &key, platform.name(), note);
        }
        match handle {
            Some(handle) => {
                // Last write wins on handle collisions.
                self.tables.table_mut(platform).insert(handle, index);
            }
            None => report.warn(
                DiagnosticKind::RejectedContact,
                &key,
                platform.name(),
                format!("contact {:?} was rejected and not indexed", record.contact),
            ),
        }
    }

    /// Index for a candidate key, assigning the next one on first sight.
    fn index_for(&mut self, key: &str) -> CandidateIndex {
        if let Some(&index) = self.index.get(key) {
            return index;
        }
        let index = self.entry.len() as CandidateIndex;
        self.entry.push(key.to_string());
        self.index.insert(key.to_string(), index);
        index
    }

    /// Finish the pass and assemble the dataset.
    pub fn finish(self, source: SourceDescriptor) -> OriginDataSource {
        OriginDataSource {
            source,
            entry: self.entry,
            contact_tables: self.tables,
        }
    }
}

/// Aggregate a full record list into an origin data source.
///
/// Records are processed in input order; diagnostics land in `report`.
pub fn aggregate(
    records: &[ContactRecord],
    source: SourceDescriptor,
    report: &mut Report,
) -> OriginDataSource {
    let mut aggregator = Aggregator::new();
    for record in records {
        aggregator.ingest(record, report);
    }
    aggregator.finish(source)
}
