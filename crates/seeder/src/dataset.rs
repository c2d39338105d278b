//! Declarative seed dataset
//!
//! The historical faculty roster and their publications live in a JSON
//! file, never in code. Records marked `approved` predate the workflow
//! and are stamped by the configured seed administrator.

use scholartrack_common::db::repository::{
    BookChapterDraft, BookDraft, ConferenceDraft, JournalDraft, PatentDraft, TargetCounts,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedDataset {
    #[serde(default)]
    pub faculty: Vec<SeedFaculty>,

    #[serde(default)]
    pub students: Vec<SeedStudent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFaculty {
    /// External identity id; the idempotency key for this entry
    pub user_id: Uuid,
    pub name: String,
    pub department: String,
    pub designation: Option<String>,

    #[serde(default)]
    pub journals: Vec<SeedRecord<JournalDraft>>,
    #[serde(default)]
    pub conferences: Vec<SeedRecord<ConferenceDraft>>,
    #[serde(default)]
    pub books: Vec<SeedRecord<BookDraft>>,
    #[serde(default)]
    pub book_chapters: Vec<SeedRecord<BookChapterDraft>>,
    #[serde(default)]
    pub patents: Vec<SeedRecord<PatentDraft>>,

    #[serde(default)]
    pub targets: Vec<SeedTarget>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStudent {
    pub user_id: Uuid,
    pub name: String,
    pub register_number: String,
    /// Supervising faculty, matched by that entry's `user_id`
    pub guide_user_id: Option<Uuid>,
}

/// One seeded publication: the ordinary draft plus its historical state
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecord<D> {
    #[serde(flatten)]
    pub draft: D,

    /// Stamp the record APPROVED on load (bulk historical data)
    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedTarget {
    pub year: i32,
    pub counts: TargetCounts,
}

impl SeedDataset {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
