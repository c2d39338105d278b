//! ScholarTrack approval workflow
//!
//! The write-side core of the system:
//! - [`machine`]: pure transition planning for the five-state approval
//!   workflow
//! - [`guard`]: ownership and editability checks for owner actions
//! - [`approvals`]: the administrator transition service
//! - [`submissions`]: per-kind owner services (create/update/delete/list)
//! - [`pending`]: the cross-kind review queue
//! - [`targets`]: the annual target ledger

pub mod approvals;
pub mod guard;
pub mod machine;
pub mod pending;
pub mod submissions;
pub mod targets;

pub use approvals::ApprovalService;
pub use pending::{PendingEntry, PendingQueue};
pub use targets::TargetLedger;

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for the service tests: an in-memory SQLite store
    //! with the full schema, plus profile and draft builders.

    use scholartrack_common::db::models::{FacultyProfile, PublicationCategory, StudentProfile};
    use scholartrack_common::db::repository::{
        BookChapterDraft, BookDraft, ConferenceDraft, JournalDraft, PatentDraft,
    };
    use scholartrack_common::db::{bootstrap_schema, DbPool, Repository};
    use uuid::Uuid;

    pub async fn repo() -> Repository {
        let conn = sea_orm::Database::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        bootstrap_schema(&conn).await.expect("schema bootstrap");
        Repository::new(DbPool::single(conn))
    }

    pub async fn faculty(repo: &Repository) -> FacultyProfile {
        repo.create_faculty(
            Uuid::new_v4(),
            "Asha Rao".to_string(),
            "Computer Science".to_string(),
            Some("Professor".to_string()),
        )
        .await
        .expect("faculty profile")
    }

    pub async fn student(repo: &Repository) -> StudentProfile {
        repo.create_student(
            Uuid::new_v4(),
            "Nikhil Menon".to_string(),
            "CS2023-042".to_string(),
            None,
        )
        .await
        .expect("student profile")
    }

    pub fn journal_draft() -> JournalDraft {
        JournalDraft {
            title: "Adaptive Scheduling in Edge Clusters".to_string(),
            authors: "A. Rao, N. Menon".to_string(),
            year: 2025,
            journal_name: "Journal of Distributed Systems".to_string(),
            issn: Some("1234-5678".to_string()),
            impact_factor: Some("2.4".to_string()),
            category: PublicationCategory::International,
            proof_path: None,
        }
    }

    pub fn conference_draft() -> ConferenceDraft {
        ConferenceDraft {
            title: "Streaming Joins on Skewed Data".to_string(),
            authors: "A. Rao".to_string(),
            year: 2025,
            conference_name: "ICDE".to_string(),
            location: Some("Chennai".to_string()),
            impact_factor: None,
            category: PublicationCategory::International,
            proof_path: None,
        }
    }

    pub fn book_draft() -> BookDraft {
        BookDraft {
            title: "Practical Query Optimization".to_string(),
            authors: "A. Rao".to_string(),
            year: 2024,
            publisher: "TechPress".to_string(),
            isbn: Some("978-3-16-148410-0".to_string()),
            category: PublicationCategory::National,
            proof_path: None,
        }
    }

    pub fn chapter_draft() -> BookChapterDraft {
        BookChapterDraft {
            title: "Cost Models for Joins".to_string(),
            book_title: "Database Internals in Practice".to_string(),
            authors: "A. Rao".to_string(),
            year: 2024,
            publisher: "TechPress".to_string(),
            isbn: None,
            category: PublicationCategory::International,
            proof_path: None,
        }
    }

    pub fn patent_draft() -> PatentDraft {
        PatentDraft {
            title: "Incremental Index Compaction".to_string(),
            inventors: "A. Rao".to_string(),
            year: 2025,
            patent_number: Some("IN-2025-00142".to_string()),
            granted: false,
            category: PublicationCategory::National,
            proof_path: None,
        }
    }
}
