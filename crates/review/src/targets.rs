//! Annual target ledger
//!
//! Faculty-authored expected-output counters, one row per (faculty, year).
//! Targets never enter the approval workflow; the only write path is the
//! upsert below.

use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::Target;
use scholartrack_common::db::repository::TargetCounts;
use scholartrack_common::db::Repository;
use scholartrack_common::errors::{AppError, Result};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct TargetLedger {
    repo: Repository,
}

impl TargetLedger {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create or overwrite the acting faculty member's target row for
    /// `year`. A second upsert for the same year replaces the counts and
    /// preserves `created_at`.
    pub async fn upsert(&self, actor: &Actor, year: i32, counts: TargetCounts) -> Result<Target> {
        let faculty_id = actor.faculty_profile()?;

        counts.validate()?;
        if !(2000..=2100).contains(&year) {
            return Err(AppError::Validation {
                message: format!("year {year} out of range"),
                field: Some("year".to_string()),
            });
        }

        let target = match self.repo.find_target(faculty_id, year).await? {
            Some(existing) => self.repo.update_target(existing, &counts).await?,
            None => self.repo.insert_target(faculty_id, year, &counts).await?,
        };

        info!(faculty_id = %faculty_id, year, "target upserted");

        Ok(target)
    }

    /// All target rows for one faculty member, unsorted
    pub async fn list(&self, faculty_id: Uuid) -> Result<Vec<Target>> {
        self.repo.list_targets(faculty_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use scholartrack_common::errors::ErrorCode;
    use tokio_test::assert_ok;

    fn counts(journals: i32) -> TargetCounts {
        TargetCounts {
            journal_count: journals,
            conference_count: 1,
            book_count: 0,
            book_chapter_count: 0,
            patent_count: 0,
        }
    }

    #[tokio::test]
    async fn upsert_twice_keeps_one_row() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;
        let actor = Actor::faculty(Uuid::new_v4(), faculty.id);

        let ledger = TargetLedger::new(repo.clone());

        let first = ledger.upsert(&actor, 2025, counts(2)).await.unwrap();
        let second = ledger.upsert(&actor, 2025, counts(5)).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.journal_count, 5);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);

        let rows = ledger.list(faculty.id).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn separate_years_are_separate_rows() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;
        let actor = Actor::faculty(Uuid::new_v4(), faculty.id);

        let ledger = TargetLedger::new(repo);
        assert_ok!(ledger.upsert(&actor, 2024, counts(1)).await);
        assert_ok!(ledger.upsert(&actor, 2025, counts(1)).await);

        assert_eq!(ledger.list(faculty.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn students_and_admins_cannot_write_targets() {
        let repo = testing::repo().await;
        let ledger = TargetLedger::new(repo);

        let student = Actor::student(Uuid::new_v4(), Uuid::new_v4());
        let err = ledger.upsert(&student, 2025, counts(1)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthorized);

        let admin = Actor::admin(Uuid::new_v4());
        assert!(ledger.upsert(&admin, 2025, counts(1)).await.is_err());
    }

    #[tokio::test]
    async fn year_is_range_checked() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;
        let actor = Actor::faculty(Uuid::new_v4(), faculty.id);

        let err = TargetLedger::new(repo)
            .upsert(&actor, 1999, counts(1))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }
}
