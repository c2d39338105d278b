//! Administrative review service
//!
//! Loads the targeted record, asks the state machine for the write to
//! apply, and persists it. One generic executor serves all five
//! publication kinds; the per-kind match only picks the entity type.

use crate::machine;
use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{
    BookChapterEntity, BookEntity, ConferenceEntity, JournalEntity, PatentEntity,
    PublicationKind, ReviewAction, ReviewColumns, ReviewPatch, Reviewable,
};
use scholartrack_common::db::Repository;
use scholartrack_common::errors::{AppError, Result};
use scholartrack_common::metrics;
use sea_orm::{ActiveModelTrait, IntoActiveModel, PrimaryKeyTrait};
use tracing::info;
use uuid::Uuid;

/// Applies administrator decisions to publication records
#[derive(Clone)]
pub struct ApprovalService {
    repo: Repository,
}

impl ApprovalService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Apply one review action to one record.
    ///
    /// Only administrators may call this; owners never move the state
    /// machine directly.
    pub async fn transition(
        &self,
        actor: &Actor,
        kind: PublicationKind,
        id: Uuid,
        action: ReviewAction,
        remarks: Option<String>,
    ) -> Result<()> {
        let admin_id = actor.require_admin()?;

        match kind {
            PublicationKind::Journal => {
                self.transition_one::<JournalEntity>(id, action, admin_id, remarks)
                    .await
            }
            PublicationKind::Conference => {
                self.transition_one::<ConferenceEntity>(id, action, admin_id, remarks)
                    .await
            }
            PublicationKind::Book => {
                self.transition_one::<BookEntity>(id, action, admin_id, remarks)
                    .await
            }
            PublicationKind::BookChapter => {
                self.transition_one::<BookChapterEntity>(id, action, admin_id, remarks)
                    .await
            }
            PublicationKind::Patent => {
                self.transition_one::<PatentEntity>(id, action, admin_id, remarks)
                    .await
            }
        }
    }

    async fn transition_one<E>(
        &self,
        id: Uuid,
        action: ReviewAction,
        admin_id: Uuid,
        remarks: Option<String>,
    ) -> Result<()>
    where
        E: Reviewable,
        E::Model: ReviewColumns + IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ReviewPatch + ActiveModelTrait<Entity = E> + Send,
        Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let row = self
            .repo
            .find_record::<E>(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                resource: E::KIND.as_str(),
                id: id.to_string(),
            })?;

        let update = match machine::plan(row.approval_status(), action, admin_id, remarks.as_deref())
        {
            Ok(update) => update,
            Err(err) => {
                metrics::record_transition_failure(E::KIND, action);
                return Err(err);
            }
        };

        self.repo.apply_review::<E>(row, update).await?;
        metrics::record_transition(E::KIND, action);

        info!(
            record_id = %id,
            kind = %E::KIND,
            action = %action,
            admin_id = %admin_id,
            "review transition applied"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use scholartrack_common::db::models::{ApprovalStatus, Owner};
    use scholartrack_common::errors::ErrorCode;

    #[tokio::test]
    async fn reject_stamps_admin_and_keeps_remarks() {
        let repo = testing::repo().await;
        let admin = Actor::admin(Uuid::new_v4());

        let faculty = testing::faculty(&repo).await;
        let journal = repo
            .insert_journal(Owner::Faculty(faculty.id), &testing::journal_draft())
            .await
            .unwrap();

        let service = ApprovalService::new(repo.clone());
        service
            .transition(
                &admin,
                PublicationKind::Journal,
                journal.id,
                ReviewAction::Reject,
                Some("insufficient proof".to_string()),
            )
            .await
            .unwrap();

        let row = repo
            .find_record::<JournalEntity>(journal.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.approval_status, ApprovalStatus::Rejected);
        assert_eq!(row.remarks.as_deref(), Some("insufficient proof"));
        assert_eq!(row.approved_by, Some(admin.user_id));
        assert!(row.approved_at.is_some());
        assert!(row.created_at <= row.updated_at);
    }

    #[tokio::test]
    async fn approve_clears_earlier_remarks() {
        let repo = testing::repo().await;
        let admin = Actor::admin(Uuid::new_v4());

        let faculty = testing::faculty(&repo).await;
        let journal = repo
            .insert_journal(Owner::Faculty(faculty.id), &testing::journal_draft())
            .await
            .unwrap();

        let service = ApprovalService::new(repo.clone());

        service
            .transition(
                &admin,
                PublicationKind::Journal,
                journal.id,
                ReviewAction::SendBack,
                Some("fix the author list".to_string()),
            )
            .await
            .unwrap();

        service
            .transition(
                &admin,
                PublicationKind::Journal,
                journal.id,
                ReviewAction::Approve,
                None,
            )
            .await
            .unwrap();

        let row = repo
            .find_record::<JournalEntity>(journal.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.approval_status, ApprovalStatus::Approved);
        assert_eq!(row.remarks, None);
    }

    #[tokio::test]
    async fn lock_requires_approved_and_skips_reviewer_stamp() {
        let repo = testing::repo().await;
        let admin = Actor::admin(Uuid::new_v4());
        let locker = Actor::admin(Uuid::new_v4());

        let faculty = testing::faculty(&repo).await;
        let patent = repo
            .insert_patent(faculty.id, &testing::patent_draft())
            .await
            .unwrap();

        let service = ApprovalService::new(repo.clone());

        // Straight to LOCK is refused
        let err = service
            .transition(
                &locker,
                PublicationKind::Patent,
                patent.id,
                ReviewAction::Lock,
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);

        service
            .transition(
                &admin,
                PublicationKind::Patent,
                patent.id,
                ReviewAction::Approve,
                None,
            )
            .await
            .unwrap();
        service
            .transition(
                &locker,
                PublicationKind::Patent,
                patent.id,
                ReviewAction::Lock,
                None,
            )
            .await
            .unwrap();

        let row = repo
            .find_record::<PatentEntity>(patent.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.approval_status, ApprovalStatus::Locked);
        // LOCK does not overwrite the approving admin
        assert_eq!(row.approved_by, Some(admin.user_id));

        // And nothing moves a locked record
        let err = service
            .transition(
                &admin,
                PublicationKind::Patent,
                patent.id,
                ReviewAction::SendBack,
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn owners_cannot_transition() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;
        let owner_actor = Actor::faculty(Uuid::new_v4(), faculty.id);

        let journal = repo
            .insert_journal(Owner::Faculty(faculty.id), &testing::journal_draft())
            .await
            .unwrap();

        let service = ApprovalService::new(repo.clone());
        let err = service
            .transition(
                &owner_actor,
                PublicationKind::Journal,
                journal.id,
                ReviewAction::Approve,
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let repo = testing::repo().await;
        let service = ApprovalService::new(repo);

        let err = service
            .transition(
                &Actor::admin(Uuid::new_v4()),
                PublicationKind::Book,
                Uuid::new_v4(),
                ReviewAction::Approve,
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
