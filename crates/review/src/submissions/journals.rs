//! Journal article submissions (faculty- or student-owned)

use crate::guard;
use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{Journal, JournalEntity, PublicationKind, ReviewColumns};
use scholartrack_common::db::repository::JournalDraft;
use scholartrack_common::db::Repository;
use scholartrack_common::errors::{AppError, Result};
use scholartrack_common::metrics;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct JournalSubmissions {
    repo: Repository,
}

impl JournalSubmissions {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Record a new journal article for the acting owner; it enters the
    /// workflow as SUBMITTED.
    pub async fn create(&self, actor: &Actor, draft: JournalDraft) -> Result<Journal> {
        draft.validate()?;
        let owner = actor.owner()?;

        let journal = self.repo.insert_journal(owner, &draft).await?;
        metrics::record_submission(PublicationKind::Journal);

        info!(record_id = %journal.id, owner_id = %owner.id(), "journal submitted");

        Ok(journal)
    }

    /// Owner-scoped read of a single record
    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<Journal> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        Ok(row)
    }

    /// Rewrite the descriptive fields; refused once the record is
    /// APPROVED or LOCKED.
    pub async fn update(&self, actor: &Actor, id: Uuid, draft: JournalDraft) -> Result<Journal> {
        draft.validate()?;

        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.update_journal(row, &draft).await
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.delete_record::<JournalEntity>(id).await?;
        info!(record_id = %id, "journal deleted by owner");
        Ok(())
    }

    pub async fn list_mine(&self, actor: &Actor) -> Result<Vec<Journal>> {
        self.repo.list_journals_by_owner(actor.owner()?).await
    }

    /// Unscoped listing for administrators and report builders
    pub async fn list_all(&self) -> Result<Vec<Journal>> {
        self.repo.list_all_records::<JournalEntity>().await
    }

    async fn find(&self, id: Uuid) -> Result<Journal> {
        self.repo
            .find_record::<JournalEntity>(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                resource: PublicationKind::Journal.as_str(),
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approvals::ApprovalService;
    use crate::testing;
    use scholartrack_common::db::models::{ApprovalStatus, ReviewAction};
    use scholartrack_common::errors::ErrorCode;

    #[tokio::test]
    async fn create_starts_submitted_and_unstamped() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;
        let actor = Actor::faculty(Uuid::new_v4(), faculty.id);

        let journal = JournalSubmissions::new(repo)
            .create(&actor, testing::journal_draft())
            .await
            .unwrap();

        assert_eq!(journal.approval_status, ApprovalStatus::Submitted);
        assert_eq!(journal.approved_by, None);
        assert_eq!(journal.approved_at, None);
        assert_eq!(journal.remarks, None);
        assert_eq!(journal.faculty_id, Some(faculty.id));
        assert_eq!(journal.student_id, None);
        assert!(journal.created_at <= journal.updated_at);
    }

    #[tokio::test]
    async fn students_own_their_journal_submissions() {
        let repo = testing::repo().await;
        let student = testing::student(&repo).await;
        let actor = Actor::student(Uuid::new_v4(), student.id);

        let service = JournalSubmissions::new(repo);
        let journal = service.create(&actor, testing::journal_draft()).await.unwrap();

        assert_eq!(journal.student_id, Some(student.id));
        assert_eq!(journal.faculty_id, None);
        assert_eq!(service.list_mine(&actor).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn non_owner_cannot_read_update_or_delete() {
        let repo = testing::repo().await;
        let owner_profile = testing::faculty(&repo).await;
        let owner = Actor::faculty(Uuid::new_v4(), owner_profile.id);
        let intruder = Actor::faculty(Uuid::new_v4(), Uuid::new_v4());

        let service = JournalSubmissions::new(repo);
        let journal = service.create(&owner, testing::journal_draft()).await.unwrap();

        let err = service.get(&intruder, journal.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotRecordOwner);

        let err = service
            .update(&intruder, journal.id, testing::journal_draft())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotRecordOwner);

        let err = service.delete(&intruder, journal.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotRecordOwner);

        // The record is untouched
        assert!(service.get(&owner, journal.id).await.is_ok());
    }

    #[tokio::test]
    async fn certified_records_are_immutable_to_owners() {
        let repo = testing::repo().await;
        let profile = testing::faculty(&repo).await;
        let owner = Actor::faculty(Uuid::new_v4(), profile.id);
        let admin = Actor::admin(Uuid::new_v4());

        let service = JournalSubmissions::new(repo.clone());
        let approvals = ApprovalService::new(repo);

        let journal = service.create(&owner, testing::journal_draft()).await.unwrap();

        approvals
            .transition(
                &admin,
                PublicationKind::Journal,
                journal.id,
                ReviewAction::Approve,
                None,
            )
            .await
            .unwrap();

        let err = service
            .update(&owner, journal.id, testing::journal_draft())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);

        approvals
            .transition(
                &admin,
                PublicationKind::Journal,
                journal.id,
                ReviewAction::Lock,
                None,
            )
            .await
            .unwrap();

        let err = service.delete(&owner, journal.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn rejected_records_can_be_fixed_or_withdrawn() {
        let repo = testing::repo().await;
        let profile = testing::faculty(&repo).await;
        let owner = Actor::faculty(Uuid::new_v4(), profile.id);
        let admin = Actor::admin(Uuid::new_v4());

        let service = JournalSubmissions::new(repo.clone());
        let journal = service.create(&owner, testing::journal_draft()).await.unwrap();

        ApprovalService::new(repo)
            .transition(
                &admin,
                PublicationKind::Journal,
                journal.id,
                ReviewAction::Reject,
                Some("wrong venue".to_string()),
            )
            .await
            .unwrap();

        let mut draft = testing::journal_draft();
        draft.title = "Corrected title".to_string();
        let updated = service.update(&owner, journal.id, draft).await.unwrap();

        // Owner edits never move the state machine
        assert_eq!(updated.approval_status, ApprovalStatus::Rejected);
        assert_eq!(updated.title, "Corrected title");

        service.delete(&owner, journal.id).await.unwrap();
        let err = service.get(&owner, journal.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn drafts_are_validated() {
        let repo = testing::repo().await;
        let profile = testing::faculty(&repo).await;
        let actor = Actor::faculty(Uuid::new_v4(), profile.id);

        let mut draft = testing::journal_draft();
        draft.year = 1987;

        let err = JournalSubmissions::new(repo)
            .create(&actor, draft)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }
}
