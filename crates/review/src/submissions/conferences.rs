//! Conference paper submissions (faculty- or student-owned)

use crate::guard;
use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{
    Conference, ConferenceEntity, PublicationKind, ReviewColumns,
};
use scholartrack_common::db::repository::ConferenceDraft;
use scholartrack_common::db::Repository;
use scholartrack_common::errors::{AppError, Result};
use scholartrack_common::metrics;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct ConferenceSubmissions {
    repo: Repository,
}

impl ConferenceSubmissions {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, actor: &Actor, draft: ConferenceDraft) -> Result<Conference> {
        draft.validate()?;
        let owner = actor.owner()?;

        let conference = self.repo.insert_conference(owner, &draft).await?;
        metrics::record_submission(PublicationKind::Conference);

        info!(record_id = %conference.id, owner_id = %owner.id(), "conference paper submitted");

        Ok(conference)
    }

    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<Conference> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        Ok(row)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        draft: ConferenceDraft,
    ) -> Result<Conference> {
        draft.validate()?;

        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.update_conference(row, &draft).await
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.delete_record::<ConferenceEntity>(id).await?;
        info!(record_id = %id, "conference paper deleted by owner");
        Ok(())
    }

    pub async fn list_mine(&self, actor: &Actor) -> Result<Vec<Conference>> {
        self.repo.list_conferences_by_owner(actor.owner()?).await
    }

    pub async fn list_all(&self) -> Result<Vec<Conference>> {
        self.repo.list_all_records::<ConferenceEntity>().await
    }

    async fn find(&self, id: Uuid) -> Result<Conference> {
        self.repo
            .find_record::<ConferenceEntity>(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                resource: PublicationKind::Conference.as_str(),
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
    async fn locked_conference_rejects_owner_edits() {
        let repo = testing::repo().await;
        let profile = testing::faculty(&repo).await;
        let owner = Actor::faculty(Uuid::new_v4(), profile.id);
        let admin = Actor::admin(Uuid::new_v4());

        let service = ConferenceSubmissions::new(repo.clone());
        let approvals = ApprovalService::new(repo);

        let paper = service.create(&owner, testing::conference_draft()).await.unwrap();

        approvals
            .transition(
                &admin,
                PublicationKind::Conference,
                paper.id,
                ReviewAction::Approve,
                None,
            )
            .await
            .unwrap();
        approvals
            .transition(
                &admin,
                PublicationKind::Conference,
                paper.id,
                ReviewAction::Lock,
                None,
            )
            .await
            .unwrap();

        let err = service
            .update(&owner, paper.id, testing::conference_draft())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn students_and_faculty_can_both_submit() {
        let repo = testing::repo().await;
        let service = ConferenceSubmissions::new(repo.clone());

        let faculty = testing::faculty(&repo).await;
        let student = testing::student(&repo).await;

        let by_faculty = service
            .create(
                &Actor::faculty(Uuid::new_v4(), faculty.id),
                testing::conference_draft(),
            )
            .await
            .unwrap();
        let by_student = service
            .create(
                &Actor::student(Uuid::new_v4(), student.id),
                testing::conference_draft(),
            )
            .await
            .unwrap();

        assert_eq!(by_faculty.approval_status, ApprovalStatus::Submitted);
        assert_eq!(by_faculty.faculty_id, Some(faculty.id));
        assert_eq!(by_student.student_id, Some(student.id));
    }
}
