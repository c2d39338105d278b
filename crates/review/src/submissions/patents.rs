//! Patent submissions (faculty-only)

use crate::guard;
use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{Patent, PatentEntity, PublicationKind, ReviewColumns};
use scholartrack_common::db::repository::PatentDraft;
use scholartrack_common::db::Repository;
use scholartrack_common::errors::{AppError, Result};
use scholartrack_common::metrics;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct PatentSubmissions {
    repo: Repository,
}

impl PatentSubmissions {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, actor: &Actor, draft: PatentDraft) -> Result<Patent> {
        draft.validate()?;
        let faculty_id = actor.faculty_profile()?;

        let patent = self.repo.insert_patent(faculty_id, &draft).await?;
        metrics::record_submission(PublicationKind::Patent);

        info!(record_id = %patent.id, faculty_id = %faculty_id, "patent submitted");

        Ok(patent)
    }

    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<Patent> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        Ok(row)
    }

    pub async fn update(&self, actor: &Actor, id: Uuid, draft: PatentDraft) -> Result<Patent> {
        draft.validate()?;

        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.update_patent(row, &draft).await
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.delete_record::<PatentEntity>(id).await?;
        info!(record_id = %id, "patent deleted by owner");
        Ok(())
    }

    pub async fn list_mine(&self, actor: &Actor) -> Result<Vec<Patent>> {
        self.repo.list_patents_by_faculty(actor.faculty_profile()?).await
    }

    pub async fn list_all(&self) -> Result<Vec<Patent>> {
        self.repo.list_all_records::<PatentEntity>().await
    }

    async fn find(&self, id: Uuid) -> Result<Patent> {
        self.repo
            .find_record::<PatentEntity>(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                resource: PublicationKind::Patent.as_str(),
                id: id.to_string(),
            })
    }
}
