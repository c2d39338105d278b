//! Book chapter submissions (faculty-only)

use crate::guard;
use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{
    BookChapter, BookChapterEntity, PublicationKind, ReviewColumns,
};
use scholartrack_common::db::repository::BookChapterDraft;
use scholartrack_common::db::Repository;
use scholartrack_common::errors::{AppError, Result};
use scholartrack_common::metrics;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct BookChapterSubmissions {
    repo: Repository,
}

impl BookChapterSubmissions {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, actor: &Actor, draft: BookChapterDraft) -> Result<BookChapter> {
        draft.validate()?;
        let faculty_id = actor.faculty_profile()?;

        let chapter = self.repo.insert_book_chapter(faculty_id, &draft).await?;
        metrics::record_submission(PublicationKind::BookChapter);

        info!(record_id = %chapter.id, faculty_id = %faculty_id, "book chapter submitted");

        Ok(chapter)
    }

    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<BookChapter> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        Ok(row)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        draft: BookChapterDraft,
    ) -> Result<BookChapter> {
        draft.validate()?;

        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.update_book_chapter(row, &draft).await
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.delete_record::<BookChapterEntity>(id).await?;
        info!(record_id = %id, "book chapter deleted by owner");
        Ok(())
    }

    pub async fn list_mine(&self, actor: &Actor) -> Result<Vec<BookChapter>> {
        self.repo
            .list_book_chapters_by_faculty(actor.faculty_profile()?)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<BookChapter>> {
        self.repo.list_all_records::<BookChapterEntity>().await
    }

    async fn find(&self, id: Uuid) -> Result<BookChapter> {
        self.repo
            .find_record::<BookChapterEntity>(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                resource: PublicationKind::BookChapter.as_str(),
                id: id.to_string(),
            })
    }
}
