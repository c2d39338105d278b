//! Book submissions (faculty-only)

use crate::guard;
use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{Book, BookEntity, PublicationKind, ReviewColumns};
use scholartrack_common::db::repository::BookDraft;
use scholartrack_common::db::Repository;
use scholartrack_common::errors::{AppError, Result};
use scholartrack_common::metrics;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct BookSubmissions {
    repo: Repository,
}

impl BookSubmissions {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Books are faculty-owned; student actors are refused here
    pub async fn create(&self, actor: &Actor, draft: BookDraft) -> Result<Book> {
        draft.validate()?;
        let faculty_id = actor.faculty_profile()?;

        let book = self.repo.insert_book(faculty_id, &draft).await?;
        metrics::record_submission(PublicationKind::Book);

        info!(record_id = %book.id, faculty_id = %faculty_id, "book submitted");

        Ok(book)
    }

    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<Book> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        Ok(row)
    }

    pub async fn update(&self, actor: &Actor, id: Uuid, draft: BookDraft) -> Result<Book> {
        draft.validate()?;

        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.update_book(row, &draft).await
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let row = self.find(id).await?;
        guard::assert_owner(row.record_owner(), actor, id)?;
        guard::assert_editable(row.approval_status)?;

        self.repo.delete_record::<BookEntity>(id).await?;
        info!(record_id = %id, "book deleted by owner");
        Ok(())
    }

    pub async fn list_mine(&self, actor: &Actor) -> Result<Vec<Book>> {
        self.repo.list_books_by_faculty(actor.faculty_profile()?).await
    }

    pub async fn list_all(&self) -> Result<Vec<Book>> {
        self.repo.list_all_records::<BookEntity>().await
    }

    async fn find(&self, id: Uuid) -> Result<Book> {
        self.repo
            .find_record::<BookEntity>(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                resource: PublicationKind::Book.as_str(),
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use scholartrack_common::errors::ErrorCode;

    #[tokio::test]
    async fn students_cannot_submit_books() {
        let repo = testing::repo().await;
        let student = testing::student(&repo).await;
        let actor = Actor::student(Uuid::new_v4(), student.id);

        let err = BookSubmissions::new(repo)
            .create(&actor, testing::book_draft())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn faculty_see_only_their_own_books() {
        let repo = testing::repo().await;
        let service = BookSubmissions::new(repo.clone());

        let a = testing::faculty(&repo).await;
        let b = testing::faculty(&repo).await;
        let actor_a = Actor::faculty(Uuid::new_v4(), a.id);
        let actor_b = Actor::faculty(Uuid::new_v4(), b.id);

        service.create(&actor_a, testing::book_draft()).await.unwrap();

        assert_eq!(service.list_mine(&actor_a).await.unwrap().len(), 1);
        assert!(service.list_mine(&actor_b).await.unwrap().is_empty());
    }
}
