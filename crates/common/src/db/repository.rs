//! Repository pattern for database operations
//!
//! Provides a clean interface for all data access operations. Publication
//! kinds share their workflow columns, so the workflow reads and writes are
//! generic over the `Reviewable` capability traits; only creation and
//! descriptive-field updates are spelled out per kind.

use crate::db::models::*;
use crate::db::DbPool;
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

/// How a review transition rewrites the remarks column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemarksUpdate {
    Keep,
    Clear,
    Replace(String),
}

/// A planned write to the shared workflow columns of one record.
///
/// Produced by the transition planner; applied generically per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub status: ApprovalStatus,
    pub remarks: RemarksUpdate,
    /// Administrator to stamp into `approved_by`/`approved_at`, when the
    /// action records one (LOCK does not)
    pub stamp: Option<Uuid>,
}

// ============================================================================
// Draft payloads (validated at the service boundary)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JournalDraft {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub authors: String,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 300))]
    pub journal_name: String,
    pub issn: Option<String>,
    pub impact_factor: Option<String>,
    pub category: PublicationCategory,
    pub proof_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConferenceDraft {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub authors: String,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 300))]
    pub conference_name: String,
    pub location: Option<String>,
    pub impact_factor: Option<String>,
    pub category: PublicationCategory,
    pub proof_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookDraft {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub authors: String,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 300))]
    pub publisher: String,
    pub isbn: Option<String>,
    pub category: PublicationCategory,
    pub proof_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookChapterDraft {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 1, max = 500))]
    pub book_title: String,
    #[validate(length(min = 1, max = 2000))]
    pub authors: String,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 300))]
    pub publisher: String,
    pub isbn: Option<String>,
    pub category: PublicationCategory,
    pub proof_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PatentDraft {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub inventors: String,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
    pub patent_number: Option<String>,
    #[serde(default)]
    pub granted: bool,
    pub category: PublicationCategory,
    pub proof_path: Option<String>,
}

/// Expected annual output counts for one faculty/year row
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TargetCounts {
    #[validate(range(min = 0))]
    pub journal_count: i32,
    #[validate(range(min = 0))]
    pub conference_count: i32,
    #[validate(range(min = 0))]
    pub book_count: i32,
    #[validate(range(min = 0))]
    pub book_chapter_count: i32,
    #[validate(range(min = 0))]
    pub patent_count: i32,
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Get the write connection
    fn write_conn(&self) -> &DatabaseConnection {
        self.pool.write()
    }

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Faculty Profiles
    // ========================================================================

    pub async fn create_faculty(
        &self,
        user_id: Uuid,
        name: String,
        department: String,
        designation: Option<String>,
    ) -> Result<FacultyProfile> {
        let now = chrono::Utc::now();

        let profile = FacultyProfileActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(name),
            department: Set(department),
            designation: Set(designation),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        profile.insert(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn find_faculty_by_id(&self, id: Uuid) -> Result<Option<FacultyProfile>> {
        FacultyProfileEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    pub async fn find_faculty_by_user(&self, user_id: Uuid) -> Result<Option<FacultyProfile>> {
        FacultyProfileEntity::find()
            .filter(FacultyProfileColumn::UserId.eq(user_id))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    pub async fn list_faculty(&self) -> Result<Vec<FacultyProfile>> {
        FacultyProfileEntity::find()
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Resolve faculty display names for a set of profile ids.
    ///
    /// Ids without a profile are simply absent from the map.
    pub async fn faculty_names(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = FacultyProfileEntity::find()
            .filter(FacultyProfileColumn::Id.is_in(ids.iter().copied()))
            .all(self.read_conn())
            .await?;

        Ok(rows.into_iter().map(|p| (p.id, p.name)).collect())
    }

    // ========================================================================
    // Student Profiles
    // ========================================================================

    pub async fn create_student(
        &self,
        user_id: Uuid,
        name: String,
        register_number: String,
        guide_id: Option<Uuid>,
    ) -> Result<StudentProfile> {
        let now = chrono::Utc::now();

        let profile = StudentProfileActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(name),
            register_number: Set(register_number),
            guide_id: Set(guide_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        profile.insert(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn find_student_by_id(&self, id: Uuid) -> Result<Option<StudentProfile>> {
        StudentProfileEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    pub async fn find_student_by_user(&self, user_id: Uuid) -> Result<Option<StudentProfile>> {
        StudentProfileEntity::find()
            .filter(StudentProfileColumn::UserId.eq(user_id))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Resolve student display names for a set of profile ids
    pub async fn student_names(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = StudentProfileEntity::find()
            .filter(StudentProfileColumn::Id.is_in(ids.iter().copied()))
            .all(self.read_conn())
            .await?;

        Ok(rows.into_iter().map(|p| (p.id, p.name)).collect())
    }

    // ========================================================================
    // Generic workflow access (all publication kinds)
    // ========================================================================

    /// Find any publication record by id
    pub async fn find_record<E>(&self, id: Uuid) -> Result<Option<E::Model>>
    where
        E: EntityTrait,
        Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// All records of one kind (admin/report read path)
    pub async fn list_all_records<E>(&self) -> Result<Vec<E::Model>>
    where
        E: EntityTrait,
    {
        E::find().all(self.read_conn()).await.map_err(Into::into)
    }

    /// Records of one kind still awaiting review (SUBMITTED or SENT_BACK)
    pub async fn list_pending_records<E>(&self) -> Result<Vec<E::Model>>
    where
        E: Reviewable,
    {
        E::find()
            .filter(
                E::status_column().is_in([ApprovalStatus::Submitted, ApprovalStatus::SentBack]),
            )
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Apply a planned review transition to one row.
    ///
    /// Last-write-wins: the row is rewritten from the state the caller
    /// loaded, with no version check.
    pub async fn apply_review<E>(&self, row: E::Model, update: ReviewUpdate) -> Result<E::Model>
    where
        E: Reviewable,
        E::Model: ReviewColumns + IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ReviewPatch + ActiveModelTrait<Entity = E> + Send,
    {
        let now = chrono::Utc::now().into();

        let mut active = row.into_active_model();
        active.set_approval_status(update.status);

        match update.remarks {
            RemarksUpdate::Keep => {}
            RemarksUpdate::Clear => active.set_review_remarks(None),
            RemarksUpdate::Replace(text) => active.set_review_remarks(Some(text)),
        }

        if let Some(admin_id) = update.stamp {
            active.set_reviewer_stamp(admin_id, now);
        }

        active.set_updated_at(now);

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    /// Delete any publication record by id; true when a row was removed
    pub async fn delete_record<E>(&self, id: Uuid) -> Result<bool>
    where
        E: EntityTrait,
        Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(self.write_conn()).await?;
        Ok(result.rows_affected > 0)
    }

    // ========================================================================
    // Journals
    // ========================================================================

    pub async fn insert_journal(&self, owner: Owner, draft: &JournalDraft) -> Result<Journal> {
        let now = chrono::Utc::now();

        let journal = JournalActiveModel {
            id: Set(Uuid::new_v4()),
            faculty_id: Set(owner.faculty_id()),
            student_id: Set(owner.student_id()),
            title: Set(draft.title.clone()),
            authors: Set(draft.authors.clone()),
            year: Set(draft.year),
            journal_name: Set(draft.journal_name.clone()),
            issn: Set(draft.issn.clone()),
            impact_factor: Set(draft.impact_factor.clone()),
            category: Set(draft.category),
            proof_path: Set(draft.proof_path.clone()),
            approval_status: Set(ApprovalStatus::Submitted),
            remarks: Set(None),
            approved_by: Set(None),
            approved_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        journal.insert(self.write_conn()).await.map_err(Into::into)
    }

    /// Rewrite the descriptive fields of a journal; workflow columns are
    /// untouched
    pub async fn update_journal(&self, row: Journal, draft: &JournalDraft) -> Result<Journal> {
        let mut active = row.into_active_model();
        active.title = Set(draft.title.clone());
        active.authors = Set(draft.authors.clone());
        active.year = Set(draft.year);
        active.journal_name = Set(draft.journal_name.clone());
        active.issn = Set(draft.issn.clone());
        active.impact_factor = Set(draft.impact_factor.clone());
        active.category = Set(draft.category);
        active.proof_path = Set(draft.proof_path.clone());
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn list_journals_by_owner(&self, owner: Owner) -> Result<Vec<Journal>> {
        let query = match owner {
            Owner::Faculty(id) => JournalEntity::find().filter(JournalColumn::FacultyId.eq(id)),
            Owner::Student(id) => JournalEntity::find().filter(JournalColumn::StudentId.eq(id)),
        };

        query.all(self.read_conn()).await.map_err(Into::into)
    }

    // ========================================================================
    // Conferences
    // ========================================================================

    pub async fn insert_conference(
        &self,
        owner: Owner,
        draft: &ConferenceDraft,
    ) -> Result<Conference> {
        let now = chrono::Utc::now();

        let conference = ConferenceActiveModel {
            id: Set(Uuid::new_v4()),
            faculty_id: Set(owner.faculty_id()),
            student_id: Set(owner.student_id()),
            title: Set(draft.title.clone()),
            authors: Set(draft.authors.clone()),
            year: Set(draft.year),
            conference_name: Set(draft.conference_name.clone()),
            location: Set(draft.location.clone()),
            impact_factor: Set(draft.impact_factor.clone()),
            category: Set(draft.category),
            proof_path: Set(draft.proof_path.clone()),
            approval_status: Set(ApprovalStatus::Submitted),
            remarks: Set(None),
            approved_by: Set(None),
            approved_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        conference.insert(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn update_conference(
        &self,
        row: Conference,
        draft: &ConferenceDraft,
    ) -> Result<Conference> {
        let mut active = row.into_active_model();
        active.title = Set(draft.title.clone());
        active.authors = Set(draft.authors.clone());
        active.year = Set(draft.year);
        active.conference_name = Set(draft.conference_name.clone());
        active.location = Set(draft.location.clone());
        active.impact_factor = Set(draft.impact_factor.clone());
        active.category = Set(draft.category);
        active.proof_path = Set(draft.proof_path.clone());
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn list_conferences_by_owner(&self, owner: Owner) -> Result<Vec<Conference>> {
        let query = match owner {
            Owner::Faculty(id) => {
                ConferenceEntity::find().filter(ConferenceColumn::FacultyId.eq(id))
            }
            Owner::Student(id) => {
                ConferenceEntity::find().filter(ConferenceColumn::StudentId.eq(id))
            }
        };

        query.all(self.read_conn()).await.map_err(Into::into)
    }

    // ========================================================================
    // Books
    // ========================================================================

    pub async fn insert_book(&self, faculty_id: Uuid, draft: &BookDraft) -> Result<Book> {
        let now = chrono::Utc::now();

        let book = BookActiveModel {
            id: Set(Uuid::new_v4()),
            faculty_id: Set(faculty_id),
            title: Set(draft.title.clone()),
            authors: Set(draft.authors.clone()),
            year: Set(draft.year),
            publisher: Set(draft.publisher.clone()),
            isbn: Set(draft.isbn.clone()),
            category: Set(draft.category),
            proof_path: Set(draft.proof_path.clone()),
            approval_status: Set(ApprovalStatus::Submitted),
            remarks: Set(None),
            approved_by: Set(None),
            approved_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        book.insert(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn update_book(&self, row: Book, draft: &BookDraft) -> Result<Book> {
        let mut active = row.into_active_model();
        active.title = Set(draft.title.clone());
        active.authors = Set(draft.authors.clone());
        active.year = Set(draft.year);
        active.publisher = Set(draft.publisher.clone());
        active.isbn = Set(draft.isbn.clone());
        active.category = Set(draft.category);
        active.proof_path = Set(draft.proof_path.clone());
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn list_books_by_faculty(&self, faculty_id: Uuid) -> Result<Vec<Book>> {
        BookEntity::find()
            .filter(BookColumn::FacultyId.eq(faculty_id))
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Book Chapters
    // ========================================================================

    pub async fn insert_book_chapter(
        &self,
        faculty_id: Uuid,
        draft: &BookChapterDraft,
    ) -> Result<BookChapter> {
        let now = chrono::Utc::now();

        let chapter = BookChapterActiveModel {
            id: Set(Uuid::new_v4()),
            faculty_id: Set(faculty_id),
            title: Set(draft.title.clone()),
            book_title: Set(draft.book_title.clone()),
            authors: Set(draft.authors.clone()),
            year: Set(draft.year),
            publisher: Set(draft.publisher.clone()),
            isbn: Set(draft.isbn.clone()),
            category: Set(draft.category),
            proof_path: Set(draft.proof_path.clone()),
            approval_status: Set(ApprovalStatus::Submitted),
            remarks: Set(None),
            approved_by: Set(None),
            approved_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        chapter.insert(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn update_book_chapter(
        &self,
        row: BookChapter,
        draft: &BookChapterDraft,
    ) -> Result<BookChapter> {
        let mut active = row.into_active_model();
        active.title = Set(draft.title.clone());
        active.book_title = Set(draft.book_title.clone());
        active.authors = Set(draft.authors.clone());
        active.year = Set(draft.year);
        active.publisher = Set(draft.publisher.clone());
        active.isbn = Set(draft.isbn.clone());
        active.category = Set(draft.category);
        active.proof_path = Set(draft.proof_path.clone());
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn list_book_chapters_by_faculty(&self, faculty_id: Uuid) -> Result<Vec<BookChapter>> {
        BookChapterEntity::find()
            .filter(BookChapterColumn::FacultyId.eq(faculty_id))
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Patents
    // ========================================================================

    pub async fn insert_patent(&self, faculty_id: Uuid, draft: &PatentDraft) -> Result<Patent> {
        let now = chrono::Utc::now();

        let patent = PatentActiveModel {
            id: Set(Uuid::new_v4()),
            faculty_id: Set(faculty_id),
            title: Set(draft.title.clone()),
            inventors: Set(draft.inventors.clone()),
            year: Set(draft.year),
            patent_number: Set(draft.patent_number.clone()),
            granted: Set(draft.granted),
            category: Set(draft.category),
            proof_path: Set(draft.proof_path.clone()),
            approval_status: Set(ApprovalStatus::Submitted),
            remarks: Set(None),
            approved_by: Set(None),
            approved_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        patent.insert(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn update_patent(&self, row: Patent, draft: &PatentDraft) -> Result<Patent> {
        let mut active = row.into_active_model();
        active.title = Set(draft.title.clone());
        active.inventors = Set(draft.inventors.clone());
        active.year = Set(draft.year);
        active.patent_number = Set(draft.patent_number.clone());
        active.granted = Set(draft.granted);
        active.category = Set(draft.category);
        active.proof_path = Set(draft.proof_path.clone());
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn list_patents_by_faculty(&self, faculty_id: Uuid) -> Result<Vec<Patent>> {
        PatentEntity::find()
            .filter(PatentColumn::FacultyId.eq(faculty_id))
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Targets
    // ========================================================================

    pub async fn find_target(&self, faculty_id: Uuid, year: i32) -> Result<Option<Target>> {
        TargetEntity::find()
            .filter(TargetColumn::FacultyId.eq(faculty_id))
            .filter(TargetColumn::Year.eq(year))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    pub async fn insert_target(
        &self,
        faculty_id: Uuid,
        year: i32,
        counts: &TargetCounts,
    ) -> Result<Target> {
        let now = chrono::Utc::now();

        let target = TargetActiveModel {
            id: Set(Uuid::new_v4()),
            faculty_id: Set(faculty_id),
            year: Set(year),
            journal_count: Set(counts.journal_count),
            conference_count: Set(counts.conference_count),
            book_count: Set(counts.book_count),
            book_chapter_count: Set(counts.book_chapter_count),
            patent_count: Set(counts.patent_count),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        target.insert(self.write_conn()).await.map_err(Into::into)
    }

    /// Overwrite the counts of an existing target row; `created_at` is
    /// preserved
    pub async fn update_target(&self, row: Target, counts: &TargetCounts) -> Result<Target> {
        let mut active = row.into_active_model();
        active.journal_count = Set(counts.journal_count);
        active.conference_count = Set(counts.conference_count);
        active.book_count = Set(counts.book_count);
        active.book_chapter_count = Set(counts.book_chapter_count);
        active.patent_count = Set(counts.patent_count);
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    pub async fn list_targets(&self, faculty_id: Uuid) -> Result<Vec<Target>> {
        TargetEntity::find()
            .filter(TargetColumn::FacultyId.eq(faculty_id))
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }
}
