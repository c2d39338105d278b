//! SeaORM entity models
//!
//! One module per table, plus the shared approval-workflow vocabulary and
//! the capability traits the generic workflow code is written against.

mod approval;
mod book;
mod book_chapter;
mod conference;
mod faculty_profile;
mod journal;
mod patent;
mod student_profile;
mod target;
mod workflow;

pub use approval::{ApprovalStatus, Owner, PublicationCategory, PublicationKind, ReviewAction};
pub use workflow::{ReviewColumns, ReviewPatch, Reviewable};

pub use faculty_profile::{
    ActiveModel as FacultyProfileActiveModel, Column as FacultyProfileColumn,
    Entity as FacultyProfileEntity, Model as FacultyProfile,
};

pub use student_profile::{
    ActiveModel as StudentProfileActiveModel, Column as StudentProfileColumn,
    Entity as StudentProfileEntity, Model as StudentProfile,
};

pub use journal::{
    ActiveModel as JournalActiveModel, Column as JournalColumn, Entity as JournalEntity,
    Model as Journal,
};

pub use conference::{
    ActiveModel as ConferenceActiveModel, Column as ConferenceColumn, Entity as ConferenceEntity,
    Model as Conference,
};

pub use book::{
    ActiveModel as BookActiveModel, Column as BookColumn, Entity as BookEntity, Model as Book,
};

pub use book_chapter::{
    ActiveModel as BookChapterActiveModel, Column as BookChapterColumn,
    Entity as BookChapterEntity, Model as BookChapter,
};

pub use patent::{
    ActiveModel as PatentActiveModel, Column as PatentColumn, Entity as PatentEntity,
    Model as Patent,
};

pub use target::{
    ActiveModel as TargetActiveModel, Column as TargetColumn, Entity as TargetEntity,
    Model as Target,
};
