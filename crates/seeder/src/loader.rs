//! Seed loading
//!
//! Loads the declarative dataset exactly once: a faculty or student entry
//! whose `user_id` already has a profile is skipped wholesale, so rerunning
//! the binary is a no-op. Seeded publications go through the same
//! repository and approval paths as live submissions.

use crate::dataset::{SeedDataset, SeedFaculty, SeedRecord, SeedStudent};
use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{Owner, PublicationKind, ReviewAction};
use scholartrack_common::db::Repository;
use scholartrack_common::errors::Result;
use scholartrack_review::{ApprovalService, TargetLedger};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// Outcome of one loader run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub faculty_created: usize,
    pub faculty_skipped: usize,
    pub students_created: usize,
    pub students_skipped: usize,
    pub records_created: usize,
}

pub struct SeedLoader {
    repo: Repository,
    approvals: ApprovalService,
    targets: TargetLedger,
    admin: Actor,
}

impl SeedLoader {
    pub fn new(repo: Repository, admin_user_id: Uuid) -> Self {
        Self {
            approvals: ApprovalService::new(repo.clone()),
            targets: TargetLedger::new(repo.clone()),
            repo,
            admin: Actor::admin(admin_user_id),
        }
    }

    pub async fn load(&self, dataset: &SeedDataset) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();

        for entry in &dataset.faculty {
            if self.repo.find_faculty_by_user(entry.user_id).await?.is_some() {
                summary.faculty_skipped += 1;
                continue;
            }

            self.load_faculty(entry, &mut summary).await?;
            summary.faculty_created += 1;
        }

        for entry in &dataset.students {
            if self.repo.find_student_by_user(entry.user_id).await?.is_some() {
                summary.students_skipped += 1;
                continue;
            }

            self.load_student(entry).await?;
            summary.students_created += 1;
        }

        info!(
            faculty_created = summary.faculty_created,
            faculty_skipped = summary.faculty_skipped,
            students_created = summary.students_created,
            records_created = summary.records_created,
            "seed load finished"
        );

        Ok(summary)
    }

    async fn load_faculty(&self, entry: &SeedFaculty, summary: &mut SeedSummary) -> Result<()> {
        let profile = self
            .repo
            .create_faculty(
                entry.user_id,
                entry.name.clone(),
                entry.department.clone(),
                entry.designation.clone(),
            )
            .await?;

        let owner = Owner::Faculty(profile.id);

        for record in &entry.journals {
            record.draft.validate()?;
            let row = self.repo.insert_journal(owner, &record.draft).await?;
            self.certify(record, PublicationKind::Journal, row.id).await?;
            summary.records_created += 1;
        }

        for record in &entry.conferences {
            record.draft.validate()?;
            let row = self.repo.insert_conference(owner, &record.draft).await?;
            self.certify(record, PublicationKind::Conference, row.id).await?;
            summary.records_created += 1;
        }

        for record in &entry.books {
            record.draft.validate()?;
            let row = self.repo.insert_book(profile.id, &record.draft).await?;
            self.certify(record, PublicationKind::Book, row.id).await?;
            summary.records_created += 1;
        }

        for record in &entry.book_chapters {
            record.draft.validate()?;
            let row = self.repo.insert_book_chapter(profile.id, &record.draft).await?;
            self.certify(record, PublicationKind::BookChapter, row.id).await?;
            summary.records_created += 1;
        }

        for record in &entry.patents {
            record.draft.validate()?;
            let row = self.repo.insert_patent(profile.id, &record.draft).await?;
            self.certify(record, PublicationKind::Patent, row.id).await?;
            summary.records_created += 1;
        }

        let faculty_actor = Actor::faculty(entry.user_id, profile.id);
        for target in &entry.targets {
            self.targets
                .upsert(&faculty_actor, target.year, target.counts)
                .await?;
        }

        info!(faculty = %entry.name, profile_id = %profile.id, "faculty seeded");

        Ok(())
    }

    async fn load_student(&self, entry: &SeedStudent) -> Result<()> {
        let guide_id = match entry.guide_user_id {
            Some(guide_user) => {
                let guide = self.repo.find_faculty_by_user(guide_user).await?;
                if guide.is_none() {
                    warn!(student = %entry.name, "guide not found; seeding without guide");
                }
                guide.map(|g| g.id)
            }
            None => None,
        };

        self.repo
            .create_student(
                entry.user_id,
                entry.name.clone(),
                entry.register_number.clone(),
                guide_id,
            )
            .await?;

        Ok(())
    }

    async fn certify<D>(
        &self,
        record: &SeedRecord<D>,
        kind: PublicationKind,
        id: Uuid,
    ) -> Result<()> {
        if record.approved {
            self.approvals
                .transition(&self.admin, kind, id, ReviewAction::Approve, None)
                .await?;
        }
        Ok(())
    }
}
