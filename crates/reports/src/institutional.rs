//! Institutional report bundles (NAAC / NBA / NIRF)
//!
//! Certified output only: every rollup here filters to APPROVED or LOCKED
//! records before grouping. Counting unreviewed submissions in an
//! institutional report silently overstates output, so the filter is
//! applied before any other narrowing.

use crate::facts::{self, PublicationFacts};
use scholartrack_common::db::models::{PublicationCategory, PublicationKind};
use scholartrack_common::db::Repository;
use scholartrack_common::errors::Result;
use serde::Serialize;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Impact factor at or above which a journal/conference paper counts as
/// high-quality in the NIRF score
const HIGH_QUALITY_IMPACT_FACTOR: f64 = 2.0;

/// Which institutional framework the bundle is prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportKind {
    Naac,
    Nba,
    Nirf,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportKind::Naac => "NAAC",
            ReportKind::Nba => "NBA",
            ReportKind::Nirf => "NIRF",
        };
        f.write_str(s)
    }
}

/// Certified-record counts for one publication kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindBreakdown {
    pub total: u64,
    pub national: u64,
    pub international: u64,
}

impl KindBreakdown {
    fn add(&mut self, category: PublicationCategory) {
        self.total += 1;
        match category {
            PublicationCategory::National => self.national += 1,
            PublicationCategory::International => self.international += 1,
        }
    }
}

/// One prepared institutional report
#[derive(Debug, Clone, Serialize)]
pub struct ReportBundle {
    pub report: ReportKind,
    /// Narrowing filters echoed back, None meaning all
    pub year: Option<i32>,
    pub faculty_id: Option<Uuid>,

    pub journals: KindBreakdown,
    pub conferences: KindBreakdown,
    pub books: KindBreakdown,
    pub book_chapters: KindBreakdown,
    pub patents: KindBreakdown,
    pub total_records: u64,

    /// NIRF only: share (percent) of certified journal+conference papers
    /// with impact factor >= 2.0
    pub quality_score: Option<f64>,
}

/// Builds institutional report bundles from the record store
#[derive(Clone)]
pub struct ReportService {
    repo: Repository,
}

impl ReportService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn report(
        &self,
        report: ReportKind,
        year: Option<i32>,
        faculty_id: Option<Uuid>,
    ) -> Result<ReportBundle> {
        let facts: Vec<PublicationFacts> = facts::collect_all(&self.repo)
            .await?
            .into_iter()
            .filter(|f| f.is_certified())
            .filter(|f| year.map_or(true, |y| f.year == y))
            .filter(|f| faculty_id.map_or(true, |id| f.faculty_id == Some(id)))
            .collect();

        let mut bundle = ReportBundle {
            report,
            year,
            faculty_id,
            journals: KindBreakdown::default(),
            conferences: KindBreakdown::default(),
            books: KindBreakdown::default(),
            book_chapters: KindBreakdown::default(),
            patents: KindBreakdown::default(),
            total_records: facts.len() as u64,
            quality_score: None,
        };

        for fact in &facts {
            let breakdown = match fact.kind {
                PublicationKind::Journal => &mut bundle.journals,
                PublicationKind::Conference => &mut bundle.conferences,
                PublicationKind::Book => &mut bundle.books,
                PublicationKind::BookChapter => &mut bundle.book_chapters,
                PublicationKind::Patent => &mut bundle.patents,
            };
            breakdown.add(fact.category);
        }

        if report == ReportKind::Nirf {
            bundle.quality_score = Some(quality_score(&facts));
        }

        debug!(
            report = %report,
            total = bundle.total_records,
            "institutional report prepared"
        );

        Ok(bundle)
    }
}

/// Share of certified journal+conference papers meeting the impact-factor
/// bar, in percent. Records without a parseable impact factor count
/// against the score; a malformed value is never an error.
fn quality_score(facts: &[PublicationFacts]) -> f64 {
    let papers: Vec<_> = facts
        .iter()
        .filter(|f| {
            matches!(
                f.kind,
                PublicationKind::Journal | PublicationKind::Conference
            )
        })
        .collect();

    if papers.is_empty() {
        return 0.0;
    }

    let high_quality = papers
        .iter()
        .filter(|f| {
            parse_impact_factor(f.impact_factor.as_deref())
                .is_some_and(|v| v >= HIGH_QUALITY_IMPACT_FACTOR)
        })
        .count();

    (high_quality as f64 / papers.len() as f64) * 100.0
}

fn parse_impact_factor(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use scholartrack_common::db::models::Owner;

    #[tokio::test]
    async fn unreviewed_records_are_excluded() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;

        // 2 approved + 1 submitted journal in 2025
        for _ in 0..2 {
            let journal = repo
                .insert_journal(Owner::Faculty(faculty.id), &testing::journal_draft())
                .await
                .unwrap();
            testing::approve_journal(&repo, journal).await;
        }
        repo.insert_journal(Owner::Faculty(faculty.id), &testing::journal_draft())
            .await
            .unwrap();

        let bundle = ReportService::new(repo)
            .report(ReportKind::Naac, Some(2025), None)
            .await
            .unwrap();

        assert_eq!(bundle.journals.total, 2);
        assert_eq!(bundle.total_records, 2);
        assert_eq!(bundle.quality_score, None);
    }

    #[tokio::test]
    async fn locked_records_still_count() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;

        let patent = repo
            .insert_patent(faculty.id, &testing::patent_draft())
            .await
            .unwrap();
        testing::approve_and_lock_patent(&repo, patent).await;

        let bundle = ReportService::new(repo)
            .report(ReportKind::Nba, None, None)
            .await
            .unwrap();
        assert_eq!(bundle.patents.total, 1);
        assert_eq!(bundle.patents.national, 1);
        assert_eq!(bundle.patents.international, 0);
    }

    #[tokio::test]
    async fn faculty_filter_narrows_the_bundle() {
        let repo = testing::repo().await;
        let a = testing::faculty(&repo).await;
        let b = testing::faculty(&repo).await;

        for owner in [a.id, b.id] {
            let journal = repo
                .insert_journal(Owner::Faculty(owner), &testing::journal_draft())
                .await
                .unwrap();
            testing::approve_journal(&repo, journal).await;
        }

        let bundle = ReportService::new(repo)
            .report(ReportKind::Naac, None, Some(a.id))
            .await
            .unwrap();
        assert_eq!(bundle.total_records, 1);
        assert_eq!(bundle.faculty_id, Some(a.id));
    }

    #[tokio::test]
    async fn nirf_quality_score_swallows_bad_impact_factors() {
        let repo = testing::repo().await;
        let faculty = testing::faculty(&repo).await;

        // "3.1", "1.0", "n/a", and missing: exactly one of four qualifies
        for impact_factor in [Some("3.1"), Some("1.0"), Some("n/a"), None] {
            let mut draft = testing::journal_draft();
            draft.impact_factor = impact_factor.map(str::to_string);
            let journal = repo
                .insert_journal(Owner::Faculty(faculty.id), &draft)
                .await
                .unwrap();
            testing::approve_journal(&repo, journal).await;
        }

        let bundle = ReportService::new(repo)
            .report(ReportKind::Nirf, None, None)
            .await
            .unwrap();
        assert_eq!(bundle.quality_score, Some(25.0));
    }

    #[tokio::test]
    async fn nirf_score_with_no_papers_is_zero() {
        let repo = testing::repo().await;
        let bundle = ReportService::new(repo)
            .report(ReportKind::Nirf, None, None)
            .await
            .unwrap();
        assert_eq!(bundle.quality_score, Some(0.0));
        assert_eq!(bundle.total_records, 0);
    }

    #[test]
    fn impact_factor_parsing_is_lenient() {
        assert_eq!(parse_impact_factor(Some(" 2.4 ")), Some(2.4));
        assert_eq!(parse_impact_factor(Some("n/a")), None);
        assert_eq!(parse_impact_factor(Some("")), None);
        assert_eq!(parse_impact_factor(None), None);
    }
}
