//! Dashboard rollups over the record store
//!
//! These intentionally count records in every status: they measure
//! submission volume, not certified output. Institutional counting with
//! the approved/locked filter lives in [`crate::institutional`].

use crate::facts;
use scholartrack_common::db::models::ApprovalStatus;
use scholartrack_common::db::Repository;
use scholartrack_common::errors::Result;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

#[derive(Clone)]
pub struct Analytics {
    repo: Repository,
}

impl Analytics {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Records per publication year, all kinds, all statuses
    pub async fn year_wise_totals(&self) -> Result<BTreeMap<i32, u64>> {
        let facts = facts::collect_all(&self.repo).await?;

        let mut totals = BTreeMap::new();
        for fact in facts {
            *totals.entry(fact.year).or_insert(0) += 1;
        }

        Ok(totals)
    }

    /// Records per approval status, all kinds
    pub async fn status_wise_totals(&self) -> Result<HashMap<ApprovalStatus, u64>> {
        let facts = facts::collect_all(&self.repo).await?;

        let mut totals = HashMap::new();
        for fact in facts {
            *totals.entry(fact.status).or_insert(0) += 1;
        }

        Ok(totals)
    }

    /// Records per owning faculty member, all kinds, all statuses.
    ///
    /// Faculty with no records are absent from the map, and
    /// student-owned records count toward no faculty member.
    pub async fn faculty_contributions(&self) -> Result<HashMap<Uuid, u64>> {
        let facts = facts::collect_all(&self.repo).await?;

        let mut totals = HashMap::new();
        for fact in facts {
            if let Some(faculty_id) = fact.faculty_id {
                *totals.entry(faculty_id).or_insert(0) += 1;
            }
        }

        Ok(totals)
    }
}
