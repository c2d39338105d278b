//! ScholarTrack read-side reporting
//!
//! - [`analytics`]: submission-volume dashboards over every record,
//!   regardless of approval status
//! - [`institutional`]: NAAC/NBA/NIRF bundles counting only certified
//!   (approved or locked) output

pub mod analytics;
pub mod institutional;

mod facts;

pub use analytics::Analytics;
pub use institutional::{KindBreakdown, ReportBundle, ReportKind, ReportService};
