//! ScholarTrack seeder
//!
//! One-shot setup binary: ensures the schema exists, then loads the
//! declarative seed dataset idempotently. Running it against an already
//! seeded database changes nothing.

mod dataset;
mod loader;

use anyhow::Context;
use dataset::SeedDataset;
use loader::SeedLoader;
use scholartrack_common::config::AppConfig;
use scholartrack_common::db::{bootstrap_schema, DbPool, Repository};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting ScholarTrack seeder v{}", scholartrack_common::VERSION);

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Read the dataset before touching the database
    let raw = std::fs::read_to_string(&config.seed.path)
        .with_context(|| format!("failed to read seed file {}", config.seed.path))?;
    let dataset = SeedDataset::from_json(&raw)
        .with_context(|| format!("failed to parse seed file {}", config.seed.path))?;

    info!(
        path = %config.seed.path,
        faculty = dataset.faculty.len(),
        students = dataset.students.len(),
        "seed dataset loaded"
    );

    // Connect and make sure the schema exists
    let pool = DbPool::new(&config.database).await?;
    bootstrap_schema(pool.write()).await?;

    // Load idempotently
    let loader = SeedLoader::new(Repository::new(pool), config.seed.admin_user_id);
    let summary = loader.load(&dataset).await?;

    info!(
        faculty_created = summary.faculty_created,
        faculty_skipped = summary.faculty_skipped,
        students_created = summary.students_created,
        students_skipped = summary.students_skipped,
        records_created = summary.records_created,
        "seeding complete"
    );

    Ok(())
}
