//! Idempotent schema bootstrap
//!
//! Derives `CREATE TABLE IF NOT EXISTS` statements from the entity
//! definitions so the seeder and the test suites can stand up a fresh
//! database without a separate migration toolchain.

use crate::db::models::{
    BookChapterEntity, BookEntity, ConferenceEntity, FacultyProfileEntity, JournalEntity,
    PatentEntity, StudentProfileEntity, TargetColumn, TargetEntity,
};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, Schema};
use tracing::debug;

/// Create every ScholarTrack table (and supporting indexes) if absent.
///
/// Safe to run repeatedly; existing tables are left untouched.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    async fn create_table<E>(
        conn: &DatabaseConnection,
        schema: &Schema,
        entity: E,
    ) -> Result<()>
    where
        E: EntityTrait,
    {
        let backend = conn.get_database_backend();
        let mut stmt = schema.create_table_from_entity(entity);
        stmt.if_not_exists();
        conn.execute(backend.build(&stmt)).await?;
        debug!(table = %entity.table_name(), "ensured table");
        Ok(())
    }

    // Profiles first; publication tables reference them
    create_table(conn, &schema, FacultyProfileEntity).await?;
    create_table(conn, &schema, StudentProfileEntity).await?;

    create_table(conn, &schema, JournalEntity).await?;
    create_table(conn, &schema, ConferenceEntity).await?;
    create_table(conn, &schema, BookEntity).await?;
    create_table(conn, &schema, BookChapterEntity).await?;
    create_table(conn, &schema, PatentEntity).await?;

    create_table(conn, &schema, TargetEntity).await?;

    // At most one target row per (faculty, year)
    let target_idx = Index::create()
        .name("uq_targets_faculty_year")
        .table(TargetEntity)
        .col(TargetColumn::FacultyId)
        .col(TargetColumn::Year)
        .unique()
        .if_not_exists()
        .to_owned();
    conn.execute(backend.build(&target_idx)).await?;

    Ok(())
}
