use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::database::{activities_repo, participants_repo, schema};
use crate::models::ActivityDirectory;

/// Opens the process-lifetime directory store and creates its tables.
///
/// An in-memory SQLite database lives exactly as long as its connection, so the
/// pool holds one connection that is never recycled. That single connection
/// also serializes every signup/unregister transaction.
pub async fn connect_in_memory() -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    schema::create_schema(&pool).await?;
    Ok(pool)
}

/// Loads a catalog into an empty store. Returns the number of activities written.
pub async fn seed_directory(pool: &SqlitePool, directory: &ActivityDirectory) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    let mut written = 0;
    for (position, (name, activity)) in directory.iter().enumerate() {
        written += activities_repo::insert_activity(
            &mut *tx,
            activities_repo::NewActivity {
                position: position as i64,
                name,
                description: &activity.description,
                schedule: &activity.schedule,
                max_participants: activity.max_participants,
            },
        )
        .await?;
        for email in &activity.participants {
            participants_repo::insert_participant(&mut *tx, name, email).await?;
        }
    }
    tx.commit().await?;
    Ok(written)
}
