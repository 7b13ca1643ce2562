use sqlx::SqlitePool;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  position INTEGER NOT NULL,
  name TEXT PRIMARY KEY NOT NULL,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL
)
"#;

// UNIQUE(activity_name, email) is what keeps a student from holding two seats.
const SQL_CREATE_ACTIVITY_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS activity_participants (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  activity_name TEXT NOT NULL REFERENCES activities(name) ON DELETE CASCADE,
  email TEXT NOT NULL,
  UNIQUE (activity_name, email)
)
"#;

pub async fn create_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    sqlx::query(SQL_CREATE_ACTIVITY_PARTICIPANTS)
        .execute(pool)
        .await?;
    Ok(())
}
