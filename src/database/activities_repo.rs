use sqlx::SqliteConnection;

use crate::models::ActivitiesRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY position ASC
"#;

const SQL_LOAD_ACTIVITY: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?1
LIMIT 1
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  position,
  name,
  description,
  schedule,
  max_participants
) VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub struct NewActivity<'a> {
    pub position: i64,
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
}

pub async fn list_activities(conn: &mut SqliteConnection) -> sqlx::Result<Vec<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(conn)
        .await
}

pub async fn load_activity(
    conn: &mut SqliteConnection,
    name: &str,
) -> sqlx::Result<Option<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LOAD_ACTIVITY)
        .bind(name)
        .fetch_optional(conn)
        .await
}

pub async fn insert_activity(
    conn: &mut SqliteConnection,
    activity: NewActivity<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.position)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
