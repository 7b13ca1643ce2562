use sqlx::SqliteConnection;

use crate::models::ActivityParticipantsRow;

// Participants come back in sign-up order.
const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT
  activity_name,
  email
FROM activity_participants
ORDER BY id ASC
"#;

const SQL_IS_PARTICIPANT: &str = r#"
SELECT EXISTS (
  SELECT 1
  FROM activity_participants
  WHERE activity_name = ?1
    AND email = ?2
)
"#;

const SQL_COUNT_PARTICIPANTS: &str = r#"
SELECT COUNT(*)
FROM activity_participants
WHERE activity_name = ?1
"#;

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO activity_participants (
  activity_name,
  email
) VALUES (?1, ?2)
"#;

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_name = ?1
  AND email = ?2
"#;

pub async fn list_participants(
    conn: &mut SqliteConnection,
) -> sqlx::Result<Vec<ActivityParticipantsRow>> {
    sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_PARTICIPANTS)
        .fetch_all(conn)
        .await
}

pub async fn is_participant(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<bool> {
    let found = sqlx::query_scalar::<_, i64>(SQL_IS_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .fetch_one(conn)
        .await?;
    Ok(found == 1)
}

pub async fn count_participants(
    conn: &mut SqliteConnection,
    activity_name: &str,
) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_PARTICIPANTS)
        .bind(activity_name)
        .fetch_one(conn)
        .await
}

pub async fn insert_participant(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_participant(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
