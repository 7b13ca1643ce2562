use std::collections::HashMap;

use sqlx::SqlitePool;
use thiserror::Error;

use crate::database::{activities_repo, participants_repo};
use crate::models::{Activity, ActivityDirectory};

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Email must not be blank")]
    InvalidEmail,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Whether `max_participants` is checked on signup.
///
/// `Advisory` stores the capacity without enforcing it, which is how the
/// service has always behaved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Advisory,
    Enforced,
}

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<ActivityDirectory> {
    let mut conn = pool.acquire().await?;
    let rows = activities_repo::list_activities(&mut *conn).await?;
    let participant_rows = participants_repo::list_participants(&mut *conn).await?;

    let mut participants: HashMap<String, Vec<String>> = HashMap::new();
    for row in participant_rows {
        participants
            .entry(row.activity_name)
            .or_default()
            .push(row.email);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let participants = participants.remove(&row.name).unwrap_or_default();
            (
                row.name,
                Activity {
                    description: row.description,
                    schedule: row.schedule,
                    max_participants: row.max_participants,
                    participants,
                },
            )
        })
        .collect())
}

pub async fn sign_up(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
    capacity: CapacityPolicy,
) -> Result<String, SignupError> {
    let mut tx = pool.begin().await?;
    // An unknown activity is NotFound whatever the email looks like.
    let Some(activity) = activities_repo::load_activity(&mut *tx, activity_name).await? else {
        return Err(SignupError::NotFound);
    };
    let email = normalize_email(email)?;
    if participants_repo::is_participant(&mut *tx, activity_name, email).await? {
        return Err(SignupError::AlreadyRegistered);
    }
    if capacity == CapacityPolicy::Enforced {
        let taken = participants_repo::count_participants(&mut *tx, activity_name).await?;
        if taken >= activity.max_participants {
            return Err(SignupError::ActivityFull);
        }
    }

    match participants_repo::insert_participant(&mut *tx, activity_name, email).await {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(SignupError::AlreadyRegistered);
        }
        Err(e) => return Err(e.into()),
    }
    tx.commit().await?;

    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut tx = pool.begin().await?;
    if activities_repo::load_activity(&mut *tx, activity_name)
        .await?
        .is_none()
    {
        return Err(SignupError::NotFound);
    }
    let email = normalize_email(email)?;
    let removed = participants_repo::delete_participant(&mut *tx, activity_name, email).await?;
    if removed == 0 {
        return Err(SignupError::NotRegistered);
    }
    tx.commit().await?;

    Ok(format!("Unregistered {} from {}", email, activity_name))
}

fn normalize_email(email: &str) -> Result<&str, SignupError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(SignupError::InvalidEmail);
    }
    Ok(email)
}
