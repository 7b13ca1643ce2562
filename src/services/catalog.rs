use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Activity, ActivityDirectory};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("activity {0:?} has a negative max_participants")]
    NegativeCapacity(String),
    #[error("catalog has no activities")]
    Empty,
}

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: i64,
    participants: &'static [&'static str],
}

const DEFAULT_CATALOG: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball",
        description: "Practice drills and play on the school basketball team",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Improve your serve and play friendly matches",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &["james@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore painting, drawing and sculpture",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["ava@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct and stage the school plays",
        schedule: "Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 25,
        participants: &["liam@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Wednesdays, 3:30 PM - 4:30 PM",
        max_participants: 15,
        participants: &["noah@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Build argumentation skills and compete in debate tournaments",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["isabella@mergington.edu"],
    },
];

/// The catalog the service starts with when no seed file is configured.
pub fn default_catalog() -> ActivityDirectory {
    DEFAULT_CATALOG
        .iter()
        .map(|seed| {
            (
                seed.name.to_string(),
                Activity {
                    description: seed.description.to_string(),
                    schedule: seed.schedule.to_string(),
                    max_participants: seed.max_participants,
                    participants: seed.participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

pub fn load_catalog_file(path: &Path) -> Result<ActivityDirectory, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&raw)
}

/// Parses a catalog in the same shape `GET /activities` returns.
pub fn parse_catalog(raw: &str) -> Result<ActivityDirectory, CatalogError> {
    // Repeated activity names are rejected while deserializing.
    let parsed: ActivityDirectory = serde_json::from_str(raw)?;
    if parsed.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut directory = ActivityDirectory::new();
    for (name, activity) in parsed.iter() {
        if activity.max_participants < 0 {
            return Err(CatalogError::NegativeCapacity(name.to_string()));
        }
        let mut deduped = Activity {
            participants: Vec::with_capacity(activity.participants.len()),
            ..activity.clone()
        };
        for email in &activity.participants {
            let email = email.trim();
            if !email.is_empty() && !deduped.has_participant(email) {
                deduped.participants.push(email.to_string());
            }
        }
        directory.insert(name.to_string(), deduped);
    }
    Ok(directory)
}
