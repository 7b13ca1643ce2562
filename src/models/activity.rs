use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Public shape of one activity, keyed by name in the directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitiesRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityParticipantsRow {
    pub activity_name: String,
    pub email: String,
}

/// Activities in catalog order. Serializes as a JSON object keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectory {
    entries: Vec<(String, Activity)>,
}

impl ActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, or replaces the existing one with the same name in place.
    pub fn insert(&mut self, name: String, activity: Activity) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Activity)> for ActivityDirectory {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (name, activity) in iter {
            directory.insert(name, activity);
        }
        directory
    }
}

impl Serialize for ActivityDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

// Keeps document order, which a plain map type would not.
impl<'de> Deserialize<'de> for ActivityDirectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = ActivityDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut directory = ActivityDirectory::new();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    if directory.get(&name).is_some() {
                        return Err(A::Error::custom(format!("duplicate activity {:?}", name)));
                    }
                    directory.insert(name, activity);
                }
                Ok(directory)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}
