use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::error::RequestError;

macro_rules! name_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

name_newtype!(ActivityName);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Negative when the server reports more participants than seats.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activities keyed by name, kept in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(ActivityName, Activity)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: ActivityName, activity: Activity) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name, activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &ActivityName> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ActivityName, Activity)> for Roster {
    fn from_iter<I: IntoIterator<Item = (ActivityName, Activity)>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for (name, activity) in iter {
            roster.insert(name, activity);
        }
        roster
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Roster, A::Error> {
                let mut roster = Roster::new();
                while let Some((name, activity)) = access.next_entry::<ActivityName, Activity>()? {
                    roster.insert(name, activity);
                }
                Ok(roster)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: ActivityName,
    pub email: String,
}

impl SignupRequest {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Result<Self, RequestError> {
        let activity = activity.into();
        let email = email.into();
        if activity.trim().is_empty() {
            return Err(RequestError::MissingActivity);
        }
        if email.trim().is_empty() {
            return Err(RequestError::MissingEmail);
        }
        Ok(Self {
            activity: ActivityName(activity),
            email,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Success { message: String },
    Failure { detail: String },
}

impl SignupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SignupOutcome::Success { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            SignupOutcome::Success { message } => message,
            SignupOutcome::Failure { detail } => detail,
        }
    }
}
