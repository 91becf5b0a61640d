use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One of the three priority levels an item can carry.
///
/// On the command line the numeric aliases `1..3` are accepted as well,
/// mapping low-to-high: `1` is `low`, `2` is `med`, `3` is `high`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Med,
    High,
}

impl Priority {
    /// The single-character marker shown next to each item in list output.
    #[must_use]
    pub fn mark(self) -> char {
        match self {
            Priority::Low => '-',
            Priority::Med => '*',
            Priority::High => '!',
        }
    }
}

#[derive(Debug, Error)]
#[error("priority must be one of low|med|high (or 1..3).")]
pub struct ParsePriorityError;

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "1" => Ok(Priority::Low),
            "med" | "2" => Ok(Priority::Med),
            "high" | "3" => Ok(Priority::High),
            _ => Err(ParsePriorityError),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Priority::Low => "low",
            Priority::Med => "med",
            Priority::High => "high",
        };
        write!(f, "{text}")
    }
}

/// One checklist entry. This is also the persisted shape of an entry in the
/// current storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub priority: Priority,
}

impl Item {
    /// Creates a new item with the default `med` priority.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            priority: Priority::default(),
        }
    }
}
