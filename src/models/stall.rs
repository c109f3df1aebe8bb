use crate::models::{Coordinates, Location, TimeWindow};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which home (and matching stall list) the user is currently measuring from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HomeChoice {
    #[default]
    A,
    B,
}

impl HomeChoice {
    /// Dataset key of the home list for this choice.
    pub fn home_list_name(&self) -> &'static str {
        match self {
            HomeChoice::A => "homeA",
            HomeChoice::B => "homeB",
        }
    }

    /// Dataset key of the stall list for this choice.
    pub fn stall_list_name(&self) -> &'static str {
        match self {
            HomeChoice::A => "stallsA",
            HomeChoice::B => "stallsB",
        }
    }
}

impl fmt::Display for HomeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeChoice::A => write!(f, "a"),
            HomeChoice::B => write!(f, "b"),
        }
    }
}

impl FromStr for HomeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "homea" => Ok(HomeChoice::A),
            "b" | "homeb" => Ok(HomeChoice::B),
            _ => Err(format!("Invalid home choice: '{}'. Use 'a' or 'b'", s)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Home {
    /// Raw `"lat,lon"` value
    #[serde(default)]
    pub location: Option<String>,
}

impl Home {
    pub fn new(location: impl Into<String>) -> Self {
        Home {
            location: Some(location.into()),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse_opt(self.location.as_deref())
    }

    pub fn parsed_location(&self) -> Option<Location> {
        Location::parse_opt(self.location.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stall {
    /// Empty when the entry has no name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Raw `"lat,lon"` value
    #[serde(default)]
    pub location: Option<String>,
    /// Weekday abbreviations (`Sun`..`Sat`)
    #[serde(default)]
    pub open_days: Option<Vec<String>>,
    #[serde(default)]
    pub open_time: Option<TimeWindow>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Stall {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        open_days: &[&str],
        open_time: TimeWindow,
    ) -> Self {
        Stall {
            name: name.into(),
            location: Some(location.into()),
            open_days: Some(open_days.iter().map(|d| d.to_string()).collect()),
            open_time: Some(open_time),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse_opt(self.location.as_deref())
    }

    pub fn parsed_location(&self) -> Option<Location> {
        Location::parse_opt(self.location.as_deref())
    }

    pub fn opens_on(&self, weekday_abbrev: &str) -> bool {
        self.open_days
            .as_ref()
            .is_some_and(|days| days.iter().any(|d| d == weekday_abbrev))
    }
}
