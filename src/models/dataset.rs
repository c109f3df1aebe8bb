use crate::error::Result;
use crate::models::{Coordinates, Home, HomeChoice, Location, Stall};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The four static lists the app works from. Loaded once at startup and
/// shared read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(rename = "homeA", default)]
    pub home_a: Vec<Home>,
    #[serde(rename = "homeB", default)]
    pub home_b: Vec<Home>,
    #[serde(rename = "stallsA", default)]
    pub stalls_a: Vec<Stall>,
    #[serde(rename = "stallsB", default)]
    pub stalls_b: Vec<Stall>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.log_summary();
        Ok(dataset)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading dataset from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn homes(&self, choice: HomeChoice) -> &[Home] {
        match choice {
            HomeChoice::A => &self.home_a,
            HomeChoice::B => &self.home_b,
        }
    }

    pub fn stalls(&self, choice: HomeChoice) -> &[Stall] {
        match choice {
            HomeChoice::A => &self.stalls_a,
            HomeChoice::B => &self.stalls_b,
        }
    }

    /// Coordinates of the first home in the chosen list, if it parses.
    pub fn home_coordinates(&self, choice: HomeChoice) -> Option<Coordinates> {
        self.homes(choice).first().and_then(Home::coordinates)
    }

    pub fn home_location(&self, choice: HomeChoice) -> Option<Location> {
        self.homes(choice).first().and_then(Home::parsed_location)
    }

    /// Log list sizes and any entries whose location will never resolve.
    /// Nothing is repaired; those entries are simply skipped at pick time.
    fn log_summary(&self) {
        for choice in [HomeChoice::A, HomeChoice::B] {
            let homes = self.homes(choice);
            let stalls = self.stalls(choice);
            tracing::info!(
                "{}: {} home(s), {}: {} stall(s)",
                choice.home_list_name(),
                homes.len(),
                choice.stall_list_name(),
                stalls.len()
            );

            match homes.first() {
                None => tracing::warn!("{} is empty", choice.home_list_name()),
                Some(home) => {
                    if let Err(e) = home.location.as_deref().unwrap_or("").parse::<Coordinates>() {
                        tracing::warn!("{}[0]: {}", choice.home_list_name(), e);
                    }
                }
            }

            for stall in stalls {
                if let Err(e) = stall.location.as_deref().unwrap_or("").parse::<Coordinates>() {
                    tracing::warn!("{} '{}': {}", choice.stall_list_name(), stall.name, e);
                }
            }
        }
    }
}
