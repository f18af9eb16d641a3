//! Local trip storage
//!
//! The CLI owns persistence of the current trip (the server is
//! stateless): one JSON file under the user data dir holding the full
//! itinerary plus its vibe score. Modify/optimize overwrite the whole
//! file - replacement, never merge.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tripsense::Itinerary;

const DATA_DIR: &str = "tripsense";
const TRIP_FILE: &str = "itinerary.json";

/// The currently stored trip
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTrip {
    pub itinerary: Itinerary,
    pub vibe_score: u32,
}

impl StoredTrip {
    /// Default location of the trip file
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(DATA_DIR);
        Ok(dir.join(TRIP_FILE))
    }

    /// Load the stored trip, failing when none has been generated yet
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| "No stored trip found. Run `tripsense generate` first.")?;
        serde_json::from_str(&content).context("Failed to parse stored trip")
    }

    /// Replace the stored trip wholesale
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory {:?}", dir))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize trip")?;
        fs::write(path, content).with_context(|| format!("Failed to write trip to {:?}", path))?;
        Ok(())
    }
}
