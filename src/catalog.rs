// src/catalog.rs

use serde::{Deserialize, Serialize};

use crate::models::assessment::Assessment;
use crate::models::module::LearningModule;

/// A track option with its tag set. The tag mapping drives every
/// track-scoped filter; adding a track is a data change, not a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// The static, read-only data tables: tracks, the module catalog, and the
/// per-track assessments. Embedded at build time and parsed once at
/// startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<TrackInfo>,
    modules: Vec<LearningModule>,
    assessments: Vec<Assessment>,
}

const TRACKS_JSON: &str = include_str!("../data/tracks.json");
const MODULES_JSON: &str = include_str!("../data/modules.json");
const ASSESSMENTS_JSON: &str = include_str!("../data/assessments.json");

impl Catalog {
    pub fn load() -> Result<Self, serde_json::Error> {
        Ok(Catalog {
            tracks: serde_json::from_str(TRACKS_JSON)?,
            modules: serde_json::from_str(MODULES_JSON)?,
            assessments: serde_json::from_str(ASSESSMENTS_JSON)?,
        })
    }

    pub fn tracks(&self) -> &[TrackInfo] {
        &self.tracks
    }

    pub fn modules(&self) -> &[LearningModule] {
        &self.modules
    }

    /// Tag set for a track id. Unknown tracks resolve to an empty set,
    /// which downstream degrades to an empty path rather than an error.
    pub fn track_tags(&self, track: &str) -> &[String] {
        self.tracks
            .iter()
            .find(|t| t.id == track)
            .map(|t| t.tags.as_slice())
            .unwrap_or(&[])
    }

    pub fn assessment_for(&self, track: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.track == track)
    }
}
