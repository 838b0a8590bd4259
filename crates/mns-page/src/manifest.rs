//! JSON description of every reveal batch, for a client-side runtime.

use mns_motion::{ElementId, RevealBatch};
use serde::{Deserialize, Serialize};

use crate::page::Page;

pub const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealManifest {
    pub version: u32,
    pub batches: Vec<RevealBatch>,
    #[serde(default)]
    pub draggables: Vec<ElementId>,
    #[serde(default)]
    pub parallax: Vec<ElementId>,
}

impl RevealManifest {
    pub fn from_page(page: &Page) -> Self {
        Self {
            version: MANIFEST_VERSION,
            batches: page.reveal_batches(),
            draggables: page.draggables(),
            parallax: page.parallax_layers(),
        }
    }

    /// Total declared members across all batches.
    pub fn member_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.members.len()).sum()
    }

    pub fn batch(&self, id: &str) -> Option<&RevealBatch> {
        self.batches.iter().find(|batch| batch.id == id)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_survives_json() {
        let manifest = RevealManifest::from_page(&Page::new(2025));
        let json = manifest.to_json_pretty().expect("serialize");
        let parsed = RevealManifest::from_json(&json).expect("parse");
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_triggers_use_engine_notation() {
        let manifest = RevealManifest::from_page(&Page::new(2025));
        let json = serde_json::to_value(&manifest).expect("serialize");
        let stars = json["batches"]
            .as_array()
            .and_then(|batches| batches.iter().find(|batch| batch["id"] == "testimonials.stars"))
            .expect("stars batch");
        assert_eq!(stars["trigger"]["type"], "scroll");
        assert_eq!(stars["trigger"]["start"], "top 75%");
        assert_eq!(stars["trigger"]["anchor"], "testimonials.card.main");
        assert!(manifest.batch("hero.title").is_some());
        assert!(manifest.member_count() > 40);
    }
}
