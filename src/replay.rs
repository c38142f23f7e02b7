//! Replay of recorded drawing events.
//!
//! A script is a JSON document `{"events": [...]}` whose events are [`DrawMessage`]s.
//! Replaying feeds them through [`handle_draw`] in order and records what the area
//! channel reported after each one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::handlers::handle_draw;
use crate::message::DrawMessage;
use crate::model::EstimateSet;
use crate::state::DrawingView;

/// A recorded sequence of drawing events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub events: Vec<DrawMessage>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} events from {:?}", script.events.len(), path);
        Ok(script)
    }
}

/// What happened for one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub kind: &'static str,
    /// Area reported by this event, if it reported one.
    pub reported: Option<f64>,
    pub live_polygons: usize,
}

/// Result of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub steps: Vec<ReplayStep>,
    /// Last value on the area channel
    pub final_area: f64,
    pub panel_visible: bool,
    pub estimates: EstimateSet,
}

/// Feed every event of `script` through `view`.
pub fn run_script(script: &ReplayScript, view: &mut DrawingView) -> ReplaySummary {
    let mut steps = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        let kind = event.kind();
        let before = view.lifecycle.channel().emissions();
        handle_draw(event.clone(), view);

        let channel = view.lifecycle.channel();
        let reported = (channel.emissions() != before).then(|| channel.last_reported());
        steps.push(ReplayStep {
            index,
            kind,
            reported,
            live_polygons: view.lifecycle.len(),
        });
    }

    ReplaySummary {
        steps,
        final_area: view.lifecycle.channel().last_reported(),
        panel_visible: view.panel.is_visible(),
        estimates: view.panel.estimates(),
    }
}

/// Errors that can occur when loading a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// I/O error reading the script
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Script is not valid JSON or has unknown events
    #[error("Invalid script: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
