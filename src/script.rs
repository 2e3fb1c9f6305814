//! Event scripts: recorded input for a drawing session
//!
//! A script is a JSON array of steps, each one input event:
//!
//! ```json
//! [
//!   { "select": "rectangle" },
//!   { "down": { "x": 10, "y": 10 } },
//!   { "move": { "x": 40, "y": 30 } },
//!   { "up": { "x": 60, "y": 50 } },
//!   "rotate"
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Point2, ShapeKind};
use crate::session::messages::CanvasMsg;

/// One recorded input event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Kind selector value; unknown names select nothing
    Select(String),
    Down(Point2),
    Move(Point2),
    Up(Point2),
    CompletePolygon,
    Clear,
    Translate,
    Scale,
    Rotate,
}

impl ScriptStep {
    pub fn to_msg(&self) -> CanvasMsg {
        match self {
            ScriptStep::Select(name) => {
                let kind = ShapeKind::from_name(name);
                if kind.is_none() {
                    log::warn!("Unknown shape kind {:?}, nothing will be drawn", name);
                }
                CanvasMsg::KindChanged(kind)
            }
            ScriptStep::Down(p) => CanvasMsg::pointer_down(*p),
            ScriptStep::Move(p) => CanvasMsg::pointer_move(*p),
            ScriptStep::Up(p) => CanvasMsg::pointer_up(*p),
            ScriptStep::CompletePolygon => CanvasMsg::CompletePolygon,
            ScriptStep::Clear => CanvasMsg::Clear,
            ScriptStep::Translate => CanvasMsg::translate(),
            ScriptStep::Scale => CanvasMsg::scale(),
            ScriptStep::Rotate => CanvasMsg::rotate(),
        }
    }
}

/// Ordered list of script steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventScript {
    pub steps: Vec<ScriptStep>,
}

impl EventScript {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid event script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("While loading {}", path.display()))
    }

    pub fn messages(&self) -> impl Iterator<Item = CanvasMsg> + '_ {
        self.steps.iter().map(ScriptStep::to_msg)
    }
}
