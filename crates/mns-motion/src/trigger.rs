//! Viewport triggers.
//!
//! A trigger start is written the way scroll-trigger engines write it:
//! `"<element edge> <viewport position>"`, e.g. `"top 85%"` fires once the
//! element's top edge reaches the line 85% of the way down the viewport.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{ElementRect, Viewport};
use super::types::ElementId;

/// Which edge of the element is compared against the trigger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn of(self, rect: &ElementRect) -> f32 {
        match self {
            Self::Top => rect.top(),
            Self::Center => rect.center_y(),
            Self::Bottom => rect.bottom(),
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriggerParseError {
    #[error("trigger `{0}` must be `<edge> <position>`")]
    Shape(String),
    #[error("unknown element edge `{0}`")]
    Edge(String),
    #[error("invalid viewport position `{0}`")]
    Position(String),
}

/// Where an element must be for its trigger to count as entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TriggerStart {
    pub edge: Edge,
    /// Position of the trigger line, in percent of the viewport height.
    pub viewport_percent: f32,
}

impl TriggerStart {
    pub const fn top(viewport_percent: f32) -> Self {
        Self {
            edge: Edge::Top,
            viewport_percent,
        }
    }

    /// Whether the element's edge is at or above the trigger line.
    ///
    /// Once the viewport reaches the end of the document the line drops to
    /// the viewport's bottom edge, so elements too close to the end for
    /// their line to ever reach them still count as entered when in view.
    pub fn has_entered(&self, rect: &ElementRect, viewport: &Viewport) -> bool {
        let mut line = viewport.line_at(self.viewport_percent / 100.0);
        if viewport.at_document_end() {
            line = line.max(viewport.bottom());
        }
        self.edge.of(rect) <= line
    }
}

impl fmt::Display for TriggerStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.edge.keyword(), self.viewport_percent)
    }
}

impl FromStr for TriggerStart {
    type Err = TriggerParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let (Some(edge), Some(position), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TriggerParseError::Shape(input.to_string()));
        };

        let edge = match edge {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            other => return Err(TriggerParseError::Edge(other.to_string())),
        };

        let viewport_percent = match position {
            "top" => 0.0,
            "center" => 50.0,
            "bottom" => 100.0,
            other => other
                .strip_suffix('%')
                .and_then(|number| number.parse::<f32>().ok())
                .filter(|percent| percent.is_finite())
                .ok_or_else(|| TriggerParseError::Position(other.to_string()))?,
        };

        Ok(Self {
            edge,
            viewport_percent,
        })
    }
}

impl TryFrom<String> for TriggerStart {
    type Error = TriggerParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TriggerStart> for String {
    fn from(value: TriggerStart) -> Self {
        value.to_string()
    }
}

/// When a batch starts playing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Play as soon as the batch is registered.
    OnMount,
    /// Play when the trigger element scrolls past the start line.
    Scroll {
        start: TriggerStart,
        /// Judge every member by this element instead of by itself.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        anchor: Option<ElementId>,
    },
}

impl Trigger {
    pub fn scroll(start: TriggerStart) -> Self {
        Self::Scroll { start, anchor: None }
    }

    pub fn anchored(start: TriggerStart, anchor: ElementId) -> Self {
        Self::Scroll {
            start,
            anchor: Some(anchor),
        }
    }
}

/// What happens when an element scrolls back above its trigger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayPolicy {
    /// Play the entrance once and stay visible.
    #[default]
    PlayOnce,
    /// Fade back out when leaving upward; replay on the next entry.
    PlayAndReverse,
}

/// How entering members are grouped for staggering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// Members entering during the same update share one staggered run.
    #[default]
    Batch,
    /// Each member has its own trigger; its delay follows registration order.
    Individual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_start() {
        let start: TriggerStart = "top 85%".parse().unwrap();
        assert_eq!(start, TriggerStart::top(85.0));
        assert_eq!(start.to_string(), "top 85%");
    }

    #[test]
    fn test_parse_keyword_position() {
        let start: TriggerStart = "center bottom".parse().unwrap();
        assert_eq!(start.edge, Edge::Center);
        assert_eq!(start.viewport_percent, 100.0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "top".parse::<TriggerStart>(),
            Err(TriggerParseError::Shape(_))
        ));
        assert!(matches!(
            "left 80%".parse::<TriggerStart>(),
            Err(TriggerParseError::Edge(_))
        ));
        assert!(matches!(
            "top 80".parse::<TriggerStart>(),
            Err(TriggerParseError::Position(_))
        ));
        assert!(matches!(
            "top 80% extra".parse::<TriggerStart>(),
            Err(TriggerParseError::Shape(_))
        ));
    }

    #[test]
    fn test_has_entered_uses_trigger_line() {
        let start = TriggerStart::top(80.0);
        let viewport = Viewport::new(1280.0, 1000.0);
        let rect = ElementRect::new(0.0, 900.0, 100.0, 100.0);

        assert!(!start.has_entered(&rect, &viewport));
        assert!(start.has_entered(&rect, &viewport.scrolled_to(100.0)));
    }

    #[test]
    fn test_line_clamps_at_document_end() {
        let start = TriggerStart::top(85.0);
        let rect = ElementRect::new(0.0, 2950.0, 100.0, 40.0);
        let bottom = Viewport::new(1280.0, 1000.0).scrolled_to(2000.0);

        assert!(!start.has_entered(&rect, &bottom));
        assert!(start.has_entered(&rect, &bottom.with_document_height(3000.0)));
    }

    #[test]
    fn test_trigger_serializes_start_as_string() {
        let trigger = Trigger::anchored(TriggerStart::top(75.0), ElementId::new("testimonials.card.main"));
        let json = serde_json::to_string(&trigger).unwrap();
        assert!(json.contains("\"start\":\"top 75%\""));

        let back: Trigger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trigger);
    }

    #[test]
    fn test_invalid_start_rejected_on_deserialize() {
        let result: Result<Trigger, _> = serde_json::from_str(r#"{"type":"scroll","start":"middle 10%"}"#);
        assert!(result.is_err());
    }
}
