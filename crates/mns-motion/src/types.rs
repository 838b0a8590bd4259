//! Identifiers and style values shared by every motion component.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Stable identifier of a page element, keyed by content rather than position.
///
/// Identifiers follow the `section.role.key` convention, e.g.
/// `products.card.joint-mortar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a `section.role.key` identifier, slugging the key.
    pub fn scoped(section: &str, role: &str, key: &str) -> Self {
        Self(format!("{section}.{role}.{}", slug(key)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The section prefix of a scoped identifier.
    pub fn section(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Lowercase ASCII slug: alphanumerics kept, every other run collapsed to `-`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Process-unique transition number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

impl AnimationId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AnimationId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Inside its delay.
    #[default]
    Pending,
    Running,
    Finished,
    Cancelled,
}

/// Visual properties a reveal can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatableProperty {
    Opacity,
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// In-plane rotation in degrees.
    Rotate,
    /// Rotation around the horizontal axis in degrees.
    RotateX,
}

impl AnimatableProperty {
    pub const ALL: [AnimatableProperty; 6] = [
        Self::Opacity,
        Self::TranslateX,
        Self::TranslateY,
        Self::Scale,
        Self::Rotate,
        Self::RotateX,
    ];

    /// Value of this property when an element is at rest and fully visible.
    pub fn rest_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::TranslateX | Self::TranslateY | Self::Rotate | Self::RotateX => 0.0,
        }
    }
}

/// Snapshot of every animatable property of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleFrame {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub rotate_x: f64,
}

impl Default for StyleFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl StyleFrame {
    /// Fully visible, untransformed.
    pub const IDENTITY: StyleFrame = StyleFrame {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
    };

    pub fn get(&self, property: AnimatableProperty) -> f64 {
        match property {
            AnimatableProperty::Opacity => self.opacity,
            AnimatableProperty::TranslateX => self.translate_x,
            AnimatableProperty::TranslateY => self.translate_y,
            AnimatableProperty::Scale => self.scale,
            AnimatableProperty::Rotate => self.rotate,
            AnimatableProperty::RotateX => self.rotate_x,
        }
    }

    pub fn set(&mut self, property: AnimatableProperty, value: f64) {
        match property {
            AnimatableProperty::Opacity => self.opacity = value,
            AnimatableProperty::TranslateX => self.translate_x = value,
            AnimatableProperty::TranslateY => self.translate_y = value,
            AnimatableProperty::Scale => self.scale = value,
            AnimatableProperty::Rotate => self.rotate = value,
            AnimatableProperty::RotateX => self.rotate_x = value,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, property: AnimatableProperty, value: f64) -> Self {
        self.set(property, value);
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(AnimatableProperty::Opacity, value)
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        self.with(AnimatableProperty::TranslateX, x)
            .with(AnimatableProperty::TranslateY, y)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(AnimatableProperty::Scale, value)
    }

    pub fn rotate(self, degrees: f64) -> Self {
        self.with(AnimatableProperty::Rotate, degrees)
    }

    pub fn rotate_x(self, degrees: f64) -> Self {
        self.with(AnimatableProperty::RotateX, degrees)
    }

    /// Properties whose value differs between `self` and `other`.
    pub fn differing(&self, other: &StyleFrame) -> Vec<AnimatableProperty> {
        AnimatableProperty::ALL
            .into_iter()
            .filter(|p| (self.get(*p) - other.get(*p)).abs() > f64::EPSILON)
            .collect()
    }

    pub fn is_identity(&self) -> bool {
        self.differing(&Self::IDENTITY).is_empty()
    }

    /// Inline CSS for this frame, or `None` when the frame is the identity.
    pub fn to_css(&self) -> Option<String> {
        if self.is_identity() {
            return None;
        }

        let mut transforms = Vec::new();
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            transforms.push(format!(
                "translate({}px, {}px)",
                fmt_number(self.translate_x),
                fmt_number(self.translate_y)
            ));
        }
        if self.scale != 1.0 {
            transforms.push(format!("scale({})", fmt_number(self.scale)));
        }
        if self.rotate != 0.0 {
            transforms.push(format!("rotate({}deg)", fmt_number(self.rotate)));
        }
        if self.rotate_x != 0.0 {
            transforms.push(format!("rotateX({}deg)", fmt_number(self.rotate_x)));
        }

        let mut declarations = Vec::new();
        if self.opacity != 1.0 {
            declarations.push(format!("opacity: {}", fmt_number(self.opacity)));
        }
        if !transforms.is_empty() {
            declarations.push(format!("transform: {}", transforms.join(" ")));
        }
        Some(declarations.join("; "))
    }
}

/// Format with at most three decimals and no trailing zeros.
pub(crate) fn fmt_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}
