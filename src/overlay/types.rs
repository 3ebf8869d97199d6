//! Overlay geometry types
//!
//! Page-relative rectangles and the highlight color palette. All
//! coordinates use the same unit as the fragment geometry reported by the
//! rendering collaborator (typically CSS pixels or points).

use serde::{Deserialize, Serialize};

/// Rectangle (bounding box)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shift the rectangle by an offset, keeping its size
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Self {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::from_ltrb(left, top, right, bottom)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Named highlight color
///
/// Parsed from `color:<name>` annotation tags. Unrecognized names fall
/// back to the configured default (yellow unless overridden).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    #[default]
    Yellow,
    Green,
    Blue,
    Pink,
    Orange,
    Purple,
}

impl HighlightColor {
    /// Parse a color name (the part after `color:` in a tag)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "pink" => Some(Self::Pink),
            "orange" => Some(Self::Orange),
            "purple" => Some(Self::Purple),
            _ => None,
        }
    }

    /// CSS color value for the rendering surface
    pub fn css(&self) -> &'static str {
        match self {
            Self::Yellow => "#ffff00",
            Self::Green => "#00e676",
            Self::Blue => "#4fc3f7",
            Self::Pink => "#ff80ab",
            Self::Orange => "#ffab40",
            Self::Purple => "#b388ff",
        }
    }
}

/// One page-relative box used to render part of a highlighted match
///
/// A single occurrence may yield several of these: one per fragment it
/// spans, or more when a fragment reports multiple boxes for a sub-range
/// (a line wrap within the fragment).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub color: HighlightColor,
}

impl OverlayRect {
    pub fn from_rect(rect: Rect, color: HighlightColor) -> Self {
        Self {
            top: rect.y,
            left: rect.x,
            width: rect.width,
            height: rect.height,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 15.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 35.0);
    }

    #[test]
    fn test_rect_translate() {
        let r = Rect::new(10.0, 20.0, 100.0, 15.0);
        let t = r.translate(-5.0, -10.0);
        assert_eq!(t, Rect::new(5.0, 10.0, 100.0, 15.0));
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 15.0, 15.0));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(HighlightColor::from_name("green"), Some(HighlightColor::Green));
        assert_eq!(HighlightColor::from_name(" Pink "), Some(HighlightColor::Pink));
        assert_eq!(HighlightColor::from_name("chartreuse"), None);
    }

    #[test]
    fn test_color_default_is_yellow() {
        assert_eq!(HighlightColor::default(), HighlightColor::Yellow);
        assert_eq!(HighlightColor::default().css(), "#ffff00");
    }

    #[test]
    fn test_overlay_rect_serialization() {
        let rect = OverlayRect::from_rect(Rect::new(4.0, 8.0, 60.0, 12.0), HighlightColor::Green);
        let json = serde_json::to_string(&rect).unwrap();
        assert!(json.contains("\"top\":8.0"));
        assert!(json.contains("\"left\":4.0"));
        assert!(json.contains("\"color\":\"green\""));

        let parsed: OverlayRect = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rect);
    }
}
