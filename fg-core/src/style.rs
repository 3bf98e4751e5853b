//! Marker styling for emergency facilities and the user's position.
//!
//! The category→style mapping is a constant table, one row per
//! [`Category`] in declaration order, so the lookup is total and needs no
//! runtime branching.

use crate::location::Category;
use serde::{Deserialize, Serialize};

/// Icon shape drawn inside a facility marker (24×24 viewBox path data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Cross,
    Flame,
    Shield,
    Building,
    School,
    Bus,
}

impl Glyph {
    pub fn path(&self) -> &'static str {
        match self {
            Glyph::Cross => "M9 2h6v7h7v6h-7v7H9v-7H2V9h7z",
            Glyph::Flame => "M12 2c1 4 6 6 6 12a6 6 0 0 1-12 0c0-3 2-5 3-7 0 2 1 3 2 3 0-3 0-5 1-8z",
            Glyph::Shield => "M12 2l8 3v6c0 5-3.5 9.5-8 11-4.5-1.5-8-6-8-11V5z",
            Glyph::Building => "M4 22V4l8-2 8 2v18h-6v-5h-4v5zM8 7v2h2V7zm6 0v2h2V7zM8 12v2h2v-2zm6 0v2h2v-2z",
            Glyph::School => "M12 3L1 9l11 6 9-4.9V17h2V9zM5 13.2V17l7 4 7-4v-3.8L12 17z",
            Glyph::Bus => "M4 16V6c0-3 3-4 8-4s8 1 8 4v10c0 .9-.4 1.7-1 2.2V20a1 1 0 0 1-1 1h-1a1 1 0 0 1-1-1v-1H8v1a1 1 0 0 1-1 1H6a1 1 0 0 1-1-1v-1.8c-.6-.5-1-1.3-1-2.2zm2-9v5h12V7z",
        }
    }
}

/// Style descriptor for a facility marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerStyle {
    pub category: Category,
    /// CSS hex color used as the SVG fill.
    pub color: &'static str,
    pub glyph: Glyph,
}

impl MarkerStyle {
    /// Standalone SVG document for this marker. The map bridge turns it into
    /// a `data:` URL.
    pub fn svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="{}" width="24" height="24"><path d="{}"/></svg>"#,
            self.color,
            self.glyph.path()
        )
    }
}

static MARKER_STYLES: [MarkerStyle; 8] = [
    MarkerStyle { category: Category::Hospital, color: "#ef4444", glyph: Glyph::Cross },
    MarkerStyle { category: Category::Fire, color: "#f97316", glyph: Glyph::Flame },
    MarkerStyle { category: Category::Police, color: "#3b82f6", glyph: Glyph::Shield },
    MarkerStyle { category: Category::Shelter, color: "#22c55e", glyph: Glyph::Building },
    MarkerStyle { category: Category::School, color: "#8b5cf6", glyph: Glyph::School },
    MarkerStyle { category: Category::Community, color: "#6366f1", glyph: Glyph::Building },
    MarkerStyle { category: Category::Government, color: "#64748b", glyph: Glyph::Building },
    MarkerStyle { category: Category::Transport, color: "#0ea5e9", glyph: Glyph::Bus },
];

/// Marker style for a facility category.
pub fn style_for(category: Category) -> &'static MarkerStyle {
    &MARKER_STYLES[category as usize]
}

/// Circle symbol marking the device's own location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserMarkerStyle {
    pub title: String,
    pub scale: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub stroke_color: String,
    pub stroke_weight: f64,
}

impl Default for UserMarkerStyle {
    fn default() -> Self {
        Self {
            title: "Your Location".to_string(),
            scale: 10.0,
            fill_color: "#4285F4".to_string(),
            fill_opacity: 1.0,
            stroke_color: "#ffffff".to_string(),
            stroke_weight: 2.0,
        }
    }
}
