//! OCR boundary types
//!
//! The OCR call itself lives outside this crate. What arrives here is either a
//! plain string (flat extraction) or an ordered list of [`Line`]s with layout
//! information (layout-aware extraction). [`OcrOutput`] tags which of the two a
//! capture provides so the pipeline can dispatch once.

use serde::{Deserialize, Serialize};

use crate::error::{RelayError, Result};

/// One line (paragraph) of recognized text with its horizontal position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The recognized text content
    pub text: String,
    /// Raw indent: leftmost x coordinate of the line's bounding region
    pub indent: i32,
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
}

/// A vertex of a recognized region's bounding polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Line {
    /// Create a new line
    pub fn new(text: impl Into<String>, indent: i32, page: u32) -> Self {
        Self {
            text: text.into(),
            indent,
            page,
        }
    }

    /// Build a line from a recognized text region.
    ///
    /// The indent is the minimum x over the region's bounding vertices. Regions
    /// with blank text or without any vertex yield `None`.
    pub fn from_region(text: &str, vertices: &[Vertex], page: u32) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let indent = vertices.iter().map(|v| v.x).min()?;
        Some(Self::new(text, indent, page))
    }
}

/// OCR output for one capture, tagged by the extraction path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrOutput {
    /// Per-line layout data in reading order
    LayoutAware(Vec<Line>),
    /// Plain newline-delimited text
    Flat(String),
}

impl OcrOutput {
    /// Short name of the extraction path, for diagnostics
    pub fn path_name(&self) -> &'static str {
        match self {
            Self::LayoutAware(_) => "layout",
            Self::Flat(_) => "flat",
        }
    }
}

/// Decode a layout capture serialized as a JSON array of lines.
pub fn parse_layout(json: &str) -> Result<Vec<Line>> {
    serde_json::from_str(json).map_err(RelayError::InvalidLayout)
}
