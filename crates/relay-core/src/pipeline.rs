//! Capture-level chunking: picks the extraction path and runs it.

use crate::chunk::{from_hierarchy, from_lines, Chunk};
use crate::hierarchy::build_hierarchy;
use crate::indent::{cluster_indents, distinct_indents};
use crate::normalize::normalize_lines;
use crate::ocr::{Line, OcrOutput};

/// Default minimum gap between indent clusters, in raw indent units (pixels)
pub const DEFAULT_INDENT_THRESHOLD: u32 = 40;

/// Tunables for the chunking pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkingOptions {
    /// Minimum distance from a cluster's anchor that starts a new level
    pub indent_threshold: u32,
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            indent_threshold: DEFAULT_INDENT_THRESHOLD,
        }
    }
}

/// Chunk one capture, dispatching once on its extraction path.
pub fn chunk_capture(output: &OcrOutput, options: &ChunkingOptions) -> Vec<Chunk> {
    tracing::debug!("Using {} OCR output", output.path_name());

    let chunks = match output {
        OcrOutput::LayoutAware(lines) => chunk_layout(lines, options),
        OcrOutput::Flat(text) => chunk_text(text),
    };

    for chunk in &chunks {
        tracing::debug!(chunk_id = chunk.id, "{}", chunk.text);
    }

    chunks
}

/// Chunk layout-aware OCR lines: cluster indents, rebuild the hierarchy and
/// emit one chunk per top-level line.
///
/// Lines with blank text are dropped first; they carry nothing to interpret.
pub fn chunk_layout(lines: &[Line], options: &ChunkingOptions) -> Vec<Chunk> {
    let lines: Vec<Line> = lines
        .iter()
        .filter(|line| !line.text.trim().is_empty())
        .cloned()
        .collect();

    for line in &lines {
        tracing::debug!(indent = line.indent, page = line.page, "{}", line.text);
    }

    let indents = distinct_indents(&lines);
    let levels = cluster_indents(&indents, options.indent_threshold);
    tracing::debug!(
        "Resolved {} distinct indents into {} levels (threshold {})",
        levels.len(),
        levels.depth(),
        options.indent_threshold
    );

    let forest = build_hierarchy(&lines, &levels);
    from_hierarchy(&forest)
}

/// Chunk flat OCR text: normalize lines, then group them.
///
/// Normalization removes blank lines, so flat text without layout information
/// yields a single chunk unless it is empty.
pub fn chunk_text(raw: &str) -> Vec<Chunk> {
    let lines = normalize_lines(raw);
    tracing::trace!("Normalized flat OCR text into {} lines", lines.len());
    from_lines(&lines)
}
