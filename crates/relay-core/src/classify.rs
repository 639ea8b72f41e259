//! Classification boundary
//!
//! Interpreting chunks is the job of a language model outside this crate.
//! This module owns both sides of that call: the prompts handed to the model
//! and the decoding of the items it returns.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::error::{RelayError, Result};

/// Stable interpretation rules for OCR-based notes.
pub const SYSTEM_PROMPT: &str = "\
You are an assistant that interprets OCR output from handwritten personal notes.

Important context:
- The text comes from OCR and may contain errors.
- Line breaks and grouping may be wrong.
- Chunks are only hints, not guarantees.
- Indented bullet lines inside a chunk were written beneath the line above them.

General rules:
- Reconstruct the intended meaning of the notes.
- Combine or split information if it makes semantic sense.
- Ignore already completed tasks.

Output rules:
- Output ONLY valid JSON.
- Do NOT add explanations or prose.
- Confidence must be between 0.0 and 1.0.";

/// Kind of item recognized in a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Todo,
    Note,
    Idea,
    Project,
    Data,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Note => "note",
            Self::Idea => "idea",
            Self::Project => "project",
            Self::Data => "data",
        }
    }
}

/// One interpreted item returned by the language model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub text: String,
    #[serde(default)]
    pub level: usize,
    pub confidence: f64,
}

/// Something that turns chunks into typed items
pub trait Classifier {
    fn classify(&self, chunks: &[Chunk]) -> Result<Vec<Item>>;
}

/// Build the per-capture user prompt listing the chunks.
pub fn build_prompt(chunks: &[Chunk]) -> String {
    let mut prompt = String::from(
        "These are OCR chunks extracted from handwritten personal notes.\n\
         Chunk boundaries are hints only.\n\nChunks:\n",
    );

    for chunk in chunks {
        // Writing to a String cannot fail
        let _ = writeln!(prompt, "[{}] {}", chunk.id, chunk.text);
    }

    prompt.push_str(
        "\nYour task:\n\
         - Interpret the meaning of the notes.\n\
         - Identify todos, notes, ideas, and projects.\n\
         - Reconstruct intent where possible.\n\
         \n\
         Return a JSON array.\n\
         \n\
         Each item must have:\n\
         - type (todo | note | idea | project)\n\
         - text\n\
         - confidence (0.0 - 1.0)\n",
    );

    prompt.trim().to_string()
}

/// Decode the model's raw output into items.
pub fn parse_items(raw: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> =
        serde_json::from_str(raw.trim()).map_err(|source| RelayError::InvalidClassification {
            source,
            raw: raw.to_string(),
        })?;

    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, item)| !(0.0..=1.0).contains(&item.confidence))
    {
        return Err(RelayError::ConfidenceOutOfRange {
            index,
            confidence: item.confidence,
        });
    }

    Ok(items)
}

/// Classifier that replays a recorded model response.
#[derive(Debug, Clone)]
pub struct ReplayClassifier {
    response: String,
}

impl ReplayClassifier {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Classifier for ReplayClassifier {
    fn classify(&self, chunks: &[Chunk]) -> Result<Vec<Item>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(raw = %self.response, "Replaying recorded classification");
        parse_items(&self.response)
    }
}
