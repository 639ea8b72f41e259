//! Line normalization for flat OCR text.

/// Normalize raw OCR output into clean, non-empty lines.
///
/// Splits on line boundaries (`\n` and `\r\n`), trims surrounding whitespace
/// and drops lines that end up empty. Order is preserved.
pub fn normalize_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
