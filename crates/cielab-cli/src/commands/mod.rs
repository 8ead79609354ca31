//! CLI command implementations

pub mod convert;
pub mod single;

use anyhow::{Context, Result};
use cielab_color::{Color, ColorError, DEFAULT_ALPHA};

/// Formats one color as space separated values.
pub fn format_color(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses one input line into a color.
///
/// Three values get the default alpha. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Color>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut values = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|e| ColorError::invalid_value(format!("'{}': {}", tok, e)))
        })
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("line {}", line_no))?;

    if values.len() == 3 {
        values.push(DEFAULT_ALPHA);
    }
    let color = Color::try_from(values.as_slice())
        .with_context(|| format!("line {}: expected 3 or 4 values", line_no))?;
    Ok(Some(color))
}
