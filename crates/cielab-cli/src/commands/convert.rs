//! Batch conversion of colors read line by line.

use crate::{ConvertArgs, Target};
use anyhow::{Context, Result};
use cielab_color::buffer::{lab_to_xyz_buffer, xyz_to_lab_buffer};
use cielab_color::CHANNELS;
use std::io::Read;
use tracing::{debug, info};

pub fn run(args: ConvertArgs, precision: usize) -> Result<()> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let out = convert_text(&text, args.to)?;
    for px in out.chunks_exact(CHANNELS) {
        println!("{}", super::format_color(px, precision));
    }
    Ok(())
}

/// Parses `text` and converts every color toward `to`.
pub fn convert_text(text: &str, to: Target) -> Result<Vec<f64>> {
    let mut data = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(px) = super::parse_line(line, i + 1)? {
            data.extend_from_slice(px.as_slice());
        }
    }
    debug!(colors = data.len() / CHANNELS, target = ?to, "parsed input");

    match to {
        Target::Xyz => lab_to_xyz_buffer(&mut data)?,
        Target::Lab => xyz_to_lab_buffer(&mut data)?,
    }
    info!(colors = data.len() / CHANNELS, "converted");
    Ok(data)
}
