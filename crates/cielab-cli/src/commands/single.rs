//! Single-color conversions: `to-xyz` and `to-lab`.

use crate::{ToLabArgs, ToXyzArgs};
use anyhow::Result;
use cielab_color::{from_lab, get_lab, Color, ColorValue, DEFAULT_ALPHA};
use tracing::debug;

pub fn run_to_xyz(args: ToXyzArgs, precision: usize) -> Result<()> {
    println!("{}", to_xyz_line(&args, precision));
    Ok(())
}

pub fn run_to_lab(args: ToLabArgs, precision: usize) -> Result<()> {
    println!("{}", to_lab_line(&args, precision));
    Ok(())
}

/// Converts the Lab arguments and formats `X Y Z alpha`.
pub fn to_xyz_line(args: &ToXyzArgs, precision: usize) -> String {
    debug!(l = args.l, a = args.a, b = args.b, alpha = ?args.alpha, "lab -> xyz");
    let color: Color = from_lab(args.l, args.a, args.b, args.alpha);
    super::format_color(color.as_slice(), precision)
}

/// Converts the XYZ arguments and formats `L a b alpha`.
pub fn to_lab_line(args: &ToLabArgs, precision: usize) -> String {
    debug!(x = args.x, y = args.y, z = args.z, alpha = ?args.alpha, "xyz -> lab");
    let mut color = Color::create();
    color.set_xyz(args.x, args.y, args.z, args.alpha.unwrap_or(DEFAULT_ALPHA));
    super::format_color(&get_lab(&color).to_array(), precision)
}
