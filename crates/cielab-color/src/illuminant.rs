//! Reference white and CIE Lab curve constants.
//!
//! All Lab conversions in this crate are relative to CIE Standard
//! Illuminant D65 with the 2 degree observer. Tristimulus values use the
//! 0..100 scale (Y of the reference white is 100).

// ============================================================================
// Reference White
// ============================================================================

/// CIE Standard Illuminant D65, 2 degree observer: `[Xn, Yn, Zn]`.
///
/// The reference white used by sRGB, Rec.709 and Rec.2020.
pub const D65: [f64; 3] = [95.047, 100.0, 108.883];

// ============================================================================
// CIE Lab Curve
// ============================================================================

/// Breakpoint between the linear toe and the cube-root segment.
///
/// Compared against the cubed value when decoding Lab, and against the
/// white-normalized value when encoding.
pub const CIE_EPSILON: f64 = 0.008856;

/// Slope of the linear segment near black.
pub const CIE_SLOPE: f64 = 7.787;

/// Offset of the linear segment (`16 / 116`).
pub const CIE_OFFSET: f64 = 16.0 / 116.0;
