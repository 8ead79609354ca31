//! Integration tests for cielab crates.
//!
//! Exercises the conversions through the public API only, against the
//! concrete [`cielab_color::Color`], plain arrays and a foreign container.
