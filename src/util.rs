/// Number conversion helpers.
///
/// This module provides the conversions between numbers and text that the
/// value model relies on: rendering an `f64` the way a script author expects
/// to read it back, and converting arbitrary text into a number with the
/// permissive rules used by loose comparison and arithmetic.
pub mod num;
/// Helpers for the JSON text of list literals.
pub mod json;
