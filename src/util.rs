/// Numeric truthiness helpers.
///
/// This module fixes how numbers are read as booleans and how boolean results
/// are written back as numbers. Every comparison and logical operator goes
/// through these helpers so the canonical `0.0`/`1.0` encoding holds
/// everywhere.
pub mod num;
