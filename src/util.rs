/// Numeric formatting helpers.
///
/// This module renders evaluation results for session output, including the
/// IEEE-754 special values that floating-point evaluation can produce.
pub mod num;
