//! Record sources: line-oriented readers exposing field accessors.

pub mod csv;

pub use csv::CsvReader;

use crate::filter::FieldAccessor;

/// A line-oriented source of field-addressable records.
///
/// Implementors buffer raw text, advance through it one record at a
/// time, and hand out accessor closures bound to positional fields of
/// the currently loaded record. The accessors returned here are what
/// [`crate::filter::PredicateGroup`] leaves evaluate against, so each
/// concurrent evaluator must own its own source instance.
pub trait RecordSource: Send + Sync {
    /// Append raw text to the input buffer.
    fn feed(&self, input: &str);

    /// Advance to the next record. Returns `false` at end of input.
    fn load_next_line(&self) -> bool;

    /// Accessor for field `index` as a string.
    fn string_field(&self, index: usize) -> FieldAccessor;

    /// Accessor for field `index` parsed as a number. An unparsable
    /// field reads as absent.
    fn number_field(&self, index: usize) -> FieldAccessor;

    /// Accessor for field `index` parsed as a datetime with the given
    /// chrono format. An unparsable field reads as absent.
    fn datetime_field(&self, index: usize, layout: &str) -> FieldAccessor;
}
