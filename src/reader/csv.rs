//! CSV-like record source: comma-split positional fields over an
//! in-memory line buffer.

use crate::filter::{FieldAccessor, Value};
use crate::reader::RecordSource;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Reads comma-separated lines and exposes their fields by index.
///
/// No quoting or escaping: a comma always splits. The reader is a cheap
/// clonable handle over shared state; accessor closures hold a clone,
/// which is how they stay bound to the reader after it moves into a
/// worker. The internal mutex guards the buffers against concurrent
/// misuse within one worker, not for cross-worker sharing.
#[derive(Clone)]
pub struct CsvReader {
    state: Arc<Mutex<ReaderState>>,
}

#[derive(Default)]
struct ReaderState {
    pending: VecDeque<String>,
    current: Option<String>,
}

impl CsvReader {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ReaderState::default())),
        }
    }

    /// Fetch field `index` from the currently loaded line.
    fn read(&self, index: usize) -> Option<String> {
        let state = self.state.lock();
        let line = state.current.as_deref()?;
        line.split(',').nth(index).map(str::to_string)
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for CsvReader {
    fn feed(&self, input: &str) {
        let mut state = self.state.lock();
        for line in input.lines() {
            state.pending.push_back(line.to_string());
        }
    }

    fn load_next_line(&self) -> bool {
        let mut state = self.state.lock();
        state.current = state.pending.pop_front();
        state.current.is_some()
    }

    fn string_field(&self, index: usize) -> FieldAccessor {
        let reader = self.clone();
        Box::new(move || reader.read(index).map(Value::String))
    }

    fn number_field(&self, index: usize) -> FieldAccessor {
        let reader = self.clone();
        Box::new(move || {
            reader
                .read(index)
                .and_then(|text| text.trim().parse::<f64>().ok())
                .map(Value::Number)
        })
    }

    fn datetime_field(&self, index: usize, layout: &str) -> FieldAccessor {
        let reader = self.clone();
        let layout = layout.to_string();
        Box::new(move || {
            reader
                .read(index)
                .and_then(|text| NaiveDateTime::parse_from_str(&text, &layout).ok())
                .map(|naive| Value::Datetime(naive.and_utc()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_load_and_read_fields() {
        let reader = CsvReader::new();
        reader.feed("1,monkey,loves,banana\n2,dog,eat,banana\n");

        assert!(reader.load_next_line());
        assert_eq!(reader.read(0), Some("1".to_string()));
        assert_eq!(reader.read(3), Some("banana".to_string()));

        assert!(reader.load_next_line());
        assert_eq!(reader.read(1), Some("dog".to_string()));

        assert!(!reader.load_next_line());
    }

    #[test]
    fn test_no_line_loaded() {
        let reader = CsvReader::new();
        assert_eq!(reader.read(0), None);

        reader.feed("a,b");
        // Still nothing until the line is loaded.
        assert_eq!(reader.read(0), None);
    }

    #[test]
    fn test_index_out_of_range() {
        let reader = CsvReader::new();
        reader.feed("a,b,c");
        reader.load_next_line();
        assert_eq!(reader.read(2), Some("c".to_string()));
        assert_eq!(reader.read(3), None);
    }

    #[test]
    fn test_string_accessor_tracks_current_line() {
        let reader = CsvReader::new();
        let accessor = reader.string_field(1);

        reader.feed("1,monkey\n2,dog");
        reader.load_next_line();
        assert_eq!(accessor(), Some(Value::string("monkey")));

        reader.load_next_line();
        assert_eq!(accessor(), Some(Value::string("dog")));
    }

    #[test]
    fn test_number_accessor() {
        let reader = CsvReader::new();
        reader.feed("42,3.14,banana");
        reader.load_next_line();

        assert_eq!(reader.number_field(0)(), Some(Value::number(42)));
        assert_eq!(reader.number_field(1)(), Some(Value::number(3.14)));
        // Unparsable field reads as absent.
        assert_eq!(reader.number_field(2)(), None);
    }

    #[test]
    fn test_datetime_accessor() {
        let reader = CsvReader::new();
        reader.feed("a,2025-03-20 00:00:00,soon");
        reader.load_next_line();

        let expected = Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap();
        assert_eq!(
            reader.datetime_field(1, "%Y-%m-%d %H:%M:%S")(),
            Some(Value::datetime(expected))
        );
        assert_eq!(reader.datetime_field(2, "%Y-%m-%d %H:%M:%S")(), None);
    }
}
