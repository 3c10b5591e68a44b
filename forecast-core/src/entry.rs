//! Interpretation of `processedCities` entries.
//!
//! The server flags a failed city by appending a marker to its name,
//! e.g. `"Foo(error: timeout)"`. Only the marker's opening is recognised;
//! whatever follows it is kept verbatim and never parsed further.

/// Substring that flags a failed city.
pub const ERROR_MARKER: &str = "(error:";

/// One entry of `processedCities`, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessedEntry<'a> {
    /// Plain city name, to be looked up in `weatherData`.
    City(&'a str),

    /// Error-flagged entry.
    Failed {
        /// Text before the marker, trimmed.
        name: &'a str,
        /// The whole entry as received.
        raw: &'a str,
    },
}

impl<'a> ProcessedEntry<'a> {
    pub fn parse(entry: &'a str) -> Self {
        match entry.find(ERROR_MARKER) {
            Some(pos) => ProcessedEntry::Failed { name: entry[..pos].trim(), raw: entry },
            None => ProcessedEntry::City(entry),
        }
    }
}
