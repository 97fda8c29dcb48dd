//! Domain-specific assertion macros for sdash harnesses.
//!
//! These wrap `pretty_assertions` so a failing ordering check prints both
//! sequences side by side.

/// Assert the timestamps of a sequence of events, in order.
///
/// ```rust
/// assert_timestamps!(dashboard.feed, ["t002", "t001"]);
/// ```
#[macro_export]
macro_rules! assert_timestamps {
    ($events:expr, $expected:expr) => {{
        let actual: Vec<&str> = $events.iter().map(|e| e.timestamp.as_str()).collect();
        let expected: Vec<&str> = $expected.iter().copied().collect();
        pretty_assertions::assert_eq!(actual, expected, "event timestamps differ");
    }};
}

/// Assert the filenames of a sequence of thumbnails, in order.
#[macro_export]
macro_rules! assert_filenames {
    ($thumbnails:expr, $expected:expr) => {{
        let actual: Vec<&str> = $thumbnails
            .iter()
            .map(|t| t.capture.filename.as_str())
            .collect();
        let expected: Vec<&str> = $expected.iter().copied().collect();
        pretty_assertions::assert_eq!(actual, expected, "capture filenames differ");
    }};
}

/// Assert that two event sequences are identical, reporting the first
/// differing index.
pub fn assert_same_events(actual: &[sdash_core::Event], expected: &[sdash_core::Event]) {
    pretty_assertions::assert_eq!(
        actual.len(),
        expected.len(),
        "event counts differ:\n  actual:   {actual:?}\n  expected: {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        pretty_assertions::assert_eq!(a, e, "event #{i} differs");
    }
}
