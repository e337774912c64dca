//! Boilerplate removal.
//!
//! Project Gutenberg texts wrap the actual book in a licence header and
//! footer. [`trim`] keeps only the span strictly between a start marker and
//! the first end marker that follows it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GUTENBERG_START: &str = r"\*\*\* ?START OF (THIS|THE) PROJECT GUTENBERG EBOOK[^*]*\*\*\*";
pub const GUTENBERG_END: &str = r"(?i)(\*\*\* ?)?end of (the )?project gutenberg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryErrorKind {
    StartNotFound,
    EndNotFound,
}

impl std::fmt::Display for BoundaryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartNotFound => f.write_str("start marker not found"),
            Self::EndNotFound => f.write_str("end marker not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (pattern: {pattern})")]
pub struct BoundaryError {
    pub kind: BoundaryErrorKind,
    pub pattern: String,
}

impl BoundaryError {
    fn new(kind: BoundaryErrorKind, pattern: &Regex) -> Self {
        Self {
            kind,
            pattern: pattern.as_str().to_string(),
        }
    }
}

pub type BoundaryResult<T> = Result<T, BoundaryError>;

/// Compiled start/end marker pair.
#[derive(Debug, Clone)]
pub struct BoundaryMarkers {
    start: Regex,
    end: Regex,
}

impl BoundaryMarkers {
    pub fn new(start_pattern: &str, end_pattern: &str) -> crate::Result<Self> {
        Ok(Self {
            start: Regex::new(start_pattern)?,
            end: Regex::new(end_pattern)?,
        })
    }

    /// Markers for the standard Project Gutenberg header and footer.
    pub fn gutenberg() -> Self {
        Self {
            start: Regex::new(GUTENBERG_START).expect("static pattern compiles"),
            end: Regex::new(GUTENBERG_END).expect("static pattern compiles"),
        }
    }

    pub const fn start(&self) -> &Regex {
        &self.start
    }

    pub const fn end(&self) -> &Regex {
        &self.end
    }

    pub fn trim<'a>(&self, raw: &'a str) -> BoundaryResult<TrimmedText<'a>> {
        trim(raw, &self.start, &self.end)
    }
}

impl Default for BoundaryMarkers {
    fn default() -> Self {
        Self::gutenberg()
    }
}

/// Text between the markers, borrowed from the raw document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimmedText<'a> {
    pub text: &'a str,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl TrimmedText<'_> {
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Returns the text after the first `start` match and before the first `end`
/// match that begins at or after it.
///
/// An `end` match that only occurs before the start marker is reported as
/// [`BoundaryErrorKind::EndNotFound`].
pub fn trim<'a>(raw: &'a str, start: &Regex, end: &Regex) -> BoundaryResult<TrimmedText<'a>> {
    let start_offset = start
        .find(raw)
        .ok_or_else(|| BoundaryError::new(BoundaryErrorKind::StartNotFound, start))?
        .end();

    let end_offset = end
        .find_at(raw, start_offset)
        .ok_or_else(|| BoundaryError::new(BoundaryErrorKind::EndNotFound, end))?
        .start();

    Ok(TrimmedText {
        text: &raw[start_offset..end_offset],
        start_offset,
        end_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn markers() -> BoundaryMarkers {
        BoundaryMarkers::new("<<START>>", "<<END>>").unwrap()
    }

    #[test]
    fn test_trim_between_markers() {
        let trimmed = markers().trim("header <<START>>body text<<END>> footer").unwrap();

        assert_eq!(trimmed.text, "body text");
        assert_eq!(trimmed.start_offset, 16);
        assert_eq!(trimmed.end_offset, 25);
    }

    #[test]
    fn test_start_missing_regardless_of_end() {
        let err = markers().trim("no start here <<END>>").unwrap_err();
        assert_eq!(err.kind, BoundaryErrorKind::StartNotFound);
        assert_eq!(err.pattern, "<<START>>");

        let err = markers().trim("nothing at all").unwrap_err();
        assert_eq!(err.kind, BoundaryErrorKind::StartNotFound);
    }

    #[test]
    fn test_end_missing() {
        let err = markers().trim("<<START>> runs to the end").unwrap_err();

        assert_eq!(err.kind, BoundaryErrorKind::EndNotFound);
        assert_eq!(err.pattern, "<<END>>");
    }

    #[test]
    fn test_end_before_start_is_end_not_found() {
        let err = markers().trim("<<END>> misplaced <<START>> body").unwrap_err();

        assert_eq!(err.kind, BoundaryErrorKind::EndNotFound);
    }

    #[test]
    fn test_uses_first_end_after_start() {
        let trimmed = markers()
            .trim("<<END>> <<START>>one<<END>>two<<END>>")
            .unwrap();

        assert_eq!(trimmed.text, "one");
    }

    #[test]
    fn test_adjacent_markers_give_empty_text() {
        let trimmed = markers().trim("<<START>><<END>>").unwrap();

        assert!(trimmed.is_empty());
    }

    #[test]
    fn test_gutenberg_markers() {
        let raw = "The Project Gutenberg eBook of Alice\n\
                   *** START OF THE PROJECT GUTENBERG EBOOK ALICE'S ADVENTURES IN WONDERLAND ***\n\
                   Down the Rabbit-Hole\n\
                   *** END OF THE PROJECT GUTENBERG EBOOK ALICE'S ADVENTURES IN WONDERLAND ***";

        let trimmed = BoundaryMarkers::gutenberg().trim(raw).unwrap();

        assert_eq!(trimmed.text.trim(), "Down the Rabbit-Hole");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            BoundaryMarkers::new("(unclosed", "end"),
            Err(crate::Error::InvalidPattern(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_trim_returns_exact_span(
            prefix in "[a-z ]{0,20}",
            body in "[a-z .]{0,40}",
            suffix in "[a-z ]{0,20}",
        ) {
            let raw = format!("{prefix}<<START>>{body}<<END>>{suffix}");

            let trimmed = markers().trim(&raw).unwrap();

            prop_assert_eq!(trimmed.text, body.as_str());
        }

        #[test]
        fn prop_no_start_marker_is_start_not_found(text in "[a-z <>]{0,60}") {
            prop_assume!(!text.contains("<<START>>"));

            let err = markers().trim(&text).unwrap_err();

            prop_assert_eq!(err.kind, BoundaryErrorKind::StartNotFound);
        }
    }
}
