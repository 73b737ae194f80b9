//! Text edit primitives and the argument-swap fix.
//!
//! Fixes are modeled on two levels:
//! - [`ArgSwap`] is the semantic fix a rule emits: "these two argument
//!   slices trade places".
//! - [`TextEdit`] is the concrete form the applier consumes: a range
//!   replacement in a file's source text.
//!
//! The swap is textual. Each argument's original source text (quoting and
//! formatting included) replaces the other argument's range, so applying a
//! swap and re-parsing yields the same expressions in the opposite order.

/// Half-open byte range into a file's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single range replacement in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub text: String,
}

/// The source slice of one call argument: its byte range in the file and
/// its original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSlice {
    pub range: TextRange,
    pub text: String,
}

impl ArgSlice {
    pub fn new(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// Swap two argument slices in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSwap {
    pub first: ArgSlice,
    pub second: ArgSlice,
}

impl ArgSwap {
    pub fn new(first: ArgSlice, second: ArgSlice) -> Self {
        Self { first, second }
    }

    /// Lower the swap into two independent range replacements.
    pub fn edits(&self) -> Vec<TextEdit> {
        vec![
            TextEdit {
                range: self.first.range,
                text: self.second.text.clone(),
            },
            TextEdit {
                range: self.second.range,
                text: self.first.text.clone(),
            },
        ]
    }
}

/// Apply a set of non-overlapping edits to a source string.
///
/// Edits are applied back-to-front so earlier offsets stay valid while
/// later ranges are rewritten.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut result = source.to_string();
    for edit in sorted {
        result.replace_range(edit.range.start..edit.range.end, &edit.text);
    }
    result
}
