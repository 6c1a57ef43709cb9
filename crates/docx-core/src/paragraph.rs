//! Paragraphs and text runs

use crate::{DocxError, Result};
use serde::{Deserialize, Serialize};

/// A paragraph: an ordered sequence of text runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in paragraph order
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single run with a single text fragment
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
        }
    }

    /// Append a run to the paragraph
    pub fn add_run(&mut self, run: Run) -> &mut Run {
        let index = self.runs.len();
        self.runs.push(run);
        &mut self.runs[index]
    }

    /// Runs in paragraph order
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Mutable view of the runs
    pub fn runs_mut(&mut self) -> &mut [Run] {
        &mut self.runs
    }

    /// Concatenated text of all fragments of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.full_text()).collect()
    }
}

/// A text run: an ordered list of text fragments.
///
/// Word splits a run's text into fragments (`w:t` elements); most runs
/// hold exactly one. Fragment positions are stable, so text can be read
/// and written back at a given position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Text fragments in run order
    #[serde(default)]
    pub texts: Vec<String>,
}

impl Run {
    /// Create a run with a single text fragment
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            texts: vec![text.into()],
        }
    }

    /// Text fragment at `pos`, or `None` if the run has no such fragment
    pub fn text(&self, pos: usize) -> Option<&str> {
        self.texts.get(pos).map(String::as_str)
    }

    /// Replace the text fragment at `pos`
    pub fn set_text(&mut self, text: impl Into<String>, pos: usize) -> Result<()> {
        let len = self.texts.len();
        match self.texts.get_mut(pos) {
            Some(slot) => {
                *slot = text.into();
                Ok(())
            }
            None => Err(DocxError::FragmentOutOfRange(pos, len)),
        }
    }

    /// Append a text fragment to the run
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.texts.push(text.into());
    }

    /// Concatenated text of all fragments
    pub fn full_text(&self) -> String {
        self.texts.concat()
    }
}
