//! Page-level types.

use super::TextFragment;
use serde::{Deserialize, Serialize};

/// The extracted text fragments of a single page, in reading order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageFragments {
    /// Page number (1-indexed)
    pub number: u32,

    /// Fragments on the page, in extractor order
    pub fragments: Vec<TextFragment>,
}

impl PageFragments {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            fragments: Vec::new(),
        }
    }

    /// Create a page from a fragment sequence.
    pub fn from_fragments(number: u32, fragments: Vec<TextFragment>) -> Self {
        Self { number, fragments }
    }

    /// Append a fragment to the page.
    pub fn push(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }

    /// Check if the page has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Get the number of fragments on the page.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}

/// The rendered markdown of one page, as emitted in per-page mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub page: u32,

    /// Rendered markdown content
    pub content: String,
}

impl PageContent {
    /// Create a page content record.
    pub fn new(page: u32, content: impl Into<String>) -> Self {
        Self {
            page,
            content: content.into(),
        }
    }
}
