//! Data model for extracted document text.
//!
//! This module defines the intermediate representation that bridges an
//! external document-text extractor and markdown rendering: positioned
//! text fragments, their pages, and the per-page output records.

mod document;
mod fragment;
mod page;

pub use document::ExtractedDocument;
pub use fragment::{TextFragment, Transform};
pub use page::{PageContent, PageFragments};
