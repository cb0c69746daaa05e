//! # mdreflow
//!
//! Reflow positioned text fragments from document extractors into
//! structured Markdown.
//!
//! Document-text extractors emit flat streams of positioned fragments
//! with no explicit structure. This library infers structural roles
//! (headings, body paragraphs, sidebars, line breaks) purely from
//! geometric and typographic signals — glyph height relative to the
//! document's height distribution, and rotation — and stitches the
//! fragments into flowing markdown blocks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdreflow::{load_document, render, RenderOptions};
//!
//! fn main() -> mdreflow::Result<()> {
//!     // Load a fragment dump produced by an external extractor
//!     let doc = load_document("fragments.json")?;
//!
//!     // Convert to Markdown
//!     let options = RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Geometric role inference**: headings, paragraphs, and sidebars
//!   from height statistics and rotation alone
//! - **Sidebar handling**: marginal and rotated text collected into
//!   blockquotes instead of interrupting the flow
//! - **Two output granularities**: one markdown document, or per-page
//!   JSON records with blank pages dropped
//! - **Parallel processing**: per-page rendering uses Rayon
//! - **No document parsing**: fragment extraction stays in the upstream
//!   extractor; this crate is pure text-flow analysis

pub mod analyze;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analyze::{
    classify, classify_fragment, reflow, BlockOp, ClassifierConfig, HeightBaseline, Role,
};
pub use error::{Error, Result};
pub use model::{ExtractedDocument, PageContent, PageFragments, TextFragment, Transform};
pub use render::{JsonFormat, PageSelection, RenderOptions};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load an extractor fragment dump from a JSON file.
///
/// # Example
///
/// ```no_run
/// use mdreflow::load_document;
///
/// let doc = load_document("fragments.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ExtractedDocument> {
    let file = File::open(path)?;
    load_document_from_reader(BufReader::new(file))
}

/// Load an extractor fragment dump from a reader.
pub fn load_document_from_reader<R: Read>(reader: R) -> Result<ExtractedDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load an extractor fragment dump from a JSON string.
pub fn load_document_from_str(data: &str) -> Result<ExtractedDocument> {
    Ok(serde_json::from_str(data)?)
}

/// Convert a document to Markdown with default options.
///
/// # Example
///
/// ```no_run
/// use mdreflow::{load_document, to_markdown};
///
/// let doc = load_document("fragments.json").unwrap();
/// let markdown = to_markdown(&doc).unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown(doc: &ExtractedDocument) -> Result<String> {
    render::to_markdown(doc, &RenderOptions::default())
}

/// Convert a document to Markdown with custom options.
pub fn to_markdown_with_options(
    doc: &ExtractedDocument,
    options: &RenderOptions,
) -> Result<String> {
    render::to_markdown(doc, options)
}

/// Convert a document to per-page content records with default options.
pub fn to_pages(doc: &ExtractedDocument) -> Result<Vec<PageContent>> {
    render::to_pages(doc, &RenderOptions::default())
}

/// Convert a document to per-page JSON with default options.
///
/// # Example
///
/// ```no_run
/// use mdreflow::{load_document, to_page_json, JsonFormat};
///
/// let doc = load_document("fragments.json").unwrap();
/// let json = to_page_json(&doc, JsonFormat::Pretty).unwrap();
/// std::fs::write("output.json", json).unwrap();
/// ```
pub fn to_page_json(doc: &ExtractedDocument, format: JsonFormat) -> Result<String> {
    render::to_page_json(doc, &RenderOptions::default(), format)
}

/// Builder for loading and converting fragment dumps.
///
/// # Example
///
/// ```no_run
/// use mdreflow::Mdreflow;
///
/// let markdown = Mdreflow::new()
///     .flush_trailing_sidebar()
///     .sequential()
///     .load("fragments.json")?
///     .to_markdown()?;
/// # Ok::<(), mdreflow::Error>(())
/// ```
pub struct Mdreflow {
    options: RenderOptions,
}

impl Mdreflow {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Set classification thresholds.
    pub fn with_classifier(mut self, config: ClassifierConfig) -> Self {
        self.options = self.options.with_classifier(config);
        self
    }

    /// Flush a still-open sidebar buffer at end of stream.
    pub fn flush_trailing_sidebar(mut self) -> Self {
        self.options = self.options.with_flush_trailing_sidebar(true);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.options = self.options.with_pages(selection);
        self
    }

    /// Disable parallel per-page rendering.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Load a fragment dump from a JSON file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<MdreflowResult> {
        let document = load_document(path)?;
        Ok(self.process(document))
    }

    /// Load a fragment dump from a JSON string.
    pub fn load_str(self, data: &str) -> Result<MdreflowResult> {
        let document = load_document_from_str(data)?;
        Ok(self.process(document))
    }

    /// Wrap an already-loaded document.
    pub fn process(self, document: ExtractedDocument) -> MdreflowResult {
        MdreflowResult {
            document,
            options: self.options,
        }
    }
}

impl Default for Mdreflow {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document paired with render options.
pub struct MdreflowResult {
    /// The loaded document
    pub document: ExtractedDocument,
    /// Render options to use
    options: RenderOptions,
}

impl MdreflowResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.options)
    }

    /// Convert to per-page content records.
    pub fn to_pages(&self) -> Result<Vec<PageContent>> {
        render::to_pages(&self.document, &self.options)
    }

    /// Convert to per-page JSON.
    pub fn to_page_json(&self, format: JsonFormat) -> Result<String> {
        render::to_page_json(&self.document, &self.options, format)
    }

    /// Get the document.
    pub fn document(&self) -> &ExtractedDocument {
        &self.document
    }
}
