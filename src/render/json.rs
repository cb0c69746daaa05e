//! Per-page JSON rendering for extracted documents.

use log::debug;
use rayon::prelude::*;

use crate::analyze::HeightBaseline;
use crate::error::{Error, Result};
use crate::model::{ExtractedDocument, PageContent, PageFragments};

use super::markdown::render_fragments;
use super::RenderOptions;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Reflow each selected page separately against the document-wide
/// baseline. Pages whose content is blank after trimming are dropped.
pub fn to_pages(doc: &ExtractedDocument, options: &RenderOptions) -> Result<Vec<PageContent>> {
    let baseline = HeightBaseline::of_document(doc);

    let selected: Vec<&PageFragments> = doc
        .pages
        .iter()
        .filter(|page| options.page_selection.includes(page.number))
        .collect();

    let render_page = |page: &PageFragments| -> Option<PageContent> {
        let content = render_fragments(page.fragments.iter(), &baseline, options);
        if content.trim().is_empty() {
            debug!("dropping blank page {}", page.number);
            return None;
        }
        Some(PageContent::new(page.number, content))
    };

    let rendered: Vec<Option<PageContent>> = if options.parallel {
        selected.par_iter().map(|page| render_page(page)).collect()
    } else {
        selected.iter().map(|page| render_page(page)).collect()
    };

    Ok(rendered.into_iter().flatten().collect())
}

/// Convert a document to per-page JSON.
pub fn to_page_json(
    doc: &ExtractedDocument,
    options: &RenderOptions,
    format: JsonFormat,
) -> Result<String> {
    let pages = to_pages(doc, options)?;
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&pages),
        JsonFormat::Compact => serde_json::to_string(&pages),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
