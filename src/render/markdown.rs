//! Markdown rendering for extracted documents.

use log::debug;

use crate::analyze::{classify, reflow, HeightBaseline};
use crate::error::Result;
use crate::model::{ExtractedDocument, TextFragment};

use super::RenderOptions;

/// Convert a document to a single markdown string.
///
/// All selected pages are concatenated into one fragment stream and
/// reflowed in a single pass, so blocks may span page boundaries. The
/// height baseline is computed over the whole document regardless of
/// page selection.
pub fn to_markdown(doc: &ExtractedDocument, options: &RenderOptions) -> Result<String> {
    let baseline = HeightBaseline::of_document(doc);
    debug!(
        "height baseline over {} fragments: mean={:.2} std_dev={:.2}",
        doc.fragment_count(),
        baseline.mean,
        baseline.std_dev
    );

    let fragments = doc
        .pages
        .iter()
        .filter(|page| options.page_selection.includes(page.number))
        .flat_map(|page| page.fragments.iter());

    Ok(render_fragments(fragments, &baseline, options))
}

/// Classify and reflow one fragment stream against a precomputed baseline.
pub(crate) fn render_fragments<'a, I>(
    fragments: I,
    baseline: &HeightBaseline,
    options: &RenderOptions,
) -> String
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let ops = classify(fragments, baseline, &options.classifier);
    reflow(ops, options.flush_trailing_sidebar)
}
