//! Height statistics over a fragment sample.

use crate::model::{ExtractedDocument, TextFragment};

/// Per-character height distribution of a classification scope.
///
/// A fragment of character length L with height H contributes H exactly
/// L times to the sample, so long runs of a given size dominate the
/// statistic. Fragments without a positive height are skipped. An empty
/// sample yields NaN mean and standard deviation; every threshold
/// comparison against a NaN baseline is false, which routes such
/// documents onto the height-less classification path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightBaseline {
    /// Arithmetic mean of per-character heights
    pub mean: f64,
    /// Population standard deviation of per-character heights
    pub std_dev: f64,
}

impl HeightBaseline {
    /// Compute the baseline over a fragment sequence.
    pub fn from_fragments<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a TextFragment>,
    {
        let sample: Vec<(f64, usize)> = fragments
            .into_iter()
            .filter(|f| f.has_height())
            .map(|f| (f.height, f.char_len()))
            .collect();

        let count: usize = sample.iter().map(|(_, len)| len).sum();
        let mean = sample
            .iter()
            .map(|(height, len)| height * *len as f64)
            .sum::<f64>()
            / count as f64;
        let variance = sample
            .iter()
            .map(|(height, len)| *len as f64 * (height - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// Compute the document-wide baseline over all pages.
    pub fn of_document(doc: &ExtractedDocument) -> Self {
        Self::from_fragments(doc.fragments())
    }

    /// Check whether the sample was empty (no fragment carried height).
    pub fn is_empty(&self) -> bool {
        self.mean.is_nan()
    }
}
