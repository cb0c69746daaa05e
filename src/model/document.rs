//! Document-level types.

use super::{PageFragments, TextFragment};
use serde::{Deserialize, Serialize};

/// All text fragments of a document, grouped by page.
///
/// Deserializes from either of the shapes extractors produce: an object
/// with a `pages` array, or a bare array of per-page fragment arrays
/// (pages then numbered 1..N in order).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "DocumentRepr")]
pub struct ExtractedDocument {
    /// Pages in the document
    pub pages: Vec<PageFragments>,
}

impl ExtractedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Create a document from a list of pages.
    pub fn from_pages(pages: Vec<PageFragments>) -> Self {
        Self { pages }
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageFragments) {
        self.pages.push(page);
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PageFragments> {
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Iterate over all fragments of the document in page order.
    pub fn fragments(&self) -> impl Iterator<Item = &TextFragment> {
        self.pages.iter().flat_map(|p| p.fragments.iter())
    }

    /// Get the total number of fragments across all pages.
    pub fn fragment_count(&self) -> usize {
        self.pages.iter().map(|p| p.fragments.len()).sum()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Pages { pages: Vec<PageFragments> },
    Nested(Vec<Vec<TextFragment>>),
}

impl From<DocumentRepr> for ExtractedDocument {
    fn from(repr: DocumentRepr) -> Self {
        match repr {
            DocumentRepr::Pages { pages } => Self { pages },
            DocumentRepr::Nested(pages) => Self {
                pages: pages
                    .into_iter()
                    .enumerate()
                    .map(|(i, fragments)| PageFragments::from_fragments(i as u32 + 1, fragments))
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = ExtractedDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.fragment_count(), 0);
    }

    #[test]
    fn test_fragments_span_pages() {
        let mut doc = ExtractedDocument::new();
        doc.add_page(PageFragments::from_fragments(
            1,
            vec![TextFragment::new("a", 10.0), TextFragment::new("b", 10.0)],
        ));
        doc.add_page(PageFragments::from_fragments(
            2,
            vec![TextFragment::new("c", 10.0)],
        ));

        assert_eq!(doc.fragment_count(), 3);
        let texts: Vec<&str> = doc.fragments().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_page_by_number() {
        let doc = ExtractedDocument::from_pages(vec![PageFragments::new(3), PageFragments::new(7)]);
        assert_eq!(doc.get_page(7).map(|p| p.number), Some(7));
        assert!(doc.get_page(1).is_none());
    }

    #[test]
    fn test_deserialize_pages_object() {
        let json = r#"{"pages": [{"number": 2, "fragments": [{"text": "x", "height": 9.0}]}]}"#;
        let doc: ExtractedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].number, 2);
        assert_eq!(doc.pages[0].fragments[0].text, "x");
    }

    #[test]
    fn test_deserialize_nested_arrays() {
        let json = r#"[[{"str": "a", "height": 10}], [{"str": "b", "height": 10}]]"#;
        let doc: ExtractedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].number, 1);
        assert_eq!(doc.pages[1].number, 2);
        assert_eq!(doc.pages[1].fragments[0].text, "b");
    }
}
