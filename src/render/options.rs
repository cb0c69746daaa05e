//! Rendering options and configuration.

use crate::analyze::ClassifierConfig;
use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Options for rendering fragment streams.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Classification thresholds
    pub classifier: ClassifierConfig,

    /// Flush a still-open sidebar buffer at end of stream instead of
    /// dropping it
    pub flush_trailing_sidebar: bool,

    /// Page selection
    pub page_selection: PageSelection,

    /// Render pages in parallel in per-page mode
    pub parallel: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set classification thresholds.
    pub fn with_classifier(mut self, config: ClassifierConfig) -> Self {
        self.classifier = config;
        self
    }

    /// Enable or disable flushing of trailing sidebar content.
    pub fn with_flush_trailing_sidebar(mut self, flush: bool) -> Self {
        self.flush_trailing_sidebar = flush;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.page_selection = selection;
        self
    }

    /// Set specific page range.
    pub fn with_page_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.page_selection = PageSelection::Range(range);
        self
    }

    /// Set specific pages.
    pub fn with_page_list(mut self, pages: Vec<u32>) -> Self {
        self.page_selection = PageSelection::Pages(pages);
        self
    }

    /// Disable parallel per-page rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            flush_trailing_sidebar: false,
            page_selection: PageSelection::All,
            parallel: true,
        }
    }
}

/// Page selection for rendering.
///
/// The height baseline is always computed over the whole document; the
/// selection limits which pages are reflowed and emitted.
#[derive(Debug, Clone, Default)]
pub enum PageSelection {
    /// Render all pages
    #[default]
    All,
    /// Render a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Render specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        // Check for simple range (e.g., "1-10")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidPageRange(s.to_string()))?;
                let end: u32 = end
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidPageRange(s.to_string()))?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        // Parse comma-separated list with possible ranges
        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let start: u32 = start
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidPageRange(s.to_string()))?;
                let end: u32 = end
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidPageRange(s.to_string()))?;
                for p in start..=end {
                    if !pages.contains(&p) {
                        pages.push(p);
                    }
                }
            } else {
                let p: u32 = part
                    .parse()
                    .map_err(|_| Error::InvalidPageRange(s.to_string()))?;
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort();
        Ok(PageSelection::Pages(pages))
    }
}
