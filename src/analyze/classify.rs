//! Role classification for text fragments.

use serde::{Deserialize, Serialize};

use super::HeightBaseline;
use crate::model::TextFragment;

/// The inferred structural category of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Top-level heading (well above the height baseline)
    Heading1,
    /// Second-level heading
    Heading2,
    /// Body paragraph text
    Paragraph,
    /// Marginal content: small or rotated text, rendered as a blockquote
    Sidebar,
    /// Non-glyph spacer carrying no height
    Spacer,
}

impl Role {
    /// Check if this role is the sidebar side-channel.
    pub fn is_sidebar(&self) -> bool {
        matches!(self, Role::Sidebar)
    }

    /// Check if this role contributes no visible block of its own.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Role::Spacer)
    }
}

/// Thresholds for role classification.
///
/// Heading and sidebar cutoffs are expressed in standard deviations from
/// the per-character height mean; the rotation threshold is in degrees.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Heights above mean + h1_sigma * std_dev become level-1 headings
    pub h1_sigma: f64,

    /// Heights above mean + h2_sigma * std_dev become level-2 headings
    pub h2_sigma: f64,

    /// Heights below mean - sidebar_sigma * std_dev become sidebar content
    pub sidebar_sigma: f64,

    /// Rotation (degrees) at or beyond which text is forced to sidebar
    pub rotation_threshold: f64,
}

impl ClassifierConfig {
    /// Create a config with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level-1 heading threshold in standard deviations.
    pub fn with_h1_sigma(mut self, sigma: f64) -> Self {
        self.h1_sigma = sigma;
        self
    }

    /// Set the level-2 heading threshold in standard deviations.
    pub fn with_h2_sigma(mut self, sigma: f64) -> Self {
        self.h2_sigma = sigma;
        self
    }

    /// Set the sidebar threshold in standard deviations.
    pub fn with_sidebar_sigma(mut self, sigma: f64) -> Self {
        self.sidebar_sigma = sigma;
        self
    }

    /// Set the rotation threshold in degrees.
    pub fn with_rotation_threshold(mut self, degrees: f64) -> Self {
        self.rotation_threshold = degrees;
        self
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            h1_sigma: 3.0,
            h2_sigma: 2.0,
            sidebar_sigma: 1.0,
            rotation_threshold: 35.0,
        }
    }
}

/// One classified fragment, tagged with its block-boundary relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOp {
    /// Whether this op continues the previous visual block
    pub continuation: bool,

    /// Structural role of the fragment
    pub role: Role,

    /// The fragment's text
    pub text: String,
}

/// Assign a role to a single fragment.
///
/// Height thresholds are checked in strict priority order; rotated text
/// is always sidebar content regardless of height. NaN baselines (empty
/// height sample) fail every comparison, so fragments fall through to
/// the height-derived default.
pub fn classify_fragment(
    fragment: &TextFragment,
    baseline: &HeightBaseline,
    config: &ClassifierConfig,
) -> Role {
    if fragment
        .transform
        .rotation_exceeds(config.rotation_threshold)
    {
        return Role::Sidebar;
    }

    let height = fragment.height;
    if height > baseline.mean + config.h1_sigma * baseline.std_dev {
        Role::Heading1
    } else if height > baseline.mean + config.h2_sigma * baseline.std_dev {
        Role::Heading2
    } else if height > 0.0 && height < baseline.mean - config.sidebar_sigma * baseline.std_dev {
        Role::Sidebar
    } else if height > 0.0 {
        Role::Paragraph
    } else {
        Role::Spacer
    }
}

/// Classify an ordered fragment sequence into a block-op stream.
///
/// A fragment starts a new block exactly when the previous fragment both
/// ended its line and had empty text; textful line ends merely wrap. The
/// first fragment always starts a new block.
pub fn classify<'a, I>(
    fragments: I,
    baseline: &HeightBaseline,
    config: &ClassifierConfig,
) -> Vec<BlockOp>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let mut ops = Vec::new();
    let mut continuation = false;

    for fragment in fragments {
        ops.push(BlockOp {
            continuation,
            role: classify_fragment(fragment, baseline, config),
            text: fragment.text.clone(),
        });
        continuation = !(fragment.ends_line && fragment.text.is_empty());
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Transform;

    fn baseline(mean: f64, std_dev: f64) -> HeightBaseline {
        HeightBaseline { mean, std_dev }
    }

    #[test]
    fn test_threshold_ladder() {
        let base = baseline(10.0, 1.0);
        let config = ClassifierConfig::default();
        let role = |h: f64| classify_fragment(&TextFragment::new("x", h), &base, &config);

        assert_eq!(role(13.5), Role::Heading1);
        assert_eq!(role(12.5), Role::Heading2);
        assert_eq!(role(10.0), Role::Paragraph);
        assert_eq!(role(8.5), Role::Sidebar);
        assert_eq!(role(0.0), Role::Spacer);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // A height exactly on a cutoff never receives the higher role.
        let base = baseline(10.0, 1.0);
        let config = ClassifierConfig::default();
        let role = |h: f64| classify_fragment(&TextFragment::new("x", h), &base, &config);

        assert_eq!(role(13.0), Role::Heading2);
        assert_eq!(role(12.0), Role::Paragraph);
        assert_eq!(role(9.0), Role::Paragraph);
    }

    #[test]
    fn test_rotation_overrides_height() {
        let base = baseline(10.0, 1.0);
        let config = ClassifierConfig::default();
        let rotated = TextFragment::new("big but sideways", 20.0)
            .with_transform(Transform::rotation(90.0));
        assert_eq!(classify_fragment(&rotated, &base, &config), Role::Sidebar);

        let slightly = TextFragment::new("nearly upright", 20.0)
            .with_transform(Transform::rotation(10.0));
        assert_eq!(classify_fragment(&slightly, &base, &config), Role::Heading1);
    }

    #[test]
    fn test_nan_baseline_falls_through() {
        let base = baseline(f64::NAN, f64::NAN);
        let config = ClassifierConfig::default();

        let with_height = TextFragment::new("x", 12.0);
        assert_eq!(
            classify_fragment(&with_height, &base, &config),
            Role::Paragraph
        );

        let without = TextFragment::paragraph_break();
        assert_eq!(classify_fragment(&without, &base, &config), Role::Spacer);
    }

    #[test]
    fn test_classification_is_pure() {
        let base = baseline(10.0, 2.0);
        let config = ClassifierConfig::default();
        let fragment = TextFragment::new("same", 15.0);
        let first = classify_fragment(&fragment, &base, &config);
        let second = classify_fragment(&fragment, &base, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_continuation_tagging() {
        let base = baseline(10.0, 0.0);
        let config = ClassifierConfig::default();
        let fragments = vec![
            TextFragment::new("wraps", 10.0).with_ends_line(true),
            TextFragment::new("still same block", 10.0),
            TextFragment::paragraph_break(),
            TextFragment::new("new block", 10.0),
        ];

        let ops = classify(&fragments, &base, &config);
        let flags: Vec<bool> = ops.iter().map(|op| op.continuation).collect();
        // A textful line end wraps; only the empty line-ending marker breaks.
        assert_eq!(flags, vec![false, true, true, false]);
    }

    #[test]
    fn test_custom_config_thresholds() {
        let base = baseline(10.0, 1.0);
        let config = ClassifierConfig::new()
            .with_h1_sigma(1.0)
            .with_h2_sigma(0.5)
            .with_rotation_threshold(5.0);

        let tall = TextFragment::new("x", 11.5);
        assert_eq!(classify_fragment(&tall, &base, &config), Role::Heading1);

        let tilted = TextFragment::new("x", 10.0).with_transform(Transform::rotation(6.0));
        assert_eq!(classify_fragment(&tilted, &base, &config), Role::Sidebar);
    }
}
