//! Fragment-level types.

use serde::{Deserialize, Serialize};

/// The rotation/skew part of a fragment's 2D affine transform.
///
/// Only the four linear coefficients are kept; translation is irrelevant
/// to role classification. Deserializes from the numeric arrays emitted
/// by text extractors, which may carry six coefficients (the trailing
/// translation pair is ignored) or fewer than four (missing coefficients
/// read as zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Transform {
    /// Horizontal scale component
    pub a: f64,
    /// Vertical shear component
    pub b: f64,
    /// Horizontal shear component
    pub c: f64,
    /// Vertical scale component
    pub d: f64,
}

impl Transform {
    /// The identity transform (upright, unscaled text).
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
    };

    /// Create a transform from its four linear coefficients.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Create a pure rotation transform for the given angle in degrees.
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
        }
    }

    /// Check whether the text is rotated by at least `degrees` from
    /// upright on either of its two axes.
    pub fn rotation_exceeds(&self, degrees: f64) -> bool {
        let angle1 = self.b.atan2(self.a).to_degrees();
        let angle2 = (-self.c).atan2(self.d).to_degrees();
        angle1.abs() >= degrees || angle2.abs() >= degrees
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vec<f64>> for Transform {
    fn from(coefficients: Vec<f64>) -> Self {
        let at = |i: usize| coefficients.get(i).copied().unwrap_or(0.0);
        Self {
            a: at(0),
            b: at(1),
            c: at(2),
            d: at(3),
        }
    }
}

impl From<Transform> for Vec<f64> {
    fn from(t: Transform) -> Self {
        vec![t.a, t.b, t.c, t.d]
    }
}

/// One atomic run of extracted text with its geometry.
///
/// Produced by an external document-text extractor and consumed
/// read-only. The serde aliases accept the field spellings common
/// extractors emit in their JSON dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content (may be empty)
    #[serde(alias = "str")]
    pub text: String,

    /// Glyph height in points; zero or absent marks a non-glyph spacer
    #[serde(default)]
    pub height: f64,

    /// Whether the extractor signals a hard line break after this fragment
    #[serde(alias = "hasEOL", default)]
    pub ends_line: bool,

    /// Rotation/skew of the fragment on the page
    #[serde(default)]
    pub transform: Transform,
}

impl TextFragment {
    /// Create an upright fragment that does not end its line.
    pub fn new(text: impl Into<String>, height: f64) -> Self {
        Self {
            text: text.into(),
            height,
            ends_line: false,
            transform: Transform::IDENTITY,
        }
    }

    /// Create the conventional paragraph-break marker: an empty,
    /// line-ending fragment with no glyph height.
    pub fn paragraph_break() -> Self {
        Self {
            text: String::new(),
            height: 0.0,
            ends_line: true,
            transform: Transform::IDENTITY,
        }
    }

    /// Set the end-of-line flag.
    pub fn with_ends_line(mut self, ends_line: bool) -> Self {
        self.ends_line = ends_line;
        self
    }

    /// Set the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Check if this fragment carries glyph height.
    pub fn has_height(&self) -> bool {
        self.height > 0.0
    }

    /// The fragment's text length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
