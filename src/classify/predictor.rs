//! Classifier contract and acceptance gate.

use crate::error::Result;
use crate::features::FeatureVector;
use crate::model::HeadingLevel;

/// Minimum confidence for a predicted heading label to be accepted.
pub const MIN_CONFIDENCE: f32 = 0.6;

/// A single classifier prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted class label (e.g., "H1", "Body")
    pub label: String,
    /// Max class probability
    pub confidence: f32,
}

impl Prediction {
    /// Create a prediction.
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// The heading level this prediction yields, if any.
    ///
    /// A span is accepted as a heading only when the label is one of
    /// H1/H2/H3 *and* the confidence clears [`MIN_CONFIDENCE`].
    pub fn accepted_level(&self) -> Option<HeadingLevel> {
        if self.confidence > MIN_CONFIDENCE {
            HeadingLevel::from_label(&self.label)
        } else {
            None
        }
    }
}

/// Maps a feature vector to a predicted label and confidence.
///
/// Model handles are loaded once at startup and passed explicitly through
/// the pipeline, so tests can substitute a stub implementation.
pub trait HeadingPredictor {
    /// Classify one feature vector.
    fn predict(&mut self, features: &FeatureVector) -> Result<Prediction>;
}
