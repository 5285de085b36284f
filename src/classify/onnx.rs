//! ONNX-backed heading classifier.
//!
//! Two pretrained artifacts are loaded at startup: the classifier itself
//! (an ONNX model taking a `[1, 4]` f32 feature tensor and producing a
//! `[1, n]` class probability tensor) and a label encoder (a JSON array of
//! label strings in class index order). Loading failures are fatal to the
//! caller; there is no lazy reload.

use std::fs;
use std::path::Path;

use ort::session::{builder::GraphOptimizationLevel, Session};

use crate::classify::predictor::{HeadingPredictor, Prediction};
use crate::error::{Error, Result};
use crate::features::FeatureVector;

/// Maps classifier output indices back to label strings.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    labels: Vec<String>,
}

impl LabelEncoder {
    /// Load from a JSON file containing an array of label strings.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let labels: Vec<String> = serde_json::from_str(&data)?;
        Self::from_labels(labels)
    }

    /// Build from an in-memory label list.
    pub fn from_labels(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::LabelEncoder("empty label list".to_string()));
        }
        Ok(Self { labels })
    }

    /// Decode a class index to its label.
    pub fn decode(&self, index: usize) -> Result<&str> {
        self.labels.get(index).map(String::as_str).ok_or_else(|| {
            Error::LabelEncoder(format!(
                "class index {index} out of range ({} labels)",
                self.labels.len()
            ))
        })
    }

    /// Number of known classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the encoder has no classes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Heading classifier backed by an ONNX Runtime session.
pub struct OnnxHeadingModel {
    session: Session,
    encoder: LabelEncoder,
    input_name: String,
}

impl std::fmt::Debug for OnnxHeadingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxHeadingModel")
            .field("session", &"<Session>")
            .field("classes", &self.encoder.len())
            .finish()
    }
}

impl OnnxHeadingModel {
    /// Load the classifier and label encoder artifacts.
    pub fn load(model_path: impl AsRef<Path>, labels_path: impl AsRef<Path>) -> Result<Self> {
        let encoder = LabelEncoder::from_file(labels_path)?;

        log::debug!(
            "Loading heading classifier from {}",
            model_path.as_ref().display()
        );
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(num_cpus::get())?
            .commit_from_file(model_path)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| Error::Model("model declares no inputs".to_string()))?;

        Ok(Self {
            session,
            encoder,
            input_name,
        })
    }
}

impl HeadingPredictor for OnnxHeadingModel {
    fn predict(&mut self, features: &FeatureVector) -> Result<Prediction> {
        // [1, 4] feature tensor in model input order
        let tensor = ndarray::arr2(&[features.to_array()]);
        let shape = tensor.shape().to_vec();
        let (data, _offset) = tensor.into_raw_vec_and_offset();
        let input = ort::value::Value::from_array((shape.as_slice(), data))?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input])?;

        let (_shape, probs) = outputs[0].try_extract_tensor::<f32>()?;
        if probs.is_empty() {
            return Err(Error::Model("empty probability output".to_string()));
        }

        let (index, confidence) = argmax(probs);
        let label = self.encoder.decode(index)?.to_string();

        Ok(Prediction { label, confidence })
    }
}

/// Index and value of the highest class probability.
fn argmax(probs: &[f32]) -> (usize, f32) {
    let mut max_index = 0;
    let mut max_score = f32::NEG_INFINITY;

    for (i, &score) in probs.iter().enumerate() {
        if score > max_score {
            max_score = score;
            max_index = i;
        }
    }

    (max_index, max_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_picks_highest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), (1, 0.7));
        assert_eq!(argmax(&[0.9, 0.05, 0.05]), (0, 0.9));
    }

    #[test]
    fn test_argmax_ties_pick_first() {
        assert_eq!(argmax(&[0.5, 0.5]), (0, 0.5));
    }

    #[test]
    fn test_label_encoder_decode() {
        let encoder = LabelEncoder::from_labels(vec![
            "Body".to_string(),
            "H1".to_string(),
            "H2".to_string(),
            "H3".to_string(),
        ])
        .unwrap();

        assert_eq!(encoder.decode(1).unwrap(), "H1");
        assert_eq!(encoder.decode(3).unwrap(), "H3");
        assert_eq!(encoder.len(), 4);
        assert!(matches!(
            encoder.decode(4),
            Err(Error::LabelEncoder(_))
        ));
    }

    #[test]
    fn test_label_encoder_rejects_empty() {
        assert!(matches!(
            LabelEncoder::from_labels(vec![]),
            Err(Error::LabelEncoder(_))
        ));
    }

    #[test]
    fn test_label_encoder_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        fs::write(&path, r#"["Body", "H1", "H2", "H3"]"#).unwrap();

        let encoder = LabelEncoder::from_file(&path).unwrap();
        assert_eq!(encoder.decode(0).unwrap(), "Body");
        assert_eq!(encoder.len(), 4);
    }

    #[test]
    fn test_missing_model_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let labels = dir.path().join("labels.json");
        fs::write(&labels, r#"["H1"]"#).unwrap();

        let result = OnnxHeadingModel::load(dir.path().join("missing.onnx"), labels);
        assert!(result.is_err());
    }
}
