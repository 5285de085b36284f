//! Heading classification.
//!
//! The [`HeadingPredictor`] trait is the seam between the outline pipeline
//! and the pretrained model; [`OnnxHeadingModel`] is the production
//! implementation backed by ONNX Runtime.

mod onnx;
mod predictor;

pub use onnx::{LabelEncoder, OnnxHeadingModel};
pub use predictor::{HeadingPredictor, Prediction, MIN_CONFIDENCE};
