//! Serialized decision-tree classifier
//!
//! Loads a pre-fitted binary decision tree from a JSON artifact and
//! evaluates single records. Training and export happen elsewhere; this
//! adapter only replays the fitted split structure.

use crate::errors::{QuizError, Result};
use crate::mapper::{FeatureVector, FEATURE_NAMES};
use crate::predict::{is_known_label, Predictor};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One node of the fitted tree
///
/// Splits route a record left when `row[feature] <= threshold`, right
/// otherwise; leaves carry the predicted category label.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: String,
    },
}

/// Pre-fitted decision-tree classifier loaded from a JSON artifact
#[derive(Debug, Clone, Deserialize)]
pub struct TreeModel {
    pub name: String,
    pub version: String,
    features: Vec<String>,
    classes: Vec<String>,
    nodes: Vec<TreeNode>,
}

impl TreeModel {
    /// Load and validate a model artifact
    ///
    /// Called once at process start; failures surface as `Prediction`
    /// errors so the caller can degrade gracefully.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            QuizError::Prediction(format!("cannot read model artifact {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate an artifact from its JSON text
    pub fn from_json(contents: &str) -> Result<Self> {
        let model: TreeModel = serde_json::from_str(contents)
            .map_err(|e| QuizError::Prediction(format!("malformed model artifact: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation of the fitted tree
    ///
    /// Checks the feature schema, node-table bounds, and that every leaf
    /// label belongs to the model's declared (known) class set.
    fn validate(&self) -> Result<()> {
        if self.features != FEATURE_NAMES {
            return Err(QuizError::Prediction(format!(
                "artifact expects features {:?}, not the questionnaire schema",
                self.features
            )));
        }
        if self.nodes.is_empty() {
            return Err(QuizError::Prediction("artifact has no nodes".to_string()));
        }
        for label in &self.classes {
            if !is_known_label(label) {
                return Err(QuizError::Prediction(format!(
                    "unknown class label '{}' in artifact",
                    label
                )));
            }
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= FEATURE_NAMES.len() {
                        return Err(QuizError::Prediction(format!(
                            "node {} splits on out-of-range feature {}",
                            index, feature
                        )));
                    }
                    if *left >= self.nodes.len() || *right >= self.nodes.len() {
                        return Err(QuizError::Prediction(format!(
                            "node {} has out-of-range children",
                            index
                        )));
                    }
                }
                TreeNode::Leaf { leaf } => {
                    if !self.classes.iter().any(|c| c == leaf) {
                        return Err(QuizError::Prediction(format!(
                            "leaf label '{}' not in artifact class list",
                            leaf
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of nodes in the fitted tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Predictor for TreeModel {
    fn predict(&self, vector: &FeatureVector) -> Result<String> {
        let row = vector.as_row();
        let mut index = 0;
        // Bounded walk: a valid tree reaches a leaf within node_count hops
        for _ in 0..=self.nodes.len() {
            match &self.nodes[index] {
                TreeNode::Leaf { leaf } => return Ok(leaf.clone()),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
        Err(QuizError::Prediction(
            "tree walk did not terminate; artifact is cyclic".to_string(),
        ))
    }
}
