//! Static health-advice lookup table
//!
//! Maps each predicted category to three advice sections. A built-in
//! table covers all seven categories; an optional TOML file replaces it
//! wholesale for deployments that maintain their own wording.

use crate::errors::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Three advice sections shown under a prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceTriple {
    /// Preventive actions
    pub prevention: String,
    /// Day-to-day lifestyle tips
    pub lifestyle: String,
    /// Suggested medical checkups
    pub checkups: String,
}

/// Read-only advice table keyed by category label
#[derive(Debug, Clone)]
pub struct AdviceTable {
    entries: HashMap<String, AdviceTriple>,
}

#[derive(Debug, Deserialize)]
struct AdviceFile {
    labels: HashMap<String, AdviceTriple>,
}

impl AdviceTable {
    /// Built-in advice covering every category the model can emit
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        let mut add = |label: &str, prevention: &str, lifestyle: &str, checkups: &str| {
            entries.insert(
                label.to_string(),
                AdviceTriple {
                    prevention: prevention.to_string(),
                    lifestyle: lifestyle.to_string(),
                    checkups: checkups.to_string(),
                },
            );
        };

        add(
            "Insufficient_Weight",
            "Increase daily caloric intake with nutrient-dense foods and avoid skipping meals.",
            "Add strength training to build muscle mass and keep a regular sleep schedule.",
            "Discuss unexplained weight loss with a physician and screen for thyroid and digestive conditions.",
        );
        add(
            "Normal_Weight",
            "Maintain your current balance of caloric intake and physical activity.",
            "Keep eating vegetables daily, drink plenty of water, and stay active most days of the week.",
            "A routine annual checkup with basic blood work is sufficient.",
        );
        add(
            "Overweight_Level_I",
            "Reduce high-caloric food and sugary drinks; watch portion sizes at main meals.",
            "Aim for at least 150 minutes of moderate activity per week and limit snacking between meals.",
            "Have blood pressure and fasting glucose measured at your next visit.",
        );
        add(
            "Overweight_Level_II",
            "Cut back further on processed and high-caloric foods and track what you eat for a few weeks.",
            "Combine regular aerobic exercise with reduced screen time; involve family or friends for consistency.",
            "Schedule a checkup covering blood pressure, glucose, and cholesterol within the next months.",
        );
        add(
            "Obesity_Type_I",
            "Adopt a structured, calorie-controlled eating plan, ideally with professional guidance.",
            "Build up physical activity gradually, monitor calorie intake, and reduce alcohol consumption.",
            "See a physician for a metabolic assessment including glucose, lipids, and liver values.",
        );
        add(
            "Obesity_Type_II",
            "Seek medically supervised weight management; self-directed dieting is rarely sufficient at this stage.",
            "Prioritize low-impact exercise such as swimming or cycling to protect the joints.",
            "A comprehensive metabolic and cardiovascular workup is strongly recommended.",
        );
        add(
            "Obesity_Type_III",
            "Contact a specialized obesity clinic; surgical and pharmacological options may need evaluation.",
            "Follow a professionally supervised nutrition and activity plan adapted to your mobility.",
            "Urgent full cardiovascular, metabolic, and sleep-apnea screening is advised.",
        );

        AdviceTable { entries }
    }

    /// Load a replacement table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let file: AdviceFile = toml::from_str(&contents)
            .map_err(|e| QuizError::Config(format!("malformed advice file: {}", e)))?;
        Ok(AdviceTable {
            entries: file.labels,
        })
    }

    /// Advice for a predicted label, if the table covers it
    pub fn lookup(&self, label: &str) -> Option<&AdviceTriple> {
        self.entries.get(label)
    }

    /// Number of labels covered
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
