//! Result presenter
//!
//! Turns a `PredictionResult` into a render-ready `DisplayModel`. Total
//! and side-effect free; the terminal rendering itself lives in the quiz
//! display manager.

use crate::advice::{AdviceTable, AdviceTriple};
use crate::predict::PredictionResult;
use serde::Serialize;

/// Render-ready view of one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    /// Predicted category label
    pub label: String,

    /// Echo table of the mapped features, in model order
    pub rows: Vec<(&'static str, String)>,

    /// Advice sections, when the table covers the label
    pub advice: Option<AdviceTriple>,
}

/// Build the display model for a prediction
///
/// Labels absent from the advice table yield `advice: None`, rendered as
/// an explicit "no advice available" notice downstream.
pub fn present(result: &PredictionResult, advice: &AdviceTable) -> DisplayModel {
    DisplayModel {
        label: result.label.clone(),
        rows: result.input_echo.rows(),
        advice: advice.lookup(&result.label).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_answers;
    use std::collections::HashMap;

    fn result_with_label(label: &str) -> PredictionResult {
        let answers: HashMap<String, String> = [
            ("Gender", "Male"),
            ("Age", "25"),
            ("Height", "1.75"),
            ("Weight", "95"),
            ("family_history_with_overweight", "yes"),
            ("FAVC", "yes"),
            ("FCVC", "2.0"),
            ("NCP", "3.0"),
            ("CAEC", "Sometimes"),
            ("SMOKE", "no"),
            ("CH2O", "2.0"),
            ("SCC", "no"),
            ("FAF", "1.0"),
            ("TUE", "1.0"),
            ("CALC", "Sometimes"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        PredictionResult {
            label: label.to_string(),
            input_echo: map_answers(&answers).unwrap(),
        }
    }

    #[test]
    fn test_present_known_label() {
        let table = AdviceTable::builtin();
        let model = present(&result_with_label("Obesity_Type_I"), &table);

        assert_eq!(model.label, "Obesity_Type_I");
        assert_eq!(model.rows.len(), 15);
        let advice = model.advice.expect("advice for a covered label");
        assert_eq!(
            advice,
            table.lookup("Obesity_Type_I").cloned().unwrap(),
            "advice sections must be passed through verbatim"
        );
    }

    #[test]
    fn test_present_uncovered_label() {
        let table = AdviceTable::builtin();
        let model = present(&result_with_label("Mystery_Category"), &table);

        assert_eq!(model.label, "Mystery_Category");
        assert!(model.advice.is_none());
    }

    #[test]
    fn test_echo_rows_in_model_order() {
        let table = AdviceTable::builtin();
        let model = present(&result_with_label("Normal_Weight"), &table);

        assert_eq!(model.rows[0].0, "Gender");
        assert_eq!(model.rows[1], ("Age", "25".to_string()));
        assert_eq!(model.rows[3], ("Weight", "95".to_string()));
        assert_eq!(model.rows[14].0, "CALC");
    }

    #[test]
    fn test_present_is_pure() {
        let table = AdviceTable::builtin();
        let result = result_with_label("Obesity_Type_II");
        assert_eq!(present(&result, &table), present(&result, &table));
    }
}
