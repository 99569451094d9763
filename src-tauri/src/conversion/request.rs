use serde::{Deserialize, Serialize};

use super::prompt::build_conversion_prompt;
use crate::catalog;
use crate::error::ConverterError;

/// Warning shown when both unit selectors point at the same unit.
pub const SAME_UNITS_WARNING: &str = "Please select different units!";

/// A conversion as submitted from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// What a request turns into before any network traffic happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedRequest {
    /// Nothing to convert yet (zero value or an empty selector).
    Idle,
    /// Both units are the same; warn instead of calling out.
    SameUnits,
    /// Ready to send.
    Ready { prompt: String },
}

/// Result of one form submission, as returned to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Idle,
    SameUnits {
        message: String,
    },
    Converted {
        /// Raw model output, shown verbatim.
        result: String,
        /// History entry added by this result. `None` when the text was empty
        /// or the same entry was already in the history.
        entry: Option<String>,
    },
}

impl ConversionOutcome {
    pub fn same_units() -> Self {
        ConversionOutcome::SameUnits {
            message: SAME_UNITS_WARNING.to_string(),
        }
    }
}

impl ConversionRequest {
    pub fn new(category: &str, value: f64, from_unit: &str, to_unit: &str) -> Self {
        Self {
            category: category.to_string(),
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }
    }

    /// Check the request against the catalog and decide whether a call is needed.
    pub fn validate(&self) -> Result<ValidatedRequest, ConverterError> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(ConverterError::InvalidValue(self.value));
        }

        // A zero value counts as "not entered yet".
        if self.value == 0.0 || self.from_unit.is_empty() || self.to_unit.is_empty() {
            return Ok(ValidatedRequest::Idle);
        }

        catalog::units_for(&self.category)?;
        for unit in [&self.from_unit, &self.to_unit] {
            if !catalog::contains_unit(&self.category, unit) {
                return Err(ConverterError::UnknownUnit {
                    category: self.category.clone(),
                    unit: unit.clone(),
                });
            }
        }

        if self.from_unit == self.to_unit {
            return Ok(ValidatedRequest::SameUnits);
        }

        Ok(ValidatedRequest::Ready {
            prompt: build_conversion_prompt(self.value, &self.from_unit, &self.to_unit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_request_builds_prompt() {
        let req = ConversionRequest::new("Length", 5.0, "meters", "feet");
        assert_eq!(
            req.validate().unwrap(),
            ValidatedRequest::Ready {
                prompt: "Convert 5 meters to feet".to_string()
            }
        );
    }

    #[test]
    fn test_same_units() {
        let req = ConversionRequest::new("Mass", 3.0, "grams", "grams");
        assert_eq!(req.validate().unwrap(), ValidatedRequest::SameUnits);
    }

    #[test]
    fn test_zero_value_is_idle() {
        let req = ConversionRequest::new("Mass", 0.0, "grams", "grams");
        assert_eq!(req.validate().unwrap(), ValidatedRequest::Idle);
    }

    #[test]
    fn test_empty_unit_is_idle() {
        let req = ConversionRequest::new("Mass", 1.0, "", "grams");
        assert_eq!(req.validate().unwrap(), ValidatedRequest::Idle);
    }

    #[test]
    fn test_negative_value_rejected() {
        let req = ConversionRequest::new("Mass", -1.0, "grams", "pounds");
        assert!(matches!(req.validate(), Err(ConverterError::InvalidValue(_))));
    }

    #[test]
    fn test_nan_rejected() {
        let req = ConversionRequest::new("Mass", f64::NAN, "grams", "pounds");
        assert!(matches!(req.validate(), Err(ConverterError::InvalidValue(_))));
    }

    #[test]
    fn test_unit_from_other_category_rejected() {
        let req = ConversionRequest::new("Mass", 1.0, "grams", "meters");
        match req.validate() {
            Err(ConverterError::UnknownUnit { category, unit }) => {
                assert_eq!(category, "Mass");
                assert_eq!(unit, "meters");
            }
            other => panic!("Expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let req = ConversionRequest::new("Weight", 1.0, "grams", "pounds");
        assert!(matches!(
            req.validate(),
            Err(ConverterError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(ConversionOutcome::same_units()).unwrap();
        assert_eq!(json["status"], "same_units");
        assert_eq!(json["message"], SAME_UNITS_WARNING);

        let json = serde_json::to_value(ConversionOutcome::Idle).unwrap();
        assert_eq!(json["status"], "idle");

        let json = serde_json::to_value(ConversionOutcome::Converted {
            result: "16.4 feet".to_string(),
            entry: Some("5 meters -> 16.4 feet".to_string()),
        })
        .unwrap();
        assert_eq!(json["status"], "converted");
        assert_eq!(json["result"], "16.4 feet");
        assert_eq!(json["entry"], "5 meters -> 16.4 feet");
    }
}
