use crate::config::BuildError;
use crate::statistics::{
    DEFAULT_CONFIDENCE_LEVEL, MaxEstimator, MinEstimator, Statistic, StatisticCategory,
};
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

/// Configuration of one statistic, as read from a simulation setup.
///
/// ```json
/// { "type": "min", "params": { "confidence_level": 0.95 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
pub enum StatisticChoice {
    /// Running minimum.
    Min(ExtremumParameters),
    /// Running maximum.
    Max(ExtremumParameters),
}

/// Parameters shared by the exact extremum estimators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExtremumParameters {
    #[serde(default = "default_confidence_level")]
    #[schemars(
        title = "Confidence level",
        description = "Confidence level reported by the estimator, in (0, 1). Informational for exact statistics.",
        default = "default_confidence_level"
    )]
    pub confidence_level: f64,
}

impl Default for ExtremumParameters {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl ExtremumParameters {
    fn validated_level(&self) -> Result<f64, BuildError> {
        let level = self.confidence_level;
        if level.is_finite() && level > 0.0 && level < 1.0 {
            Ok(level)
        } else {
            Err(BuildError::InvalidParameter(format!(
                "confidence_level must lie in (0, 1), got {level}"
            )))
        }
    }
}

impl StatisticChoice {
    /// JSON Schema for the whole tagged enum.
    pub fn schema() -> Schema {
        schema_for!(StatisticChoice)
    }

    pub fn category(&self) -> StatisticCategory {
        match self {
            StatisticChoice::Min(_) => StatisticCategory::Min,
            StatisticChoice::Max(_) => StatisticCategory::Max,
        }
    }

    /// Choice with default parameters for `category`.
    pub fn for_category(category: StatisticCategory) -> Result<Self, BuildError> {
        let params = ExtremumParameters::default();
        match category {
            StatisticCategory::Min => Ok(StatisticChoice::Min(params)),
            StatisticCategory::Max => Ok(StatisticChoice::Max(params)),
            other => Err(BuildError::Unsupported(other)),
        }
    }

    /// Default `params` JSON for `category`.
    pub fn default_params(category: StatisticCategory) -> Result<Value> {
        Self::for_category(category)?;
        Ok(serde_json::to_value(ExtremumParameters::default())?)
    }

    /// Builds the typed choice from a category tag and its `params` JSON.
    pub fn from_parts(category: StatisticCategory, params: Value) -> Result<Self> {
        let key: &'static str = category.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }

    /// Validates parameters and constructs the estimator.
    pub fn build(&self) -> Result<Box<dyn Statistic>, BuildError> {
        let statistic: Box<dyn Statistic> = match self {
            StatisticChoice::Min(p) => Box::new(MinEstimator::new(p.validated_level()?)),
            StatisticChoice::Max(p) => Box::new(MaxEstimator::new(p.validated_level()?)),
        };
        log::debug!(
            "built {} statistic (confidence level {})",
            statistic.name(),
            statistic.confidence_level()
        );
        Ok(statistic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn root_props_of<T: JsonSchema>() -> Value {
        let root = schema_for!(T);
        let v = serde_json::to_value(root).expect("schema to JSON");
        v.get("schema")
            .cloned()
            .unwrap_or(v)
            .get("properties")
            .cloned()
            .unwrap_or_else(|| json!({}))
    }

    #[test]
    fn missing_params_apply_defaults() {
        let p: ExtremumParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, ExtremumParameters::default());
        assert_eq!(p.confidence_level, 0.95);
    }

    #[test]
    fn tagged_enum_serialization() {
        let choice = StatisticChoice::Min(ExtremumParameters {
            confidence_level: 0.99,
        });
        let v = serde_json::to_value(&choice).unwrap();
        assert_eq!(v.get("type").and_then(Value::as_str), Some("min"));
        assert_eq!(v["params"]["confidence_level"].as_f64(), Some(0.99));

        let back: StatisticChoice = serde_json::from_value(v).unwrap();
        assert_eq!(back, choice);
    }

    #[test]
    fn parses_config_without_params_fields() {
        let choice: StatisticChoice =
            serde_json::from_str(r#"{ "type": "max", "params": {} }"#).unwrap();
        assert_eq!(choice, StatisticChoice::Max(ExtremumParameters::default()));
        assert_eq!(choice.category(), StatisticCategory::Max);
    }

    #[test]
    fn default_params_round_trip_through_from_parts() {
        for category in [StatisticCategory::Min, StatisticCategory::Max] {
            let v = StatisticChoice::default_params(category).unwrap();
            let rebuilt = StatisticChoice::from_parts(category, v).unwrap();
            assert_eq!(rebuilt.category(), category);
            assert_eq!(rebuilt, StatisticChoice::for_category(category).unwrap());
        }
    }

    #[test]
    fn categories_without_estimator_are_unsupported() {
        let err = StatisticChoice::for_category(StatisticCategory::Mean).unwrap_err();
        assert!(matches!(err, BuildError::Unsupported(StatisticCategory::Mean)));
        assert_eq!(err.to_string(), "unsupported statistic: mean");

        assert!(StatisticChoice::default_params(StatisticCategory::Quantile).is_err());
        assert!(StatisticChoice::from_parts(StatisticCategory::Variance, json!({})).is_err());
    }

    #[test_log::test]
    fn build_produces_matching_estimator() {
        let choice = StatisticChoice::Min(ExtremumParameters {
            confidence_level: 0.9,
        });
        let mut stat = choice.build().unwrap();
        assert_eq!(stat.category(), StatisticCategory::Min);
        assert_eq!(stat.name(), "Min");
        assert_eq!(stat.confidence_level(), 0.9);

        for v in [5.0, 3.0, 9.0, 1.0, 7.0] {
            stat.collect(v, 1.0);
        }
        assert_eq!(stat.estimate(), 1.0);
        assert_eq!(stat.num_observations(), 5);

        let max = StatisticChoice::for_category(StatisticCategory::Max)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(max.name(), "Max");
        assert_eq!(max.estimate(), f64::NEG_INFINITY);
    }

    #[test]
    fn build_rejects_out_of_range_confidence_level() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let choice = StatisticChoice::Max(ExtremumParameters {
                confidence_level: level,
            });
            let err = choice.build().err().unwrap();
            assert!(matches!(err, BuildError::InvalidParameter(_)));
        }
    }

    #[test]
    fn schema_has_title_and_default() {
        let props = root_props_of::<ExtremumParameters>();
        let field = props
            .get("confidence_level")
            .and_then(Value::as_object)
            .expect("confidence_level property");
        assert_eq!(
            field.get("title").and_then(Value::as_str),
            Some("Confidence level")
        );
        assert_eq!(field.get("default").and_then(Value::as_f64), Some(0.95));
    }

    #[test]
    fn enum_schema_serializes() {
        let v = serde_json::to_value(StatisticChoice::schema()).unwrap();
        assert!(v.is_object());
    }
}
