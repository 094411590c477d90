//! Output format handling for phoenix
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON

use clap::ValueEnum;
use phoenix_core::graph::Weight;

/// Output format for phoenix commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

// Parsing goes through clap only
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[OutputFormat::Human, OutputFormat::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            OutputFormat::Human => Some(clap::builder::PossibleValue::new("human")),
            OutputFormat::Json => Some(clap::builder::PossibleValue::new("json")),
        }
    }
}

/// Render a weight for human output: integral values without a fraction,
/// infinity as `inf`
pub fn format_weight(weight: Weight) -> String {
    if weight.is_infinite() {
        "inf".to_string()
    } else if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// JSON has no infinity; unreachable weighted distances become `null`
pub fn weight_json(weight: Weight) -> serde_json::Value {
    if weight.is_finite() {
        serde_json::json!(weight)
    } else {
        serde_json::Value::Null
    }
}
