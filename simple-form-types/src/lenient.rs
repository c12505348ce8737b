//! Forgiving deserializers for control fields.
//!
//! A wrongly typed layout or checkbox value degrades to a sensible default
//! instead of rejecting the whole form description.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Grid units from any JSON number or numeric string.
///
/// Fractions are truncated. Other values count as absent.
pub(crate) fn grid_units<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let units = match &value {
        Value::Null => return Ok(None),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    if units.is_none() {
        tracing::warn!(%value, "ignoring grid units that are not a number");
    }
    Ok(units)
}

/// Checkedness from any JSON value.
///
/// `null`, `false`, `0`, `""` and `"false"` are unchecked; everything else
/// is checked.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|f| f != 0.0),
        Value::String(text) => !(text.is_empty() || text.eq_ignore_ascii_case("false")),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Units {
        #[serde(default, deserialize_with = "super::grid_units")]
        units: Option<i64>,
    }

    #[derive(Debug, Deserialize)]
    struct Flag {
        #[serde(default, deserialize_with = "super::truthy")]
        flag: bool,
    }

    #[rstest]
    #[case(json!({}), None)]
    #[case(json!({ "units": null }), None)]
    #[case(json!({ "units": 6 }), Some(6))]
    #[case(json!({ "units": 300 }), Some(300))]
    #[case(json!({ "units": -2 }), Some(-2))]
    #[case(json!({ "units": 4.7 }), Some(4))]
    #[case(json!({ "units": " 8 " }), Some(8))]
    #[case(json!({ "units": "wide" }), None)]
    #[case(json!({ "units": true }), None)]
    #[case(json!({ "units": [3] }), None)]
    fn grid_units_degrade(#[case] input: serde_json::Value, #[case] expected: Option<i64>) {
        let parsed: Units = serde_json::from_value(input).unwrap();
        assert_eq!(parsed.units, expected);
    }

    #[rstest]
    #[case(json!({}), false)]
    #[case(json!({ "flag": null }), false)]
    #[case(json!({ "flag": true }), true)]
    #[case(json!({ "flag": false }), false)]
    #[case(json!({ "flag": 1 }), true)]
    #[case(json!({ "flag": 0 }), false)]
    #[case(json!({ "flag": "true" }), true)]
    #[case(json!({ "flag": "on" }), true)]
    #[case(json!({ "flag": "" }), false)]
    #[case(json!({ "flag": "False" }), false)]
    #[case(json!({ "flag": {} }), true)]
    fn truthiness(#[case] input: serde_json::Value, #[case] expected: bool) {
        let parsed: Flag = serde_json::from_value(input).unwrap();
        assert_eq!(parsed.flag, expected);
    }
}
