//! Wire form for alpha/beta.
//!
//! JSON has no infinity, so the sentinels travel as the strings
//! `"Infinity"` and `"-Infinity"`; finite bounds stay plain numbers.
//! Use with `#[serde(with = "abv_search::bound")]`.
use abv_core::Utility;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serializer;

const POS: &str = "Infinity";
const NEG: &str = "-Infinity";

pub fn serialize<S>(bound: &Utility, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *bound {
        b if b == Utility::INFINITY => serializer.serialize_str(POS),
        b if b == Utility::NEG_INFINITY => serializer.serialize_str(NEG),
        b => serializer.serialize_f64(b),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Utility, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(Utility),
        Text(String),
    }
    match Wire::deserialize(deserializer)? {
        Wire::Number(n) => Ok(n),
        Wire::Text(s) => match s.as_str() {
            POS | "+Infinity" => Ok(Utility::INFINITY),
            NEG => Ok(Utility::NEG_INFINITY),
            other => Err(serde::de::Error::custom(format!(
                "expected a number or ±Infinity, got '{}'",
                other
            ))),
        },
    }
}

/// Human-readable bound for terminal output.
pub fn show(bound: Utility) -> String {
    match bound {
        b if b == Utility::INFINITY => "+∞".to_string(),
        b if b == Utility::NEG_INFINITY => "-∞".to_string(),
        b => b.to_string(),
    }
}
