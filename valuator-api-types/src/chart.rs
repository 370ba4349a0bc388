use std::fmt::Display;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// One entry on the label axis. Payloads carry years either as strings or as bare numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Period {
    Number(Number),
    Text(String),
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Number(number) if number.is_f64() => match number.as_f64() {
                // integral floats print without a fraction, `2024.0` reads as `2024`
                Some(value) if value == 0.0 => write!(f, "0"),
                Some(value) => write!(f, "{value}"),
                None => write!(f, "{number}"),
            },
            Period::Number(number) => write!(f, "{number}"),
            Period::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u32> for Period {
    fn from(value: u32) -> Self {
        Period::Number(value.into())
    }
}

impl From<&str> for Period {
    fn from(value: &str) -> Self {
        Period::Text(value.to_string())
    }
}

/// Base, optimistic and pessimistic projections of one metric, aligned by index to the labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesMap {
    #[serde(default, deserialize_with = "lenient")]
    pub base: Option<Vec<f64>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub opt: Option<Vec<f64>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub pes: Option<Vec<f64>>,
}

impl SeriesMap {
    pub fn new(base: Vec<f64>) -> Self {
        Self {
            base: Some(base),
            opt: None,
            pes: None,
        }
    }

    pub fn with_optimistic(mut self, opt: Vec<f64>) -> Self {
        self.opt = Some(opt);
        self
    }

    pub fn with_pessimistic(mut self, pes: Vec<f64>) -> Self {
        self.pes = Some(pes);
        self
    }
}

/// The payload embedded in results pages under `#chart-data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default, deserialize_with = "lenient_labels")]
    pub labels: Vec<Period>,
    #[serde(default, deserialize_with = "lenient")]
    pub revenue: Option<SeriesMap>,
    #[serde(default, deserialize_with = "lenient")]
    pub fcf: Option<SeriesMap>,
}

impl ChartDataset {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Fields of the wrong shape read as absent instead of failing the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<Period>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}
