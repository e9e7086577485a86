use crate::price::Cents;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a customizable feature (e.g. "Color").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub u64);

/// Identifier of one option within a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub u64);

/// Opaque identifier of a saved car. The backend may send it as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CarId(String);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl CarId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CarId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for CarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for CarId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

/// A customizable category of the car with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    #[serde(default)]
    pub options: Vec<CarOption>,
}

impl Feature {
    /// The option pre-selected for a fresh car.
    #[must_use]
    pub fn first_option(&self) -> Option<&CarOption> {
        self.options.first()
    }

    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&CarOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// One selectable choice within a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarOption {
    pub id: OptionId,
    pub feature_id: FeatureId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price_in_cents: Cents,
}

/// A car as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRecord {
    pub id: CarId,
    pub name: String,
    /// Older backends do not store the flag at all.
    #[serde(rename = "isConvertible", default, skip_serializing_if = "Option::is_none")]
    pub is_convertible: Option<bool>,
    #[serde(default)]
    pub options: Vec<CarOption>,
}

impl CarRecord {
    #[must_use]
    pub fn total_price(&self) -> Cents {
        self.options.iter().map(|o| o.price_in_cents).sum()
    }
}

/// Payload sent to the backend on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDraft {
    pub name: String,
    #[serde(rename = "optionIds")]
    pub option_ids: Vec<OptionId>,
    #[serde(rename = "isConvertible")]
    pub is_convertible: bool,
}
