//! Domain models for option set metadata

use serde::{Deserialize, Serialize};

/// One enumerated value belonging to an option set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OptionValue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// An option set and its owned option values, immutable after fetch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OptionSet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    #[serde(rename = "valueType")]
    pub value_type: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionValue>,
}

/// Page-fetch response envelope. The `optionSets` array may be absent, in
/// which case the page contributes nothing.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OptionSetsResponse {
    #[serde(default)]
    #[serde(rename = "optionSets")]
    pub option_sets: Vec<OptionSet>,
}
