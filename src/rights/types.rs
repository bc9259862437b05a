use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An account at a given chain snapshot. Built by the `Query.delegate` field
/// and read by the rights fields hanging off it.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(complex)]
pub struct Delegate {
    pub address: String,
    pub block_hash: String,
}

/// Extra keys of a rights record, kept verbatim.
pub type RawFields = Map<String, Value>;

/// A baking right as reported by the node.
///
/// Older protocols report `priority`, Tenderbake ones report `round`. Keys
/// without a dedicated field land in `extra` and are serialized back as they
/// came.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[graphql(complex)]
pub struct BakingRight {
    pub level: u32,
    pub delegate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(flatten)]
    #[graphql(skip)]
    pub extra: RawFields,
}

/// An endorsing right as reported by the node.
///
/// Before Tenderbake every record names one `delegate` and its `slots`.
/// Tenderbake nodes group a level's delegates under `delegates`, which is
/// kept in `extra` along with any other key.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[graphql(complex)]
pub struct EndorsingRight {
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(flatten)]
    #[graphql(skip)]
    pub extra: RawFields,
}

/// Raw `bakingRights` field arguments as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BakingRightsArgs {
    pub level: Option<Vec<u32>>,
    pub cycle: Option<Vec<u32>>,
    pub max_priority: Option<u32>,
}

/// Raw `endorsingRights` field arguments as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndorsingRightsArgs {
    pub level: Option<Vec<u32>>,
    pub cycle: Option<Vec<u32>>,
}

/// Validated baking-rights lookup. `max_priority` is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakingRightsParams {
    pub delegate: String,
    pub level: Option<Vec<u32>>,
    pub cycle: Option<Vec<u32>>,
    pub max_priority: u32,
}

/// Validated endorsing-rights lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndorsingRightsParams {
    pub delegate: String,
    pub level: Option<Vec<u32>>,
    pub cycle: Option<Vec<u32>>,
}
