//! Wire shapes of the capabilities reply the feature status arrives in.

use serde::{Deserialize, Serialize};

use crate::status::FeatureStatus;

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct CapabilitiesReply {
    pub ocs: Ocs,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Ocs {
    pub meta: OcsMeta,
    pub data: OcsData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OcsMeta {
    pub status: String,
    pub statuscode: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl Default for OcsMeta {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            statuscode: 200,
            message: None,
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct OcsData {
    pub capabilities: CapabilitySections,
}

/// Capability sections of the server. Sections other than `features` belong
/// to other server apps and pass through undecoded.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct CapabilitySections {
    pub features: Option<FeatureStatus>,
}
