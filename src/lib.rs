use log::trace;

use crate::capabilities::CapabilitiesReply;
use crate::error::FeatureStatusError;
use crate::status::FeatureStatus;

pub mod capabilities;
pub mod error;
pub mod status;

/// Reads the account feature status out of a capabilities reply payload.
///
/// The reply is taken as the service sent it: field values inside the
/// features section pass through untouched, missing keys fall back to the
/// field defaults.
///
/// # Errors
/// Will return `Err` if the payload isn't a capabilities reply, the reply
/// reports failure, or the reply carries no features section
pub fn read_feature_status(payload: &str) -> Result<FeatureStatus, FeatureStatusError> {
    let Ok(reply) = serde_json::from_str::<CapabilitiesReply>(payload) else {
        trace!("Capabilities Reply Decode Failed");
        return Err(FeatureStatusError::InvalidReply);
    };

    let meta = &reply.ocs.meta;
    if meta.status != "ok" {
        trace!("Capabilities Reply Status {} {}", meta.status, meta.statuscode);
        return Err(FeatureStatusError::FailedReply(meta.statuscode));
    }

    let Some(features) = reply.ocs.data.capabilities.features else {
        trace!("Features Section Missing");
        return Err(FeatureStatusError::MissingFeatures);
    };

    Ok(features)
}
