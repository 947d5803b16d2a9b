use serde::{Deserialize, Serialize};

/// Account feature status as reported by the capabilities service.
///
/// Plain data. Any relationship between the flags and the numeric or string
/// fields (say, `trial_expired` against `trial_remaining_sec`) is owed by the
/// service, not checked here.
#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct FeatureStatus {
    // trial window
    pub is_trial: bool,
    pub trial_expired: bool,
    pub trial_remaining_sec: i64,
    pub trial_end_time: i64,
    pub trial_end: Option<String>,

    // account removal countdown
    pub account_remove_expired: bool,
    pub account_remove_remaining_sec: i64,
    pub account_remove_time: i64,
    pub account_remove: Option<String>,
}
