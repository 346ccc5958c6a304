// src/cookies/models.rs

use serde::{Deserialize, Serialize};

pub const CONSENT_COOKIE_NAME: &str = "cookies_preferences_set";
pub const POLICY_COOKIE_NAME: &str = "cookies_policy";
pub const COOKIE_EXPIRY_DAYS: u32 = 365;

/// Stored in the policy cookie as JSON, e.g. `{"analytics":true}`.
/// The `Analytics` spelling written by older services is still read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePolicy {
    #[serde(default, alias = "Analytics")]
    pub analytics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerState {
    /// Nothing shown: a choice was already made, or the confirmation was dismissed.
    Hidden,
    /// Asking the user to accept or reject analytics cookies.
    Prompt,
    Accepted,
    Rejected,
}

/// Texts shown by the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerText {
    pub heading: String,
    pub accept_button: String,
    pub reject_button: String,
    pub hide_button: String,
}

impl Default for BannerText {
    fn default() -> Self {
        Self {
            heading: "Cookies on this service".to_string(),
            accept_button: "Accept analytics cookies".to_string(),
            reject_button: "Reject analytics cookies".to_string(),
            hide_button: "Hide cookie message".to_string(),
        }
    }
}
