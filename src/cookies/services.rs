// src/cookies/services.rs

use tracing::{debug, warn};

use super::models::{CookiePolicy, CONSENT_COOKIE_NAME, COOKIE_EXPIRY_DAYS, POLICY_COOKIE_NAME};
use super::store::CookieStore;
use crate::common::RulesError;

/// Reads and records the user's cookie choice.
///
/// Cookie access may fail (for example during prerendering). Reads treat
/// any failure as "no consent"; writes log and carry on, since the user can
/// simply choose again.
#[derive(Debug)]
pub struct CookieConsentService<S: CookieStore> {
    store: S,
}

impl<S: CookieStore> CookieConsentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the user has made a choice, either way.
    pub fn has_consent(&self) -> bool {
        match self.store.get(CONSENT_COOKIE_NAME) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("Failed to read consent cookie: {}", e);
                false
            }
        }
    }

    pub fn analytics_consent(&self) -> bool {
        match self.read_policy() {
            Ok(policy) => policy.map(|p| p.analytics).unwrap_or(false),
            Err(e) => {
                warn!("Failed to read cookie policy: {}", e);
                false
            }
        }
    }

    pub fn set_consent(&self, accept_analytics: bool) {
        if let Err(e) = self.write_policy(accept_analytics) {
            warn!("Failed to store cookie consent: {}", e);
        } else {
            debug!(analytics = accept_analytics, "Cookie consent stored");
        }
    }

    pub fn clear_consent(&self) {
        for name in [CONSENT_COOKIE_NAME, POLICY_COOKIE_NAME] {
            if let Err(e) = self.store.delete(name) {
                warn!("Failed to delete cookie {}: {}", name, e);
            }
        }
    }

    fn read_policy(&self) -> Result<Option<CookiePolicy>, RulesError> {
        match self.store.get(POLICY_COOKIE_NAME)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn write_policy(&self, accept_analytics: bool) -> Result<(), RulesError> {
        let policy = serde_json::to_string(&CookiePolicy {
            analytics: accept_analytics,
        })?;

        self.store.set(POLICY_COOKIE_NAME, &policy, COOKIE_EXPIRY_DAYS)?;
        self.store.set(CONSENT_COOKIE_NAME, "true", COOKIE_EXPIRY_DAYS)?;

        Ok(())
    }
}
