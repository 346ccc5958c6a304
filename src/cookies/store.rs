// src/cookies/store.rs
//
// Where consent cookies live. Browser-backed stores can fail (no JS during
// prerendering, blocked cookies), so every operation returns a Result.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::common::RulesError;

pub trait CookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, RulesError>;
    fn set(&self, name: &str, value: &str, expiry_days: u32) -> Result<(), RulesError>;
    fn delete(&self, name: &str) -> Result<(), RulesError>;
}

impl<S: CookieStore + ?Sized> CookieStore for &S {
    fn get(&self, name: &str) -> Result<Option<String>, RulesError> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str, expiry_days: u32) -> Result<(), RulesError> {
        (**self).set(name, value, expiry_days)
    }

    fn delete(&self, name: &str) -> Result<(), RulesError> {
        (**self).delete(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub value: String,
    pub expiry_days: u32,
}

/// In-process cookie jar for server-side sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    cookies: RwLock<HashMap<String, StoredCookie>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cookie(&self, name: &str) -> Option<StoredCookie> {
        self.cookies
            .read()
            .ok()
            .and_then(|cookies| cookies.get(name).cloned())
    }

    pub fn len(&self) -> usize {
        self.cookies.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, RulesError> {
        let cookies = self
            .cookies
            .read()
            .map_err(|_| RulesError::Storage("cookie jar lock poisoned".to_string()))?;
        Ok(cookies.get(name).map(|c| c.value.clone()))
    }

    fn set(&self, name: &str, value: &str, expiry_days: u32) -> Result<(), RulesError> {
        let mut cookies = self
            .cookies
            .write()
            .map_err(|_| RulesError::Storage("cookie jar lock poisoned".to_string()))?;
        cookies.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                expiry_days,
            },
        );
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), RulesError> {
        let mut cookies = self
            .cookies
            .write()
            .map_err(|_| RulesError::Storage("cookie jar lock poisoned".to_string()))?;
        cookies.remove(name);
        Ok(())
    }
}
