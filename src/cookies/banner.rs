// src/cookies/banner.rs

use tracing::debug;

use super::models::{BannerState, BannerText};
use super::services::CookieConsentService;
use super::store::CookieStore;

/// Cookie banner flow: prompt, record the choice, confirm, then hide.
#[derive(Debug, Clone)]
pub struct CookieBanner {
    state: BannerState,
    text: BannerText,
}

impl CookieBanner {
    /// Starts hidden when the user already made a choice.
    pub fn load<S: CookieStore>(service: &CookieConsentService<S>) -> Self {
        Self::load_with_text(service, BannerText::default())
    }

    pub fn load_with_text<S: CookieStore>(
        service: &CookieConsentService<S>,
        text: BannerText,
    ) -> Self {
        let state = if service.has_consent() {
            BannerState::Hidden
        } else {
            BannerState::Prompt
        };

        Self { state, text }
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn text(&self) -> &BannerText {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.state != BannerState::Hidden
    }

    /// Records acceptance. Returns the stored analytics choice, or `None`
    /// when the banner is not prompting.
    pub fn accept<S: CookieStore>(&mut self, service: &CookieConsentService<S>) -> Option<bool> {
        self.choose(service, true)
    }

    pub fn reject<S: CookieStore>(&mut self, service: &CookieConsentService<S>) -> Option<bool> {
        self.choose(service, false)
    }

    /// Dismisses the confirmation message. Has no effect while prompting.
    pub fn hide(&mut self) {
        if matches!(self.state, BannerState::Accepted | BannerState::Rejected) {
            self.state = BannerState::Hidden;
        }
    }

    pub fn confirmation_message(&self) -> Option<&'static str> {
        match self.state {
            BannerState::Accepted => Some("You've accepted analytics cookies."),
            BannerState::Rejected => Some("You've rejected analytics cookies."),
            _ => None,
        }
    }

    fn choose<S: CookieStore>(
        &mut self,
        service: &CookieConsentService<S>,
        accept_analytics: bool,
    ) -> Option<bool> {
        if self.state != BannerState::Prompt {
            debug!(state = ?self.state, "Ignoring cookie choice outside prompt");
            return None;
        }

        service.set_consent(accept_analytics);
        self.state = if accept_analytics {
            BannerState::Accepted
        } else {
            BannerState::Rejected
        };

        Some(accept_analytics)
    }
}
