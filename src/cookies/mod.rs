// Cookie consent storage and the cookie banner flow

pub mod banner;
pub mod models;
pub mod services;
pub mod store;


pub use banner::CookieBanner;
pub use models::{BannerState, BannerText, CookiePolicy};
pub use services::CookieConsentService;
pub use store::{CookieStore, MemoryCookieStore};
