// Selected-tab state for the tabs component

pub mod models;
pub mod state;


pub use models::Tab;
pub use state::Tabs;
