// Character and word counting for the character count component

pub mod counter;
pub mod models;

#[cfg(test)]
mod tests;

pub use counter::CharacterCount;
pub use models::{CountLimit, CountStatus};
