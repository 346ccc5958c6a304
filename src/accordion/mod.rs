// Show and hide state for the accordion component

pub mod models;
pub mod state;

#[cfg(test)]
mod tests;

pub use models::AccordionSection;
pub use state::Accordion;
