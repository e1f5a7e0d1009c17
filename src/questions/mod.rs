//! Question list composition: defaults, overrides and prompt adaptation

pub mod autocomplete;
pub mod defaults;
pub mod merge;

pub use autocomplete::autocomplete_questions;
pub use defaults::build_default_questions;
pub use merge::merge_questions;
