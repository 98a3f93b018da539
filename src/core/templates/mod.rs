//! Template library for generated artifacts.
//!
//! Every function here is a pure map from the resolved configuration (and
//! field list) to artifact text: rendering twice with the same snapshot
//! yields byte-identical output, which is what keeps previews cheap and
//! the archive reproducible. PHP bodies use hard tabs, matching what
//! OpenCart core ships.

pub mod admin;
pub mod assets;
pub mod catalog;
pub mod language;
pub mod ocmod;

pub use language::Locale;
