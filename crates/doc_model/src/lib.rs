//! Document Model - Block and table structure for fixed-layout forms
//!
//! This crate provides the intermediate representation that sits between a
//! layout builder and a file serializer: an ordered list of blocks (headings
//! and tables) with explicit run-level styling, merge spans, row heights and
//! column widths. All lengths are integer twips so width sums are exact.

mod error;
mod units;
mod run;
mod paragraph;
pub mod table;
pub mod section;
mod document;

pub use error::*;
pub use units::*;
pub use run::*;
pub use paragraph::*;
pub use table::*;
pub use section::*;
pub use document::*;
