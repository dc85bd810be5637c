//! Form Layout - Form A mediation application layout
//!
//! Turns submitted form fields into an [`ApplicationRecord`] and the record
//! into a [`doc_model::DocumentModel`] that reproduces the paper form: a
//! centered caption followed by one three-column table with a fixed row
//! sequence, fixed row heights and fixed column widths.
//!
//! # Example
//!
//! ```rust
//! use form_layout::{ApplicationRecord, FieldPolicy, FormConfig, LayoutBuilder};
//! use std::collections::HashMap;
//!
//! let mut fields = HashMap::new();
//! fields.insert("client_name".to_string(), "Jane Doe".to_string());
//!
//! let record = ApplicationRecord::from_fields(&fields, &FieldPolicy::Empty);
//! let config = FormConfig::standard();
//! let model = LayoutBuilder::new(&config).build(&record).unwrap();
//!
//! assert_eq!(model.tables().count(), 1);
//! ```

mod record;
mod extract;
mod config;
mod builder;

pub use record::*;
pub use extract::*;
pub use config::*;
pub use builder::*;
