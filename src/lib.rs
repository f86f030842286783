//! Attribution of registrations to the content pages users read beforehand.
//!
//! A hitlog is loaded from CSV ([`data::load_hitlog`]), reduced to the top
//! pages seen before each user's first registration
//! ([`attribution::compute_top_articles`]) and written back as CSV
//! ([`data::save_top_articles`]).

pub mod attribution;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod model;

pub use attribution::{compute_top_articles, compute_top_articles_with};
pub use config::{AttributionConfig, TieBreak};
pub use error::HitlogError;
pub use model::{AttributionRecord, Event};
