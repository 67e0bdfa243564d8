//! Selbsteinschätzung Ambiguitätstoleranz für freiberufliche Trainer:innen & Berater:innen.
//!
//! 12 Likert-Items (1-5), davon die Items 3, 6, 8 und 11 negativ gepolt. Die Summe
//! der umkodierten Werte (12-60) wird in Niedrig / Mittel / Hoch eingestuft.

pub mod bulk;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub mod scoring;
pub mod session;
pub mod store;
pub mod telemetry;

pub use bulk::{read_bulk, read_bulk_delimited, BulkScore};
pub use catalog::{Catalog, Item, QUESTIONS};
pub use error::{DomainError, Error, Result};
pub use report::Report;
pub use scoring::{categorize, reverse_score, score, AdjustedItem, Category, Scored};
pub use session::{Session, State};
pub use store::AnswerStore;
