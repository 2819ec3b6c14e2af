//! # tally-classifier
//!
//! Assigns a `category / sub_category` pair to a short transaction description,
//! learning from labeled examples held in an [`ILabelStore`](tally_core::ILabelStore).
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Text → tokens | [`tokenizer`] |
//! | (category, sub_category) ↔ composite label | [`label`] |
//! | Token/label statistics, posterior scoring | [`bayes`] |
//! | Current trained generation | [`cache`] |
//! | train / classify / record_correction | [`service`] |
//!
//! Training always builds a fresh model off to the side and swaps it into the
//! cache in one step, so readers never see a half-trained model.

pub mod bayes;
pub mod cache;
pub mod label;
pub mod service;
pub mod tokenizer;
pub mod training;

pub use bayes::{BayesModel, LabelScore};
pub use cache::{CacheState, Generation, ModelCache};
pub use service::{BootstrapPolicy, ClassificationService};
