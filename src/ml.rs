//! Machine learning for Parley: intent classification and the linear models
//! behind it.

pub mod intent_classifier;
pub mod models;
