//! Medir: Ranking quality metrics for recommender and retrieval evaluation.
//!
//! Medir provides the standard evaluation metrics for ranked item lists
//! with a focus on ergonomic APIs, comprehensive testing, and exact
//! reference semantics for rank accounting with ignored items.
//!
//! # Quick Start
//!
//! ```
//! use medir::prelude::*;
//! use std::collections::HashSet;
//!
//! // Ranked recommendations for one user, best first
//! let ranked = vec![10, 4, 7, 1, 9];
//! // Items the user actually interacted with
//! let correct = HashSet::from([4, 9]);
//! // Training items, left out of rank accounting
//! let ignore = HashSet::from([10]);
//!
//! let score = ndcg(&ranked, &correct, Some(&ignore));
//! assert!(score > 0.0 && score <= 1.0);
//!
//! let report = RankingReport::compute(&ranked, &correct, Some(&ignore)).unwrap();
//! assert_eq!(report.n_correct, 2);
//! ```
//!
//! # Modules
//!
//! - [`ranking`]: Ranked-list evaluation metrics (NDCG, precision, recall, RR, AP)
//! - [`error`]: Error types
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod ranking;

pub use error::{MedirError, Result};
pub use ranking::{ndcg, RankingReport};
