//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use medir::prelude::*;
//! ```

pub use crate::error::{MedirError, Result};
pub use crate::ranking::{
    average_precision, hit_rate_at_k, ideal_dcg, ndcg, precision_at_k, recall_at_k,
    reciprocal_rank, RankingReport,
};
