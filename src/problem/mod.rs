//! The contract between the algorithms and a concrete problem.
//!
//! The algorithms never see a problem's internals. They only construct,
//! clone, decode and explore neighbourhoods through [`Problem`], and they
//! own every value returned by [`Problem::empty`], `clone` or
//! [`Problem::best_neighbour`] until it is dropped.

mod types;

pub use types::{Cost, LocalSearchPolicy, Problem};
