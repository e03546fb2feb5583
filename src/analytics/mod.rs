//! Graph analytics built on the store and the shortest-path DAGs.
//!
//! # Queries
//!
//! - minimum-path counting, through-node counting, and full route
//!   enumeration, exposed as methods on [`crate::Graph`]
//! - [`Influence`]: betweenness-style per-node scoring over all pairs
//! - [`Recommender`]: common-neighbor candidate ranking
//! - [`DegreeProfile`]: out-degree bucketing for popularity reports

mod degree;
mod influence;
mod paths;
mod recommend;

pub use degree::DegreeProfile;
pub use influence::{Influence, InfluenceConfig, InfluenceResult, InfluenceStrategy};
pub use recommend::{Recommendation, RecommendationSweep, Recommender};
