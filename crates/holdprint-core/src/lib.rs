//! # `Holdprint` Core
//!
//! Point-set similarity engine for climbing-route fingerprints.
//!
//! A route is fingerprinted by tapping its holds on a photo. Each tap is an
//! image-relative `(x, y)` point in `[0, 1]`. Two fingerprints of the same
//! route rarely line up: the camera sits at a different distance, the framing
//! shifts, and a hold gets missed or tapped twice. The engine scores two
//! point sets against each other while tolerating exactly that noise.
//!
//! ## Features
//!
//! - **Normalization**: centroid translation + RMS scaling removes framing and
//!   capture distance
//! - **Set distance**: Modified Hausdorff Distance, robust to a few missing or
//!   extra taps
//! - **Order alignment**: Dynamic Time Warping over the top-to-bottom ordering
//!   of holds, a corrective signal for perspective distortion
//! - **Ranking**: best-image-wins search over a frozen route snapshot, with an
//!   optional rayon fan-out
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use holdprint_core::{search, Point, Route, LabeledImage, SearchOptions};
//!
//! let mut route = Route::new("Triangle");
//! route.add_image(LabeledImage::new(
//!     "photos/triangle.jpg",
//!     vec![Point::new(0.2, 0.2), Point::new(0.8, 0.2), Point::new(0.5, 0.8)],
//! ));
//!
//! let routes = vec![route];
//! let query = vec![Point::new(0.21, 0.2), Point::new(0.8, 0.22), Point::new(0.5, 0.79)];
//! let results = search(&query, &routes, 10, &SearchOptions::default());
//! assert_eq!(results[0].route.name, "Triangle");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Scores are small integers derived from bounded floats.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod catalog;
#[cfg(test)]
mod catalog_tests;
pub mod config;
pub mod dtw;
pub mod error;
pub mod fusion;
#[cfg(test)]
mod fusion_tests;
pub mod geometry;
pub mod hausdorff;
#[cfg(test)]
mod hausdorff_tests;
pub mod point;
pub mod route;
pub mod search;

pub use catalog::RouteCatalog;
pub use config::{ConfigError, HoldprintConfig, LoggingConfig, SearchConfig};
pub use dtw::{min_max_normalize, order_similarity, ordered_projection, sequence_alignment_distance};
pub use error::{Error, Result};
pub use fusion::{combined_score, ScoreWeights};
pub use geometry::{centroid, euclidean_distance, mean, normalize, rms_radius, validate_points};
pub use hausdorff::{set_distance, similarity_from_distance};
pub use point::{Point, PointSet};
pub use route::{LabeledImage, Route};
pub use search::{
    explain, score_image, search, ImageScore, MatchResult, ScoreBreakdown, SearchOptions,
    DEFAULT_TOP_K,
};

#[cfg(feature = "parallel")]
pub use search::search_parallel;
