//! # creator_core - Creator Economy Calculation Engine
//!
//! `creator_core` estimates TikTok creator earnings and grades engagement
//! metrics. Every calculator is a pure function over a JSON-serializable
//! input record, which makes the crate easy to drive from a CLI, a web form
//! or an AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: formulas take an input and return a result
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Forms are partial**: raw form values are validated field by field and
//!   every problem is reported at once
//! - **Injected rates**: regional and niche multipliers come from a
//!   [`RateTables`] value rather than globals
//!
//! ## Quick Start
//!
//! ```rust
//! use creator_core::calculations::engagement_rate::{calculate, EngagementRateInput};
//! use creator_core::rating::Tier;
//!
//! let input = EngagementRateInput {
//!     followers: 10_000.0,
//!     likes: 400.0,
//!     comments: 50.0,
//!     shares: 30.0,
//!     saves: 20.0,
//! };
//! assert!(input.validate().valid);
//!
//! let result = calculate(&input);
//! assert_eq!(result.engagement_rate, 5.0);
//! assert_eq!(result.rating, Tier::Excellent);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the calculators and the by-name registry
//! - [`equations`] - shared arithmetic (rounding, per-thousand rates, ranges)
//! - [`rating`] - tier bands
//! - [`tables`] - regional and niche rate tables
//! - [`validation`] - form field rules and reports
//! - [`interpretation`] - prose summaries of results
//! - [`errors`] - structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod interpretation;
pub mod rating;
pub mod tables;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculatorId, Evaluation};
pub use equations::EarningsRange;
pub use errors::{CalcError, CalcResult};
pub use rating::Tier;
pub use tables::RateTables;
pub use validation::{FormValues, ValidationReport};
