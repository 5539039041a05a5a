//! Shared types for the Regeneration Generation dashboard
//!
//! Holds the impact estimator, the display formatting rules that go with it,
//! and the logging setup used by every binary in the workspace.

pub mod errors;
pub mod estimator;
pub mod format;
pub mod logging;
pub mod types;

pub use errors::*;
pub use estimator::{
    AcresRegenerated, ChildrenReached, ImpactEstimate, estimate_education_budget, estimate_land_impact,
};
pub use format::LandImpactDisplay;
pub use types::ComponentId;
