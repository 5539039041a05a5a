//! Impact estimator
//!
//! Linear per-acre and per-child rates used by the simulator and the
//! education campaign. All inputs are range-checked newtypes so the
//! estimate functions themselves cannot fail.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Tons of CO2 sequestered per regenerated acre per year
pub const CARBON_TONS_PER_ACRE: f64 = 4.5;

/// Community income potential per regenerated acre per year (USD)
pub const INCOME_USD_PER_ACRE: f64 = 2000.0;

/// Cost of one education toolkit (USD)
pub const TOOLKIT_COST_USD: f64 = 18.0;

/// Number of acres converted to regenerative use
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AcresRegenerated(u32);

impl AcresRegenerated {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1000;
    pub const DEFAULT: u32 = 20;
    pub const STEP: u32 = 1;

    pub fn new(acres: u32) -> SharedResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&acres) {
            Ok(Self(acres))
        } else {
            Err(SharedError::out_of_range(
                "acres",
                acres as i64,
                Self::MIN as i64,
                Self::MAX as i64,
            ))
        }
    }

    /// Pin any value to the slider range
    pub fn clamped(acres: i64) -> Self {
        Self(acres.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for AcresRegenerated {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for AcresRegenerated {
    type Error = SharedError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AcresRegenerated> for u32 {
    fn from(value: AcresRegenerated) -> Self {
        value.0
    }
}

impl fmt::Display for AcresRegenerated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of children reached by the toolkit campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ChildrenReached(u64);

impl ChildrenReached {
    pub const MIN: u64 = 0;
    pub const MAX: u64 = 50_000_000;
    pub const DEFAULT: u64 = 1_000_000;
    /// Slider granularity. Not enforced by `new`.
    pub const STEP: u64 = 500_000;

    pub fn new(children: u64) -> SharedResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&children) {
            Ok(Self(children))
        } else {
            Err(SharedError::out_of_range(
                "children",
                i64::try_from(children).unwrap_or(i64::MAX),
                Self::MIN as i64,
                Self::MAX as i64,
            ))
        }
    }

    /// Pin any value to the slider range
    pub fn clamped(children: i64) -> Self {
        Self(children.clamp(Self::MIN as i64, Self::MAX as i64) as u64)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for ChildrenReached {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u64> for ChildrenReached {
    type Error = SharedError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChildrenReached> for u64 {
    fn from(value: ChildrenReached) -> Self {
        value.0
    }
}

impl fmt::Display for ChildrenReached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Yearly outcome of regenerating a given acreage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub carbon_tons: f64,
    pub income_usd: f64,
    pub toolkit_cost_usd: f64,
}

pub fn estimate_land_impact(acres: AcresRegenerated) -> ImpactEstimate {
    let acres = f64::from(acres.get());
    ImpactEstimate {
        carbon_tons: acres * CARBON_TONS_PER_ACRE,
        income_usd: acres * INCOME_USD_PER_ACRE,
        toolkit_cost_usd: acres * TOOLKIT_COST_USD,
    }
}

/// Toolkit rollout budget in USD
pub fn estimate_education_budget(children: ChildrenReached) -> f64 {
    // Exact: MAX * 18 is far below 2^53.
    children.get() as f64 * TOOLKIT_COST_USD
}
