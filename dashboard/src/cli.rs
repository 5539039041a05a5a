//! One-shot estimates printed to stdout

use shared::{
    AcresRegenerated, ChildrenReached, LandImpactDisplay, estimate_education_budget, estimate_land_impact,
    format::format_budget_millions,
};

use crate::error::DashboardResult;

/// Formatted land impact for `acres`, one metric per line
pub fn land_report(acres: u32) -> DashboardResult<String> {
    let acres = AcresRegenerated::new(acres)?;
    let display = LandImpactDisplay::from(&estimate_land_impact(acres));

    Ok(format!(
        "Acres Regenerated: {acres}\n\
         Annual CO₂ Sequestered: {}\n\
         Community Income Potential: {}\n\
         Education Investment (Est): {}",
        display.carbon, display.income, display.toolkit_cost
    ))
}

/// Formatted toolkit budget for `children`
pub fn education_report(children: u64) -> DashboardResult<String> {
    let children = ChildrenReached::new(children)?;
    let budget = format_budget_millions(estimate_education_budget(children));

    Ok(format!(
        "Children Reached: {children}\n\
         Estimated Toolkit Rollout Budget: {budget}"
    ))
}
