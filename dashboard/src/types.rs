//! Request and response types for the dashboard's HTTP API

use serde::{Deserialize, Serialize};
use shared::{AcresRegenerated, ChildrenReached, ImpactEstimate, LandImpactDisplay};

use crate::catalogue::DownloadAsset;

/// Query for `/api/impact`
///
/// Signed so that negative input is reported as out of range rather than
/// as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImpactQuery {
    pub acres: Option<i64>,
}

/// Query for `/api/education`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationQuery {
    pub children: Option<i64>,
}

/// Query for the page itself; both values are clamped to the slider range
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub acres: Option<i64>,
    pub children: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactResponse {
    pub status: String,
    pub acres: AcresRegenerated,
    pub estimate: ImpactEstimate,
    pub display: LandImpactDisplay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationResponse {
    pub status: String,
    pub children: ChildrenReached,
    pub budget_usd: f64,
    pub display: String,
}

/// Presence of one catalogued download
#[derive(Debug, Clone, Serialize)]
pub struct AssetStatus {
    #[serde(flatten)]
    pub asset: DownloadAsset,
    pub url: String,
    pub present: bool,
}

impl AssetStatus {
    pub fn new(asset: DownloadAsset, present: bool) -> Self {
        Self {
            url: format!("/downloads/{}", asset.id),
            asset,
            present,
        }
    }
}

/// Everything the page renderer needs for one request
#[derive(Debug, Clone)]
pub struct PageModel {
    pub acres: AcresRegenerated,
    pub land: LandImpactDisplay,
    pub children: ChildrenReached,
    pub budget: String,
    pub map_available: bool,
    pub downloads: Vec<AssetStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::DOWNLOADS;

    #[test]
    fn test_asset_status_serialization_is_flat() {
        let status = AssetStatus::new(DOWNLOADS[0], true);
        let value = serde_json::to_value(&status).unwrap();

        assert_eq!(value["id"], "policy-toolkit");
        assert_eq!(value["url"], "/downloads/policy-toolkit");
        assert_eq!(value["present"], true);
        assert_eq!(value["download_name"], "PolicyToolkit.pdf");
    }

    #[test]
    fn test_queries_accept_missing_fields() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert!(query.acres.is_none());
        assert!(query.children.is_none());
    }
}
