//! Fixed list of files the dashboard displays or offers for download

use serde::Serialize;

/// Map image shown in the policy map section
pub const MAP_IMAGE: &str = "policy_map.png";

/// A PDF offered on the downloads section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DownloadAsset {
    /// URL segment under `/downloads/`
    pub id: &'static str,
    /// File name inside the assets directory
    pub file_name: &'static str,
    /// Name the browser saves the file as
    pub download_name: &'static str,
    pub label: &'static str,
}

pub const DOWNLOADS: [DownloadAsset; 3] = [
    DownloadAsset {
        id: "policy-toolkit",
        file_name: "Policy_Toolkit.pdf",
        download_name: "PolicyToolkit.pdf",
        label: "Download Policy Toolkit PDF",
    },
    DownloadAsset {
        id: "un-proposal",
        file_name: "un_resolution.pdf",
        download_name: "UNResolution.pdf",
        label: "Download UN Proposal PDF",
    },
    DownloadAsset {
        id: "charter",
        file_name: "30_year_charter.pdf",
        download_name: "30YearCharter.pdf",
        label: "Download 30-Year Charter",
    },
];

pub fn find_download(id: &str) -> Option<&'static DownloadAsset> {
    DOWNLOADS.iter().find(|asset| asset.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_download() {
        let asset = find_download("charter").unwrap();
        assert_eq!(asset.file_name, "30_year_charter.pdf");
        assert_eq!(asset.download_name, "30YearCharter.pdf");
        assert!(find_download("Policy_Toolkit.pdf").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in DOWNLOADS.iter().enumerate() {
            for b in DOWNLOADS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
