//! Tests for the RealAssetStore service

use super::fixtures::*;
use crate::error::DashboardError;
use crate::services::RealAssetStore;
use crate::traits::AssetStore;

mod real_asset_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_read_pdf() {
        let dir = create_full_assets_dir();
        let store = RealAssetStore::new(dir.path());

        let response = store.read_asset("Policy_Toolkit.pdf").await.unwrap();
        assert_eq!(response.content, FAKE_PDF);
        assert_eq!(response.content_type, "application/pdf");
        assert_eq!(response.cache_control.as_deref(), Some("no-cache"));
    }

    #[tokio::test]
    async fn test_read_image_with_leading_slash() {
        let dir = create_full_assets_dir();
        let store = RealAssetStore::new(dir.path());

        let response = store.read_asset("/policy_map.png").await.unwrap();
        assert_eq!(response.content_type, "image/png");
        assert_eq!(response.cache_control.as_deref(), Some("public, max-age=86400"));
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let dir = create_empty_assets_dir();
        let store = RealAssetStore::new(dir.path());

        let err = store.read_asset("un_resolution.pdf").await.unwrap_err();
        assert!(matches!(err, DashboardError::AssetNotFound { .. }));
        assert!(!store.asset_exists("un_resolution.pdf").await);
    }

    #[tokio::test]
    async fn test_missing_base_dir_is_not_fatal() {
        let store = RealAssetStore::new("/definitely/not/a/real/assets/dir");

        assert!(!store.asset_exists("Policy_Toolkit.pdf").await);
        assert!(store.read_asset("Policy_Toolkit.pdf").await.is_err());
    }

    #[tokio::test]
    async fn test_directory_traversal_is_rejected() {
        let outer = create_empty_assets_dir();
        write_file(outer.path(), "secret.txt", b"top secret");
        write_file(outer.path(), "assets/policy_map.png", FAKE_PNG);
        let store = RealAssetStore::new(outer.path().join("assets"));

        let err = store.read_asset("../secret.txt").await.unwrap_err();
        assert!(matches!(err, DashboardError::AccessDenied { .. }));
        assert!(!store.asset_exists("../secret.txt").await);

        // Nonexistent traversal targets fail canonicalization first
        let err = store.read_asset("../../etc/does-not-exist").await.unwrap_err();
        assert!(matches!(err, DashboardError::AssetNotFound { .. }));
    }

    #[tokio::test]
    async fn test_directories_and_empty_paths_are_not_assets() {
        let dir = create_full_assets_dir();
        write_file(dir.path(), "nested/readme.txt", b"hi");
        let store = RealAssetStore::new(dir.path());

        assert!(!store.asset_exists("nested").await);
        assert!(store.read_asset("nested").await.is_err());
        assert!(store.read_asset("").await.is_err());
        assert!(store.asset_exists("nested/readme.txt").await);
    }

    #[test]
    fn test_content_types() {
        let store = RealAssetStore::default();

        assert_eq!(store.content_type("a.pdf"), "application/pdf");
        assert_eq!(store.content_type("A.PDF"), "application/pdf");
        assert_eq!(store.content_type("map.jpeg"), "image/jpeg");
        assert_eq!(store.content_type("style.css"), "text/css");
        assert_eq!(store.content_type("unknown.xyz"), "application/octet-stream");
        assert_eq!(store.content_type("noextension"), "application/octet-stream");
    }
}
