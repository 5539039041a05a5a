//! End-to-end test over a real socket


use dashboard::{Dashboard, DashboardConfig, RealAssetStore};
use fixtures::*;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_serve_and_graceful_shutdown() {
    let assets = full_assets_dir();
    let config = DashboardConfig::new("127.0.0.1", 0, assets.path(), "info").unwrap();
    let dashboard = Dashboard::new(config, RealAssetStore::new(assets.path()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = {
        let dashboard = dashboard.clone();
        tokio::spawn(async move {
            dashboard
                .serve(listener, async move {
                    let _ = shutdown_rx.await;
                })
                .await
        })
    };

    let client = reqwest::Client::new();
    let impact: serde_json::Value = client
        .get(format!("http://{addr}/api/impact?acres=3"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(impact["estimate"]["carbon_tons"], 13.5);
    assert_eq!(impact["display"]["carbon"], "14 tons");
    assert_eq!(impact["display"]["income"], "$6,000/year");

    let download = client
        .get(format!("http://{addr}/downloads/policy-toolkit"))
        .send()
        .await
        .unwrap();
    assert!(download.status().is_success());
    assert_eq!(download.bytes().await.unwrap().as_ref(), FAKE_PDF);

    drop(client);
    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
