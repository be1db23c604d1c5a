//! Integration tests against the sample seed shipped in `config/`.

use std::path::PathBuf;

use warden_auth::{AuthErrorKind, TokenAuthenticator};
use warden_store::Seed;

fn sample_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/seed.json")
}

async fn sample_authenticator() -> TokenAuthenticator {
    let stores = Seed::from_path(sample_seed_path())
        .await
        .expect("sample seed should parse")
        .into_stores();
    TokenAuthenticator::new(stores.tokens, stores.users, stores.groups)
}

#[tokio::test]
async fn test_sample_seed_long_lived_token() {
    let auth = sample_authenticator().await;

    let info = auth
        .authenticate("sha256~dev-alice-long-lived")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(info.name, "alice");
    assert_eq!(info.groups, ["eng", "admins"]);
    assert_eq!(info.scopes(), ["user:full"]);
}

#[tokio::test]
async fn test_sample_seed_revoked_token() {
    let auth = sample_authenticator().await;
    let err = auth
        .authenticate("sha256~dev-alice-revoked")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AuthErrorKind::Expired);
}

#[test]
fn test_default_config_points_at_sample_seed() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/default");
    let config = warden_core::config::AppConfig::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.store.seed_file, "config/seed.json");
    assert_eq!(config.authenticator.expiry_leeway_seconds, 0);
}
