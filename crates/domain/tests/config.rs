use homeval_domain::config::{ApiConfig, ArtifactsConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 5000);
    assert!(server.address.is_unspecified());

    let artifacts = ArtifactsConfig::default();
    assert_eq!(artifacts.schema, std::path::PathBuf::from("artifacts/columns.json"));
    assert_eq!(artifacts.model, std::path::PathBuf::from("artifacts/home_prices_model.json"));
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 8080 },
        "artifacts": { "schema": "/tmp/columns.json", "model": "/tmp/model.json" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.artifacts.model, std::path::PathBuf::from("/tmp/model.json"));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 5000);
}
