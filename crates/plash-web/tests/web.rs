//! Browser tests for the web entry exports

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_available_variants_lists_every_variant() {
    let json = plash_web::available_variants();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    let ids: Vec<&str> = parsed.iter().filter_map(|v| v["id"].as_str()).collect();
    assert_eq!(ids, vec!["starburst", "starfield", "gradient"]);
    assert!(parsed.iter().all(|v| v["name"].is_string()));
}

#[wasm_bindgen_test]
fn test_config_for_query_reads_known_keys() {
    let json = plash_web::config_for_query("?variant=starfield&mode=adaptive&poll_ms=250&fps=0");
    let config: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(config["variant"], "starfield");
    assert_eq!(config["mode"], "adaptive");
    assert_eq!(config["pollIntervalMs"], 250);
    assert_eq!(config["showFps"], false);
    assert!(config["overlay"].is_null());
}

#[wasm_bindgen_test]
fn test_config_for_query_defaults_on_garbage() {
    let json = plash_web::config_for_query("?variant=nope&mode=turbo");
    let config: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(config["variant"], "starburst");
    assert_eq!(config["mode"], "default");
    assert_eq!(config["speedUrl"], "speed.json");
    assert_eq!(config["overlay"], "airlogo.svg");
}
