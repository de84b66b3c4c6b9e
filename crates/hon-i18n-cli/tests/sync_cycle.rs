// crates/hon-i18n-cli/tests/sync_cycle.rs
// ============================================================================
// Module: Sync Cycle Tests
// Description: End-to-end tests for the fetch-resolve-merge-write cycle.
// Purpose: Ensure cached catalogs drive deterministic integration updates.
// Dependencies: hon-i18n-cli sync module, hon-i18n binary, tiny_http, tokio.
// ============================================================================

//! ## Overview
//! Drives full synchronization runs against temp directories:
//! - A warm cache updates every integration file without network access.
//! - Reruns produce byte-identical files and leave the cache untouched.
//! - Missing catalogs are fetched exactly once through a loopback server.
//! - The zero-argument binary invocation performs a default sync.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::thread;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use hon_i18n_cli::api::HonApiClient;
use hon_i18n_cli::config::ApiConfig;
use hon_i18n_cli::config::SyncConfig;
use hon_i18n_cli::sync;
use hon_i18n_core::Language;
use hon_i18n_core::SUPPORTED_LANGUAGES;
use serde_json::Value;
use serde_json::json;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Endpoint that refuses connections; a warm cache must satisfy these runs.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

/// English catalog fixture resolving the shared ready phase.
const READY_CATALOG: &str = "{\"WASHING_CMD&CTRL\":{\"PHASE_READY\":{\"TITLE\":\"Ready\"}}}";

/// German catalog fixture resolving the shared ready phase.
const BEREIT_CATALOG: &str = "{\"WASHING_CMD&CTRL\":{\"PHASE_READY\":{\"TITLE\":\"Bereit\"}}}";

fn hon_i18n_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hon-i18n"))
}

fn temp_root(label: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("hon-i18n-cli-{label}-{nanos}"));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_dir_all(path);
}

/// Builds a sync config rooted in the temp directory.
fn test_config(root: &Path, endpoint: &str) -> SyncConfig {
    SyncConfig {
        cache_dir: root.join("translations"),
        integration_dir: root.join("integration"),
        api: ApiConfig {
            endpoint: endpoint.to_string(),
            timeout_ms: 5_000,
        },
    }
}

/// Seeds every language's cache file; English and German get real catalogs.
fn seed_cache(cache_dir: &Path, english: &str, german: &str) {
    fs::create_dir_all(cache_dir).expect("create cache dir");
    for language in SUPPORTED_LANGUAGES.iter().copied() {
        let body = match language {
            Language::En => english,
            Language::De => german,
            _ => "{}",
        };
        fs::write(cache_dir.join(format!("{language}.json")), body).expect("seed catalog");
    }
}

/// Reads a JSON document from disk for assertions.
fn read_document(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("read document");
    serde_json::from_str(&text).expect("parse document")
}

/// Returns the washing_modes state label for a code in a document.
fn washing_mode_state(document: &Value, code: &str) -> Option<String> {
    document
        .get("entity")?
        .get("sensor")?
        .get("washing_modes")?
        .get("state")?
        .get(code)?
        .as_str()
        .map(str::to_string)
}

// ============================================================================
// SECTION: Warm Cache Tests
// ============================================================================

/// Verifies a warm cache updates every integration file without network use.
#[tokio::test]
async fn run_with_warm_cache_updates_integration_files() {
    let root = temp_root("sync-warm");
    let config = test_config(&root, DEAD_ENDPOINT);
    seed_cache(&config.cache_dir, READY_CATALOG, BEREIT_CATALOG);
    fs::create_dir_all(&config.integration_dir).expect("create integration dir");
    let existing = json!({
        "config": {"flow_title": "hOn"},
        "entity": {"sensor": {"washing_modes": {"state": {"0": "stale"}}}}
    });
    fs::write(
        config.integration_dir.join("en.json"),
        serde_json::to_string(&existing).expect("serialize seed"),
    )
    .expect("seed integration file");

    let client = HonApiClient::new(DEAD_ENDPOINT, Duration::from_millis(200)).unwrap();
    let report = sync::run(&config, &client).await.expect("sync run");

    assert_eq!(report.fetch.cached(), 19);
    assert_eq!(report.fetch.fetched(), 0);
    assert_eq!(report.languages.len(), 19);
    assert_eq!(report.total_written(), 19 * 8);

    let german_report = report
        .languages
        .iter()
        .find(|entry| entry.language == Language::De)
        .expect("german report");
    assert_eq!(german_report.stats.written, 8);
    assert_eq!(german_report.stats.missing, 41);

    let english = read_document(&config.integration_dir.join("en.json"));
    assert_eq!(washing_mode_state(&english, "0").as_deref(), Some("Ready"));
    let flow_title = english
        .get("config")
        .and_then(|section| section.get("flow_title"))
        .and_then(Value::as_str);
    assert_eq!(flow_title, Some("hOn"), "unrelated content must survive the merge");

    let german = read_document(&config.integration_dir.join("de.json"));
    assert_eq!(washing_mode_state(&german, "0").as_deref(), Some("Bereit"));
    assert_eq!(washing_mode_state(&german, "7").as_deref(), Some("Bereit"));

    let polish = read_document(&config.integration_dir.join("pl.json"));
    assert_eq!(washing_mode_state(&polish, "0").as_deref(), Some("Ready"));

    cleanup(&root);
}

/// Verifies reruns rewrite integration files byte for byte.
#[tokio::test]
async fn rerun_with_warm_cache_is_byte_identical() {
    let root = temp_root("sync-rerun");
    let config = test_config(&root, DEAD_ENDPOINT);
    seed_cache(&config.cache_dir, READY_CATALOG, BEREIT_CATALOG);
    fs::create_dir_all(&config.integration_dir).expect("create integration dir");
    let client = HonApiClient::new(DEAD_ENDPOINT, Duration::from_millis(200)).unwrap();

    sync::run(&config, &client).await.expect("first run");
    let first_en = fs::read(config.integration_dir.join("en.json")).expect("read en.json");
    let first_de = fs::read(config.integration_dir.join("de.json")).expect("read de.json");

    sync::run(&config, &client).await.expect("second run");
    let second_en = fs::read(config.integration_dir.join("en.json")).expect("reread en.json");
    let second_de = fs::read(config.integration_dir.join("de.json")).expect("reread de.json");

    assert_eq!(first_en, second_en);
    assert_eq!(first_de, second_de);

    cleanup(&root);
}

// ============================================================================
// SECTION: Fetch Tests
// ============================================================================

/// Verifies missing catalogs are fetched exactly once and reused afterwards.
#[tokio::test]
async fn run_fetches_missing_catalogs_once() {
    let root = temp_root("sync-fetch");
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");
    let catalog_base = base.clone();

    let handle = thread::spawn(move || {
        for _ in 0..38 {
            let Ok(mut request) = server.recv() else { return };
            if request.url() == "/app-config" {
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body).unwrap();
                let code = body
                    .split("\"languageCode\":\"")
                    .nth(1)
                    .and_then(|rest| rest.get(..2))
                    .expect("language code in body")
                    .to_string();
                let path = format!("{catalog_base}/catalogs/{code}.json");
                let envelope =
                    format!("{{\"payload\":{{\"language\":{{\"jsonPath\":\"{path}\"}}}}}}");
                let _ = request.respond(Response::from_string(envelope));
            } else {
                let body = if request.url() == "/catalogs/en.json" {
                    READY_CATALOG
                } else {
                    "{}"
                };
                let _ = request.respond(Response::from_string(body));
            }
        }
    });

    let config = test_config(&root, &base);
    fs::create_dir_all(&config.integration_dir).expect("create integration dir");
    let client = HonApiClient::new(&base, Duration::from_secs(10)).unwrap();
    let report = sync::run(&config, &client).await.expect("first run");
    handle.join().unwrap();

    assert_eq!(report.fetch.fetched(), 19);
    assert_eq!(report.fetch.cached(), 0);
    assert_eq!(report.total_written(), 19 * 8, "English fallback fills every language");

    let italian = read_document(&config.integration_dir.join("it.json"));
    assert_eq!(washing_mode_state(&italian, "1").as_deref(), Some("Ready"));

    // A dead endpoint must now succeed purely from the cache.
    let offline = test_config(&root, DEAD_ENDPOINT);
    let offline_client = HonApiClient::new(DEAD_ENDPOINT, Duration::from_millis(200)).unwrap();
    let second = sync::run(&offline, &offline_client).await.expect("offline run");
    assert_eq!(second.fetch.cached(), 19);
    assert_eq!(second.fetch.fetched(), 0);

    cleanup(&root);
}

/// Verifies the cache phase never replaces catalog files that exist.
#[tokio::test]
async fn ensure_catalogs_never_replaces_cached_files() {
    let root = temp_root("fetch-sentinel");
    let cache = root.join("translations");
    fs::create_dir_all(&cache).expect("create cache dir");
    let sentinel = "{\"sentinel\":true}";
    fs::write(cache.join("de.json"), sentinel).expect("seed de catalog");

    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");
    let catalog_base = base.clone();

    let handle = thread::spawn(move || {
        for _ in 0..2 {
            let Ok(request) = server.recv() else { return };
            if request.url() == "/app-config" {
                let path = format!("{catalog_base}/catalogs/en.json");
                let envelope =
                    format!("{{\"payload\":{{\"language\":{{\"jsonPath\":\"{path}\"}}}}}}");
                let _ = request.respond(Response::from_string(envelope));
            } else {
                let _ = request.respond(Response::from_string("{}"));
            }
        }
    });

    let client = HonApiClient::new(&base, Duration::from_secs(5)).unwrap();
    let outcome = sync::ensure_catalogs(&client, &cache, &[Language::De, Language::En])
        .await
        .expect("ensure catalogs");
    handle.join().unwrap();

    assert_eq!(outcome.cached(), 1);
    assert_eq!(outcome.fetched(), 1);
    let kept = fs::read_to_string(cache.join("de.json")).expect("read sentinel");
    assert_eq!(kept, sentinel, "cached catalog must stay byte-identical");
    assert!(cache.join("en.json").is_file());

    cleanup(&root);
}

// ============================================================================
// SECTION: Binary Tests
// ============================================================================

/// Verifies the zero-argument invocation performs a default sync.
#[test]
fn cli_zero_argument_run_syncs_with_defaults() {
    let root = temp_root("cli-default-sync");
    let config = r#"
[api]
endpoint = "http://127.0.0.1:9"
timeout_ms = 1000
"#;
    fs::write(root.join("hon-i18n.toml"), config.trim()).expect("write config");
    let cache = root.join("translations");
    fs::create_dir_all(&cache).expect("create cache dir");
    for language in SUPPORTED_LANGUAGES.iter().copied() {
        fs::write(cache.join(format!("{language}.json")), "{}").expect("seed catalog");
    }
    let integration = root.join("custom_components/hon/translations");
    fs::create_dir_all(&integration).expect("create integration dir");

    let output = Command::new(hon_i18n_bin())
        .current_dir(&root)
        .env_remove("HON_I18N_CONFIG")
        .output()
        .expect("run sync");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sync complete: 19 languages"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("931 unresolved"), "unexpected stdout: {stdout}");

    let english = fs::read_to_string(integration.join("en.json")).expect("read en.json");
    assert_eq!(english, "{}", "empty catalogs must leave no scaffolding");

    cleanup(&root);
}
