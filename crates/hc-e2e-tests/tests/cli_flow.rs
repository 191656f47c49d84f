//! E2E tests for the `hc-interpret` front end: args, config and inventory
//! files, and the printed report.

mod helpers;

use std::path::PathBuf;

use hc_cli::args::Args;
use hc_cli::config::CliConfig;
use hc_cli::inventory::Inventory;
use hc_cli::report::Report;
use hc_context::{ContextProcessor, DispatchOptions};
use hc_taxonomy::StaticCatalog;

use helpers::SAMPLE_HOME;

/// Temp directory holding `hc.toml` and `home.json`, removed on drop.
struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    fn new(name: &str, config: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("hc-e2e-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("hc.toml"), config).unwrap();
        std::fs::write(dir.join("home.json"), SAMPLE_HOME).unwrap();
        Self { dir }
    }

    fn config_path(&self) -> String {
        self.dir.join("hc.toml").to_string_lossy().into_owned()
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

fn run(argv: &[&str]) -> serde_json::Value {
    let args = Args::parse(argv.iter().map(|s| s.to_string())).unwrap();
    let config = CliConfig::from_file(&args.config_path).unwrap();
    let inventory = Inventory::from_file(&config.inventory_path, &StaticCatalog).unwrap();

    let processor = ContextProcessor::new(inventory.devices, inventory.rooms)
        .with_config(config.processor)
        .unwrap()
        .with_dispatch_config(config.dispatch)
        .unwrap();
    let context = processor.process_context(&args.command);
    let options = DispatchOptions {
        force_device_id: args.force_device_id,
    };
    let plan = processor.plan_context(&context, &options);

    serde_json::to_value(Report::new(context, plan)).unwrap()
}

#[test]
fn e2e_cli_report_with_plan() {
    let ws = Workspace::new("plan", "inventory_path = \"home.json\"\n");
    let config_path = ws.config_path();
    let report = run(&[config_path.as_str(), "turn", "on", "device", "5"]);

    assert_eq!(report["context"]["intent"], "turn_on");
    assert_eq!(report["plan"]["device_id"], 5);
    assert_eq!(report["plan"]["command"]["command"], "turn_on");
    assert!(report["plan_error"].is_null());
}

#[test]
fn e2e_cli_report_with_error() {
    let ws = Workspace::new("error", "inventory_path = \"home.json\"\n");
    let config_path = ws.config_path();
    let report = run(&[config_path.as_str(), "turn", "on", "the", "lamp", "light"]);

    assert!(report["plan"].is_null());
    assert_eq!(
        report["plan_error"],
        "Ambiguous target: devices [5, 12] matched equally well"
    );
}

#[test]
fn e2e_cli_device_override() {
    let ws = Workspace::new("override", "inventory_path = \"home.json\"\n");
    let config_path = ws.config_path();
    let report = run(&[config_path.as_str(), "--device", "12", "turn", "on", "the", "lights"]);

    assert_eq!(report["plan"]["device_id"], 12);
    assert_eq!(report["plan"]["forced"], true);
}

/// A wide ambiguity margin turns a clear winner into a refusal.
#[test]
fn e2e_cli_config_tunes_dispatch() {
    let config = r#"
inventory_path = "home.json"

[processor]
max_matches = 2

[dispatch]
ambiguity_margin = 1.0
"#;
    let ws = Workspace::new("tuned", config);
    let config_path = ws.config_path();
    let report = run(&[config_path.as_str(), "open", "the", "living", "room", "shutter"]);

    assert_eq!(report["context"]["device_matches"].as_array().map(Vec::len), Some(2));
    assert!(report["plan"].is_null());
    assert!(
        report["plan_error"]
            .as_str()
            .unwrap()
            .starts_with("Ambiguous target")
    );
}

#[test]
fn e2e_cli_missing_inventory_fails() {
    let ws = Workspace::new("missing", "inventory_path = \"nowhere.json\"\n");
    let config = CliConfig::from_file(&ws.config_path()).unwrap();
    let err = Inventory::from_file(&config.inventory_path, &StaticCatalog).unwrap_err();
    assert!(err.to_string().contains("nowhere.json"));
}
