//! Settings Explorer CLI
//!
//! Entry point for the `settings-explorer` command-line tool.

use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use settings_explorer::config::{self, EffectiveConfig, PROJECT_CONFIG_FILE};
use settings_explorer::logging::{self, Verbosity};
use settings_explorer::{
    find_node, render_json, render_text, ForestStats, OutputFormat, RenderOptions, SettingsStore,
    TreeNode,
};
use std::fmt::Display;
use std::path::PathBuf;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "settings-explorer")]
#[command(about = "Browse path/key configuration settings as a tree", version)]
struct Cli {
    /// Debug-level logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Errors only
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_color: bool,

    /// Project config file (default: .settings-explorer.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Settings JSON file (default: bundled sample dataset)
    #[arg(long, short = 'i', global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the settings tree
    Tree {
        /// Start from the node with this id
        #[arg(long)]
        from: Option<String>,

        /// Levels to expand (0 for all)
        #[arg(long, short = 'd')]
        depth: Option<u64>,

        /// Output the forest as JSON
        #[arg(long)]
        json: bool,

        /// Hide setting values
        #[arg(long)]
        no_values: bool,
    },

    /// Show a single node by id
    Find {
        /// Node id, e.g. test#us-west-2#qa1#ServerConfig
        id: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate the settings and print tree statistics
    Verify,

    /// Create or update a setting and print the resulting records
    Set {
        /// '#'-delimited path, at least two segments
        path: String,
        /// '.'- or ':'-delimited key
        key: String,
        value: String,
    },

    /// Delete a setting and print the remaining records
    Unset { path: String, key: String },

    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();
    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);

    let effective = load_config(&cli);

    match cli.command {
        Commands::Tree { from, .. } => run_tree(&effective, from.as_deref()),
        Commands::Find { id, json } => run_find(&effective, &id, json),
        Commands::Verify => run_verify(&effective),
        Commands::Set { path, key, value } => run_set(&effective, &path, &key, &value),
        Commands::Unset { path, key } => run_unset(&effective, &path, &key),
        Commands::Config => run_config(&effective),
    }
}

fn fail(context: &str, err: impl Display) -> ! {
    eprintln!("{}: {}", context, err);
    process::exit(1);
}

/// CLI flags as the highest-precedence config layer
fn cli_overrides(cli: &Cli) -> Option<Value> {
    let mut overrides = Map::new();
    let mut render = Map::new();

    if let Some(ref input) = cli.input {
        overrides.insert("input".into(), json!(input.to_string_lossy()));
    }
    if let Commands::Tree {
        depth,
        json,
        no_values,
        ..
    } = &cli.command
    {
        if let Some(depth) = depth {
            render.insert("max_depth".into(), json!(depth));
        }
        if *no_values {
            render.insert("show_values".into(), json!(false));
        }
        if *json {
            overrides.insert("output".into(), json!({"format": "json"}));
        }
    }
    if !render.is_empty() {
        overrides.insert("render".into(), Value::Object(render));
    }

    if overrides.is_empty() {
        None
    } else {
        Some(Value::Object(overrides))
    }
}

fn load_config(cli: &Cli) -> EffectiveConfig {
    let user_path = config::user_config_path();
    let project_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));

    if cli.config.is_some() && !project_path.exists() {
        fail("Config file not found", project_path.display());
    }

    match EffectiveConfig::build(
        user_path.as_deref(),
        Some(project_path.as_path()),
        cli_overrides(cli),
    ) {
        Ok(c) => c,
        Err(e) => fail("Error loading config", e),
    }
}

fn load_store(config: &EffectiveConfig) -> SettingsStore {
    let result = match config.get_str("input") {
        Some(path) => {
            debug!(path, "loading settings file");
            SettingsStore::load(std::path::Path::new(path))
        }
        None => {
            debug!("using bundled sample settings");
            SettingsStore::sample()
        }
    };
    match result {
        Ok(store) => store,
        Err(e) => fail("Error loading settings", e),
    }
}

fn load_forest(store: &SettingsStore) -> Vec<TreeNode> {
    match store.forest() {
        Ok(forest) => forest,
        Err(e) => fail("Error building tree", e),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail("Error serializing output", e),
    }
}

fn run_tree(config: &EffectiveConfig, from: Option<&str>) {
    let store = load_store(config);
    let forest = load_forest(&store);

    let nodes: &[TreeNode] = match from {
        Some(id) => match find_node(&forest, id) {
            Some(node) => std::slice::from_ref(node),
            None => fail("No node with id", id),
        },
        None => &forest,
    };

    match OutputFormat::from_config(config) {
        OutputFormat::Json => match render_json(nodes) {
            Ok(json) => println!("{}", json),
            Err(e) => fail("Error serializing output", e),
        },
        OutputFormat::Text => {
            print!("{}", render_text(nodes, &RenderOptions::from_config(config)));
        }
    }
}

fn run_find(config: &EffectiveConfig, id: &str, as_json: bool) {
    let store = load_store(config);
    let forest = load_forest(&store);

    let Some(node) = find_node(&forest, id) else {
        fail("No node with id", id);
    };

    if as_json {
        print_json(node);
        return;
    }

    let options = RenderOptions::from_config(config);
    println!("Id:       {}", node.id);
    println!("Name:     {}", node.name);
    println!("Kind:     {}", node.kind);
    if let Some(value) = node.value() {
        let key = node.payload.as_ref().map(|p| p.key.as_str()).unwrap_or("");
        if options.is_secret(key) {
            println!("Value:    [REDACTED]");
        } else {
            println!("Value:    {}", value);
        }
    }
    if let Some(ref payload) = node.payload {
        println!("Path:     {}", payload.path);
        println!("Key:      {}", payload.key);
    }
    if !node.children.is_empty() {
        println!("Children: {}", node.children.len());
        for child in &node.children {
            println!("  {} ({})", child.name, child.kind);
        }
    }
}

fn run_verify(config: &EffectiveConfig) {
    let store = load_store(config);
    let forest = load_forest(&store);
    let stats = ForestStats::collect(&forest);

    println!("Settings valid: {} records", store.len());
    println!();
    println!("  Top-level nodes: {}", forest.len());
    println!("  Nodes:           {}", stats.nodes);
    println!("  Paths:           {}", stats.paths);
    println!("  Groups:          {}", stats.groups);
    println!("  Settings:        {}", stats.settings);
    println!("  Depth:           {}", stats.depth);
}

fn run_set(config: &EffectiveConfig, path: &str, key: &str, value: &str) {
    let mut store = load_store(config);
    match store.upsert(path, key, value) {
        Ok(setting) => debug!(id = %setting.id, "setting stored"),
        Err(e) => fail("Error setting value", e),
    }
    print_json(store.list());
}

fn run_unset(config: &EffectiveConfig, path: &str, key: &str) {
    let mut store = load_store(config);
    let ack = store.delete(path, key);
    if !ack.removed {
        eprintln!("No setting with path '{}' and key '{}'", path, key);
    }
    print_json(store.list());
}

fn run_config(config: &EffectiveConfig) {
    match config.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => fail("Error serializing config", e),
    }
}
