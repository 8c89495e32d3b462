//! mindtree-compat - query socket compatibility from the command line

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use mindtree::nodes::NodeCategory;
use mindtree::{CompatibilityConfig, PluginRegistry, SocketType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mindtree-compat", version, about = "Inspect MindTree socket compatibility")]
struct Cli {
    /// Extra compatibility pairs (defaults to the user config file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether two socket types may be linked
    Check { a: String, b: String },
    /// List the inputs of a node type that accept an output type
    Sockets { node_type: String, output_type: String },
    /// Print every registered compatibility pair as JSON
    Pairs,
    /// List node types by category
    Nodes {
        /// Dotted category, e.g. `Objects`; lists everything when omitted
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut registry = PluginRegistry::with_builtin_plugins();
    load_config(&cli, &mut registry)?;

    match cli.command {
        Command::Check { a, b } => {
            let compatible = registry
                .compatibility
                .is_compatible(&SocketType::new(a.as_str()), &SocketType::new(b.as_str()));
            println!("{}", if compatible { "compatible" } else { "incompatible" });
        }
        Command::Sockets { node_type, output_type } => {
            let Some(node) = registry.nodes.create_node(&node_type) else {
                bail!(
                    "unknown node type '{}' (known: {})",
                    node_type,
                    registry.nodes.node_types().join(", ")
                );
            };
            let output = SocketType::new(output_type);
            for (path, port) in registry.compatibility.compatible_sockets(&output, &node) {
                println!("{}\t{}", path, port.socket_type);
            }
        }
        Command::Pairs => {
            let config = CompatibilityConfig::from_registry(&registry.compatibility);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Nodes { category } => {
            let filter = NodeCategory::from_dotted(category.as_deref().unwrap_or(""));
            let selected = registry.nodes.nodes_under(&filter);
            if selected.is_empty() {
                bail!("no node types under '{}'", filter.display_string());
            }

            for category in registry.nodes.categories() {
                if category != &filter && !category.is_child_of(&filter) {
                    continue;
                }
                println!("{}", category.display_string());
                for node_type in registry.nodes.nodes_in_category(category) {
                    println!("  {}", node_type);
                }
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli, registry: &mut PluginRegistry) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CompatibilityConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => match CompatibilityConfig::default_path() {
            Some(path) => CompatibilityConfig::load_or_default(&path)?,
            None => CompatibilityConfig::default(),
        },
    };

    debug!("Applying {} configured compatibility pairs", config.pairs.len());
    config.apply(&mut registry.compatibility);
    Ok(())
}
