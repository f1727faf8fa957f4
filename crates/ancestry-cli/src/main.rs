//! Ancestry CLI — `anc` command.
//!
//! Builds and inspects ancestry forests stored as JSON files, and runs the
//! chain queries (enumeration, capability lookup, depth, lowest common
//! ancestor) against them.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use ancestry::storage::{load_forest, save_forest};
use ancestry::{chain, Forest, NodeId, QueryLimits};

// ── Directory helpers ─────────────────────────────────────────────────────────

fn ancestry_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set; pass --forest explicitly")?;
    Ok(PathBuf::from(home).join(".ancestry"))
}

fn default_forest_path() -> Result<PathBuf> {
    Ok(ancestry_dir()?.join("forest.json"))
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Ancestry CLI — build forests of single-parent chains and query them.
#[derive(Parser, Debug)]
#[command(
    name = "anc",
    about = "Ancestry chain CLI",
    version,
    long_about = "anc — Ancestry chain CLI\n\nBuild forests of single-parent chains, walk them, test capabilities\nalong them, and find lowest common ancestors."
)]
struct Cli {
    /// Forest file to operate on (default: ~/.ancestry/forest.json)
    #[arg(long, global = true)]
    forest: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Fail depth and LCA queries on chains longer than N nodes
    /// (default: $ANCESTRY_MAX_CHAIN, else unbounded)
    #[arg(long, global = true, value_name = "N")]
    max_chain: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an empty forest file
    Init {
        /// Overwrite an existing forest file
        #[arg(long)]
        force: bool,
    },

    /// Add a node to the forest
    Add {
        /// Name of the new node
        name: String,

        /// Parent node (omit to add a root)
        #[arg(long)]
        parent: Option<String>,

        /// Capability the node itself exposes (repeatable)
        #[arg(long = "capability", short = 'c')]
        capabilities: Vec<String>,
    },

    /// List every node with its parent and own capabilities
    Show,

    /// Print the chain from NODE to its root
    Chain {
        node: String,

        /// Stop after this many nodes
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Nearest strict ancestor of NODE that exposes CAPABILITY
    Closest { node: String, capability: String },

    /// Whether NODE or any ancestor exposes CAPABILITY
    Has { node: String, capability: String },

    /// All capability names along the chain, NODE first
    Caps { node: String },

    /// Whether CANDIDATE is a strict ancestor of NODE
    IsAncestor { node: String, candidate: String },

    /// Number of nodes from NODE to its root, inclusive
    Depth { node: String },

    /// The ancestor DISTANCE parent-steps above NODE
    Ancestor {
        node: String,

        #[arg(allow_negative_numbers = true)]
        distance: i64,
    },

    /// Lowest common ancestor of A and B
    Lca { a: String, b: String },
}

/// Resolved global options shared by every command.
struct Session {
    forest_path: PathBuf,
    json: bool,
    limits: QueryLimits,
    verbose: bool,
}

impl Session {
    fn load(&self) -> Result<Forest> {
        load_forest(&self.forest_path).with_context(|| {
            format!(
                "failed to load forest (run `anc init` first?) from {}",
                self.forest_path.display()
            )
        })
    }

    fn save(&self, forest: &Forest) -> Result<()> {
        save_forest(&self.forest_path, forest).context("failed to save forest")
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = build_session(&cli).and_then(|ctx| run(&ctx, cli.command));

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn build_session(cli: &Cli) -> Result<Session> {
    let forest_path = match &cli.forest {
        Some(path) => path.clone(),
        None => default_forest_path()?,
    };
    let limits = QueryLimits::from_env()?.with_override(cli.max_chain);
    log::debug!("forest={} limits={limits:?}", forest_path.display());

    Ok(Session {
        forest_path,
        json: cli.json,
        limits,
        verbose: cli.verbose,
    })
}

fn run(ctx: &Session, command: Commands) -> Result<()> {
    match command {
        Commands::Init { force } => cmd_init(ctx, force),
        Commands::Add {
            name,
            parent,
            capabilities,
        } => cmd_add(ctx, &name, parent.as_deref(), capabilities),
        Commands::Show => cmd_show(ctx),
        Commands::Chain { node, limit } => cmd_chain(ctx, &node, limit),
        Commands::Closest { node, capability } => cmd_closest(ctx, &node, &capability),
        Commands::Has { node, capability } => cmd_has(ctx, &node, &capability),
        Commands::Caps { node } => cmd_caps(ctx, &node),
        Commands::IsAncestor { node, candidate } => cmd_is_ancestor(ctx, &node, &candidate),
        Commands::Depth { node } => cmd_depth(ctx, &node),
        Commands::Ancestor { node, distance } => cmd_ancestor(ctx, &node, distance),
        Commands::Lca { a, b } => cmd_lca(ctx, &a, &b),
    }
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn node_name(forest: &Forest, id: NodeId) -> Result<&str> {
    forest
        .name_of(id)
        .ok_or_else(|| anyhow!("dangling node handle {id}"))
}

/// Print an optional node: its name, or `none` / JSON `null`.
fn print_node(ctx: &Session, forest: &Forest, node: Option<NodeId>) -> Result<()> {
    let name = node.map(|id| node_name(forest, id)).transpose()?;
    if ctx.json {
        println!("{}", json!(name));
    } else {
        println!("{}", name.unwrap_or("none"));
    }
    Ok(())
}

fn print_names(ctx: &Session, names: &[&str]) {
    if ctx.json {
        println!("{}", json!(names));
    } else {
        for name in names {
            println!("{name}");
        }
    }
}

fn print_bool(ctx: &Session, value: bool) {
    if ctx.json {
        println!("{}", json!(value));
    } else {
        println!("{}", if value { "yes" } else { "no" });
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `anc init [--force]`
fn cmd_init(ctx: &Session, force: bool) -> Result<()> {
    if ctx.forest_path.exists() && !force {
        return Err(anyhow!(
            "forest already exists at {} (use --force to overwrite)",
            ctx.forest_path.display()
        ));
    }

    ctx.save(&Forest::new())?;
    println!("Created forest at {}", ctx.forest_path.display());
    Ok(())
}

/// `anc add NAME [--parent PARENT] [-c CAP]...`
fn cmd_add(
    ctx: &Session,
    name: &str,
    parent: Option<&str>,
    capabilities: Vec<String>,
) -> Result<()> {
    let mut forest = ctx.load()?;
    let id = forest
        .insert(name, parent, capabilities)
        .with_context(|| format!("failed to add node '{name}'"))?;
    ctx.save(&forest)?;

    println!("Added node '{name}'");
    if ctx.verbose {
        println!("  Handle: {id}");
        println!("  Parent: {}", parent.unwrap_or("(root)"));
        println!("  Depth:  {}", chain::depth(&forest, &id));
    }
    Ok(())
}

/// `anc show`
fn cmd_show(ctx: &Session) -> Result<()> {
    let forest = ctx.load()?;

    if ctx.json {
        let nodes: Vec<_> = forest
            .iter()
            .map(|(_, node)| {
                json!({
                    "name": node.name,
                    "parent": node.parent.and_then(|p| forest.name_of(p)),
                    "capabilities": node.capabilities,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&nodes)?);
        return Ok(());
    }

    if forest.is_empty() {
        println!("(empty forest)");
        return Ok(());
    }

    for (id, node) in forest.iter() {
        let parent = match node.parent {
            Some(p) => node_name(&forest, p)?,
            None => "(root)",
        };
        print!("{:<20} parent: {:<20}", node.name, parent);
        if !node.capabilities.is_empty() {
            print!(" caps: {}", node.capabilities.join(", "));
        }
        if ctx.verbose {
            print!(" [{id}]");
        }
        println!();
    }
    Ok(())
}

/// `anc chain NODE [--limit N]`
fn cmd_chain(ctx: &Session, node: &str, limit: Option<usize>) -> Result<()> {
    let forest = ctx.load()?;
    let start = forest.id_of(node)?;

    let walked = chain::chain(&forest, &start, limit);
    print_names(ctx, &forest.names(&walked));
    Ok(())
}

/// `anc closest NODE CAPABILITY`
fn cmd_closest(ctx: &Session, node: &str, capability: &str) -> Result<()> {
    let forest = ctx.load()?;
    let start = forest.id_of(node)?;

    let found = chain::closest_ancestor_with(&forest, &forest, &start, capability);
    print_node(ctx, &forest, found)
}

/// `anc has NODE CAPABILITY`
fn cmd_has(ctx: &Session, node: &str, capability: &str) -> Result<()> {
    let forest = ctx.load()?;
    let start = forest.id_of(node)?;

    let found = chain::has_capability(&forest, &forest, &start, capability);
    print_bool(ctx, found);
    Ok(())
}

/// `anc caps NODE`
fn cmd_caps(ctx: &Session, node: &str) -> Result<()> {
    let forest = ctx.load()?;
    let start = forest.id_of(node)?;

    let names = chain::all_capability_names(&forest, &forest, &start);
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    print_names(ctx, &names);
    Ok(())
}

/// `anc is-ancestor NODE CANDIDATE`
fn cmd_is_ancestor(ctx: &Session, node: &str, candidate: &str) -> Result<()> {
    let forest = ctx.load()?;
    let start = forest.id_of(node)?;
    let candidate = forest.id_of(candidate)?;

    print_bool(ctx, chain::is_ancestor_of(&forest, &start, &candidate));
    Ok(())
}

/// `anc depth NODE`
fn cmd_depth(ctx: &Session, node: &str) -> Result<()> {
    let forest = ctx.load()?;
    let start = forest.id_of(node)?;

    let depth = ctx.limits.depth(&forest, &start)?;
    if ctx.json {
        println!("{}", json!(depth));
    } else {
        println!("{depth}");
    }
    Ok(())
}

/// `anc ancestor NODE DISTANCE`
fn cmd_ancestor(ctx: &Session, node: &str, distance: i64) -> Result<()> {
    let distance = chain::checked_distance(distance)?;
    let forest = ctx.load()?;
    let start = forest.id_of(node)?;

    let found = chain::ancestor_at_depth(&forest, &start, distance);
    print_node(ctx, &forest, found)
}

/// `anc lca A B`
fn cmd_lca(ctx: &Session, a: &str, b: &str) -> Result<()> {
    let forest = ctx.load()?;
    let a = forest.id_of(a)?;
    let b = forest.id_of(b)?;

    let found = ctx.limits.lowest_common_ancestor(&forest, &a, &b)?;
    print_node(ctx, &forest, found)
}
