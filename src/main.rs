//! Run one excavation against a scene or a generated ore field and report
//! what was removed.
//!
//! ```sh
//! excavar --scene assets/scenes/vein.toml --at 0,0,0 --shape shapeless
//! excavar --generate 1337 --at 3,-2,5 --facing east --shape tunnel --dry-run
//! excavar --list-shapes
//! ```

mod scene;

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use excavar_blocks::{BlockRegistry, Tool, ToolKind};
use excavar_core::{Actor, ExcavarConfig, Excavador, JobRequest, ShapeRegistry};
use excavar_geom::{Cell, Facing};
use excavar_shapes::{BlockSource, ShapeId};
use excavar_world::{OreField, OreFieldConfig, VoxelWorld, worldgen};

use crate::scene::Scene;

#[derive(Parser, Debug)]
#[command(name = "excavar", about = "Vein-mine a voxel scene from the command line")]
struct Cli {
    /// Scene file to load
    #[arg(long, conflicts_with = "generate")]
    scene: Option<PathBuf>,

    /// Generate an ore field with this seed instead of loading a scene
    #[arg(long)]
    generate: Option<i32>,

    /// Ore field settings used with --generate
    #[arg(long)]
    worldgen: Option<PathBuf>,

    /// Block registry
    #[arg(long, default_value = "assets/blocks.toml")]
    blocks: PathBuf,

    /// Excavation settings; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shape id, e.g. `tunnel` or `excavar:wall`
    #[arg(long, default_value = "shapeless")]
    shape: String,

    /// Start cell as x,y,z
    #[arg(long, value_parser = parse_cell, default_value = "0,0,0", allow_hyphen_values = true)]
    at: Cell,

    /// Direction the actor is facing
    #[arg(long, value_parser = parse_facing, default_value = "north")]
    facing: Facing,

    /// Cap on cells for this run, further limited by the config
    #[arg(long)]
    max: Option<usize>,

    /// Let the tool wear down to its last use
    #[arg(long)]
    allow_tool_break: bool,

    /// Print the registered shapes and exit
    #[arg(long)]
    list_shapes: bool,

    /// Discover and print the cells without removing them
    #[arg(long)]
    dry_run: bool,
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z, got `{s}`"));
    };
    let n = |v: &str| v.parse::<i32>().map_err(|e| format!("`{v}`: {e}"));
    Ok(Cell::new(n(x)?, n(y)?, n(z)?))
}

fn parse_facing(s: &str) -> Result<Facing, String> {
    Facing::parse(s).ok_or_else(|| format!("unknown facing `{s}`"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let shapes = ShapeRegistry::with_builtin();
    if cli.list_shapes {
        for id in shapes.ids() {
            let mark = if id == shapes.current() { "*" } else { " " };
            println!("{mark} {id:<24} {}", id.description_key());
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(p) => ExcavarConfig::from_path(p)?,
        None => ExcavarConfig::default(),
    };
    let registry = BlockRegistry::load_from_path(&cli.blocks)?;
    log::info!("Loaded {} block types", registry.blocks.len());
    let mut world = VoxelWorld::new(registry);

    let actor = match (&cli.scene, cli.generate) {
        (Some(path), _) => {
            let scene = Scene::load(path)?;
            scene.apply(&mut world)?
        }
        (None, Some(seed)) => {
            let wg = match &cli.worldgen {
                Some(p) => worldgen::load_config_from_path(p)?,
                None => OreFieldConfig::default(),
            };
            let placed = OreField::new(seed, wg).generate(&mut world)?;
            for (block, n) in &placed {
                log::info!("Placed {n} {block}");
            }
            let actor = Actor::server(1);
            world.give_tool(actor.id, Tool::new("iron_pickaxe", ToolKind::Pickaxe, 2, 250));
            actor
        }
        (None, None) => return Err("one of --scene or --generate is required".into()),
    };

    let shape = ShapeId::parse(&cli.shape)?;
    let target = world.material_at(cli.at);
    if world.registry().is_air(target) {
        return Err(format!("nothing to excavate at {}", cli.at).into());
    }
    let name = world.material_name_at(cli.at);
    if !config.mining_allowed(Some(name.as_str())) {
        return Err(format!("{name} is excluded by config").into());
    }
    let tool_name = world.tool(actor.id).map(|t| t.name.clone());
    if !config.is_tool_allowed(tool_name.as_deref()) {
        return Err(format!("{} is excluded by config", tool_name.as_deref().unwrap_or("hand")).into());
    }
    log::info!(
        "Excavating {} at {} facing {} with {}",
        name,
        cli.at,
        cli.facing,
        shape
    );

    let req = JobRequest::new(cli.at, actor.clone(), cli.facing, target)
        .shape(shape)
        .preserve_tool(!cli.allow_tool_break && config.prevent_tool_breaking);
    let mut job = Excavador::new(&shapes, req, &config)?;
    let outcome = job.discover(&world, cli.max.unwrap_or(usize::MAX));
    println!(
        "discovered {} cells (stopped by {})",
        job.discovered_cells().len(),
        outcome
    );

    if cli.dry_run {
        for c in job.discovered_cells() {
            println!("  {c}");
        }
        return Ok(());
    }

    let rev_before = world.store().current_rev();
    let report = job.consume(&mut world)?;
    println!(
        "processed {} removed {} ({:?})",
        report.processed, report.removed, report.stop
    );
    println!(
        "chunks touched: {}",
        world.store().changed_since(rev_before).len()
    );
    match world.tool(actor.id) {
        Some(t) => println!("tool: {t}"),
        None => println!("tool: none"),
    }
    if let Some(drops) = world.drops(actor.id) {
        for (name, n) in drops {
            println!("  +{n} {name}");
        }
    }
    Ok(())
}
