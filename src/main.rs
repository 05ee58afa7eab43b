//! Rift Arena - entry point
//!
//! Headless driver around the simulation core: spawns a demo arena,
//! advances frames, and exposes the command wrappers a real input layer
//! would call. Useful for balance experiments and debugging without a
//! renderer attached.

use clap::Parser;
use glam::Vec3;
use rift_arena::core::config::SimulationConfig;
use rift_arena::core::error::Result;
use rift_arena::core::types::{EntityId, LaneId, TeamId};
use rift_arena::simulation::tick::run_simulation_tick;
use rift_arena::simulation::world::{CastSpec, GameWorld};

use std::io::{self, Write};
use std::path::PathBuf;

/// Frame delta used by the headless driver (60 fps)
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "rift-arena", about = "Arena simulation core, headless driver")]
struct Args {
    /// Path to a TOML simulation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run this many frames without the interactive prompt, then exit
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rift_arena=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let mut world = GameWorld::new(config)?;

    // Demo arena: one hero per side plus a mid tower each
    world.spawn_hero("aria", TeamId::Blue, Vec3::new(-10.0, 0.0, 0.0))?;
    world.spawn_hero("brom", TeamId::Red, Vec3::new(10.0, 0.0, 0.0))?;
    world.spawn_tower(TeamId::Blue, LaneId::Mid, Vec3::new(-20.0, 0.0, 0.0))?;
    world.spawn_tower(TeamId::Red, LaneId::Mid, Vec3::new(20.0, 0.0, 0.0))?;

    if let Some(frames) = args.frames {
        for _ in 0..frames {
            for event in run_simulation_tick(&mut world, FRAME_DT) {
                println!("{event:?}");
            }
        }
        println!("Ran {} frames; game time {:.2}s", frames, world.game_time());
        return Ok(());
    }

    println!("=== RIFT ARENA ===");
    println!("Commands:");
    println!("  tick / t                   - advance one frame");
    println!("  run <n>                    - advance n frames");
    println!("  status / s                 - show all units");
    println!("  spawn <name> <blue|red>    - spawn a hero");
    println!("  move <name> <x> <z>        - order a hero to a point");
    println!("  attack <name> <target>     - basic attack");
    println!("  cast <name> <ability> [target|x z]");
    println!("  xp <name> <amount>         - grant experience");
    println!("  quit / q");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        handle_command(&mut world, input);
    }

    Ok(())
}

fn handle_command(world: &mut GameWorld, input: &str) {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        ["tick"] | ["t"] => run_frames(world, 1),
        ["run", n] => match n.parse::<u64>() {
            Ok(n) => run_frames(world, n),
            Err(_) => println!("Usage: run <number>"),
        },
        ["status"] | ["s"] => print_status(world),
        ["spawn", name, team] => {
            let Some(team) = parse_team(team) else {
                println!("Team must be blue or red");
                return;
            };
            match world.spawn_hero(*name, team, Vec3::ZERO) {
                Ok(id) => println!("Spawned {} ({})", name, id),
                Err(e) => println!("Spawn failed: {e}"),
            }
        }
        ["move", name, x, z] => {
            let (Some(id), Ok(x), Ok(z)) = (find_hero(world, name), x.parse(), z.parse()) else {
                println!("Usage: move <name> <x> <z>");
                return;
            };
            if !world.move_hero(id, Vec3::new(x, 0.0, z)) {
                println!("{name} cannot move");
            }
        }
        ["attack", name, target] => {
            let (Some(a), Some(b)) = (find_hero(world, name), find_hero(world, target)) else {
                println!("Unknown hero");
                return;
            };
            match world.attack(a, b) {
                Some(damage) => println!("{name} hits {target} for {damage}"),
                None => println!("Attack refused"),
            }
        }
        ["cast", name, ability, rest @ ..] => {
            let Some(id) = find_hero(world, name) else {
                println!("Unknown hero: {name}");
                return;
            };
            let spec = match rest {
                [] => CastSpec::None,
                [target] => match find_hero(world, target) {
                    Some(t) => CastSpec::Unit(t),
                    None => {
                        println!("Unknown target: {target}");
                        return;
                    }
                },
                [x, z] => match (x.parse(), z.parse()) {
                    (Ok(x), Ok(z)) => CastSpec::Point(Vec3::new(x, 0.0, z)),
                    _ => {
                        println!("Usage: cast <name> <ability> [target|x z]");
                        return;
                    }
                },
                _ => {
                    println!("Usage: cast <name> <ability> [target|x z]");
                    return;
                }
            };
            if world.cast(id, ability, spec) {
                println!("{name} casts {ability}");
            } else {
                println!("Cast refused");
            }
        }
        ["xp", name, amount] => {
            let (Some(id), Ok(amount)) = (find_hero(world, name), amount.parse::<u32>()) else {
                println!("Usage: xp <name> <amount>");
                return;
            };
            let levels = world.grant_experience(id, amount);
            if levels > 0 {
                println!("{name} gained {levels} level(s)");
            }
        }
        _ => println!("Unknown command: {input}"),
    }
}

fn run_frames(world: &mut GameWorld, n: u64) {
    for _ in 0..n {
        for event in run_simulation_tick(world, FRAME_DT) {
            println!("{event:?}");
        }
    }
    println!("Game time: {:.2}s", world.game_time());
}

fn parse_team(s: &str) -> Option<TeamId> {
    match s {
        "blue" => Some(TeamId::Blue),
        "red" => Some(TeamId::Red),
        _ => None,
    }
}

fn find_hero(world: &GameWorld, name: &str) -> Option<EntityId> {
    world
        .registry
        .iter()
        .find(|e| e.character().is_some_and(|c| c.name == name))
        .map(|e| e.id())
}

fn print_status(world: &GameWorld) {
    for entity in world.registry.iter() {
        if let Some(chr) = entity.character() {
            println!(
                "hero {} [{:?}] lvl {} hp {:.0}/{:.0} mana {:.0}/{:.0} pos ({:.1}, {:.1}) {}",
                chr.name,
                chr.team,
                chr.stats.level,
                chr.stats.health,
                chr.stats.max_health,
                chr.stats.mana,
                chr.stats.max_mana,
                chr.position.x,
                chr.position.z,
                if chr.is_dead() { "[dead]" } else { "" },
            );
        }
        if let Some(tower) = entity.tower() {
            println!(
                "tower {:?}/{:?} hp {:.0}/{:.0} target {:?}",
                tower.team,
                tower.lane,
                tower.stats.health,
                tower.stats.max_health,
                tower.current_target().map(|t| t.to_string()),
            );
        }
    }
    println!("transient effects: {}", world.transients().len());
}
