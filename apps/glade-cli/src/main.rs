use anyhow::Context;
use clap::{Parser, Subcommand};
use glade_input::{Action, InputLatch, Key};
use glade_kernel::{MovementConfig, Player, PlayerEvent};
use glade_render::{DebugTextRenderer, FirstPersonCamera, Renderer, SPAWN_POINT, Scene};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glade-cli", about = "Headless tools for the glade walk demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Describe the sample scene as seen from the spawn point
    Scene {
        #[arg(long, default_value = "1280")]
        width: u32,
        #[arg(long, default_value = "720")]
        height: u32,
    },
    /// Print the default movement tuning as JSON
    Tuning,
    /// Simulate a walk from the spawn point with fixed frame deltas
    Walk {
        /// Number of ticks to simulate
        #[arg(
            short,
            long,
            default_value = "60",
            value_parser = clap::value_parser!(u64).range(1..=MAX_WALK_TICKS)
        )]
        ticks: u64,
        /// Seconds per tick
        #[arg(short, long, default_value_t = 1.0 / 60.0)]
        delta: f32,
        /// Key held for the whole walk, e.g. KeyW or ArrowLeft (repeatable)
        #[arg(long = "hold", value_parser = parse_key)]
        held: Vec<Key>,
        /// Press Space before this tick, counted from 0 (repeatable)
        #[arg(long = "jump-at")]
        jump_at: Vec<u64>,
        /// Initial yaw in degrees, counterclockwise seen from above
        #[arg(long, default_value = "0")]
        yaw: f32,
        /// Movement tuning JSON file; defaults apply when omitted
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Print the trajectory as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Longest walk the CLI simulates; about 4.6 hours at 60 ticks per second.
const MAX_WALK_TICKS: u64 = 1_000_000;

fn parse_key(code: &str) -> Result<Key, glade_input::UnknownKey> {
    code.parse()
}

/// One row of a simulated trajectory.
#[derive(Debug, Clone, Serialize)]
struct Sample {
    tick: u64,
    position: [f32; 3],
    velocity: [f32; 3],
    grounded: bool,
}

#[derive(Debug, Serialize)]
struct Trajectory {
    samples: Vec<Sample>,
    events: Vec<PlayerEvent>,
}

struct WalkPlan {
    ticks: u64,
    delta: f32,
    held: Vec<Key>,
    jump_at: Vec<u64>,
    yaw_degrees: f32,
    config: MovementConfig,
}

fn simulate(plan: &WalkPlan) -> Trajectory {
    let mut camera = FirstPersonCamera::default().with_position(SPAWN_POINT);
    camera.yaw = plan.yaw_degrees.to_radians();
    let mut player = Player::with_config(plan.config);
    let mut latch = InputLatch::new();
    for key in &plan.held {
        latch.key_down(*key);
    }

    let mut samples = Vec::new();
    for i in 0..plan.ticks {
        if plan.jump_at.contains(&i) && latch.key_down(Key::Space) == Action::Jump {
            player.jump();
            latch.key_up(Key::Space);
        }
        player.tick(latch.intent(), plan.delta, &mut camera);

        let p = camera.position;
        let v = player.state().velocity;
        samples.push(Sample {
            tick: player.tick_count(),
            position: p.to_array(),
            velocity: v.to_array(),
            grounded: player.is_grounded(),
        });
    }

    Trajectory {
        samples,
        events: player.drain_events(),
    }
}

fn print_trajectory(trajectory: &Trajectory) {
    for s in &trajectory.samples {
        let [px, py, pz] = s.position;
        let [vx, vy, vz] = s.velocity;
        println!(
            "tick {:>4}  pos=({:>8.3}, {:>7.3}, {:>8.3})  vel=({:>8.3}, {:>7.3}, {:>8.3})  {}",
            s.tick,
            px,
            py,
            pz,
            vx,
            vy,
            vz,
            if s.grounded { "grounded" } else { "airborne" }
        );
    }
    for event in &trajectory.events {
        match event {
            PlayerEvent::Jumped { tick, impulse } => {
                println!("event: jumped after tick {tick} (+{impulse})")
            }
            PlayerEvent::Landed { tick } => println!("event: landed on tick {tick}"),
        }
    }
    if let Some(last) = trajectory.samples.last() {
        let [x, y, z] = last.position;
        println!(
            "Moved: dx={:.3} dy={:.3} dz={:.3}",
            x - SPAWN_POINT.x,
            y - SPAWN_POINT.y,
            z - SPAWN_POINT.z
        );
    }
}

fn load_tuning(path: Option<PathBuf>) -> anyhow::Result<MovementConfig> {
    let Some(path) = path else {
        return Ok(MovementConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("invalid tuning in {}", path.display()))?;
    tracing::debug!(?config, "loaded tuning");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("glade-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", glade_render::crate_info());
            println!(
                "input: {} keys ({})",
                Key::ALL.len(),
                Key::ALL.map(|k| k.code()).join(", ")
            );
            println!("kernel: {:?}", MovementConfig::default());
        }
        Commands::Scene { width, height } => {
            let camera = FirstPersonCamera::default().with_position(SPAWN_POINT);
            let mut renderer = DebugTextRenderer::default();
            renderer.resize(width, height);
            print!("{}", renderer.render(&Scene::meadow(), &camera));
        }
        Commands::Tuning => {
            println!("{}", serde_json::to_string_pretty(&MovementConfig::default())?);
        }
        Commands::Walk {
            ticks,
            delta,
            held,
            jump_at,
            yaw,
            tuning,
            json,
        } => {
            anyhow::ensure!(
                delta.is_finite() && delta >= 0.0,
                "delta must be a finite, non-negative number of seconds"
            );
            let plan = WalkPlan {
                ticks,
                delta,
                held,
                jump_at,
                yaw_degrees: yaw,
                config: load_tuning(tuning)?,
            };
            tracing::info!(ticks, delta, held = ?plan.held, "simulating walk");
            let trajectory = simulate(&plan);
            if json {
                println!("{}", serde_json::to_string_pretty(&trajectory)?);
            } else {
                print_trajectory(&trajectory);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(ticks: u64) -> WalkPlan {
        WalkPlan {
            ticks,
            delta: 1.0 / 60.0,
            held: Vec::new(),
            jump_at: Vec::new(),
            yaw_degrees: 0.0,
            config: MovementConfig::default(),
        }
    }

    #[test]
    fn idle_walk_stays_at_spawn() {
        let trajectory = simulate(&plan(10));
        assert_eq!(trajectory.samples.len(), 10);
        for s in &trajectory.samples {
            assert_eq!(s.position, SPAWN_POINT.to_array());
            assert!(s.grounded);
        }
        assert!(trajectory.events.is_empty());
    }

    #[test]
    fn holding_forward_walks_toward_the_cube() {
        let mut plan = plan(60);
        plan.held = vec![Key::KeyW];
        let trajectory = simulate(&plan);
        let last = trajectory.samples.last().unwrap();
        assert!(last.position[2] < SPAWN_POINT.z - 20.0);
        assert!(last.position[0].abs() < 1e-4);
        assert_eq!(last.position[1], 2.0);
    }

    #[test]
    fn yaw_turns_the_walk() {
        let mut plan = plan(30);
        plan.held = vec![Key::ArrowUp];
        plan.yaw_degrees = 90.0;
        let trajectory = simulate(&plan);
        let last = trajectory.samples.last().unwrap();
        // Yaw 90 faces -X.
        assert!(last.position[0] < -5.0);
        assert!((last.position[2] - SPAWN_POINT.z).abs() < 1e-3);
    }

    #[test]
    fn jump_then_land() {
        let mut plan = plan(60);
        plan.jump_at = vec![0, 1];
        let trajectory = simulate(&plan);
        assert!(!trajectory.samples[0].grounded);
        assert!(trajectory.samples.last().unwrap().grounded);
        let jumps = trajectory
            .events
            .iter()
            .filter(|e| matches!(e, PlayerEvent::Jumped { .. }))
            .count();
        let landings = trajectory
            .events
            .iter()
            .filter(|e| matches!(e, PlayerEvent::Landed { .. }))
            .count();
        assert_eq!((jumps, landings), (1, 1));
    }

    #[test]
    fn hold_parses_key_codes() {
        let cli = Cli::parse_from(["glade-cli", "walk", "--hold", "KeyW", "--hold", "ArrowLeft"]);
        let Commands::Walk { held, .. } = cli.command else {
            panic!("expected walk");
        };
        assert_eq!(held, vec![Key::KeyW, Key::ArrowLeft]);
        assert!(Cli::try_parse_from(["glade-cli", "walk", "--hold", "KeyQ"]).is_err());
    }

    #[test]
    fn ticks_are_bounded() {
        let walk = |ticks: &str| Cli::try_parse_from(["glade-cli", "walk", "--ticks", ticks]);
        assert!(walk("18446744073709551615").is_err());
        assert!(walk("1000001").is_err());
        assert!(walk("0").is_err());
        let Commands::Walk { ticks, .. } = walk("1000000").unwrap().command else {
            panic!("expected walk");
        };
        assert_eq!(ticks, MAX_WALK_TICKS);
    }

    #[test]
    fn trajectory_serializes() {
        let trajectory = simulate(&plan(1));
        let json = serde_json::to_value(&trajectory).unwrap();
        assert_eq!(json["samples"][0]["tick"], 1);
        assert_eq!(json["samples"][0]["grounded"], true);
    }

    #[test]
    fn tuning_defaults_when_no_file() {
        assert_eq!(load_tuning(None).unwrap(), MovementConfig::default());
    }
}
