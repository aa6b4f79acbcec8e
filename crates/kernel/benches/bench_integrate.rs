use std::hint::black_box;
use std::time::Instant;

use glade_common::InputIntent;
use glade_kernel::{MovementConfig, MovementState, Player, Viewpoint, integrate};
use glam::Vec3;

/// Axis-aligned viewpoint facing -Z.
struct Body {
    position: Vec3,
}

impl Viewpoint for Body {
    fn move_forward(&mut self, distance: f32) {
        self.position.z -= distance;
    }

    fn move_right(&mut self, distance: f32) {
        self.position.x += distance;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_height(&mut self, y: f32) {
        self.position.y = y;
    }
}

fn spawned_body() -> Body {
    Body {
        position: Vec3::new(0.0, 2.0, 5.0),
    }
}

fn bench_integrate(label: &str, intent: InputIntent, iterations: usize) {
    let config = MovementConfig::default();
    let mut state = MovementState::new();
    let mut viewpoint = spawned_body();

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(integrate(
            &mut state,
            &config,
            black_box(intent),
            black_box(1.0 / 60.0),
            &mut viewpoint,
        ));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  integrate {label} ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_player_hops(iterations: usize) {
    let mut player = Player::new();
    let mut viewpoint = spawned_body();
    let intent = InputIntent {
        forward: true,
        ..InputIntent::default()
    };

    let start = Instant::now();
    for _ in 0..iterations {
        if player.is_grounded() {
            player.jump();
        }
        let _ = black_box(player.tick(intent, 1.0 / 60.0, &mut viewpoint));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  player hops ({iterations} iters, {} events): {per_iter:?}/iter, total {elapsed:?}",
        player.events().len()
    );
}

fn main() {
    println!("=== Walk Integrator Benchmarks ===\n");

    println!("Integrate:");
    bench_integrate("idle", InputIntent::default(), 1_000_000);
    bench_integrate(
        "diagonal",
        InputIntent {
            forward: true,
            right: true,
            ..InputIntent::default()
        },
        1_000_000,
    );

    println!("\nPlayer with event log:");
    bench_player_hops(100_000);

    println!("\n=== Done ===");
}
