use anyhow::{Context, Result};
use clap::Parser;
use linesim::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene;

#[derive(Parser)]
#[command(name = "linesim-cli")]
#[command(about = "Run a 2D line-segment collision scene for N steps")]
struct Cmd {
    /// Path to a scene file (one record per line: x1 y1 x2 y2 vx vy color)
    #[arg(long)]
    scene: String,

    /// Number of simulation steps to run
    #[arg(long, default_value_t = 100)]
    steps: u32,

    /// Fixed time step
    #[arg(long, default_value_t = 0.5)]
    dt: f64,

    /// Simulation box size (box is [0, size] x [0, size])
    #[arg(long, default_value_t = 1.0)]
    box_size: f64,

    /// Worker thread count for the `parallel` feature (default: rayon's global pool)
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    tracing::info!(scene = %cmd.scene, steps = cmd.steps, dt = cmd.dt, "loading scene");
    let records = scene::load(&cmd.scene)?;

    let config = WorldConfig {
        bounds: Rect::new(Vec2::new(0.0, 0.0), Vec2::new(cmd.box_size, cmd.box_size)),
        dt: cmd.dt,
        worker_threads: cmd.workers,
        ..WorldConfig::default()
    };
    let mut world = world_new_with_config(config, records.len()).context("constructing world")?;
    for record in &records {
        world_add_segment(&mut world, record.p1, record.p2, record.velocity, record.color.clone())
            .context("adding segment")?;
    }

    for step in 0..cmd.steps {
        world_step(&mut world);
        tracing::info!(
            step,
            line_line = world_num_line_line_collisions(&world),
            line_wall = world_num_line_wall_collisions(&world),
            "step complete"
        );
    }

    println!(
        "{} segments, {} steps: {} line-line collisions, {} line-wall collisions",
        world_num_segments(&world),
        cmd.steps,
        world_num_line_line_collisions(&world),
        world_num_line_wall_collisions(&world),
    );
    Ok(())
}

fn world_new_with_config(config: WorldConfig, capacity: usize) -> Result<World, WorldError> {
    World::new(config, capacity)
}
