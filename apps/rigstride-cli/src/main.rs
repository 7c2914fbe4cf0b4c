use clap::{Parser, Subcommand};
use glam::{Vec2, Vec3};
use rigstride_common::Transform;
use rigstride_input::ConstantInput;
use rigstride_locomotion::{
    ContinuousMoveConfig, ContinuousMoveProvider, ContinuousTurnConfig, ContinuousTurnProvider,
    GravityApplicationMode, LocomotionArbiter, LocomotionProvider, SnapTurnConfig,
    SnapTurnProvider,
};
use rigstride_rig::{KinematicBody, XrRig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rigstride-cli", about = "CLI driver for rigstride locomotion demos")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print toolkit version and crate info
    Info,
    /// Walk the rig forward with the continuous move provider
    Walk {
        /// Number of simulation ticks
        #[arg(short, long, default_value = "90")]
        ticks: u32,
        /// Move speed in units per time-unit
        #[arg(short, long, default_value = "1.0")]
        speed: f32,
        /// Drop the rig from this height onto the ground plane
        #[arg(long, default_value = "0.0")]
        drop_from: f32,
    },
    /// Turn the rig with the continuous turn provider
    Turn {
        /// Number of simulation ticks
        #[arg(short, long, default_value = "90")]
        ticks: u32,
        /// Turn rate in degrees per time-unit
        #[arg(short, long, default_value = "60.0")]
        speed: f32,
    },
    /// Snap-turn the rig and trace the phase machine
    Snap {
        /// Degrees per snap
        #[arg(short, long, default_value = "45.0")]
        amount: f32,
        /// Delay between arming and applying, in time-units
        #[arg(short, long, default_value = "0.0")]
        delay: f32,
        /// Number of simulation ticks
        #[arg(short, long, default_value = "90")]
        ticks: u32,
    },
}

const TICK_DT: f32 = 1.0 / 90.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("rigstride-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", rigstride_common::crate_info());
            println!("rig: {}", rigstride_rig::crate_info());
            println!("input: {}", rigstride_input::crate_info());
            println!("locomotion: {}", rigstride_locomotion::crate_info());
        }
        Commands::Walk {
            ticks,
            speed,
            drop_from,
        } => {
            println!("Walk demo: speed={speed}, ticks={ticks}, drop_from={drop_from}");

            let mut rig = XrRig::new(Transform::from_position(Vec3::new(0.0, drop_from, 0.0)))
                .with_mover(Box::new(KinematicBody::new()));
            rig.set_camera_in_origin(Transform::from_position(Vec3::new(0.0, 1.7, 0.0)));

            let config = ContinuousMoveConfig {
                move_speed: speed,
                gravity_application_mode: GravityApplicationMode::Immediately,
                ..ContinuousMoveConfig::default()
            };
            let mut provider =
                ContinuousMoveProvider::new(config, Box::new(ConstantInput(Vec2::new(0.0, 1.0))))?;

            let mut arbiter = LocomotionArbiter::new();
            for tick in 0..ticks {
                arbiter.tick(TICK_DT);
                provider.tick(TICK_DT, &mut arbiter, Some(&mut rig));
                if tick % 30 == 0 || tick + 1 == ticks {
                    let p = rig.origin().position;
                    println!(
                        "tick {tick:>4}: origin=({:+.3}, {:+.3}, {:+.3}) grounded={} phase={:?}",
                        p.x,
                        p.y,
                        p.z,
                        rig.is_grounded(),
                        provider.phase()
                    );
                }
            }
        }
        Commands::Turn { ticks, speed } => {
            println!("Turn demo: speed={speed} deg/s, ticks={ticks}");

            let mut rig = XrRig::new(Transform::default());
            rig.set_camera_in_origin(Transform::from_position(Vec3::new(0.0, 1.7, 0.0)));

            let config = ContinuousTurnConfig { turn_speed: speed };
            let mut provider =
                ContinuousTurnProvider::new(config, Box::new(ConstantInput(Vec2::new(1.0, 0.0))))?;

            let mut arbiter = LocomotionArbiter::new();
            for tick in 0..ticks {
                arbiter.tick(TICK_DT);
                provider.tick(TICK_DT, &mut arbiter, Some(&mut rig));
                if tick % 30 == 0 || tick + 1 == ticks {
                    println!(
                        "tick {tick:>4}: heading={:+7.2} deg phase={:?}",
                        heading_degrees(&rig),
                        provider.phase()
                    );
                }
            }
        }
        Commands::Snap {
            amount,
            delay,
            ticks,
        } => {
            println!("Snap demo: amount={amount} deg, delay={delay}, ticks={ticks}");

            let mut rig = XrRig::new(Transform::default());
            rig.set_camera_in_origin(Transform::from_position(Vec3::new(0.0, 1.7, 0.0)));

            let config = SnapTurnConfig {
                turn_amount: amount,
                delay_time: delay,
                ..SnapTurnConfig::default()
            };
            let mut provider =
                SnapTurnProvider::new(config, Box::new(ConstantInput(Vec2::new(1.0, 0.0))))?;

            let mut arbiter = LocomotionArbiter::new();
            let mut last_phase = provider.phase();
            for tick in 0..ticks {
                arbiter.tick(TICK_DT);
                provider.tick(TICK_DT, &mut arbiter, Some(&mut rig));
                if provider.phase() != last_phase {
                    println!(
                        "tick {tick:>4}: phase {last_phase:?} -> {:?}, heading={:+7.2} deg",
                        provider.phase(),
                        heading_degrees(&rig)
                    );
                    last_phase = provider.phase();
                }
            }
            println!("final heading: {:+.2} deg", heading_degrees(&rig));
        }
    }

    Ok(())
}

fn heading_degrees(rig: &XrRig) -> f32 {
    let fwd = rig.origin().forward();
    fwd.x.atan2(fwd.z).to_degrees()
}
