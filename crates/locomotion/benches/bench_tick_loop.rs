use std::hint::black_box;
use std::time::Instant;

use glam::{Vec2, Vec3};
use rigstride_common::Transform;
use rigstride_input::ConstantInput;
use rigstride_locomotion::{
    ContinuousMoveConfig, ContinuousMoveProvider, ContinuousTurnConfig, ContinuousTurnProvider,
    LocomotionArbiter, LocomotionProvider, SnapTurnConfig, SnapTurnProvider,
};
use rigstride_rig::XrRig;

fn make_rig() -> XrRig {
    let mut rig = XrRig::new(Transform::default());
    rig.set_camera_in_origin(Transform::from_position(Vec3::new(0.0, 1.7, 0.0)));
    rig
}

fn make_providers() -> Vec<Box<dyn LocomotionProvider>> {
    vec![
        Box::new(
            ContinuousMoveProvider::new(
                ContinuousMoveConfig::default(),
                Box::new(ConstantInput(Vec2::new(0.4, 0.8))),
            )
            .expect("valid config"),
        ),
        Box::new(
            ContinuousTurnProvider::new(
                ContinuousTurnConfig::default(),
                Box::new(ConstantInput(Vec2::new(1.0, 0.1))),
            )
            .expect("valid config"),
        ),
        Box::new(
            SnapTurnProvider::new(
                SnapTurnConfig::default(),
                Box::new(ConstantInput(Vec2::new(-1.0, 0.0))),
            )
            .expect("valid config"),
        ),
    ]
}

fn bench_tick_loop(ticks: usize) {
    let mut rig = make_rig();
    let mut arbiter = LocomotionArbiter::new();
    let mut providers = make_providers();

    let start = Instant::now();
    for _ in 0..ticks {
        arbiter.tick(black_box(1.0 / 90.0));
        for provider in &mut providers {
            provider.tick(black_box(1.0 / 90.0), &mut arbiter, Some(&mut rig));
        }
    }
    let elapsed = start.elapsed();
    let per_tick = elapsed / ticks as u32;
    println!("  tick loop (3 providers, {ticks} ticks): {per_tick:?}/tick, total {elapsed:?}");
    black_box(rig.origin().position);
}

fn bench_arbiter_contention(ids: usize, iterations: usize) {
    let providers: Vec<_> = (0..ids).map(|_| rigstride_common::ProviderId::new()).collect();
    let mut arbiter = LocomotionArbiter::new();

    let start = Instant::now();
    for i in 0..iterations {
        arbiter.tick(0.01);
        for id in &providers {
            let _ = black_box(arbiter.request_exclusive_operation(black_box(*id)));
        }
        let _ = arbiter.finish_exclusive_operation(providers[i % ids]);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  arbiter contention ({ids} ids, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Locomotion Tick Benchmarks ===\n");

    println!("Full provider tick loop:");
    bench_tick_loop(10_000);
    bench_tick_loop(100_000);

    println!("\nArbiter request/release:");
    bench_arbiter_contention(2, 100_000);
    bench_arbiter_contention(8, 100_000);

    println!("\n=== Done ===");
}
