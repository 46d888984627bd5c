// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation.
//!
//! Measures the performance of:
//! - Index arithmetic with the cool-down guard
//! - Full message handling (navigate + remount + diagnostics)

use criterion::{criterion_group, criterion_main, Criterion};
use showreel::carousel::navigation::NavigationController;
use showreel::carousel::{Message, Settings, State};
use showreel::diagnostics::DiagnosticsCollector;
use showreel::domain::carousel::{Cooldown, Direction};
use showreel::media::catalog;
use std::hint::black_box;

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("advance_and_release", |b| {
        let mut controller = NavigationController::new(12, Cooldown::default());
        b.iter(|| {
            black_box(controller.advance(Direction::Next));
            controller.cooldown_elapsed();
        });
    });

    group.finish();
}

fn bench_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_state");

    let playlist = catalog::load_default().expect("built-in playlist parses");
    group.bench_function("next_message", |b| {
        let mut state = State::new(playlist.clone(), Settings::default());
        let mut diagnostics = DiagnosticsCollector::default();
        b.iter(|| {
            let (effect, _task) = state.handle_message(Message::Next, &mut diagnostics);
            black_box(effect);
            let _ = state.handle_message(Message::CooldownElapsed, &mut diagnostics);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_controller, bench_state);
criterion_main!(benches);
