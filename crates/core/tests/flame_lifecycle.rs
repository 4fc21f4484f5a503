//! Scenario tests for the flame state machine: decay, extinguishing,
//! fuel intake, resets, and the score clock.

use flame_sim_core::{FlameSimulation, FuelError, FuelProbe, Kelvin};
use std::io;
use std::path::Path;

/// Probe reporting a fixed size for every path.
struct FixedProbe(u64);

impl FuelProbe for FixedProbe {
    fn size_of(&self, _path: &Path) -> io::Result<u64> {
        Ok(self.0)
    }
}

/// Probe that fails every read.
struct FailingProbe;

impl FuelProbe for FailingProbe {
    fn size_of(&self, path: &Path) -> io::Result<u64> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file: {}", path.display()),
        ))
    }
}

#[test]
fn test_fresh_flame_starts_hot() {
    let sim = FlameSimulation::with_seed(1, 0);
    assert!(sim.is_alive());
    assert!((7000..=9000).contains(&*sim.temperature()));
    assert_eq!(sim.score(), 0);
    assert_eq!(sim.best_score(), 0);
    assert!(sim.embers().is_empty());
    assert_eq!(sim.tip(), "Feed me more files as fuel!");
}

#[test]
fn test_three_bursts_decay_three_hundred_kelvin() {
    let mut sim = FlameSimulation::with_seed(1, 0);
    sim.set_temperature(Kelvin::clamped(8000));

    sim.update(300);
    sim.update(600);
    sim.update(900);

    assert_eq!(*sim.temperature(), 7700);
    assert!(sim.is_alive());
    // Three bursts of 70, none old enough to have retired.
    assert_eq!(sim.embers().len(), 210);
}

#[test]
fn test_bursts_respect_cadence() {
    let mut sim = FlameSimulation::with_seed(4, 0);
    sim.set_temperature(Kelvin::clamped(8000));

    // 200 ms in: too early for a burst.
    sim.update(200);
    assert_eq!(sim.embers().len(), 0);
    assert_eq!(*sim.temperature(), 8000);

    sim.update(310);
    assert_eq!(sim.embers().len(), 70);
    assert_eq!(*sim.temperature(), 7900);

    // 150 ms after the last burst: still waiting.
    sim.update(460);
    assert_eq!(sim.embers().len(), 70);
}

#[test]
fn test_decay_clamps_to_floor_and_extinguishes() {
    let mut sim = FlameSimulation::with_seed(2, 0);
    sim.set_temperature(Kelvin::clamped(1050));

    sim.update(300);

    // 1050 - 100 clamps to the floor instead of undershooting it.
    assert_eq!(sim.temperature(), Kelvin::FLOOR);
    assert!(!sim.is_alive());
    assert!(sim.tip().contains("Game Over"));
}

#[test]
fn test_extinguish_folds_score_into_best_and_reset_revives() {
    let mut sim = FlameSimulation::with_seed(2, 0);
    sim.set_temperature(Kelvin::clamped(1200));

    sim.update(1000);
    assert!(sim.is_alive());
    assert_eq!(*sim.temperature(), 1100);
    assert_eq!(sim.score(), 1);

    sim.update(2000);
    assert!(!sim.is_alive());
    assert_eq!(sim.best_score(), 1);
    // The score clock still ran within the killing update pass.
    assert_eq!(sim.score(), 2);

    // Dead flames take no fuel and keep the game-over tip.
    let tip_before = sim.tip().to_string();
    assert!(matches!(
        sim.add_fuel(&FixedProbe(2000), Path::new("late.txt")),
        Err(FuelError::Extinguished)
    ));
    assert_eq!(sim.temperature(), Kelvin::FLOOR);
    assert_eq!(sim.tip(), tip_before);

    let embers_in_flight = sim.embers().len();
    assert!(embers_in_flight > 0);

    sim.reset(2500);
    assert!(sim.is_alive());
    assert!((7000..=9000).contains(&*sim.temperature()));
    assert_eq!(sim.score(), 0);
    assert_eq!(sim.best_score(), 1, "best score survives the reset");
    assert_eq!(
        sim.embers().len(),
        embers_in_flight,
        "in-flight embers are not cleared by a reset"
    );
    assert!(sim.add_fuel(&FixedProbe(2000), Path::new("late.txt")).is_ok());

    // A worse round does not overwrite the best score.
    sim.set_temperature(Kelvin::clamped(1050));
    sim.update(2800);
    assert!(!sim.is_alive());
    assert_eq!(sim.best_score(), 1);
}

#[test]
fn test_reset_is_ignored_while_alive() {
    let mut sim = FlameSimulation::with_seed(9, 0);
    sim.set_temperature(Kelvin::clamped(5000));
    sim.reset(100);
    assert_eq!(*sim.temperature(), 5000);
}

#[test]
fn test_duplicate_fuel_burns_once() {
    let mut sim = FlameSimulation::with_seed(3, 0);
    sim.set_temperature(Kelvin::clamped(8000));

    let gain = sim
        .add_fuel(&FixedProbe(2000), Path::new("a.txt"))
        .expect("first drop burns");
    assert_eq!(gain.bytes, 2000);
    assert_eq!(gain.kelvin, 100);
    assert_eq!(*sim.temperature(), 8100);
    assert_eq!(sim.tip(), "This file is 2000B.\nTemperature +100K");

    assert!(matches!(
        sim.add_fuel(&FixedProbe(2000), Path::new("a.txt")),
        Err(FuelError::Duplicate)
    ));
    assert_eq!(*sim.temperature(), 8100, "duplicate must not heat the flame");
    assert_eq!(sim.tip(), "This file has been thrown into the fire!");
}

#[test]
fn test_fuel_clamps_at_ceiling() {
    let mut sim = FlameSimulation::with_seed(3, 0);
    sim.set_temperature(Kelvin::clamped(8950));

    sim.add_fuel(&FixedProbe(2000), Path::new("big.txt"))
        .expect("drop burns");
    assert_eq!(sim.temperature(), Kelvin::CEIL);
}

#[test]
fn test_unreadable_fuel_is_recoverable_and_retryable() {
    let mut sim = FlameSimulation::with_seed(3, 0);
    sim.set_temperature(Kelvin::clamped(8000));

    assert!(matches!(
        sim.add_fuel(&FailingProbe, Path::new("ghost.txt")),
        Err(FuelError::Unreadable(_))
    ));
    assert_eq!(*sim.temperature(), 8000);
    assert!(sim.tip().starts_with("Couldn't read that file."));

    // The failed path was not recorded as consumed: a retry may succeed.
    assert!(sim.add_fuel(&FixedProbe(400), Path::new("ghost.txt")).is_ok());
    assert_eq!(*sim.temperature(), 8020);
}

#[test]
fn test_score_clock_ticks_once_per_second() {
    let mut sim = FlameSimulation::with_seed(6, 0);
    sim.set_temperature(Kelvin::clamped(9000));

    sim.update(500);
    assert_eq!(sim.score(), 0);
    sim.update(1000);
    assert_eq!(sim.score(), 1);
    sim.update(1700);
    assert_eq!(sim.score(), 1, "only 700 ms since the last score tick");
    sim.update(2100);
    assert_eq!(sim.score(), 2);
}

#[test]
fn test_clock_rewind_stalls_timers_without_panicking() {
    let mut sim = FlameSimulation::with_seed(8, 0);
    sim.set_temperature(Kelvin::clamped(8000));

    sim.update(1000);
    assert_eq!(*sim.temperature(), 7900);
    assert_eq!(sim.embers().len(), 70);
    assert_eq!(sim.score(), 1);

    // A frontend clock hiccup that runs backwards must not burst, score,
    // or overflow; the timers simply wait for the clock to catch up.
    sim.update(400);
    assert_eq!(*sim.temperature(), 7900);
    assert_eq!(sim.embers().len(), 70);
    assert_eq!(sim.score(), 1);

    sim.update(1300);
    assert_eq!(*sim.temperature(), 7800);
    assert_eq!(sim.embers().len(), 140);
}

#[test]
fn test_temperature_never_leaves_bounds() {
    let mut sim = FlameSimulation::with_seed(5, 0);
    let mut now = 0u64;

    for i in 0..300u32 {
        now += u64::from(i % 7) * 100;
        sim.update(now);
        if !sim.is_alive() {
            sim.reset(now);
        }

        if i % 3 == 0 {
            // Sizes swing from no-ops to far past the clamp ceiling.
            let size = u64::from(i) * 12_345;
            let path = format!("fuel-{i}.bin");
            let _ = sim.add_fuel(&FixedProbe(size), Path::new(&path));
        }

        let temp = *sim.temperature();
        assert!(
            (1000..=9000).contains(&temp),
            "temperature {temp} escaped its bounds at step {i}"
        );
    }
}
