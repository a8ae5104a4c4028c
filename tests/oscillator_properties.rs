//! Behavioural tests for the oscillator integrator and energy derivation
//!
//! Each test checks a property of the discrete trajectory against the
//! continuous system it approximates.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use spring_sim::dynamics;
use spring_sim::sim::{derive_energy, integrate, modified_energy, simulate};
use spring_sim::{OscillatorParams, SimConfig, TimeGrid};

fn undamped() -> OscillatorParams {
    OscillatorParams::new(1.0, 4.0, 0.0, 1.0, 0.0)
}

fn damped() -> OscillatorParams {
    OscillatorParams::new(1.0, 4.0, 0.5, 1.0, 0.0)
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let params = OscillatorParams::new(2.5, 7.0, 0.3, -1.2, 3.4);
    let grid = TimeGrid::new(0.013, 1234);
    let a = integrate(&params, &grid);
    let b = integrate(&params, &grid);
    assert_eq!(a, b);
    assert_eq!(derive_energy(&params, &a), derive_energy(&params, &b));
}

#[test]
fn test_initial_conditions_are_exact() {
    for (x0, v0) in [(1.0, 0.0), (-4.3, 2.2), (0.0, -5.0), (1e-300, 1e300)] {
        let params = OscillatorParams { x0, v0, ..damped() };
        let traj = integrate(&params, &TimeGrid::new(0.01, 10));
        assert_eq!(traj.position[0], x0);
        assert_eq!(traj.velocity[0], v0);
        assert_eq!(traj.time[0], 0.0);
    }
}

#[test]
fn test_time_grid_spacing_and_lengths() {
    let grid = TimeGrid::new(0.007, 2000);
    let traj = integrate(&damped(), &grid);
    assert_eq!(traj.time.len(), 2000);
    assert_eq!(traj.position.len(), 2000);
    assert_eq!(traj.velocity.len(), 2000);
    for (i, t) in traj.time.iter().enumerate() {
        assert_abs_diff_eq!(*t, i as f64 * grid.dt, epsilon = 1e-10);
    }
}

#[test]
fn test_undamped_energy_is_nearly_conserved() {
    let params = undamped();
    let grid = TimeGrid::new(0.02, 501);
    let traj = integrate(&params, &grid);
    let energy = derive_energy(&params, &traj);

    assert_relative_eq!(energy.total[0], 2.0);

    // Time-averaged total stays within 1 % of the initial energy
    let mean = energy.total.iter().sum::<f64>() / energy.total.len() as f64;
    assert_relative_eq!(mean, 2.0, max_relative = 0.01);

    // Pointwise deviation is bounded by ω dt / 2 = 2 %, with a little slack
    for e in &energy.total {
        assert_relative_eq!(*e, 2.0, max_relative = 0.025);
    }
}

#[test]
fn test_undamped_energy_has_no_secular_drift() {
    let params = undamped();
    let traj = integrate(&params, &TimeGrid::new(0.02, 20_001));
    let energy = derive_energy(&params, &traj);

    let early = energy.total[..2_000].iter().fold(0.0_f64, |m, e| m.max((e - 2.0).abs()));
    let late = energy.total[18_000..].iter().fold(0.0_f64, |m, e| m.max((e - 2.0).abs()));
    assert!(late < early * 1.05, "energy envelope grew: {} -> {}", early, late);
}

#[test]
fn test_modified_energy_is_invariant() {
    let params = undamped();
    let dt = 0.02;
    let traj = integrate(&params, &TimeGrid::new(dt, 5_000));
    let h0 = modified_energy(&params, traj.position[0], traj.velocity[0], dt);
    for s in traj.states() {
        assert_relative_eq!(modified_energy(&params, s.pos, s.vel, dt), h0, max_relative = 1e-12);
    }
}

#[test]
fn test_damped_energy_decreases() {
    let params = damped();
    let (traj, energy) = simulate(&params, &SimConfig { duration: 10.0, dt: 0.02 });
    assert_eq!(traj.len(), 501);
    let last = energy.total.len() - 1;
    assert_abs_diff_eq!(traj.time[last], 10.0, epsilon = 1e-9);
    assert!(energy.total[last] < energy.total[0]);

    // Peak energy over successive periods (π s ≈ 157 samples) keeps falling
    let window = 157;
    let peaks: Vec<f64> = energy
        .total
        .chunks(window)
        .map(|w| w.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        .collect();
    for pair in peaks.windows(2) {
        assert!(pair[1] < pair[0], "peak energy rose: {:?}", peaks);
    }
}

#[test]
fn test_free_particle_moves_uniformly() {
    let params = OscillatorParams::new(1.0, 0.0, 0.0, 0.3, 1.7);
    let dt = 0.01;
    let traj = integrate(&params, &TimeGrid::new(dt, 1_000));
    for i in 0..traj.len() {
        assert_eq!(traj.velocity[i], 1.7);
        assert_abs_diff_eq!(traj.position[i], 0.3 + 1.7 * i as f64 * dt, epsilon = 1e-9);
    }
}

#[test]
fn test_energy_of_synthetic_samples() {
    use spring_sim::Trajectory;

    let params = OscillatorParams::new(1.0, 4.0, 0.0, 1.0, 0.0);
    let traj = Trajectory {
        time: vec![0.0, 1.0],
        position: vec![1.0, 0.0],
        velocity: vec![0.0, 2.0],
    };
    let energy = derive_energy(&params, &traj);
    assert_eq!(energy.potential, vec![2.0, 0.0]);
    assert_eq!(energy.kinetic, vec![0.0, 2.0]);
    assert_eq!(energy.total, vec![2.0, 2.0]);
}

#[test]
fn test_two_second_scenario_tracks_cosine() {
    let params = undamped();
    let config = SimConfig { duration: 2.0, dt: 0.01 };
    let grid = config.grid();
    assert_eq!(grid.steps, 201);

    let (traj, _) = simulate(&params, &config);
    let end = traj.position[200];
    assert_relative_eq!(end, 4.0_f64.cos(), max_relative = 0.05);
    assert_relative_eq!(end, dynamics::exact_position(&params, 2.0), max_relative = 0.05);
}

#[test]
fn test_error_shrinks_with_step_size() {
    // First-order method: halving dt roughly halves the global error
    let params = damped();
    let t_end = 5.0;
    let exact = dynamics::exact_position(&params, t_end);
    let err = |dt: f64| {
        let (traj, _) = simulate(&params, &SimConfig { duration: t_end, dt });
        (traj.last().unwrap().pos - exact).abs()
    };
    let coarse = err(0.01);
    let fine = err(0.005);
    assert!(fine < coarse * 0.7, "coarse {}, fine {}", coarse, fine);
}

#[test]
fn test_large_step_diverges() {
    let params = undamped();
    assert!(!dynamics::is_step_stable(&params, 1.1));
    let traj = integrate(&params, &TimeGrid::new(1.1, 50));
    let last = traj.last().unwrap();
    assert!(last.pos.abs() > 1e6, "expected blow-up, got {}", last.pos);
}

#[test]
fn test_outputs_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<spring_sim::Trajectory>();
    assert_send_sync::<spring_sim::EnergyTrace>();
    assert_send_sync::<OscillatorParams>();

    let handles: Vec<_> = (1..=4)
        .map(|k| {
            std::thread::spawn(move || {
                let params = OscillatorParams::new(1.0, k as f64, 0.1, 1.0, 0.0);
                integrate(&params, &TimeGrid::new(0.01, 500))
            })
        })
        .collect();
    for (k, h) in (1..=4).zip(handles) {
        let traj = h.join().unwrap();
        let params = OscillatorParams::new(1.0, k as f64, 0.1, 1.0, 0.0);
        assert_eq!(traj, integrate(&params, &TimeGrid::new(0.01, 500)));
    }
}
