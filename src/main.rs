use std::io;
use std::process::ExitCode;

use spring_sim::dynamics;
use spring_sim::io::{csv, json::{self, RunSummary}, table};
use spring_sim::presets;
use spring_sim::sim;

fn main() -> ExitCode {
    // -----------------------------------------------------------------------
    // Scenario: first argument names a preset, "--csv" dumps every sample
    // -----------------------------------------------------------------------
    let args: Vec<String> = std::env::args().skip(1).collect();
    let preset = args.iter().find(|a| !a.starts_with("--")).map_or("lab", String::as_str);
    let dump_csv = args.iter().any(|a| a == "--csv");
    let dump_json = args.iter().any(|a| a == "--json");

    let Some(scenario) = presets::by_name(preset) else {
        eprintln!("unknown preset '{}', expected one of: {}", preset, presets::NAMES.join(", "));
        return ExitCode::FAILURE;
    };
    let params = scenario.params;
    let config = scenario.config;

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let (trajectory, energy) = match sim::simulate_checked(&params, &config) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("invalid scenario '{}': {}", scenario.name, e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if dump_csv {
        return report_io(csv::write_trajectory(&mut out, &trajectory, &energy));
    }

    let Some(summary) = RunSummary::from_run(&trajectory, &energy) else {
        eprintln!("empty trajectory");
        return ExitCode::FAILURE;
    };

    if dump_json {
        return report_io(json::write_summary(&mut out, &params, &config, &summary));
    }

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  MASS-SPRING-DAMPER SIMULATION — {}", scenario.name);
    println!("====================================================================");
    println!();
    println!("  System Parameters   m x'' + c x' + k x = 0");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass m:        {:>8.2}       Stiffness k:  {:>8.2}",
        params.mass, params.stiffness
    );
    println!(
        "  Damping c:     {:>8.2}       x0:           {:>8.2}    v0: {:>6.2}",
        params.damping, params.x0, params.v0
    );
    println!(
        "  Duration:      {:>8.1} s     dt:           {:>8.3} s  steps: {}",
        config.duration,
        config.dt,
        trajectory.len()
    );
    println!();

    println!("  Analysis");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Regime:        {:>18}   Damping ratio: {:.3}",
        dynamics::regime(&params).label(),
        dynamics::damping_ratio(&params)
    );
    match dynamics::period(&params) {
        Some(p) => println!(
            "  ω:             {:>8.3} rad/s   Period:       {:>8.3} s",
            dynamics::natural_frequency(&params),
            p
        ),
        None => println!("  ω:             {:>8.3} rad/s   Period:            n/a", 0.0),
    }
    let rho = dynamics::spectral_radius(&params, config.dt);
    println!(
        "  Step radius:   {:>12.9}   {}",
        rho,
        if dynamics::is_step_stable(&params, config.dt) { "stable" } else { "UNSTABLE: reduce dt" }
    );
    println!();

    println!("  Results");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Final x:       {:>8.4}       Final v:      {:>8.4}",
        summary.final_position, summary.final_velocity
    );
    println!(
        "  Max |x|:       {:>8.4}       Max |v|:      {:>8.4}",
        summary.max_abs_position, summary.max_speed
    );
    println!(
        "  Energy:        {:>8.4} → {:<8.4}  drift: {:+.2}%",
        summary.energy.initial,
        summary.energy.final_,
        summary.energy.relative_drift * 100.0
    );
    println!();

    println!("  First Samples");
    println!("  ──────────────────────────────────────────────────────────────────");
    if let Err(e) = table::write_table(&mut out, &trajectory, &energy, table::TABLE_ROWS) {
        eprintln!("failed to write table: {}", e);
        return ExitCode::FAILURE;
    }
    println!("====================================================================");
    println!();

    ExitCode::SUCCESS
}

fn report_io(result: io::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("write failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
