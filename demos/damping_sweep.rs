use spring_sim::dynamics;
use spring_sim::sim::{self, EnergySummary};
use spring_sim::{OscillatorParams, SimConfig};

/// Sweep the damping coefficient from zero past critical and report how much
/// energy each run keeps after 10 s.
fn main() {
    let config = SimConfig::default();

    println!("{:>6}  {:>18}  {:>8}  {:>10}  {:>10}", "c", "regime", "zeta", "E(0)", "E(10 s)");
    println!("{}", "─".repeat(60));

    for i in 0..=10 {
        let c = 0.5 * i as f64;
        let params = OscillatorParams { damping: c, ..OscillatorParams::default() };
        let (_, energy) = sim::simulate(&params, &config);
        let Some(summary) = EnergySummary::from_trace(&energy) else {
            continue;
        };
        println!(
            "{:>6.2}  {:>18}  {:>8.3}  {:>10.4}  {:>10.6}",
            c,
            dynamics::regime(&params).label(),
            dynamics::damping_ratio(&params),
            summary.initial,
            summary.final_,
        );
    }
}
