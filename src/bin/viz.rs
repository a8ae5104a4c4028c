use eframe::egui;
use egui_plot::{Legend, Line, Plot};

use spring_sim::dynamics::{self, state::{OscillatorParams, SimConfig}};
use spring_sim::io::table::TABLE_ROWS;
use spring_sim::presets::{self, Range};
use spring_sim::sim::{self, EnergyTrace, Trajectory};

fn main() -> eframe::Result {
    let scenario = presets::lab_default();
    let mut app = SpringViz {
        params: scenario.params,
        config: scenario.config,
        show_energy: false,
        trajectory: Trajectory::zeros(0),
        energy: EnergyTrace { potential: vec![], kinetic: vec![], total: vec![] },
    };
    app.recompute();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native("Mass-Spring Lab", options, Box::new(|_| Ok(Box::new(app))))
}

struct SpringViz {
    params: OscillatorParams,
    config: SimConfig,
    show_energy: bool,
    trajectory: Trajectory,
    energy: EnergyTrace,
}

impl SpringViz {
    fn recompute(&mut self) {
        let (params, config) = presets::clamp_inputs(&self.params, &self.config);
        self.params = params;
        self.config = config;
        let (trajectory, energy) = sim::simulate(&params, &config);
        self.trajectory = trajectory;
        self.energy = energy;
    }
}

fn slider(ui: &mut egui::Ui, value: &mut f64, range: Range, label: &str) -> bool {
    ui.add(
        egui::Slider::new(value, range.min..=range.max)
            .step_by(range.step)
            .text(label),
    )
    .changed()
}

fn series(xs: &[f64], ys: &[f64], step: usize) -> Vec<[f64; 2]> {
    xs.iter()
        .zip(ys)
        .step_by(step)
        .map(|(&x, &y)| [x, y])
        .collect()
}

impl eframe::App for SpringViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").min_width(280.0).show(ctx, |ui| {
            ui.heading("System");
            let mut changed = false;
            changed |= slider(ui, &mut self.params.mass, presets::MASS, "mass m");
            changed |= slider(ui, &mut self.params.stiffness, presets::STIFFNESS, "stiffness k");
            changed |= slider(ui, &mut self.params.damping, presets::DAMPING, "damping c");

            ui.separator();
            ui.heading("Initial conditions");
            changed |= slider(ui, &mut self.params.x0, presets::INITIAL_POSITION, "x₀");
            changed |= slider(ui, &mut self.params.v0, presets::INITIAL_VELOCITY, "v₀");

            ui.separator();
            ui.heading("Time");
            changed |= slider(ui, &mut self.config.duration, presets::DURATION, "duration (s)");
            changed |= slider(ui, &mut self.config.dt, presets::STEP_SIZE, "Δt (s)");

            if changed {
                self.recompute();
            }

            ui.separator();
            ui.label(format!("Steps: {}", self.trajectory.len()));
            ui.label(format!("Regime: {}", dynamics::regime(&self.params).label()));
            if !dynamics::is_step_stable(&self.params, self.config.dt) {
                ui.colored_label(egui::Color32::RED, "Δt too large: discrete solution grows");
            }
            ui.checkbox(&mut self.show_energy, "Show energy (E_p, E_k, E_total)");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let step = (self.trajectory.len() / 4000).max(1);
            let traj = &self.trajectory;
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let plot_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Position vs Time
                ui.vertical(|ui| {
                    ui.label("Position x(t)");
                    Plot::new("position")
                        .width(half_w)
                        .height(plot_h)
                        .x_axis_label("t (s)")
                        .y_axis_label("x")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("x(t)", series(&traj.time, &traj.position, step)));
                        });
                });

                // Phase portrait
                ui.vertical(|ui| {
                    ui.label("Phase portrait (x–v)");
                    Plot::new("phase")
                        .width(half_w)
                        .height(plot_h)
                        .x_axis_label("x")
                        .y_axis_label("v")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("orbit", series(&traj.position, &traj.velocity, step)));
                        });
                });
            });

            ui.horizontal(|ui| {
                if self.show_energy {
                    ui.vertical(|ui| {
                        ui.label("Energy");
                        Plot::new("energy")
                            .width(half_w)
                            .height(plot_h)
                            .x_axis_label("t (s)")
                            .legend(Legend::default())
                            .show(ui, |plot_ui| {
                                plot_ui.line(Line::new("Potential", series(&traj.time, &self.energy.potential, step)));
                                plot_ui.line(Line::new("Kinetic", series(&traj.time, &self.energy.kinetic, step)));
                                plot_ui.line(Line::new("Total", series(&traj.time, &self.energy.total, step)));
                            });
                    });
                }

                ui.vertical(|ui| {
                    ui.label("First samples");
                    egui::Grid::new("samples").striped(true).show(ui, |ui| {
                        for h in ["t (s)", "x(t)", "v(t)", "E_p", "E_k", "E_total"] {
                            ui.strong(h);
                        }
                        ui.end_row();
                        for i in 0..traj.head(TABLE_ROWS) {
                            for value in [
                                traj.time[i],
                                traj.position[i],
                                traj.velocity[i],
                                self.energy.potential[i],
                                self.energy.kinetic[i],
                                self.energy.total[i],
                            ] {
                                ui.label(format!("{:.3}", value));
                            }
                            ui.end_row();
                        }
                    });
                });
            });
        });
    }
}
