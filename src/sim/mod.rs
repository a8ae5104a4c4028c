pub mod integrator;
pub mod runner;
pub mod trajectory;
pub mod energy;

pub use runner::{integrate, simulate, simulate_checked};
pub use integrator::semi_implicit_euler_step;
pub use trajectory::Trajectory;
pub use energy::{derive_energy, modified_energy, EnergySummary, EnergyTrace};
