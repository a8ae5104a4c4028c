pub mod dynamics;
pub mod error;
pub mod sim;
pub mod io;
pub mod presets;

pub use dynamics::state::{OscillatorParams, SimConfig, State, TimeGrid};
pub use error::ParamError;
pub use sim::{derive_energy, integrate, simulate, EnergyTrace, Trajectory};
