use crate::dynamics::state::{OscillatorParams, SimConfig};

// ---------------------------------------------------------------------------
// Scenario: named parameter set plus time controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub params: OscillatorParams,
    pub config: SimConfig,
}

/// Lab default: m = 1, k = 4, c = 0.5, x0 = 1, v0 = 0 over 10 s at dt = 0.02.
pub fn lab_default() -> Scenario {
    Scenario {
        name: "Lab default".into(),
        params: OscillatorParams::default(),
        config: SimConfig::default(),
    }
}

pub fn undamped() -> Scenario {
    Scenario {
        name: "Undamped".into(),
        params: OscillatorParams::new(1.0, 4.0, 0.0, 1.0, 0.0),
        config: SimConfig::default(),
    }
}

/// k = 0, c = 0: constant velocity.
pub fn free_particle() -> Scenario {
    Scenario {
        name: "Free particle".into(),
        params: OscillatorParams::new(1.0, 0.0, 0.0, 0.0, 1.0),
        config: SimConfig::default(),
    }
}

/// c = 2 sqrt(k m)
pub fn critically_damped() -> Scenario {
    Scenario {
        name: "Critically damped".into(),
        params: OscillatorParams::new(1.0, 4.0, 4.0, 1.0, 0.0),
        config: SimConfig::default(),
    }
}

pub fn overdamped() -> Scenario {
    Scenario {
        name: "Overdamped".into(),
        params: OscillatorParams::new(1.0, 1.0, 5.0, 1.0, 0.0),
        config: SimConfig::default(),
    }
}

pub const NAMES: [&str; 5] = ["lab", "undamped", "free", "critical", "overdamped"];

/// Look up a preset by its short name (see [`NAMES`]).
pub fn by_name(name: &str) -> Option<Scenario> {
    match name {
        "lab" => Some(lab_default()),
        "undamped" => Some(undamped()),
        "free" => Some(free_particle()),
        "critical" => Some(critically_damped()),
        "overdamped" => Some(overdamped()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Input ranges accepted by the interactive front end
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const MASS: Range = Range::new(0.5, 5.0, 0.5);
pub const STIFFNESS: Range = Range::new(0.5, 10.0, 0.5);
pub const DAMPING: Range = Range::new(0.0, 5.0, 0.1);
pub const INITIAL_POSITION: Range = Range::new(-5.0, 5.0, 0.1);
pub const INITIAL_VELOCITY: Range = Range::new(-5.0, 5.0, 0.1);
pub const DURATION: Range = Range::new(2.0, 20.0, 1.0);
pub const STEP_SIZE: Range = Range::new(0.001, 0.1, 0.001);

/// Force every input into its front-end range.
pub fn clamp_inputs(params: &OscillatorParams, config: &SimConfig) -> (OscillatorParams, SimConfig) {
    (
        OscillatorParams {
            mass: MASS.clamp(params.mass),
            stiffness: STIFFNESS.clamp(params.stiffness),
            damping: DAMPING.clamp(params.damping),
            x0: INITIAL_POSITION.clamp(params.x0),
            v0: INITIAL_VELOCITY.clamp(params.v0),
        },
        SimConfig {
            duration: DURATION.clamp(config.duration),
            dt: STEP_SIZE.clamp(config.dt),
        },
    )
}
