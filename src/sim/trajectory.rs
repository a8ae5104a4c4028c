use nalgebra::Vector2;

use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Trajectory: index-aligned time, position and velocity sequences
// ---------------------------------------------------------------------------

/// Discretized trajectory. Sample `i` of every sequence refers to the same
/// instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
}

impl Trajectory {
    /// Zero-filled trajectory of `n` samples.
    pub fn zeros(n: usize) -> Self {
        Self {
            time: vec![0.0; n],
            position: vec![0.0; n],
            velocity: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Spacing between the first two samples (0 for a single sample).
    pub fn dt(&self) -> f64 {
        if self.len() < 2 { 0.0 } else { self.time[1] - self.time[0] }
    }

    pub fn sample(&self, i: usize) -> Option<State> {
        Some(State {
            time: *self.time.get(i)?,
            pos: *self.position.get(i)?,
            vel: *self.velocity.get(i)?,
        })
    }

    pub fn last(&self) -> Option<State> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }

    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        self.time
            .iter()
            .zip(&self.position)
            .zip(&self.velocity)
            .map(|((&time, &pos), &vel)| State { time, pos, vel })
    }

    /// (x, v) points for a phase portrait.
    pub fn phase_points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.position
            .iter()
            .zip(&self.velocity)
            .map(|(&x, &v)| Vector2::new(x, v))
    }

    /// Number of rows shown by a table of at most `rows` lines.
    pub fn head(&self, rows: usize) -> usize {
        rows.min(self.len())
    }
}
