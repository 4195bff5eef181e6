use chrono::{DateTime, Local};

pub use self::{load::LoadAverage, uptime::Uptime};

mod load;
mod uptime;


/// what a [`Sampler`][crate::source::Sampler] observed during one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Reading {
    /// facts parsed from the kernel's pseudo-files.
    Structured(Snapshot),
    /// text captured verbatim from an external status command.
    Opaque(String),
}

/// a snapshot of the system's state at a moment in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// time elapsed since boot.
    pub uptime: Uptime,
    /// the 1, 5, and 15 minute load averages.
    pub load: LoadAverage,
    /// the number of active login sessions.
    pub sessions: usize,
    /// when this snapshot was taken.
    pub sampled_at: DateTime<Local>,
}
