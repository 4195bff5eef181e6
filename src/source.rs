use {
    crate::{Error, command::StatusCommand, proc::ProcFs, snapshot::Reading},
    chrono::{DateTime, Local},
    std::{cell::RefCell, collections::VecDeque},
};

pub use self::{clock::*, sampler::*};

mod clock {
    use super::*;

    /// a source of wall-clock time.
    pub trait Clock {
        fn now(&self) -> DateTime<Local>;
    }

    #[derive(Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Local> {
            Local::now()
        }
    }

    /// a mock clock, stopped at a fixed time.
    #[derive(Clone, Debug)]
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockClock {
        now: DateTime<Local>,
    }

    impl MockClock {
        #[allow(dead_code, reason = "this is a testing utility.")]
        pub fn new(now: DateTime<Local>) -> Self {
            Self { now }
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> DateTime<Local> {
            self.now
        }
    }
}

/// abstracts over providers of system metrics.
mod sampler {
    use super::*;

    /// a source of system metrics.
    pub trait Sampler {
        /// takes a fresh reading of the system's state.
        fn sample(&self, clock: &impl Clock) -> Result<Reading, Error>;
    }

    /// the sampling strategy, chosen once at startup.
    ///
    /// procfs is the default. the status command is only used when chosen explicitly.
    #[derive(Clone, Debug)]
    pub enum Strategy {
        /// parse the kernel's pseudo-files.
        Proc(ProcFs),
        /// capture the output of an external status command.
        Command(StatusCommand),
    }

    /// a mock sampler, returning queued readings in order.
    #[derive(Default)]
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockSampler {
        readings: RefCell<VecDeque<Result<Reading, Error>>>,
        calls: RefCell<usize>,
    }

    // === impl Strategy ===

    impl Default for Strategy {
        fn default() -> Self {
            Self::Proc(ProcFs::default())
        }
    }

    impl Sampler for Strategy {
        fn sample(&self, clock: &impl Clock) -> Result<Reading, Error> {
            match self {
                Self::Proc(proc) => proc.sample(clock),
                Self::Command(command) => command.sample(clock),
            }
        }
    }

    // === impl MockSampler ===

    #[allow(dead_code, reason = "this is a testing utility.")]
    impl MockSampler {
        pub fn new(readings: impl IntoIterator<Item = Result<Reading, Error>>) -> Self {
            Self {
                readings: RefCell::new(readings.into_iter().collect()),
                calls: RefCell::new(0),
            }
        }

        /// the number of times [`Sampler::sample()`] has been called.
        pub fn calls(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl Sampler for MockSampler {
        fn sample(&self, _: &impl Clock) -> Result<Reading, Error> {
            let Self { readings, calls } = self;

            *calls.borrow_mut() += 1;
            readings
                .borrow_mut()
                .pop_front()
                .expect("mock readings should not be empty")
        }
    }
}
