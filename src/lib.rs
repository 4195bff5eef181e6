//! a compact system status line.

use {
    self::{
        dashboard::{Dashboard, FollowUp},
        scheduler::{Event, Input, Scheduler, TerminalInput},
        source::{Clock, Sampler, Strategy, SystemClock},
        window::{AltScreen, Screen, Window},
    },
    std::{io, time::Duration},
    tracing::{debug, info},
};

pub use self::{
    command::StatusCommand,
    error::{Error, ParseError},
    proc::ProcFs,
    snapshot::{LoadAverage, Reading, Snapshot, Uptime},
};

/// external status command facilities.
mod command;
/// the dashboard state machine.
pub mod dashboard;
mod error;
/// status line formatting.
pub mod format;
/// kernel pseudo-file facilities.
mod proc;
pub mod scheduler;
mod snapshot;
pub mod source;
pub mod window;

/// the dashboard's settings: the refresh interval and the source of metrics.
///
/// the default samples procfs every three seconds.
#[derive(Clone, Debug)]
pub struct Config {
    /// how often the status line is refreshed.
    pub interval: Duration,
    /// where metrics are sampled from.
    pub strategy: Strategy,
}

pub struct App<S = Strategy, C = SystemClock, I = TerminalInput> {
    dashboard: Dashboard<S, C>,
    scheduler: Scheduler<I>,
}

// === impl Config ===

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: Self::INTERVAL,
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    const INTERVAL: Duration = Duration::from_secs(3);
}

// === impl App ===

impl App {
    /// initializes a new application, reading keys from the terminal.
    pub fn new(config: Config) -> Self {
        Self::with_input(config, TerminalInput)
    }

    /// runs the application on the alternate screen, until the user quits.
    pub fn tui(self) -> Result<(), Error> {
        let _screen = AltScreen::open()?;
        let mut window = Window::new(io::stdout());
        self.run(&mut window)
    }
}

impl<I: Input> App<Strategy, SystemClock, I> {
    /// initializes a new application, reading keys from `input`.
    pub fn with_input(config: Config, input: I) -> Self {
        let Config { interval, strategy } = config;
        info!(?strategy, "sampling strategy");

        Self::with(
            Dashboard::new(strategy, SystemClock),
            Scheduler::new(input, interval),
        )
    }
}

impl<S, C, I> App<S, C, I>
where
    S: Sampler,
    C: Clock,
    I: Input,
{
    pub fn with(dashboard: Dashboard<S, C>, scheduler: Scheduler<I>) -> Self {
        Self {
            dashboard,
            scheduler,
        }
    }

    /// runs the event loop, drawing onto `screen` after every event.
    ///
    /// returns the error that ended the session, if any.
    pub fn run(self, screen: &mut impl Screen) -> Result<(), Error> {
        let Self {
            mut dashboard,
            mut scheduler,
        } = self;

        let mut next = dashboard.init();
        screen.draw(&dashboard.view())?;

        loop {
            match next {
                FollowUp::Exit => break,
                FollowUp::Rearm => scheduler.arm(),
                FollowUp::Idle => {}
            }

            let event = scheduler.next()?;
            debug!(?event, "dispatching");
            next = match event {
                Event::Tick => dashboard.tick(),
                Event::Key(key) => dashboard.key(key),
                Event::Resize => FollowUp::Idle,
            };

            screen.draw(&dashboard.view())?;
        }

        info!(phase = ?dashboard.phase(), "dashboard stopped");
        dashboard.finish()
    }
}
