use {
    crate::{
        Error, format,
        source::{Clock, Sampler, Strategy, SystemClock},
    },
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    tracing::debug,
};


/// the dashboard's state machine.
///
/// a dashboard begins [`Phase::Uninitialized`], becomes [`Phase::Ready`] once it has rendered
/// its first status line, and ends [`Phase::Quitting`], either because the user asked it to or
/// because sampling failed.
pub struct Dashboard<S = Strategy, C = SystemClock> {
    /// the underlying source of system metrics.
    sampler: S,
    /// the clock being used to timestamp status lines.
    clock: C,
    state: DashboardState,
}

/// the state owned by a [`Dashboard`].
#[derive(Debug, Default)]
pub struct DashboardState {
    phase: Phase,
    /// the most recently rendered status line.
    line: String,
    /// the error that ended the session, if any.
    error: Option<Error>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Ready,
    Quitting,
}

/// what a transition asks of the scheduler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FollowUp {
    /// arm the timer for the next tick.
    Rearm,
    /// nothing to schedule.
    Idle,
    /// stop the event loop.
    Exit,
}

/// what the screen should show.
#[derive(Debug)]
pub enum View<'a> {
    /// nothing has been rendered yet.
    Blank,
    /// the most recent status line.
    Line(&'a str),
    /// the error that ended the session.
    Error(&'a Error),
}

// === impl Dashboard ===

impl<S, C> Dashboard<S, C>
where
    S: Sampler,
    C: Clock,
{
    /// creates a new, uninitialized [`Dashboard`].
    pub fn new(sampler: S, clock: C) -> Self {
        Self {
            sampler,
            clock,
            state: DashboardState::default(),
        }
    }

    /// takes the first sample.
    pub fn init(&mut self) -> FollowUp {
        match self.state.phase {
            Phase::Uninitialized => self.refresh(),
            Phase::Ready => FollowUp::Idle,
            Phase::Quitting => FollowUp::Exit,
        }
    }

    /// takes a fresh sample, replacing the status line.
    pub fn tick(&mut self) -> FollowUp {
        match self.state.phase {
            Phase::Ready => self.refresh(),
            Phase::Uninitialized => {
                debug!("ignoring tick before initialization");
                FollowUp::Idle
            }
            Phase::Quitting => FollowUp::Exit,
        }
    }

    /// handles a key press, quitting if it is `q`, `Esc`, or `Ctrl+C`.
    pub fn key(&mut self, key: KeyEvent) -> FollowUp {
        if key.kind != KeyEventKind::Press {
            return FollowUp::Idle;
        }

        if Self::is_quit(&key) {
            debug!(?key.code, "quit requested");
            self.quit()
        } else if self.state.phase == Phase::Quitting {
            FollowUp::Exit
        } else {
            FollowUp::Idle
        }
    }

    /// moves to [`Phase::Quitting`], without sampling.
    pub fn quit(&mut self) -> FollowUp {
        self.state.phase = Phase::Quitting;
        FollowUp::Exit
    }

    fn refresh(&mut self) -> FollowUp {
        let Self {
            sampler,
            clock,
            state,
        } = self;

        match sampler.sample(&*clock) {
            Ok(reading) => {
                let now = clock.now();
                state.line = format::render(&reading, &now);
                state.phase = Phase::Ready;
                debug!(line = %state.line, "refreshed");
                FollowUp::Rearm
            }
            Err(error) => {
                debug!(%error, "sampling failed");
                state.error = Some(error);
                state.phase = Phase::Quitting;
                FollowUp::Exit
            }
        }
    }

    fn is_quit(KeyEvent { code, modifiers, .. }: &KeyEvent) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }
}

impl<S, C> Dashboard<S, C> {
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// returns what the screen should show.
    pub fn view(&self) -> View<'_> {
        let DashboardState { phase, line, error } = &self.state;

        match (phase, error) {
            (Phase::Quitting, Some(error)) => View::Error(error),
            _ if line.is_empty() => View::Blank,
            _ => View::Line(line),
        }
    }

    /// consumes the dashboard, returning the error that ended it, if any.
    pub fn finish(self) -> Result<(), Error> {
        let Self { state, .. } = self;
        state.error.map_or(Ok(()), Err)
    }
}
