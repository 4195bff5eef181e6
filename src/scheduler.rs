use {
    crossterm::event::{self as term, KeyEvent},
    std::{
        collections::VecDeque,
        io,
        time::{Duration, Instant},
    },
    tracing::trace,
};

pub use self::input::*;

/// an event dispatched by the [`Scheduler`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// the timer fired.
    Tick,
    /// a key was pressed, released, or repeated.
    Key(KeyEvent),
    /// the terminal was resized.
    Resize,
}

/// serializes timer ticks and terminal input into a single stream of events.
///
/// at most one tick is ever pending. re-arming the timer replaces the pending tick, so ticks are
/// never queued behind a slow consumer.
pub struct Scheduler<I = TerminalInput> {
    input: I,
    interval: Duration,
    /// when the next tick is due, if the timer is armed.
    deadline: Option<Instant>,
}

// === impl Scheduler ===

impl<I: Input> Scheduler<I> {
    pub fn new(input: I, interval: Duration) -> Self {
        Self {
            input,
            interval,
            deadline: None,
        }
    }

    /// arms the timer to fire one interval from now.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.interval);
    }

    /// returns true if a tick is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// blocks until the timer fires or an input event arrives.
    ///
    /// if the timer is not armed, this waits for input alone.
    pub fn next(&mut self) -> io::Result<Event> {
        let Self {
            input, deadline, ..
        } = self;

        loop {
            let timeout = deadline.map(|at| at.saturating_duration_since(Instant::now()));
            if timeout.is_some_and(|t| t.is_zero()) {
                deadline.take();
                return Ok(Event::Tick);
            }

            match input.next(timeout)? {
                Some(event) => match Self::translate(event) {
                    Some(event) => return Ok(event),
                    None => continue,
                },
                None if deadline.is_some() => {
                    deadline.take();
                    return Ok(Event::Tick);
                }
                None => continue,
            }
        }
    }

    fn translate(event: term::Event) -> Option<Event> {
        match event {
            term::Event::Key(key) => Some(Event::Key(key)),
            term::Event::Resize(..) => Some(Event::Resize),
            other => {
                trace!(?other, "ignoring terminal event");
                None
            }
        }
    }
}

/// abstracts over sources of terminal input.
mod input {
    use super::*;

    /// a source of terminal events.
    pub trait Input {
        /// waits up to `timeout` for an event, or forever if `timeout` is `None`.
        ///
        /// returns `Ok(None)` if the timeout elapsed first.
        fn next(&mut self, timeout: Option<Duration>) -> io::Result<Option<term::Event>>;
    }

    /// input read from the controlling terminal.
    #[derive(Default)]
    pub struct TerminalInput;

    /// a mock input, returning queued events in order.
    ///
    /// `None` entries stand in for an elapsed timeout.
    #[derive(Default)]
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockInput {
        events: VecDeque<Option<term::Event>>,
    }

    // === impl TerminalInput ===

    impl Input for TerminalInput {
        fn next(&mut self, timeout: Option<Duration>) -> io::Result<Option<term::Event>> {
            match timeout {
                Some(timeout) if !term::poll(timeout)? => Ok(None),
                _ => term::read().map(Some),
            }
        }
    }

    // === impl MockInput ===

    #[allow(dead_code, reason = "this is a testing utility.")]
    impl MockInput {
        pub fn new(events: impl IntoIterator<Item = Option<term::Event>>) -> Self {
            Self {
                events: events.into_iter().collect(),
            }
        }
    }

    impl Input for MockInput {
        fn next(&mut self, _: Option<Duration>) -> io::Result<Option<term::Event>> {
            let Self { events } = self;

            events
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more input"))
        }
    }
}
