//! terminal lifecycle and drawing.

use {
    crate::dashboard::View,
    crossterm::{
        ExecutableCommand, QueueableCommand, cursor,
        style::{self, Stylize},
        terminal,
    },
    std::{
        io::{self, Write},
        panic,
    },
    tracing::trace,
};

/// a surface the dashboard can be drawn upon.
pub trait Screen {
    fn draw(&mut self, view: &View<'_>) -> io::Result<()>;
}

/// draws the dashboard onto a terminal.
pub struct Window<W = io::Stdout> {
    out: W,
}

/// holds the controlling terminal in raw mode, on the alternate screen.
///
/// the terminal is restored when this is dropped, or if the program panics.
pub struct AltScreen {
    _private: (),
}

/// a mock screen, recording each frame as text.
#[derive(Debug, Default)]
#[allow(dead_code, reason = "this is a testing utility.")]
pub struct MockScreen {
    pub frames: Vec<String>,
}

// === impl Window ===

impl<W: Write> Window<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Screen for Window<W> {
    fn draw(&mut self, view: &View<'_>) -> io::Result<()> {
        let Self { out } = self;

        out.queue(terminal::Clear(terminal::ClearType::All))?;

        match view {
            View::Blank => {}
            View::Line(text) => {
                // raw mode does not return the carriage on a newline.
                for (row, line) in text.lines().enumerate() {
                    out.queue(cursor::MoveTo(0, row as u16))?
                        .queue(style::Print(line))?;
                }
            }
            View::Error(error) => {
                out.queue(cursor::MoveTo(0, 0))?
                    .queue(style::PrintStyledContent(
                        format!("encountered error: {error}").red(),
                    ))?;
            }
        }

        trace!(?view, "drew frame");
        out.flush()
    }
}

// === impl AltScreen ===

impl AltScreen {
    /// enters raw mode and the alternate screen.
    pub fn open() -> io::Result<Self> {
        Self::install_panic_hook();
        terminal::enable_raw_mode()?;

        let mut out = io::stdout();
        if let Err(error) = out
            .execute(terminal::EnterAlternateScreen)
            .and_then(|out| out.execute(cursor::Hide))
        {
            let _ = Self::restore();
            return Err(error);
        }

        Ok(Self { _private: () })
    }

    /// leaves the alternate screen and raw mode.
    ///
    /// this is idempotent, and safe to call if the terminal was never set up.
    fn restore() -> io::Result<()> {
        let mut out = io::stdout();
        out.execute(cursor::Show)?
            .execute(terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// restores the terminal before the default panic hook prints its message.
    fn install_panic_hook() {
        let hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = Self::restore();
            hook(info);
        }));
    }
}

impl Drop for AltScreen {
    fn drop(&mut self) {
        let _ = Self::restore();
    }
}

// === impl MockScreen ===

impl Screen for MockScreen {
    fn draw(&mut self, view: &View<'_>) -> io::Result<()> {
        let frame = match view {
            View::Blank => String::new(),
            View::Line(text) => text.to_string(),
            View::Error(error) => format!("encountered error: {error}"),
        };
        self.frames.push(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::Error,
        std::io::{Cursor, ErrorKind},
    };

    /// a window drawing into a buffer, rather than the terminal.
    fn buffer() -> Window<Cursor<Vec<u8>>> {
        Window::new(Cursor::new(Vec::new()))
    }

    fn contents(window: &Window<Cursor<Vec<u8>>>) -> String {
        String::from_utf8_lossy(window.out.get_ref()).into_owned()
    }

    #[test]
    fn draws_line() {
        let mut window = buffer();
        window.draw(&View::Line("top - 09:30:00 up 1:23")).unwrap();
        assert!(contents(&window).contains("top - 09:30:00 up 1:23"));
    }

    #[test]
    fn draws_each_line_of_opaque_text() {
        let mut window = buffer();
        window.draw(&View::Line("first\nsecond\n")).unwrap();
        let contents = contents(&window);
        assert!(contents.contains("first"));
        assert!(contents.contains("second"));
        assert!(!contents.contains('\n'));
    }

    #[test]
    fn draws_error() {
        let error = Error::unavailable("/proc/uptime", io::Error::from(ErrorKind::NotFound));
        let mut window = buffer();
        window.draw(&View::Error(&error)).unwrap();
        assert!(contents(&window).contains("encountered error: /proc/uptime is unavailable"));
    }

    #[test]
    fn mock_records_frames() {
        let mut screen = MockScreen::default();
        screen.draw(&View::Blank).unwrap();
        screen.draw(&View::Line("hello")).unwrap();
        assert_eq!(screen.frames, ["", "hello"]);
    }
}
