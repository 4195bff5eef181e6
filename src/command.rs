use {
    crate::{
        Error,
        snapshot::Reading,
        source::{Clock, Sampler},
    },
    std::{ffi::OsString, io, process::Command},
    tracing::trace,
};

/// metrics captured verbatim from an external status command, such as `uptime(1)`.
#[derive(Clone, Debug)]
pub struct StatusCommand {
    program: OsString,
}

// === impl StatusCommand ===

impl Default for StatusCommand {
    fn default() -> Self {
        Self::new(Self::UPTIME)
    }
}

impl Sampler for StatusCommand {
    fn sample(&self, _: &impl Clock) -> Result<Reading, Error> {
        let Self { program } = self;
        let origin = || format!("`{}`", program.to_string_lossy());

        let output = Command::new(program)
            .output()
            .map_err(|error| Error::unavailable(origin(), error))?;

        if !output.status.success() {
            let error = io::Error::other(format!("exited with {}", output.status));
            return Err(Error::unavailable(origin(), error));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        trace!(%text, "captured status command");

        Ok(Reading::Opaque(text))
    }
}

impl StatusCommand {
    const UPTIME: &str = "uptime";

    /// runs `program`, with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> std::borrow::Cow<'_, str> {
        self.program.to_string_lossy()
    }
}
