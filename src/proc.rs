//! kernel pseudo-file facilities.
//!
//! this file provides tools to interact with `/proc/uptime`, `/proc/loadavg`, and the systemd
//! session directory.

use {
    crate::{
        Error,
        snapshot::{LoadAverage, Reading, Snapshot, Uptime},
        source::{Clock, Sampler},
    },
    std::{
        fs, io,
        path::{Path, PathBuf},
        str::FromStr,
    },
    tracing::trace,
    walkdir::WalkDir,
};

#[cfg(test)]
mod tests;

/// metrics backed by procfs and the systemd session directory.
#[derive(Clone, Debug)]
pub struct ProcFs {
    /// the uptime pseudo-file.
    pub uptime: PathBuf,
    /// the load average pseudo-file.
    pub loadavg: PathBuf,
    /// the directory tree holding one regular file per login session.
    pub sessions: PathBuf,
}

// === impl ProcFs ===

impl Default for ProcFs {
    fn default() -> Self {
        Self {
            uptime: PathBuf::from(Self::UPTIME),
            loadavg: PathBuf::from(Self::LOADAVG),
            sessions: PathBuf::from(Self::SESSIONS),
        }
    }
}

impl Sampler for ProcFs {
    fn sample(&self, clock: &impl Clock) -> Result<Reading, Error> {
        let Self {
            uptime,
            loadavg,
            sessions,
        } = self;

        let sampled_at = clock.now();
        let uptime = Self::parse::<Uptime>(uptime)?;
        let load = Self::parse::<LoadAverage>(loadavg)?;
        let sessions = Self::count_sessions(sessions)?;
        trace!(?uptime, ?load, %sessions, "sampled procfs");

        Ok(Reading::Structured(Snapshot {
            uptime,
            load,
            sessions,
            sampled_at,
        }))
    }
}

impl ProcFs {
    const UPTIME: &str = "/proc/uptime";
    const LOADAVG: &str = "/proc/loadavg";
    const SESSIONS: &str = "/run/systemd/sessions";

    /// reads the file at `path` and parses its contents.
    fn parse<T>(path: &Path) -> Result<T, Error>
    where
        T: FromStr<Err = crate::ParseError>,
    {
        let origin = path.display();
        fs::read_to_string(path)
            .map_err(|error| Error::unavailable(&origin, error))?
            .parse::<T>()
            .map_err(|error| Error::malformed(&origin, error))
    }

    /// counts the regular files anywhere beneath `root`.
    ///
    /// symbolic links are neither followed nor counted. any error while walking the tree fails
    /// the whole count.
    pub fn count_sessions(root: &Path) -> Result<usize, Error> {
        let unavailable = |error: walkdir::Error| {
            let origin = error.path().unwrap_or(root).display().to_string();
            Error::unavailable(origin, io::Error::from(error))
        };

        WalkDir::new(root)
            .into_iter()
            .map(|entry| entry.map_err(unavailable))
            .try_fold(0, |count, entry| {
                let is_file = entry?.file_type().is_file();
                Ok(count + usize::from(is_file))
            })
    }
}
