use {
    crate::error::ParseError,
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// time elapsed since boot, in seconds.
///
/// see `proc_uptime(5)`. the pseudo-file holds two numbers: the uptime of the system and the
/// amount of time spent idle. only the first is of interest here.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Uptime(f64);

// === impl Uptime ===

impl Uptime {
    const HOUR: f64 = 3600.0;
    const MINUTE: f64 = 60.0;

    /// returns an uptime of `secs` seconds.
    ///
    /// returns `None` if `secs` is negative or not finite.
    pub fn from_secs(secs: f64) -> Option<Self> {
        (secs.is_finite() && secs >= 0.0).then_some(Self(secs))
    }

    pub fn as_secs(&self) -> f64 {
        let Self(secs) = self;
        *secs
    }

    /// whole hours since boot.
    pub fn hours(&self) -> u64 {
        (self.as_secs() / Self::HOUR).floor() as u64
    }

    /// whole minutes past the last whole hour.
    pub fn minutes(&self) -> u64 {
        ((self.as_secs() % Self::HOUR) / Self::MINUTE).floor() as u64
    }
}

impl FromStr for Uptime {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s
            .split_whitespace()
            .next()
            .ok_or(ParseError::MissingFields {
                expected: 1,
                found: 0,
            })?;

        ParseError::number(token).map(Self)
    }
}

/// formats as `H:MM`.
impl Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}
