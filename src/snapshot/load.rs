use {
    crate::error::ParseError,
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// the system load averages.
///
/// see `proc_loadavg(5)`. the first three fields are the number of jobs in the run queue or
/// waiting for disk i/o, averaged over 1, 5, and 15 minutes. the remaining fields describe
/// scheduling entities and the most recent pid, and are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

// === impl LoadAverage ===

impl LoadAverage {
    const FIELDS: usize = 3;
}

impl FromStr for LoadAverage {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split_whitespace()
            .take(Self::FIELDS)
            .collect::<Vec<_>>();

        let [one, five, fifteen] = tokens.as_slice() else {
            return Err(ParseError::MissingFields {
                expected: Self::FIELDS,
                found: tokens.len(),
            });
        };

        Ok(Self {
            one: ParseError::number(one)?,
            five: ParseError::number(five)?,
            fifteen: ParseError::number(fifteen)?,
        })
    }
}

/// formats as `L1, L5, L15`, each with two decimal places.
impl Display for LoadAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { one, five, fifteen } = self;
        write!(f, "{one:.2}, {five:.2}, {fifteen:.2}")
    }
}
