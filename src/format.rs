//! status line formatting.

use {
    crate::snapshot::{Reading, Snapshot},
    chrono::Timelike,
};

/// renders a reading as a status line, as of `now`.
///
/// structured readings are formatted like the first line of `top(1)`:
///
/// ```text
/// top - 09:30:00 up 1:23,  5 users,  load average: 0.50, 1.25, 2.00
/// ```
///
/// opaque readings are passed through unmodified.
pub fn render(reading: &Reading, now: &impl Timelike) -> String {
    match reading {
        Reading::Structured(snapshot) => status_line(snapshot, now),
        Reading::Opaque(text) => text.clone(),
    }
}

fn status_line(
    Snapshot {
        uptime,
        load,
        sessions,
        sampled_at: _,
    }: &Snapshot,
    now: &impl Timelike,
) -> String {
    let (hh, mm, ss) = (now.hour(), now.minute(), now.second());
    format!("top - {hh:02}:{mm:02}:{ss:02} up {uptime},  {sessions} users,  load average: {load}")
}
