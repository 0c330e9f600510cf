//! Server-time arithmetic.

use chrono::{DateTime, Timelike, Utc};

/// Game server clock with an explicit UTC offset.
///
/// The Legacy server runs on EST (UTC-5). The offset is configuration, not a
/// free-floating constant, so tests and a relocated server both work.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    server_utc_offset_hours: i32,
}

impl GameClock {
    pub fn new(server_utc_offset_hours: i32) -> Self {
        Self {
            server_utc_offset_hours,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Seconds until the next top-list vote reset.
    ///
    /// The vote timer resets every 12 hours at local server midnight/noon
    /// (0500 and 1700 UTC for the production offset).
    pub fn seconds_until_vote_reset(&self, now: DateTime<Utc>) -> i64 {
        let server_hour = (i64::from(now.hour()) + i64::from(self.server_utc_offset_hours))
            .rem_euclid(12);
        let hours_until_reset = 12 - server_hour;
        hours_until_reset * 3600 - i64::from(now.minute()) * 60 - i64::from(now.second())
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(-5)
    }
}
