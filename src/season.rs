//! Season arithmetic and resolution. A season is named by the calendar year
//! it starts in; the rollover is 1 August, so a July fixture still belongs to
//! the season that began the previous year.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const ROLLOVER_MONTH: u32 = 8;

/// A season, identified by its starting year.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    /// The season a given date falls in. January through July belong to the
    /// season that started the previous August.
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year() as u16;
        if date.month() < ROLLOVER_MONTH {
            Self(year - 1)
        } else {
            Self(year)
        }
    }

    /// The season immediately before this one.
    pub fn previous(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Yields the season considered current at the point of the call.
pub trait SeasonResolver {
    fn current_season(&self) -> Season;
}

/// Resolves the season from the system clock, in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SeasonResolver for SystemClock {
    fn current_season(&self) -> Season {
        Season::containing(Utc::now().date_naive())
    }
}

/// Pins the season, for overrides and tests.
#[derive(Clone, Copy, Debug)]
pub struct Fixed(pub Season);

impl SeasonResolver for Fixed {
    fn current_season(&self) -> Season {
        self.0
    }
}
