//! The season retry policy: attempt the resolved season, fall back once to
//! the season before it, then give up. An explicit state machine keeps the
//! policy testable apart from the engine that drives it.

use crate::season::Season;

/// Progress of the two-attempt season search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonPlan {
    /// Attempting the season the resolver deemed current.
    Primary(Season),
    /// The primary season had no usable data; attempting its predecessor.
    Fallback { primary: Season, season: Season },
    /// Both seasons were unusable. Terminal; advancing has no further effect.
    Exhausted { primary: Season, fallback: Season },
}

impl SeasonPlan {
    pub fn starting_at(season: Season) -> Self {
        SeasonPlan::Primary(season)
    }

    /// The season to attempt next, or `None` once the plan is exhausted.
    pub fn season(&self) -> Option<Season> {
        match self {
            SeasonPlan::Primary(season) => Some(*season),
            SeasonPlan::Fallback { season, .. } => Some(*season),
            SeasonPlan::Exhausted { .. } => None,
        }
    }

    /// Transitions after an unusable season.
    pub fn advance(self) -> Self {
        match self {
            SeasonPlan::Primary(primary) => SeasonPlan::Fallback {
                primary,
                season: primary.previous(),
            },
            SeasonPlan::Fallback { primary, season } => SeasonPlan::Exhausted {
                primary,
                fallback: season,
            },
            exhausted @ SeasonPlan::Exhausted { .. } => exhausted,
        }
    }
}
