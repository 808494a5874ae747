//! The team statistics boundary. Implementations supply season-wide match
//! sets, league scoring baselines and per-team strength coefficients;
//! whatever sits behind the trait (remote retrieval, coefficient derivation,
//! caching) is outside this crate.

use thiserror::Error;

use crate::domain::{LeagueAverages, LeagueId, MatchRecord, TeamId, TeamStrength};
use crate::season::Season;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("no dataset for league {league} in season {season}")]
    SeasonUnavailable { league: LeagueId, season: Season },

    #[error("no stats for team {team} in league {league}, season {season}")]
    TeamUnknown {
        league: LeagueId,
        season: Season,
        team: TeamId,
    },

    #[error("malformed source data: {0}")]
    Malformed(String),
}

/// Season statistics for a league and the teams in it.
///
/// `team_strength` must yield either a complete record or an error; a
/// partially populated record is unrepresentable. The engine converts errors
/// into the zeroed sentinel ([`TeamStrength::zeroed`]), so one team's failure
/// degrades a prediction instead of aborting it.
pub trait StatsProvider {
    /// The season-wide set of completed matches for a league. Callers are
    /// expected to fetch this once per attempted season and filter per team
    /// in memory, bounding the call volume at one per season regardless of
    /// the number of teams involved.
    fn league_matches(
        &self,
        league: LeagueId,
        season: Season,
    ) -> Result<Vec<MatchRecord>, StatsError>;

    /// League-wide mean home/away goals for a season. Both averages at zero
    /// denote a season without usable matches.
    fn league_averages(
        &self,
        league: LeagueId,
        season: Season,
    ) -> Result<LeagueAverages, StatsError>;

    /// Attack/defence strength coefficients for one team, given the league
    /// baselines and the team's pre-filtered slice of the season-wide
    /// match set.
    fn team_strength(
        &self,
        season: Season,
        league: LeagueId,
        team: TeamId,
        averages: &LeagueAverages,
        team_matches: &[MatchRecord],
    ) -> Result<TeamStrength, StatsError>;
}
