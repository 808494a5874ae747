//! Testing helpers.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::domain::{LeagueAverages, LeagueId, MatchRecord, TeamId, TeamStrength};
use crate::provider::{StatsError, StatsProvider};
use crate::season::Season;

pub(crate) const LEAGUE: LeagueId = LeagueId(2021);
pub(crate) const HOME: TeamId = TeamId(57);
pub(crate) const AWAY: TeamId = TeamId(66);

pub(crate) fn scenario_averages() -> LeagueAverages {
    LeagueAverages::new(1.5, 1.2)
}

pub(crate) fn scenario_home_strength() -> TeamStrength {
    TeamStrength::new(1.2, 1.0, 1.0, 1.0)
}

pub(crate) fn scenario_away_strength() -> TeamStrength {
    TeamStrength::new(1.0, 1.0, 0.8, 0.9)
}

/// One season's scripted provider responses.
pub(crate) struct StubSeason {
    pub averages: LeagueAverages,
    pub matches: Vec<MatchRecord>,
    pub strengths: FxHashMap<TeamId, TeamStrength>,
}

impl StubSeason {
    pub fn with_scenario_strengths(averages: LeagueAverages) -> Self {
        let mut strengths = FxHashMap::default();
        strengths.insert(HOME, scenario_home_strength());
        strengths.insert(AWAY, scenario_away_strength());
        Self {
            averages,
            matches: vec![],
            strengths,
        }
    }
}

/// A scripted stats provider. Records the seasons each accessor was called
/// with, so tests can assert the fallback walk and the one-fetch-per-season
/// bound.
#[derive(Default)]
pub(crate) struct StubProvider {
    pub seasons: FxHashMap<(LeagueId, Season), StubSeason>,
    pub match_calls: RefCell<Vec<Season>>,
    pub averages_calls: RefCell<Vec<Season>>,
    pub fail_team: Option<TeamId>,
}

impl StubProvider {
    pub fn with_season(league: LeagueId, season: Season, scripted: StubSeason) -> Self {
        let mut provider = Self::default();
        provider.seasons.insert((league, season), scripted);
        provider
    }

    pub fn and_season(mut self, league: LeagueId, season: Season, scripted: StubSeason) -> Self {
        self.seasons.insert((league, season), scripted);
        self
    }
}

impl StatsProvider for StubProvider {
    fn league_matches(
        &self,
        league: LeagueId,
        season: Season,
    ) -> Result<Vec<MatchRecord>, StatsError> {
        self.match_calls.borrow_mut().push(season);
        self.seasons
            .get(&(league, season))
            .map(|scripted| scripted.matches.clone())
            .ok_or(StatsError::SeasonUnavailable { league, season })
    }

    fn league_averages(
        &self,
        league: LeagueId,
        season: Season,
    ) -> Result<LeagueAverages, StatsError> {
        self.averages_calls.borrow_mut().push(season);
        self.seasons
            .get(&(league, season))
            .map(|scripted| scripted.averages)
            .ok_or(StatsError::SeasonUnavailable { league, season })
    }

    fn team_strength(
        &self,
        season: Season,
        league: LeagueId,
        team: TeamId,
        _averages: &LeagueAverages,
        _team_matches: &[MatchRecord],
    ) -> Result<TeamStrength, StatsError> {
        if self.fail_team == Some(team) {
            return Err(StatsError::TeamUnknown {
                league,
                season,
                team,
            });
        }
        self.seasons
            .get(&(league, season))
            .and_then(|scripted| scripted.strengths.get(&team).copied())
            .ok_or(StatsError::TeamUnknown {
                league,
                season,
                team,
            })
    }
}
