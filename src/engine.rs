//! Drives an end-to-end prediction: resolves the season, walks the fallback
//! plan until a season with usable data is found, acquires per-team strengths
//! with degradation, and hands the inputs to the predictor core.

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{LeagueAverages, LeagueId, MatchRecord, Side, TeamId, TeamStrength};
use crate::fallback::SeasonPlan;
use crate::predictor::{Prediction, Predictor};
use crate::provider::StatsProvider;
use crate::season::{Season, SeasonResolver};

#[derive(Debug, Error)]
pub enum PredictionError {
    /// Neither the resolved season nor its predecessor had usable data.
    #[error(
        "no match data found for league {league} in season {primary} or {fallback} to calculate averages"
    )]
    NoData {
        league: LeagueId,
        primary: Season,
        fallback: Season,
    },
}

/// A season resolver, a stats provider and the predictor core, wired
/// together.
pub struct Engine<R, P> {
    resolver: R,
    provider: P,
    predictor: Predictor,
}

impl<R: SeasonResolver, P: StatsProvider> Engine<R, P> {
    pub fn new(resolver: R, provider: P, predictor: Predictor) -> Self {
        Self {
            resolver,
            provider,
            predictor,
        }
    }

    /// Predicts the outcome of `home` hosting `away` in `league`, sourcing
    /// stats from the most recent season with usable data.
    ///
    /// A provider failure for one team degrades that team to the zeroed
    /// sentinel rather than failing the prediction; only the absence of
    /// usable league data for both candidate seasons is an error.
    pub fn predict(
        &self,
        league: LeagueId,
        home: TeamId,
        away: TeamId,
    ) -> Result<Prediction, PredictionError> {
        let (season, averages, matches) = self.usable_season(league)?;

        let home_matches = filter_matches(home, &matches);
        let away_matches = filter_matches(away, &matches);

        let home_strength =
            self.strength_or_zeroed(season, league, home, Side::Home, &averages, &home_matches);
        let away_strength =
            self.strength_or_zeroed(season, league, away, Side::Away, &averages, &away_matches);

        Ok(self
            .predictor
            .predict(&home_strength, &away_strength, &averages))
    }

    /// Walks the fallback plan until a season with usable averages is found.
    fn usable_season(
        &self,
        league: LeagueId,
    ) -> Result<(Season, LeagueAverages, Vec<MatchRecord>), PredictionError> {
        let mut plan = SeasonPlan::starting_at(self.resolver.current_season());
        while let Some(season) = plan.season() {
            if let Some((averages, matches)) = self.try_season(league, season) {
                return Ok((season, averages, matches));
            }
            plan = plan.advance();
            if let SeasonPlan::Fallback { primary, season } = plan {
                info!(%league, %primary, fallback = %season, "season fallback triggered");
            }
        }
        let SeasonPlan::Exhausted { primary, fallback } = plan else {
            unreachable!("a plan without a season is exhausted")
        };
        Err(PredictionError::NoData {
            league,
            primary,
            fallback,
        })
    }

    /// One season attempt: the single match fetch plus the league averages.
    /// A provider failure on either, or zeroed averages, makes the season
    /// unusable.
    fn try_season(
        &self,
        league: LeagueId,
        season: Season,
    ) -> Option<(LeagueAverages, Vec<MatchRecord>)> {
        let matches = match self.provider.league_matches(league, season) {
            Ok(matches) => matches,
            Err(error) => {
                warn!(%league, %season, %error, "season unusable: match fetch failed");
                return None;
            }
        };
        let averages = match self.provider.league_averages(league, season) {
            Ok(averages) => averages,
            Err(error) => {
                warn!(%league, %season, %error, "season unusable: no league averages");
                return None;
            }
        };
        if !averages.usable() {
            warn!(%league, %season, "season unusable: zero scoring averages");
            return None;
        }
        Some((averages, matches))
    }

    fn strength_or_zeroed(
        &self,
        season: Season,
        league: LeagueId,
        team: TeamId,
        side: Side,
        averages: &LeagueAverages,
        team_matches: &[MatchRecord],
    ) -> TeamStrength {
        match self
            .provider
            .team_strength(season, league, team, averages, team_matches)
        {
            Ok(strength) => strength,
            Err(error) => {
                warn!(%league, %season, %team, ?side, %error, "team stats degraded to zeroed sentinel");
                TeamStrength::zeroed()
            }
        }
    }
}

fn filter_matches(team: TeamId, matches: &[MatchRecord]) -> Vec<MatchRecord> {
    matches
        .iter()
        .filter(|record| record.involves(team))
        .copied()
        .collect()
}
