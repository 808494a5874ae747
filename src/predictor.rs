//! The match outcome predictor: expands a pair of expected-goal rates into a
//! scoreline distribution, then aggregates it into win/draw/loss
//! probabilities and a ranked list of likely scores.

use std::error::Error;

use anyhow::anyhow;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{ExpectedGoals, LeagueAverages, MatchOutcome, Score, TeamStrength};
use crate::factorial;
use crate::probs::SliceExt;
use crate::scoregrid::ScoreGrid;

/// Default per-side goal bound: an 8x8, 64-cell scoreline grid.
pub const DEFAULT_MAX_GOALS: u8 = 7;

const RANKED_SCORES: usize = 5;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(#[from] pub Box<dyn Error>);

impl From<anyhow::Error> for ValidationError {
    fn from(value: anyhow::Error) -> Self {
        ValidationError(value.into())
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub max_goals: u8,
}
impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_goals == 0 {
            return Err(anyhow!("max goals cannot be zero").into());
        }
        if self.max_goals > factorial::MAX_SUPPORTED {
            return Err(anyhow!(
                "max goals cannot exceed {}",
                factorial::MAX_SUPPORTED
            )
            .into());
        }
        Ok(())
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            max_goals: DEFAULT_MAX_GOALS,
        }
    }
}

/// A pure, stateless computation over its inputs; one instance may serve any
/// number of concurrent callers.
#[derive(Debug)]
pub struct Predictor {
    config: Config,
}

impl TryFrom<Config> for Predictor {
    type Error = ValidationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Predictor {
    /// Predicts the outcome of a match between sides with the given strength
    /// coefficients, against the league's scoring baselines.
    ///
    /// Never fails on numeric input: a zeroed strength record drives the
    /// corresponding rate to zero and the side is modelled as scoring no
    /// goals with certainty.
    pub fn predict(
        &self,
        home: &TeamStrength,
        away: &TeamStrength,
        averages: &LeagueAverages,
    ) -> Prediction {
        let lambdas = ExpectedGoals::from_strengths(home, away, averages);
        let scoregrid = ScoreGrid::from_poisson(&lambdas, self.config.max_goals);

        let mut outcomes = [
            MatchOutcome::HomeWin.gather(&scoregrid),
            MatchOutcome::Draw.gather(&scoregrid),
            MatchOutcome::AwayWin.gather(&scoregrid),
        ];
        // The grid truncates an infinite-support distribution; the shortfall
        // is redistributed across outcomes in proportion. A zero total cannot
        // arise while the 0-0 cell exists, but guard rather than divide by it.
        if outcomes.sum() > 0.0 {
            outcomes.normalise(1.0);
        }
        let [home_win, draw, away_win] = outcomes;

        debug!(
            lambda_home = lambdas.home,
            lambda_away = lambdas.away,
            home_win,
            draw,
            away_win,
            grid_mass = scoregrid.mass(),
            "scoreline grid expanded"
        );

        let top_five_scores = scoregrid
            .ranked(RANKED_SCORES)
            .iter()
            .map(|ranked| ScoreProbability {
                score: ranked.score,
                probability: as_percentage(ranked.probability),
            })
            .collect();

        Prediction {
            home_win_probability: as_percentage(home_win),
            away_win_probability: as_percentage(away_win),
            draw_probability: as_percentage(draw),
            predicted_goals_home: round2(lambdas.home),
            predicted_goals_away: round2(lambdas.away),
            top_five_scores,
            league_averages: *averages,
            home_team_stats: *home,
            away_team_stats: *away,
            home_expected_goals: lambdas.home,
            away_expected_goals: lambdas.away,
        }
    }
}

/// One entry of the ranked scoreline list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreProbability {
    pub score: Score,
    pub probability: f64,
}

/// The complete prediction record handed back to callers. Probabilities are
/// percentages rounded to two decimals; the inputs are echoed verbatim for
/// traceability, alongside the raw unrounded rates.
#[derive(Clone, Debug, Serialize)]
pub struct Prediction {
    pub home_win_probability: f64,
    pub away_win_probability: f64,
    pub draw_probability: f64,
    pub predicted_goals_home: f64,
    pub predicted_goals_away: f64,
    pub top_five_scores: Vec<ScoreProbability>,
    pub league_averages: LeagueAverages,
    pub home_team_stats: TeamStrength,
    pub away_team_stats: TeamStrength,
    pub home_expected_goals: f64,
    pub away_expected_goals: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn as_percentage(probability: f64) -> f64 {
    round2(probability * 100.0)
}
