//! Scalar types shared across the model: league and team identifiers,
//! scorelines, match records, strength coefficients and league baselines.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::EnumIter;
use thiserror::Error;

/// League identifier, as assigned by the upstream data source.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub u32);

impl Display for LeagueId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team identifier, as assigned by the upstream data source.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Designates the home or away side of a fixture.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// The three mutually exclusive full-time results. Iteration order is the
/// conventional reporting order.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Display for MatchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::HomeWin => write!(f, "Home win"),
            MatchOutcome::Draw => write!(f, "Draw"),
            MatchOutcome::AwayWin => write!(f, "Away win"),
        }
    }
}

/// A full-time scoreline. The derived ordering (home goals, then away goals)
/// doubles as the tie-break for equally probable scores.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn nil_all() -> Self {
        Self::new(0, 0)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

impl FromStr for Score {
    type Err = ParseScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, '-');
        let (home, away) = match (parts.next(), parts.next()) {
            (Some(home), Some(away)) => (home, away),
            _ => return Err(ParseScoreError(s.into())),
        };
        let home = home.trim().parse().map_err(|_| ParseScoreError(s.into()))?;
        let away = away.trim().parse().map_err(|_| ParseScoreError(s.into()))?;
        Ok(Self::new(home, away))
    }
}

#[derive(Debug, Error)]
#[error("invalid scoreline {0:?}, expected \"home-away\"")]
pub struct ParseScoreError(String);

// Scorelines travel as "home-away" strings, matching their display form.
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A completed fixture in a league season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home: TeamId,
    pub away: TeamId,
    pub score: Score,
}

impl MatchRecord {
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.home == team {
            Some(Side::Home)
        } else if self.away == team {
            Some(Side::Away)
        } else {
            None
        }
    }
}

/// Season-to-date attack and defence strength coefficients for one team,
/// expressed as multiplicative modifiers of the league-average scoring rates.
/// A coefficient of 1 is league-typical; values above 1 scale goals up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStrength {
    pub attack_home: f64,
    pub defense_home: f64,
    pub attack_away: f64,
    pub defense_away: f64,
}

impl TeamStrength {
    pub fn new(attack_home: f64, defense_home: f64, attack_away: f64, defense_away: f64) -> Self {
        Self {
            attack_home,
            defense_home,
            attack_away,
            defense_away,
        }
    }

    /// The sentinel substituted when a team's stats cannot be obtained. Zero
    /// coefficients drive that side's expected-goal rate to zero, degrading
    /// the prediction rather than failing it. A partially populated record is
    /// never produced.
    pub fn zeroed() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// League-wide mean goals scored by home and away sides over one season.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeagueAverages {
    pub avg_home_goals: f64,
    pub avg_away_goals: f64,
}

impl LeagueAverages {
    pub fn new(avg_home_goals: f64, avg_away_goals: f64) -> Self {
        Self {
            avg_home_goals,
            avg_away_goals,
        }
    }

    /// Both averages at exactly zero signal a season without scored matches;
    /// such a season cannot seed the model and triggers fallback upstream.
    pub fn usable(&self) -> bool {
        self.avg_home_goals != 0.0 || self.avg_away_goals != 0.0
    }
}

/// The Poisson rate pair for a simulated match: mean goals expected of the
/// home and away sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpectedGoals {
    pub home: f64,
    pub away: f64,
}

impl ExpectedGoals {
    /// Chains each side's attack against the opponent's defence and the
    /// league baseline for that venue. The home rate uses home-attack versus
    /// away-defence; the away rate mirrors it.
    pub fn from_strengths(
        home: &TeamStrength,
        away: &TeamStrength,
        averages: &LeagueAverages,
    ) -> Self {
        Self {
            home: home.attack_home * away.defense_away * averages.avg_home_goals,
            away: away.attack_away * home.defense_home * averages.avg_away_goals,
        }
    }
}
