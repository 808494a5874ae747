//! A file-backed stats source: a JSON snapshot of precomputed league
//! baselines, team strength coefficients and completed matches, keyed by
//! league and season. Strengths arrive precomputed; this adapter neither
//! fetches remotely nor derives coefficients from the match history it
//! carries.

use std::fs::File;
use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::domain::{LeagueAverages, LeagueId, MatchRecord, TeamId, TeamStrength};
use crate::provider::{StatsError, StatsProvider};
use crate::season::Season;

/// The on-disk snapshot: one entry per league season.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub leagues: Vec<LeagueSeason>,
}

impl Dataset {
    /// Reads a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeagueSeason {
    pub league: LeagueId,
    pub season: Season,
    pub averages: LeagueAverages,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub strength: TeamStrength,
}

struct SeasonEntry {
    averages: LeagueAverages,
    matches: Vec<MatchRecord>,
    strengths: FxHashMap<TeamId, TeamStrength>,
}

/// A [`Dataset`] indexed for lookup, serving the [`StatsProvider`] contract.
pub struct SeasonDataset {
    seasons: FxHashMap<(LeagueId, Season), SeasonEntry>,
}

impl From<Dataset> for SeasonDataset {
    fn from(dataset: Dataset) -> Self {
        let mut seasons = FxHashMap::default();
        for entry in dataset.leagues {
            let strengths = entry
                .teams
                .into_iter()
                .map(|record| (record.team, record.strength))
                .collect();
            seasons.insert(
                (entry.league, entry.season),
                SeasonEntry {
                    averages: entry.averages,
                    matches: entry.matches,
                    strengths,
                },
            );
        }
        Self { seasons }
    }
}

impl SeasonDataset {
    fn entry(&self, league: LeagueId, season: Season) -> Result<&SeasonEntry, StatsError> {
        self.seasons
            .get(&(league, season))
            .ok_or(StatsError::SeasonUnavailable { league, season })
    }
}

impl StatsProvider for SeasonDataset {
    fn league_matches(
        &self,
        league: LeagueId,
        season: Season,
    ) -> Result<Vec<MatchRecord>, StatsError> {
        Ok(self.entry(league, season)?.matches.clone())
    }

    fn league_averages(
        &self,
        league: LeagueId,
        season: Season,
    ) -> Result<LeagueAverages, StatsError> {
        Ok(self.entry(league, season)?.averages)
    }

    fn team_strength(
        &self,
        season: Season,
        league: LeagueId,
        team: TeamId,
        _averages: &LeagueAverages,
        _team_matches: &[MatchRecord],
    ) -> Result<TeamStrength, StatsError> {
        self.entry(league, season)?
            .strengths
            .get(&team)
            .copied()
            .ok_or(StatsError::TeamUnknown {
                league,
                season,
                team,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Score;
    use assert_float_eq::*;

    fn sample_dataset() -> SeasonDataset {
        let dataset: Dataset = serde_json::from_str(
            r#"{
              "leagues": [
                {
                  "league": 2021,
                  "season": 2024,
                  "averages": { "avg_home_goals": 1.5, "avg_away_goals": 1.2 },
                  "teams": [
                    {
                      "team": 57,
                      "name": "Arsenal",
                      "strength": {
                        "attack_home": 1.2,
                        "defense_home": 1.0,
                        "attack_away": 1.0,
                        "defense_away": 1.0
                      }
                    },
                    {
                      "team": 66,
                      "strength": {
                        "attack_home": 1.0,
                        "defense_home": 1.0,
                        "attack_away": 0.8,
                        "defense_away": 0.9
                      }
                    }
                  ],
                  "matches": [
                    { "home": 57, "away": 66, "score": "3-1" },
                    { "home": 66, "away": 57, "score": "0-0" }
                  ]
                }
              ]
            }"#,
        )
        .unwrap();
        SeasonDataset::from(dataset)
    }

    #[test]
    fn serves_averages() {
        let averages = sample_dataset()
            .league_averages(LeagueId(2021), Season(2024))
            .unwrap();
        assert_float_absolute_eq!(1.5, averages.avg_home_goals);
        assert_float_absolute_eq!(1.2, averages.avg_away_goals);
    }

    #[test]
    fn serves_matches_with_parsed_scores() {
        let matches = sample_dataset()
            .league_matches(LeagueId(2021), Season(2024))
            .unwrap();
        assert_eq!(2, matches.len());
        assert_eq!(TeamId(57), matches[0].home);
        assert_eq!(Score::new(3, 1), matches[0].score);
        assert_eq!(Score::nil_all(), matches[1].score);
    }

    #[test]
    fn serves_team_strength() {
        let dataset = sample_dataset();
        let averages = LeagueAverages::new(1.5, 1.2);
        let strength = dataset
            .team_strength(Season(2024), LeagueId(2021), TeamId(57), &averages, &[])
            .unwrap();
        assert_float_absolute_eq!(1.2, strength.attack_home);
        assert_float_absolute_eq!(1.0, strength.defense_away);
    }

    #[test]
    fn unknown_season_is_unavailable() {
        let error = sample_dataset()
            .league_matches(LeagueId(2021), Season(2019))
            .unwrap_err();
        assert_eq!(
            "no dataset for league 2021 in season 2019",
            error.to_string()
        );
    }

    #[test]
    fn unknown_team_is_an_error() {
        let dataset = sample_dataset();
        let averages = LeagueAverages::new(1.5, 1.2);
        let error = dataset
            .team_strength(Season(2024), LeagueId(2021), TeamId(999), &averages, &[])
            .unwrap_err();
        assert_eq!(
            "no stats for team 999 in league 2021, season 2024",
            error.to_string()
        );
    }

    #[test]
    fn reads_snapshot_from_file() {
        let path =
            std::env::temp_dir().join(format!("scorecast-dataset-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{
              "leagues": [
                {
                  "league": 2021,
                  "season": 2024,
                  "averages": { "avg_home_goals": 1.5, "avg_away_goals": 1.2 }
                }
              ]
            }"#,
        )
        .unwrap();
        let dataset = Dataset::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(1, dataset.leagues.len());
        assert_eq!(LeagueId(2021), dataset.leagues[0].league);
        // teams and matches are optional in the snapshot
        assert!(dataset.leagues[0].teams.is_empty());
        assert!(dataset.leagues[0].matches.is_empty());
    }

    #[test]
    fn missing_snapshot_file_is_an_error() {
        let path = std::env::temp_dir().join("scorecast-no-such-dataset.json");
        assert!(Dataset::from_file(&path).is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let dataset = Dataset {
            leagues: vec![LeagueSeason {
                league: LeagueId(2021),
                season: Season(2024),
                averages: LeagueAverages::new(1.4, 1.1),
                teams: vec![TeamRecord {
                    team: TeamId(57),
                    name: None,
                    strength: TeamStrength::new(1.1, 0.9, 1.0, 1.0),
                }],
                matches: vec![MatchRecord {
                    home: TeamId(57),
                    away: TeamId(66),
                    score: Score::new(2, 1),
                }],
            }],
        };
        let json = serde_json::to_string(&dataset).unwrap();
        assert!(json.contains(r#""score":"2-1""#));
        assert!(!json.contains("name"));

        let reread: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(1, reread.leagues.len());
        assert_eq!(Score::new(2, 1), reread.leagues[0].matches[0].score);
    }
}
