//! The scoreline grid: a joint probability distribution over home and away
//! goal counts, from which match outcomes and likely scores are gathered.

use crate::domain::{ExpectedGoals, MatchOutcome, Score};
use crate::factorial::Lookup;
use crate::poisson;

/// A dense, square grid of scoreline probabilities. Cell `(h, a)` holds the
/// probability of the match ending `h-a`, for goal counts up to a fixed
/// per-side bound. Built once per prediction and read-only thereafter.
pub struct ScoreGrid {
    probs: Vec<f64>,
    stride: usize,
}

impl ScoreGrid {
    /// Expands a pair of expected-goal rates into the joint grid, treating
    /// home and away goals as independent Poisson processes truncated at
    /// `max_goals` per side.
    pub fn from_poisson(lambdas: &ExpectedGoals, max_goals: u8) -> Self {
        let factorial = Lookup;
        let stride = max_goals as usize + 1;
        let mut probs = Vec::with_capacity(stride * stride);
        for home_goals in 0..=max_goals {
            let home_prob = poisson::pmf(home_goals, lambdas.home, &factorial);
            for away_goals in 0..=max_goals {
                let away_prob = poisson::pmf(away_goals, lambdas.away, &factorial);
                probs.push(home_prob * away_prob);
            }
        }
        Self { probs, stride }
    }

    /// The per-side goal bound this grid was built with.
    pub fn max_goals(&self) -> u8 {
        (self.stride - 1) as u8
    }

    /// Probability of an exact scoreline; zero for scores beyond the bound.
    pub fn probability(&self, score: &Score) -> f64 {
        let (home, away) = (score.home as usize, score.away as usize);
        if home < self.stride && away < self.stride {
            self.probs[home * self.stride + away]
        } else {
            0.0
        }
    }

    /// Total probability mass captured by the grid. Falls short of one by
    /// the mass of scorelines beyond the bound.
    pub fn mass(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// All cells in enumeration order: ascending home goals, then away.
    pub fn scores(&self) -> impl Iterator<Item = ProbableScore> + '_ {
        let stride = self.stride;
        self.probs
            .iter()
            .enumerate()
            .map(move |(index, &probability)| ProbableScore {
                score: Score::new((index / stride) as u8, (index % stride) as u8),
                probability,
            })
    }

    /// The `n` most probable scorelines, descending by probability. Equal
    /// probabilities rank in ascending home-then-away goal order, so the
    /// result is deterministic.
    pub fn ranked(&self, n: usize) -> Vec<ProbableScore> {
        let mut scores: Vec<_> = self.scores().collect();
        scores.sort_unstable_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.score.cmp(&b.score))
        });
        scores.truncate(n);
        scores
    }
}

/// A scoreline paired with its probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbableScore {
    pub score: Score,
    pub probability: f64,
}

impl MatchOutcome {
    /// Sums the grid cells covered by this outcome: the lower triangle for a
    /// home win, the upper for an away win, the diagonal for a draw.
    pub fn gather(&self, scoregrid: &ScoreGrid) -> f64 {
        let mut prob = 0.0;
        match self {
            MatchOutcome::HomeWin => {
                for home in 1..=scoregrid.max_goals() {
                    for away in 0..home {
                        prob += scoregrid.probability(&Score::new(home, away));
                    }
                }
            }
            MatchOutcome::AwayWin => {
                for away in 1..=scoregrid.max_goals() {
                    for home in 0..away {
                        prob += scoregrid.probability(&Score::new(home, away));
                    }
                }
            }
            MatchOutcome::Draw => {
                for goals in 0..=scoregrid.max_goals() {
                    prob += scoregrid.probability(&Score::new(goals, goals));
                }
            }
        }
        prob
    }
}
