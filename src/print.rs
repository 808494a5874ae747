//! Console rendering of prediction results.

use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::style::HAlign::Left;
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::domain::MatchOutcome;
use crate::predictor::Prediction;

/// Win/draw/loss probabilities as a two-column table.
pub fn tabulate_outcomes(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Outcome".into(), "Prob.".into()],
        ));
    for outcome in MatchOutcome::iter() {
        let probability = match outcome {
            MatchOutcome::HomeWin => prediction.home_win_probability,
            MatchOutcome::Draw => prediction.draw_probability,
            MatchOutcome::AwayWin => prediction.away_win_probability,
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome.to_string().into(),
                format!("{probability:.2}%").into(),
            ],
        ));
    }
    table
}

/// The ranked most-likely scorelines.
pub fn tabulate_top_scores(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Score".into(), "Prob.".into()],
        ));
    for entry in &prediction.top_five_scores {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                entry.score.to_string().into(),
                format!("{:.2}%", entry.probability).into(),
            ],
        ));
    }
    table
}

/// Expected goals next to the league baselines they were derived from.
pub fn tabulate_expectations(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["".into(), "Home".into(), "Away".into()],
        ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Expected goals".into(),
            format!("{:.2}", prediction.predicted_goals_home).into(),
            format!("{:.2}", prediction.predicted_goals_away).into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "League average".into(),
            format!("{:.2}", prediction.league_averages.avg_home_goals).into(),
            format!("{:.2}", prediction.league_averages.avg_away_goals).into(),
        ],
    ));
    table
}
