use std::env;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use scorecast::data::{Dataset, SeasonDataset};
use scorecast::domain::{LeagueId, TeamId};
use scorecast::engine::Engine;
use scorecast::predictor::{Config, Predictor};
use scorecast::print;
use scorecast::season::{Fixed, Season, SystemClock};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the league dataset from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// league ID
    #[clap(short = 'l', long)]
    league: u32,

    /// home team ID
    #[clap(long)]
    home: u32,

    /// away team ID
    #[clap(long)]
    away: u32,

    /// pin the season instead of resolving it from the clock
    #[clap(short = 's', long)]
    season: Option<u16>,

    /// per-side goal bound for the scoreline grid
    #[clap(long = "max-goals")]
    max_goals: Option<u8>,

    /// print the prediction record as JSON instead of tables
    #[clap(long)]
    json: bool,

    /// write the prediction record to a JSON file
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.home == self.away {
            bail!("the home and away teams must differ");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let provider = SeasonDataset::from(Dataset::from_file(&args.file)?);
    let predictor = Predictor::try_from(match args.max_goals {
        Some(max_goals) => Config { max_goals },
        None => Config::default(),
    })?;

    let league = LeagueId(args.league);
    let (home, away) = (TeamId(args.home), TeamId(args.away));
    info!("predicting league {league}: team {home} (home) vs team {away} (away)");

    let result = match args.season {
        Some(year) => {
            Engine::new(Fixed(Season(year)), provider, predictor).predict(league, home, away)
        }
        None => Engine::new(SystemClock, provider, predictor).predict(league, home, away),
    };
    // main's error exit prints Debug; hand the failure back as its display message
    let prediction = result.map_err(|error| error.to_string())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        let renderer = Console::default();
        info!(
            "expected goals and baselines:\n{}",
            renderer.render(&print::tabulate_expectations(&prediction))
        );
        info!(
            "outcome probabilities:\n{}",
            renderer.render(&print::tabulate_outcomes(&prediction))
        );
        info!(
            "most likely scores:\n{}",
            renderer.render(&print::tabulate_top_scores(&prediction))
        );
    }

    if let Some(out) = args.out {
        serde_json::to_writer_pretty(File::create(&out)?, &prediction)?;
        info!("prediction written to {}", out.display());
    }

    Ok(())
}
