//! A Poisson model of football match outcomes. Combines per-team
//! attack/defence strength coefficients with league scoring baselines to
//! derive expected-goal rates, then expands those rates into a full scoreline
//! probability grid, win/draw/loss probabilities and a ranked list of
//! most-likely scores.

pub mod data;
pub mod domain;
pub mod engine;
pub mod factorial;
pub mod fallback;
pub mod poisson;
pub mod predictor;
pub mod print;
pub mod probs;
pub mod provider;
pub mod scoregrid;
pub mod season;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
