//! `rstest-bdd` behavioural suite for `recast`.
//!
//! [`fixtures`] holds the record types and shared scenario state, [`steps`]
//! the step implementations, and [`scenarios`] binds the `.feature` files to
//! the fixtures so the scenarios run under `cargo test`.

mod fixtures;
mod scenarios;
mod steps;
