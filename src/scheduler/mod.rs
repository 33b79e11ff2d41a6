//! Timetable generation engine and KPI evaluation.
//!
//! # Algorithm
//!
//! Each activity gets zero or one of its candidate slots so that no two
//! placements overlap and the number of placed activities is as large as
//! possible. A slot with dependencies is placed together with the slots it
//! requires, or not at all.
//!
//! - **Backtracking** (inputs up to the configured limit, default 10):
//!   exhaustive depth-first search, maximal result.
//! - **Greedy** (larger inputs): single-pass first fit, approximate.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a result: placement rate and weekly load.

mod backtracking;
mod config;
mod generator;
mod greedy;
mod kpi;
mod space;

pub use config::{GeneratorConfig, DEFAULT_BACKTRACKING_LIMIT, DEFAULT_MAX_NODES};
pub use generator::{generate, ScheduleGenerator};
pub use kpi::ScheduleKpi;
