//! Pure scheduling and aggregation core.
//!
//! Nothing in this module performs I/O or keeps state between calls; every
//! function takes plain values and returns fresh ones, so calls on disjoint
//! inputs can run concurrently without coordination.

pub mod elimination;
pub mod planner;
pub mod round_robin;
pub mod standings;

pub use elimination::generate_elimination_dates;
pub use planner::{Knockout, SeasonPlan, plan_season};
pub use round_robin::{schedule_round_robin, schedule_season, total_rounds};
pub use standings::{GroupTable, compute_group_tables, compute_table, top_scorers};
