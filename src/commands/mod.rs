//! Command implementations

pub mod simple;
pub mod solve;
pub mod survey;

pub use simple::run_simple;
pub use solve::{SolveResult, SolvedWord, solve, solve_letters};
pub use survey::{PuzzleStats, SurveyStatistics, run_survey};
