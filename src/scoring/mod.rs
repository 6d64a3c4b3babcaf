pub mod outcome;
pub mod selector;
pub mod solver;
pub mod split;
pub mod variants;

pub use outcome::{BestResult, Outcome, Split, NIU_NIU};
pub use selector::{is_better, select_best};
pub use solver::{solve, solve_many};
pub use split::{evaluate_hand, score_split, SPLITS};
pub use variants::{generate_variants, Variants};
