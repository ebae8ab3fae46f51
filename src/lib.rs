//! Tableau simplex solver for small dense linear programs.
//!
//! ```
//! let sol = rsimplex::maximize(&[7, 8, 10], &[[2, 3, 2, 1000], [1, 1, 2, 800]], 10).unwrap();
//! assert_eq!(sol.as_vec(), vec![200.0, 0.0, 300.0, 4400.0]);
//! ```

pub mod error;
pub mod label;
pub mod matrix;
pub mod model;
pub mod options;
pub mod simplex;
pub mod solver;
pub mod tableau;

pub use error::{SimplexError, SimplexResult};
pub use label::Label;
pub use model::{OptDir, Problem};
pub use options::{RatioTest, SolverOptions};
pub use simplex::Simplex;
pub use solver::{maximize, minimize, Solution, SolveAlgorithm, Solver};
pub use tableau::{Tableau, TableauIx};
