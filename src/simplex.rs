use ndarray::s;
use tracing::{debug, trace, warn};

use crate::error::{SimplexError, SimplexResult};
use crate::options::{RatioTest, SolverOptions};
use crate::tableau::{Tableau, TableauIx};

/// Tableau simplex driver: most negative entering column, minimum ratio
/// leaving row, first occurrence on ties. Carries no state besides its
/// options.
#[derive(Debug, Clone, Default)]
pub struct Simplex {
    options: SolverOptions,
}

//first index of the smallest value, NaN never wins
fn argmin<I: Iterator<Item = f64>>(values: I) -> Option<usize> {
    values
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
            Some((_, b)) if b <= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

impl Simplex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Select the next pivot.
    ///
    /// Under [`RatioTest::ZeroRhs`] a row with a zero RHS scores 0 even when
    /// its pivot-column entry is zero or negative, so that row can be chosen
    /// and the elimination step may then produce an infeasible tableau.
    pub fn pivot_ind(&self, tbl: &Tableau) -> SimplexResult<TableauIx> {
        if tbl.n_rows() < 2 || tbl.n_cols() < 2 {
            return Err(SimplexError::EmptyTableau);
        }

        let j = argmin(tbl.tbl().slice(s![-1, ..-1]).iter().copied())
            .ok_or(SimplexError::EmptyTableau)?;

        let column = tbl.tbl().slice(s![..-1, j]);
        let rhs = tbl.tbl().slice(s![..-1, -1]);
        let ratios = column.iter().zip(rhs.iter()).map(|(a, b)| match self.options.ratio_test {
            RatioTest::ZeroRhs if *b == 0.0_f64 => 0.0_f64,
            RatioTest::ZeroRhs => *b / *a,
            RatioTest::PositiveDivisor if *a > 0.0_f64 => *b / *a,
            RatioTest::PositiveDivisor => f64::NAN,
        });

        let i = argmin(ratios).ok_or(SimplexError::NoEligibleRow { column: j })?;

        Ok(TableauIx::new(i, j))
    }

    /// Pivot `tableau` until it is optimal or this call has made
    /// `max_iterations` pivots. Pivots applied before the call do not count.
    pub fn run(&self, tableau: &mut Tableau) -> SimplexResult<()> {
        let max_iterations = self.options.max_iterations;
        let start = tableau.pivots();

        while !tableau.is_optimal() && tableau.pivots() - start < max_iterations {
            let ix = self.pivot_ind(tableau)?;
            let entering = tableau.col_labels()[ix.j()];
            let leaving = tableau.row_labels()[ix.i()];
            if self.options.trace_tableau {
                trace!("\n{}", tableau.render(Some(&ix)));
            }

            tableau.pivot(&ix)?;
            debug!(
                iteration = tableau.pivots(),
                row = ix.i(),
                column = ix.j(),
                %entering,
                %leaving,
                objective = tableau.objective_value(),
                "pivot"
            );
        }

        if !tableau.is_optimal() {
            warn!(max_iterations, "tableau not optimal after iteration limit");
            return Err(SimplexError::IterationLimit { max_iterations });
        }
        Ok(())
    }

    /// Build the initial tableau from `objective_row` and `constraints` and
    /// pivot it to optimality.
    pub fn solve_tableau<R: AsRef<[f64]>>(
        &self,
        objective_row: &[f64],
        constraints: &[R],
    ) -> SimplexResult<Tableau> {
        let mut tableau = Tableau::build(objective_row, constraints)?;
        debug!(
            rows = tableau.n_rows(),
            cols = tableau.n_cols(),
            "built initial tableau"
        );
        if self.options.trace_tableau {
            trace!("\n{}", tableau);
        }

        self.run(&mut tableau)?;

        debug!(
            pivots = tableau.pivots(),
            objective = tableau.objective_value(),
            "optimal tableau"
        );
        Ok(tableau)
    }
}
