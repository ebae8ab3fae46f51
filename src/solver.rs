use ndarray::s;
use num::ToPrimitive;
use tabular::{Row, Table};
use tracing::info;

use std::fmt;

use crate::error::{SimplexError, SimplexResult};
use crate::label::Label;
use crate::model::{OptDir, Problem};
use crate::options::SolverOptions;
use crate::simplex::Simplex;
use crate::tableau::Tableau;

pub trait SolveAlgorithm {
    fn maximize(&self, problem: &Problem) -> SimplexResult<Solution>;

    fn minimize(&self, problem: &Problem) -> SimplexResult<Solution>;

    fn solve(&self, problem: &Problem) -> SimplexResult<Solution> {
        match problem.opt_dir() {
            OptDir::Max => self.maximize(problem),
            OptDir::Min => self.minimize(problem),
        }
    }
}

/// Optimal assignment of a solved problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    opt_dir: OptDir,
    values: Vec<f64>,
    obj_fn_val: f64,
    pivots: usize,
}

impl Solution {
    pub fn new(opt_dir: OptDir, values: Vec<f64>, obj_fn_val: f64, pivots: usize) -> Self {
        Self {
            opt_dir,
            values,
            obj_fn_val,
            pivots,
        }
    }

    pub fn opt_dir(&self) -> OptDir {
        self.opt_dir
    }

    /// Decision variable values in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn var_value(&self, var: usize) -> Option<f64> {
        self.values.get(var).copied()
    }

    pub fn obj_fn_val(&self) -> f64 {
        self.obj_fn_val
    }

    /// Pivots taken by the tableau that produced this solution.
    pub fn pivots(&self) -> usize {
        self.pivots
    }

    /// Variable values followed by the objective value.
    pub fn as_vec(&self) -> Vec<f64> {
        let mut out = self.values.clone();
        out.push(self.obj_fn_val);
        out
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut table = Table::new("{:<} = {:>}");
        table.add_row(Row::new().with_cell(self.opt_dir).with_cell(self.obj_fn_val));
        for (j, v) in self.values.iter().enumerate() {
            table.add_row(Row::new().with_cell(Label::Decision(j)).with_cell(v));
        }
        write!(f, "{}", table)
    }
}

fn check_shape(tableau: &Tableau) -> SimplexResult<()> {
    if tableau.n_cols() < 3 {
        return Err(SimplexError::DegenerateShape {
            columns: tableau.n_cols(),
        });
    }
    Ok(())
}

//decision values are the RHS of the rows they are basic in, 0 otherwise
fn primal_solution(tableau: &Tableau) -> SimplexResult<Solution> {
    check_shape(tableau)?;

    let basis = tableau.basis();
    let values = (0..tableau.n_decision())
        .map(|j| {
            basis
                .get(&Label::Decision(j))
                .map(|&i| tableau.rhs(i))
                .unwrap_or(0.0_f64)
        })
        .collect();

    Ok(Solution::new(
        OptDir::Max,
        values,
        tableau.objective_value(),
        tableau.pivots(),
    ))
}

//primal values of a minimization are the objective row entries under the
//dual's slack columns
fn dual_solution(tableau: &Tableau) -> SimplexResult<Solution> {
    check_shape(tableau)?;

    let obj_col = tableau.n_cols() - 2;
    let first_slack = tableau
        .col_labels()
        .iter()
        .position(Label::is_slack)
        .unwrap_or(obj_col);
    let values = tableau
        .objective_row()
        .slice(s![first_slack..obj_col])
        .to_vec();

    Ok(Solution::new(
        OptDir::Min,
        values,
        tableau.objective_value(),
        tableau.pivots(),
    ))
}

impl SolveAlgorithm for Simplex {
    fn maximize(&self, problem: &Problem) -> SimplexResult<Solution> {
        let tableau = self.solve_tableau(&problem.objective_row(), problem.constraints())?;
        primal_solution(&tableau)
    }

    fn minimize(&self, problem: &Problem) -> SimplexResult<Solution> {
        let dual = problem.dual()?;
        let tableau = self.solve_tableau(&dual.objective_row(), dual.constraints())?;
        dual_solution(&tableau)
    }
}

pub struct Solver<T: SolveAlgorithm> {
    problem: Problem,
    solve_algo: T,
}

impl<T: SolveAlgorithm> Solver<T> {
    pub fn new(problem: Problem, solve_algo: T) -> Self {
        Self {
            problem,
            solve_algo,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn solve(&self) -> SimplexResult<Solution> {
        info!(
            opt_dir = %self.problem.opt_dir(),
            vars = self.problem.n_vars(),
            constraints = self.problem.constraints().len(),
            "solving"
        );
        self.solve_algo.solve(&self.problem)
    }
}

/// Maximize `objective·x` subject to `row·x <= bound` for each constraint
/// row `[row.., bound]`, with at most `max_iterations` pivots.
pub fn maximize<T, R>(objective: &[T], constraints: &[R], max_iterations: usize) -> SimplexResult<Solution>
where
    T: ToPrimitive,
    R: AsRef<[T]>,
{
    let problem = Problem::maximize(objective, constraints)?;
    let simplex = Simplex::with_options(SolverOptions::new().with_max_iterations(max_iterations));
    Solver::new(problem, simplex).solve()
}

/// Minimize `objective·x` subject to `row·x >= bound` for each constraint
/// row `[row.., bound]`, solved through the dual maximization.
pub fn minimize<T, R>(objective: &[T], constraints: &[R], max_iterations: usize) -> SimplexResult<Solution>
where
    T: ToPrimitive,
    R: AsRef<[T]>,
{
    let problem = Problem::minimize(objective, constraints)?;
    let simplex = Simplex::with_options(SolverOptions::new().with_max_iterations(max_iterations));
    Solver::new(problem, simplex).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn maximize_reference() {
        let sol = maximize(&[7, 8, 10], &[[2, 3, 2, 1000], [1, 1, 2, 800]], 10).unwrap();
        assert_eq!(sol.as_vec(), vec![200.0, 0.0, 300.0, 4400.0]);
        assert_eq!(sol.opt_dir(), OptDir::Max);
        assert_eq!(sol.pivots(), 3);
        assert_eq!(sol.var_value(1), Some(0.0));
        assert_eq!(sol.var_value(3), None);
    }

    #[test]
    fn minimize_reference() {
        let sol = minimize(&[3, 9], &[[2, 1, 8], [1, 2, 8]], 10).unwrap();
        assert_eq!(sol.as_vec(), vec![8.0, 0.0, 24.0]);
        assert_eq!(sol.opt_dir(), OptDir::Min);
        assert_eq!(sol.pivots(), 2);
    }

    #[test]
    fn minimize_fractional() {
        //min x0 + x1 st. x0 + 2x1 >= 4, 3x0 + x1 >= 6
        let sol = minimize(&[1.0, 1.0], &[vec![1.0, 2.0, 4.0], vec![3.0, 1.0, 6.0]], 10).unwrap();
        assert_relative_eq!(sol.values()[0], 1.6, epsilon = 1e-9);
        assert_relative_eq!(sol.values()[1], 1.2, epsilon = 1e-9);
        assert_relative_eq!(sol.obj_fn_val(), 2.8, epsilon = 1e-9);
    }

    #[test]
    fn maximize_iteration_limit() {
        assert_eq!(
            maximize(&[7, 8, 10], &[[2, 3, 2, 1000], [1, 1, 2, 800]], 1),
            Err(SimplexError::IterationLimit { max_iterations: 1 })
        );
    }

    #[test]
    fn malformed_inputs() {
        let none: Vec<Vec<f64>> = Vec::new();
        assert_eq!(maximize(&[1.0, 1.0], &none, 10), Err(SimplexError::NoConstraints));
        assert_eq!(minimize(&[1.0, 1.0], &none, 10), Err(SimplexError::NoConstraints));
        assert_eq!(
            maximize(&[1], &[[1, 2]], 10),
            Err(SimplexError::TooFewVariables { row: 0, found: 1 })
        );
        assert_eq!(
            minimize(&[1.0, 1.0], &[vec![1.0, 1.0, 2.0], vec![1.0, 2.0]], 10),
            Err(SimplexError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        //row width must match the objective
        assert_eq!(
            maximize(&[1.0, 1.0, 5.0], &[vec![1.0, 1.0, 4.0]], 10),
            Err(SimplexError::RaggedRows {
                row: 0,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn solver_dispatches_on_direction() {
        let problem = Problem::minimize(&[3, 9], &[[2, 1, 8], [1, 2, 8]]).unwrap();
        let solver = Solver::new(problem, Simplex::new());
        let sol = solver.solve().unwrap();
        assert_eq!(sol.as_vec(), vec![8.0, 0.0, 24.0]);
        assert_eq!(solver.problem().opt_dir(), OptDir::Min);
    }

    #[test]
    fn degenerate_shape() {
        let tableau = Tableau::from_parts(array![[0.0, 1.0]], vec![Label::Objective], vec![Label::Objective]);
        assert_eq!(
            primal_solution(&tableau),
            Err(SimplexError::DegenerateShape { columns: 2 })
        );
        assert_eq!(
            dual_solution(&tableau),
            Err(SimplexError::DegenerateShape { columns: 2 })
        );
    }

    #[test]
    fn dual_values_come_from_slack_columns() {
        //two decision columns, three slack columns
        let tableau = Tableau::build(
            &[-1.0, -1.0],
            &[vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0], vec![1.0, 1.0, 3.0]],
        )
        .unwrap();
        let sol = dual_solution(&tableau).unwrap();
        assert_eq!(sol.values(), &[0.0, 0.0, 0.0]);

        let mut tableau = tableau;
        tableau.pivot(&crate::tableau::TableauIx::new(0, 0)).unwrap();
        let sol = dual_solution(&tableau).unwrap();
        assert_eq!(sol.values(), &[1.0, 0.0, 0.0]);
        assert_eq!(sol.obj_fn_val(), 1.0);
    }

    #[test]
    fn display_solution() {
        let sol = maximize(&[7, 8, 10], &[[2, 3, 2, 1000], [1, 1, 2, 800]], 10).unwrap();
        let lines: Vec<String> = sol
            .to_string()
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        assert_eq!(lines, vec!["Max = 4400", "x0 = 200", "x1 = 0", "x2 = 300"]);
    }
}
