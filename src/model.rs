use num::ToPrimitive;
use tabular::{Row, Table};

use std::fmt;

use crate::error::{SimplexError, SimplexResult};
use crate::label::Label;
use crate::matrix::transpose;
use crate::tableau::Tableau;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OptDir {
    Max,
    Min,
}

impl fmt::Display for OptDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptDir::Max => write!(f, "Max"),
            OptDir::Min => write!(f, "Min"),
        }
    }
}

/// Linear program over non-negative variables `x0..xn`.
///
/// Each constraint row is its coefficients followed by its bound. Rows read
/// as `a·x <= b` when maximizing and as `a·x >= b` when minimizing, the pair
/// of forms related by LP duality.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub(crate) opt_dir: OptDir,
    pub(crate) objective: Vec<f64>,
    pub(crate) constraints: Vec<Vec<f64>>,
}

fn to_f64<T: ToPrimitive>(value: &T, row: usize, column: usize) -> SimplexResult<f64> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or(SimplexError::InvalidCoefficient { row, column })
}

impl Problem {
    /// Convert coefficients of any primitive numeric type.
    ///
    /// Objective coefficients are reported at row `constraints.len()` on
    /// conversion errors, after the constraint rows. Every constraint row must
    /// hold exactly one coefficient per objective coefficient plus its bound.
    pub fn new<T, R>(opt_dir: OptDir, objective: &[T], constraints: &[R]) -> SimplexResult<Self>
    where
        T: ToPrimitive,
        R: AsRef<[T]>,
    {
        let constraints = constraints
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.as_ref()
                    .iter()
                    .enumerate()
                    .map(|(j, v)| to_f64(v, i, j))
                    .collect::<SimplexResult<Vec<f64>>>()
            })
            .collect::<SimplexResult<Vec<Vec<f64>>>>()?;

        let objective = objective
            .iter()
            .enumerate()
            .map(|(j, v)| to_f64(v, constraints.len(), j))
            .collect::<SimplexResult<Vec<f64>>>()?;

        let expected = objective.len() + 1;
        if let Some((i, row)) = constraints
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(SimplexError::RaggedRows {
                row: i,
                expected,
                found: row.len(),
            });
        }

        Ok(Self {
            opt_dir,
            objective,
            constraints,
        })
    }

    pub fn maximize<T: ToPrimitive, R: AsRef<[T]>>(
        objective: &[T],
        constraints: &[R],
    ) -> SimplexResult<Self> {
        Self::new(OptDir::Max, objective, constraints)
    }

    pub fn minimize<T: ToPrimitive, R: AsRef<[T]>>(
        objective: &[T],
        constraints: &[R],
    ) -> SimplexResult<Self> {
        Self::new(OptDir::Min, objective, constraints)
    }

    pub fn opt_dir(&self) -> OptDir {
        self.opt_dir
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }

    pub fn n_vars(&self) -> usize {
        self.objective.len()
    }

    /// Objective row of the initial tableau, `c·x = p` rewritten as
    /// `-c·x + p = 0`.
    pub fn objective_row(&self) -> Vec<f64> {
        self.objective.iter().map(|c| -c).collect()
    }

    pub fn as_tableau(&self) -> SimplexResult<Tableau> {
        Tableau::build(&self.objective_row(), &self.constraints)
    }

    /// Dual problem as a maximization.
    ///
    /// The constraint rows with `[c.., 0]` appended are transposed. The last
    /// transposed row without its trailing zero becomes the objective (the
    /// primal bounds) and the remaining rows become constraints bounded by
    /// the primal costs.
    pub fn dual(&self) -> SimplexResult<Problem> {
        if self.constraints.is_empty() {
            return Err(SimplexError::NoConstraints);
        }

        let mut combined = self.constraints.clone();
        let mut obj = self.objective.clone();
        obj.push(0.0_f64);
        combined.push(obj);

        let mut rows = transpose(&combined)?;
        let mut objective = rows.pop().ok_or(SimplexError::NoConstraints)?;
        objective.pop();

        Ok(Problem {
            opt_dir: match self.opt_dir {
                OptDir::Max => OptDir::Min,
                OptDir::Min => OptDir::Max,
            },
            objective,
            constraints: rows,
        })
    }

    fn term_cells(row: &mut Row, coeffs: &[f64]) {
        for (j, coeff) in coeffs.iter().enumerate() {
            let sign = match (j, *coeff >= 0.0_f64) {
                (0, true) => "",
                (_, true) => "+",
                (_, false) => "-",
            };
            row.add_cell(sign);
            row.add_cell(format!("{}*{}", coeff.abs(), Label::Decision(j)));
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        //OptDir, colon, (sign, term) per variable, comp, bound
        let width = self
            .constraints
            .iter()
            .map(|c| c.len().saturating_sub(1))
            .fold(self.n_vars(), usize::max);
        let mut columns = "{:<}{:^}".to_string();
        columns += &" {:>}{:>}".repeat(width);
        columns += " {:^} {:>}";
        let mut table = Table::new(columns.as_str());

        let pad = |row: &mut Row, used: usize| {
            for _ in used..width {
                row.add_cell("");
                row.add_cell("");
            }
        };

        let mut row = Row::new();
        row.add_cell(self.opt_dir);
        row.add_cell(":");
        Self::term_cells(&mut row, &self.objective);
        pad(&mut row, self.objective.len());
        row.add_cell("");
        row.add_cell("");
        table.add_row(row);

        let comp = match self.opt_dir {
            OptDir::Max => "\u{2264}",
            OptDir::Min => "\u{2265}",
        };
        for (i, con) in self.constraints.iter().enumerate() {
            let mut row = Row::new();
            if i == 0 {
                row.add_cell("Subject to");
                row.add_cell(":");
            } else {
                row.add_cell("");
                row.add_cell("");
            }
            let (coeffs, bound) = con.split_at(con.len().saturating_sub(1));
            Self::term_cells(&mut row, coeffs);
            pad(&mut row, coeffs.len());
            row.add_cell(comp);
            match bound.first() {
                Some(b) => row.add_cell(b),
                None => row.add_cell(""),
            };
            table.add_row(row);
        }

        write!(f, "{}", table)
    }
}
