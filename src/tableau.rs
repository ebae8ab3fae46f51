use colored::Colorize;
use ndarray::{s, Array2, ArrayView1};
use rustc_hash::FxHashMap;
use tabular::{Row, Table};

use std::fmt;

use crate::error::{SimplexError, SimplexResult};
use crate::label::Label;

/// Coordinates of a pivot element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableauIx {
    i: usize,
    j: usize,
}

impl TableauIx {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    //row
    pub fn i(&self) -> usize {
        self.i
    }

    //column
    pub fn j(&self) -> usize {
        self.j
    }
}

/// Simplex tableau.
///
/// Constraint rows come first, the objective row is last. Columns are laid
/// out as decision variables, one slack per constraint, the objective
/// variable `p` and finally the right hand side. `col_labels` names every
/// column except the RHS; `row_labels` names the basic variable of each row.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub(crate) tbl: Array2<f64>,
    row_labels: Vec<Label>,
    col_labels: Vec<Label>,
    pivots: usize,
}

impl Tableau {
    pub(crate) fn from_parts(tbl: Array2<f64>, row_labels: Vec<Label>, col_labels: Vec<Label>) -> Self {
        Self {
            tbl,
            row_labels,
            col_labels,
            pivots: 0,
        }
    }

    /// Build the initial tableau.
    ///
    /// `objective_row` is written to the last row unchanged, so a
    /// maximization of `c·x` passes `-c`. Each constraint is its coefficients
    /// followed by its bound; narrow rows are padded with zeros.
    pub fn build<R: AsRef<[f64]>>(objective_row: &[f64], constraints: &[R]) -> SimplexResult<Self> {
        if constraints.is_empty() {
            return Err(SimplexError::NoConstraints);
        }
        for (i, con) in constraints.iter().enumerate() {
            let found = con.as_ref().len().saturating_sub(1);
            if found < 2 {
                return Err(SimplexError::TooFewVariables { row: i, found });
            }
        }

        let n_cons = constraints.len();
        let n_vars = constraints
            .iter()
            .fold(objective_row.len(), |n, con| n.max(con.as_ref().len() - 1));
        let obj_col = n_vars + n_cons;
        let rhs_col = obj_col + 1;

        let mut tbl = Array2::<f64>::zeros((n_cons + 1, rhs_col + 1));

        //populate constraint rows
        for (i, con) in constraints.iter().enumerate() {
            let (coeffs, rhs) = con.as_ref().split_at(con.as_ref().len() - 1);
            tbl.slice_mut(s![i, ..coeffs.len()])
                .assign(&ArrayView1::from(coeffs));
            tbl[[i, n_vars + i]] = 1.0_f64;
            tbl[[i, rhs_col]] = rhs[0];
        }

        //populate objective row
        tbl.slice_mut(s![n_cons, ..objective_row.len()])
            .assign(&ArrayView1::from(objective_row));
        tbl[[n_cons, obj_col]] = 1.0_f64;

        let row_labels = (0..n_cons)
            .map(Label::Slack)
            .chain(std::iter::once(Label::Objective))
            .collect();
        let col_labels = (0..n_vars)
            .map(Label::Decision)
            .chain((0..n_cons).map(Label::Slack))
            .chain(std::iter::once(Label::Objective))
            .collect();

        Ok(Self::from_parts(tbl, row_labels, col_labels))
    }

    pub fn tbl(&self) -> &Array2<f64> {
        &self.tbl
    }

    pub fn row_labels(&self) -> &[Label] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[Label] {
        &self.col_labels
    }

    /// Number of pivots applied since the tableau was built.
    pub fn pivots(&self) -> usize {
        self.pivots
    }

    pub fn n_rows(&self) -> usize {
        self.tbl.shape()[0]
    }

    pub fn n_cols(&self) -> usize {
        self.tbl.shape()[1]
    }

    pub fn n_decision(&self) -> usize {
        self.col_labels.iter().filter(|l| l.is_decision()).count()
    }

    pub fn objective_row(&self) -> ArrayView1<f64> {
        self.tbl.row(self.n_rows() - 1)
    }

    pub fn rhs(&self, row: usize) -> f64 {
        self.tbl[[row, self.n_cols() - 1]]
    }

    /// Current value of `p`.
    pub fn objective_value(&self) -> f64 {
        self.rhs(self.n_rows() - 1)
    }

    /// Map from each basic label to the constraint row it is basic in.
    pub fn basis(&self) -> FxHashMap<Label, usize> {
        self.row_labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label != Label::Objective)
            .map(|(i, label)| (*label, i))
            .collect()
    }

    /// True when the objective row has no negative entry.
    ///
    /// The RHS is part of the scan, so a negative objective value also
    /// blocks optimality.
    pub fn is_optimal(&self) -> bool {
        !self.objective_row().iter().any(|v| *v < 0.0_f64)
    }

    /// Gauss-Jordan elimination around `pivot_ind`.
    ///
    /// The pivot row is divided by the pivot element, then the pivot column is
    /// cleared from every other row. Row labels are left untouched. A zero
    /// pivot element is not trapped; inf and NaN spread through the tableau.
    pub fn eliminate(&mut self, pivot_ind: &TableauIx) -> SimplexResult<()> {
        let (i, j) = (pivot_ind.i(), pivot_ind.j());
        if i + 1 >= self.n_rows() || j + 1 >= self.n_cols() {
            return Err(SimplexError::PivotOutOfBounds { row: i, column: j });
        }

        //set coefficients in pivot row
        let div = self.tbl[[i, j]];
        let mut row_r = self.tbl.row_mut(i);
        row_r /= div;

        let pivot_row = self.tbl.row(i).to_owned();
        for (k, mut row) in self.tbl.rows_mut().into_iter().enumerate() {
            //skip pivot row
            if k == i {
                continue;
            }
            let ratio = row[j];
            row.scaled_add(-ratio, &pivot_row);
        }
        Ok(())
    }

    /// Eliminate around `pivot_ind` and make the pivot column's variable basic
    /// in the pivot row.
    pub fn pivot(&mut self, pivot_ind: &TableauIx) -> SimplexResult<()> {
        self.eliminate(pivot_ind)?;
        self.row_labels[pivot_ind.i()] = self.col_labels[pivot_ind.j()];
        self.pivots += 1;
        Ok(())
    }

    /// Render as a table, highlighting `pivot` if given.
    pub fn render(&self, pivot: Option<&TableauIx>) -> String {
        let mut columns = "{:<} |".to_string();
        columns += &" {:>}".repeat(self.col_labels.len());
        columns += " | {:>}";
        let mut table = Table::new(columns.as_str());

        let header = std::iter::once(String::new())
            .chain(self.col_labels.iter().map(|l| l.to_string()))
            .chain(std::iter::once("rhs".to_string()));
        table.add_row(Row::from_cells(header));

        for (i, row) in self.tbl.rows().into_iter().enumerate() {
            let mut cells = Row::new();
            cells.add_cell(self.row_labels[i]);
            for (j, v) in row.iter().enumerate() {
                match pivot {
                    Some(ix) if ix.i() == i && ix.j() == j => {
                        cells.add_cell(format!("{}", v).red().bold())
                    }
                    _ => cells.add_cell(v),
                };
            }
            table.add_row(cells);
        }

        table.to_string()
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(None))
    }
}
