use ndarray::Array2;

use crate::error::{SimplexError, SimplexResult};

/// Pack equally long rows into an `Array2`.
pub fn to_array2<R: AsRef<[f64]>>(rows: &[R]) -> SimplexResult<Array2<f64>> {
    let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

    for (i, row) in rows.iter().enumerate() {
        let found = row.as_ref().len();
        if found != n_cols {
            return Err(SimplexError::RaggedRows {
                row: i,
                expected: n_cols,
                found,
            });
        }
    }

    Ok(Array2::from_shape_fn((rows.len(), n_cols), |(i, j)| {
        rows[i].as_ref()[j]
    }))
}

/// Unpack an `Array2` into owned rows.
pub fn to_rows(arr: &Array2<f64>) -> Vec<Vec<f64>> {
    arr.rows().into_iter().map(|row| row.to_vec()).collect()
}

/// Transpose a row matrix, failing on rows of unequal length.
pub fn transpose<R: AsRef<[f64]>>(rows: &[R]) -> SimplexResult<Vec<Vec<f64>>> {
    let arr = to_array2(rows)?;
    Ok(to_rows(&arr.t().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_rectangular() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let t = transpose(&m).unwrap();
        assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let m = vec![vec![2.0, 1.0, 8.0], vec![1.0, 2.0, 8.0], vec![3.0, 9.0, 0.0]];
        let tt = transpose(&transpose(&m).unwrap()).unwrap();
        assert_eq!(tt, m);
    }

    #[test]
    fn transpose_ragged_fails() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert_eq!(
            transpose(&m),
            Err(SimplexError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn transpose_empty() {
        let m: Vec<Vec<f64>> = Vec::new();
        assert_eq!(transpose(&m).unwrap(), Vec::<Vec<f64>>::new());
    }
}
