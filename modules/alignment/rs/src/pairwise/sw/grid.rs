use std::fmt::{Display, Formatter};

use derive_more::Constructor;

use crate::Score;

use super::direction::Direction;
use super::matrix::Matrix;

/// Printable score matrix: the reference runs along the top, the query down the left side.
#[derive(Constructor)]
pub struct ScoreGrid<'a, S: Score, Smb> {
    scores: &'a Matrix<S>,
    query: &'a [Smb],
    reference: &'a [Smb],
}

/// Printable direction matrix, same layout as `ScoreGrid` with `D`/`U`/`L`/`Z` cells.
#[derive(Constructor)]
pub struct DirectionGrid<'a, Smb> {
    directions: &'a Matrix<Direction>,
    query: &'a [Smb],
    reference: &'a [Smb],
}

fn write_grid<T, Smb: Copy + Into<char>>(
    f: &mut Formatter<'_>,
    cells: &Matrix<T>,
    query: &[Smb],
    reference: &[Smb],
    render: impl Fn(&T) -> String,
) -> std::fmt::Result {
    let rendered: Vec<Vec<String>> = cells
        .iter_rows()
        .map(|row| row.iter().map(&render).collect())
        .collect();
    let width = rendered
        .iter()
        .flatten()
        .map(|x| x.chars().count())
        .max()
        .unwrap_or(1)
        + 2;

    // Header: row label column + boundary column + reference symbols
    write!(f, " {:>width$}", "")?;
    for symbol in reference {
        let symbol: char = (*symbol).into();
        write!(f, "{:>width$}", symbol)?;
    }
    writeln!(f)?;

    for (ind, row) in rendered.iter().enumerate() {
        let label: char = match ind {
            0 => ' ',
            _ => query[ind - 1].into(),
        };
        write!(f, "{}", label)?;
        for cell in row {
            write!(f, "{:>width$}", cell)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl<S: Score, Smb: Copy + Into<char>> Display for ScoreGrid<'_, S, Smb> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_grid(f, self.scores, self.query, self.reference, |x| x.to_string())
    }
}

impl<Smb: Copy + Into<char>> Display for DirectionGrid<'_, Smb> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_grid(f, self.directions, self.query, self.reference, |x| {
            x.symbol().to_string()
        })
    }
}
