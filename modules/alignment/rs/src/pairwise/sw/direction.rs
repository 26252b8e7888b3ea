use crate::Score;

/// Traceback pointer of a score matrix cell.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Direction {
    /// Came from `(row - 1, col - 1)`: both symbols are aligned (D)
    Diag,
    /// Came from `(row, col - 1)`: the reference symbol is aligned against a gap (U)
    Up,
    /// Came from `(row - 1, col)`: the query symbol is aligned against a gap (L)
    Left,
    /// Local alignment starts here, the cell score is zero (Z)
    #[default]
    Zero,
}

impl Direction {
    /// Picks the pointer for a cell given its final score and the three candidate scores.
    ///
    /// Ties are broken as Up > Left > Diag, and a zero score is always `Zero` even when
    /// one of the candidates reached zero as well.
    #[inline(always)]
    pub fn resolve<S: Score>(score: S, diag: S, up: S, left: S) -> Self {
        if score.is_zero() {
            Direction::Zero
        } else if up == score {
            Direction::Up
        } else if left == score {
            Direction::Left
        } else if diag == score {
            Direction::Diag
        } else {
            Direction::Zero
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Direction::Diag => 'D',
            Direction::Up => 'U',
            Direction::Left => 'L',
            Direction::Zero => 'Z',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'D' => Ok(Direction::Diag),
            'U' => Ok(Direction::Up),
            'L' => Ok(Direction::Left),
            'Z' => Ok(Direction::Zero),
            _ => Err(()),
        }
    }
}
