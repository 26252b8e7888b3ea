use derive_getters::Getters;
use eyre::Result;

use crate::pairwise::alignment::{AlignedPair, Alignment};
use crate::pairwise::scoring::Scoring;
use crate::{Alignable, Score};

use super::builder::{Matrices, fill};
use super::direction::Direction;
use super::extract;
use super::grid::{DirectionGrid, ScoreGrid};
use super::matrix::Matrix;
use super::report::Report;
use super::traceback::{self, Tracebacks};

/// Local aligner for a single query/reference pair.
///
/// Both dynamic programming matrices are filled in the constructor and stay read-only,
/// so every query method is cheap to repeat and always returns the same result.
#[derive(Clone, Debug, Getters)]
pub struct Aligner<S: Score, Smb> {
    query: Vec<Smb>,
    reference: Vec<Smb>,
    scoring: Scoring<S>,
    #[getter(skip)]
    matrices: Matrices<S>,
}

impl<S: Score, Smb: Copy + PartialEq> Aligner<S, Smb> {
    pub fn new<Q, R>(query: &Q, reference: &R, scoring: Scoring<S>) -> Result<Self>
    where
        Q: Alignable<Symbol = Smb>,
        R: Alignable<Symbol = Smb>,
    {
        scoring.validate()?;

        let (query, reference) = (query.to_vec(), reference.to_vec());
        let matrices = fill(&query, &reference, &scoring.scheme())?;
        log::debug!(
            "Filled {}x{} local alignment matrices",
            query.len() + 1,
            reference.len() + 1
        );

        Ok(Self {
            query,
            reference,
            scoring,
            matrices,
        })
    }

    pub fn scores(&self) -> &Matrix<S> {
        self.matrices.scores()
    }

    pub fn directions(&self) -> &Matrix<Direction> {
        self.matrices.directions()
    }

    /// The best local alignment score, zero if nothing aligns.
    pub fn max_score(&self) -> S {
        extract::max_score(self.matrices.scores())
    }

    /// Alignments ending in every cell with the `target` score, scanned query-first.
    pub fn alignments(&self, target: S) -> Tracebacks<'_, S, Vec<Smb>, Vec<Smb>> {
        Tracebacks::new(&self.matrices, &self.query, &self.reference, target)
    }

    /// All alignments reaching the maximum score.
    pub fn optimal(&self) -> Vec<Alignment<S>> {
        self.alignments(self.max_score()).collect()
    }

    /// The alignment ending in the given cell of the score matrix.
    pub fn trace(&self, row: usize, col: usize) -> Result<Alignment<S>> {
        traceback::trace(&self.matrices, &self.query, &self.reference, row, col)
    }
}

impl<S: Score, Smb: Copy + PartialEq + Into<char>> Aligner<S, Smb> {
    /// Gapped query/reference strings for every alignment with the `target` score.
    pub fn all_maximal_alignments(&self, target: S) -> Result<Vec<AlignedPair>> {
        let best = self.max_score();
        if target > best {
            log::warn!("Requested alignments with score {target}, but the best score is {best}");
        }

        self.alignments(target)
            .map(|aln| {
                log::trace!(
                    "Alignment {} ({} matches) at query {:?}, reference {:?}",
                    aln.rle(),
                    aln.matches(),
                    aln.seq1(),
                    aln.seq2()
                );
                aln.gapped(&self.query, &self.reference)
            })
            .collect()
    }

    /// Printable summary of all alignments with the `target` score.
    pub fn report(&self, target: S) -> Result<Report<S>> {
        Ok(Report::new(target, self.all_maximal_alignments(target)?))
    }

    pub fn render(&self) -> ScoreGrid<'_, S, Smb> {
        ScoreGrid::new(self.matrices.scores(), &self.query, &self.reference)
    }

    pub fn render_directions(&self) -> DirectionGrid<'_, Smb> {
        DirectionGrid::new(self.matrices.directions(), &self.query, &self.reference)
    }
}

impl<S: Score> Aligner<S, char> {
    /// Aligns two strings symbol by symbol (Unicode scalar values).
    pub fn from_strs(query: &str, reference: &str, scoring: Scoring<S>) -> Result<Self> {
        let query: Vec<char> = query.chars().collect();
        let reference: Vec<char> = reference.chars().collect();
        Self::new(&query, &reference, scoring)
    }
}
