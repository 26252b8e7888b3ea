use swalign_alignment_rs::pairwise::{AlignedPair, GAP, scoring, sw};

pub type Score = i32;
pub type Aligner = sw::Aligner<Score, char>;

fn aligner(query: &str, reference: &str) -> Aligner {
    Aligner::from_strs(query, reference, scoring::Scoring::default()).unwrap()
}

fn pair(query: &str, reference: &str) -> AlignedPair {
    AlignedPair::new(query.to_string(), reference.to_string())
}

mod optimal {
    use super::*;

    struct Workload<'a> {
        query: &'a str,
        reference: &'a str,
        score: Score,
        alignments: Vec<(&'a str, &'a str)>,
    }

    fn ensure(w: Workload<'_>) {
        let engine = aligner(w.query, w.reference);
        assert_eq!(engine.max_score(), w.score);

        let expected: Vec<_> = w.alignments.iter().map(|(q, r)| pair(q, r)).collect();
        assert_eq!(engine.all_maximal_alignments(w.score).unwrap(), expected);

        for aligned in &expected {
            assert_eq!(aligned.query().chars().count(), aligned.reference().chars().count());
            let restored: String = aligned.query().chars().filter(|x| *x != GAP).collect();
            assert!(w.query.contains(&restored));
            let restored: String = aligned.reference().chars().filter(|x| *x != GAP).collect();
            assert!(w.reference.contains(&restored));
        }

        // The maximum score doesn't depend on the sequences order
        let swapped = aligner(w.reference, w.query);
        assert_eq!(swapped.max_score(), w.score);
    }

    #[test]
    fn test_reference_scenario() {
        ensure(Workload {
            query: "GCTGGAAGGCAT",
            reference: "GCAGAGCACG",
            score: 22,
            alignments: vec![("GAAG_GCA", "GCAGAGCA")],
        });
        ensure(Workload {
            query: "GCAGAGCACG",
            reference: "GCTGGAAGGCAT",
            score: 22,
            alignments: vec![("GCAGAGCA", "GAAG_GCA")],
        });
    }

    #[test]
    fn test_no_gaps() {
        for workload in [
            Workload {
                query: "ACGT",
                reference: "ACGT",
                score: 20,
                alignments: vec![("ACGT", "ACGT")],
            },
            Workload {
                query: "TTACGTAA",
                reference: "GGACGTCC",
                score: 20,
                alignments: vec![("ACGT", "ACGT")],
            },
            Workload {
                query: "A",
                reference: "A",
                score: 5,
                alignments: vec![("A", "A")],
            },
        ] {
            ensure(workload);
        }
    }

    #[test]
    fn test_gaps() {
        for workload in [
            // Gap in the reference
            Workload {
                query: "ACGTTGCA",
                reference: "ACGTGCA",
                score: 31,
                alignments: vec![("ACGTTGCA", "ACGT_GCA")],
            },
            // Gap in the query
            Workload {
                query: "ACGTGCA",
                reference: "ACGTTGCA",
                score: 31,
                alignments: vec![("ACGT_GCA", "ACGTTGCA")],
            },
            // Each gapped symbol costs the same: 7 * 5 - 2 * 4
            Workload {
                query: "ACGTTTGCA",
                reference: "ACGTGCA",
                score: 27,
                alignments: vec![("ACGTTTGCA", "ACGT__GCA")],
            },
        ] {
            ensure(workload);
        }
    }

    #[test]
    fn test_several_optimal_cells() {
        // Tied cells are reported in query-major order
        ensure(Workload {
            query: "AC",
            reference: "CA",
            score: 5,
            alignments: vec![("A", "A"), ("C", "C")],
        });
        ensure(Workload {
            query: "AC",
            reference: "AA",
            score: 5,
            alignments: vec![("A", "A"), ("A", "A")],
        });
    }
}

mod degenerate {
    use super::*;

    #[test]
    fn test_empty() {
        for (query, reference) in [("", "ACGT"), ("ACGT", ""), ("", "")] {
            let engine = aligner(query, reference);
            assert_eq!(engine.max_score(), 0);
            assert!(engine.all_maximal_alignments(0).unwrap().is_empty());
            assert!(engine.optimal().is_empty());
        }
    }

    #[test]
    fn test_no_common_symbols() {
        let engine = aligner("AAAA", "TTT");
        assert_eq!(engine.max_score(), 0);

        // Every interior cell is a zero-score origin and yields an empty alignment
        let pairs = engine.all_maximal_alignments(0).unwrap();
        assert_eq!(pairs.len(), 4 * 3);
        assert!(pairs.iter().all(|x| x.is_empty()));
    }

    #[test]
    fn test_unreachable_target() {
        let engine = aligner("ACGT", "ACGT");
        assert!(engine.all_maximal_alignments(21).unwrap().is_empty());
        assert!(engine.all_maximal_alignments(-5).unwrap().is_empty());
    }
}

mod scoring_schemes {
    use super::*;

    #[test]
    fn test_custom_scoring() {
        let scoring = scoring::Scoring::new(2, -3, -1).unwrap();
        let engine = Aligner::from_strs("ACGTTTGCA", "ACGTGCA", scoring).unwrap();
        assert_eq!(engine.max_score(), 12);
        assert_eq!(
            engine.all_maximal_alignments(12).unwrap(),
            vec![pair("ACGTTTGCA", "ACGT__GCA")]
        );
    }

    #[test]
    fn test_bytes_and_wide_scores() {
        let query: &[u8] = b"GCTGGAAGGCAT";
        let reference: &[u8] = b"GCAGAGCACG";
        let engine =
            sw::Aligner::<i64, u8>::new(&query, &reference, scoring::Scoring::default()).unwrap();
        assert_eq!(engine.max_score(), 22);
        assert_eq!(
            engine.all_maximal_alignments(22).unwrap(),
            vec![pair("GAAG_GCA", "GCAGAGCA")]
        );
    }

    #[test]
    fn test_invalid_scoring() {
        assert!(scoring::Scoring::<Score>::new(5, -4, 4).is_err());
        assert!(scoring::Scoring::<Score>::new(-5, -4, -4).is_err());
    }
}

mod properties {
    use super::*;

    const SEQUENCES: &[&str] = &[
        "",
        "A",
        "ACGT",
        "GCTGGAAGGCAT",
        "GCAGAGCACG",
        "TTTTTTTT",
        "ACACACGTGTGT",
        "AGGTCCAGTA",
    ];

    #[test]
    fn test_score_is_never_negative() {
        for query in SEQUENCES {
            for reference in SEQUENCES {
                let engine = aligner(query, reference);
                let scores = engine.scores();
                assert!(scores.iter_rows().flatten().all(|x| *x >= 0));
                assert!(engine.max_score() >= 0);
            }
        }
    }

    #[test]
    fn test_swap_symmetry() {
        for query in SEQUENCES {
            for reference in SEQUENCES {
                assert_eq!(
                    aligner(query, reference).max_score(),
                    aligner(reference, query).max_score()
                );
            }
        }
    }

    #[test]
    fn test_idempotence() {
        let engine = aligner("GCTGGAAGGCAT", "GCAGAGCACG");
        let first = (engine.max_score(), engine.all_maximal_alignments(18).unwrap());
        for _ in 0..3 {
            let again = (engine.max_score(), engine.all_maximal_alignments(18).unwrap());
            assert_eq!(first, again);
        }
        assert_eq!(
            first.1,
            vec![
                pair("GAAG_GCA_", "GCAGAGCAC"),
                pair("GAAG_GCAT", "GCAGAGCA_"),
                pair("GAAG_GCAT", "GCAGAGCAC"),
            ]
        );
    }

    #[test]
    fn test_alignments_end_on_target_cells() {
        let engine = aligner("GCTGGAAGGCAT", "GCAGAGCACG");
        for target in [5, 10, 13, 18, 22] {
            for aln in engine.alignments(target) {
                assert_eq!(*aln.score(), target);
                assert_eq!(engine.scores()[(aln.seq1().end, aln.seq2().end)], target);
                assert_eq!(engine.scores()[(aln.seq1().start, aln.seq2().start)], 0);
            }
        }
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_render() {
        let engine = aligner("AC", "CA");
        assert_eq!(
            engine.render().to_string(),
            "      C  A\n   0  0  0\nA  0  0  5\nC  0  5  1\n"
        );
        assert_eq!(
            engine.render_directions().to_string(),
            "      C  A\n   Z  Z  Z\nA  Z  Z  D\nC  Z  D  U\n"
        );
    }
}
