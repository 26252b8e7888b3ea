use clap::Parser;
use eyre::Result;

use swalign_alignment_rs::pairwise::scoring::Scoring;
use swalign_alignment_rs::pairwise::sw::Aligner;

#[derive(Parser, Debug)]
#[command(name = "swater")]
#[command(about = "Local (Smith-Waterman) alignment of two sequences", long_about = None)]
struct Cli {
    /// Query sequence, placed along the rows of the score matrix
    #[arg(value_name = "QUERY", default_value = "GCTGGAAGGCAT")]
    query: String,

    /// Reference sequence, placed along the columns of the score matrix
    #[arg(value_name = "REFERENCE", default_value = "GCAGAGCACG")]
    reference: String,

    /// Score for identical symbols
    #[arg(short = 'm', long = "match", value_name = "INT", default_value_t = 5)]
    matched: i32,

    /// Score for different symbols
    #[arg(short = 'x', long, value_name = "INT", default_value_t = -4, allow_hyphen_values = true)]
    mismatch: i32,

    /// Score for every gapped symbol
    #[arg(short = 'g', long, value_name = "INT", default_value_t = -4, allow_hyphen_values = true)]
    gap: i32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Locally aligning the following strings:");
    println!("String q: {}", cli.query);
    println!("String p: {}", cli.reference);

    let scoring = Scoring::new(cli.matched, cli.mismatch, cli.gap)?;
    let aligner = Aligner::from_strs(&cli.query, &cli.reference, scoring)?;

    let report = aligner.report(aligner.max_score())?;
    log::info!(
        "Found {} alignment(s) with score {}",
        report.pairs().len(),
        report.score()
    );
    println!("{report}");

    println!("Printing out the Scoring Matrix for the alignment:\n");
    print!("{}", aligner.render());
    Ok(())
}
