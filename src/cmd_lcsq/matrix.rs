use clap::*;
use itertools::Itertools;
use std::io::Write;

use lcsq::libs::{fasta, lcs};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("matrix")
        .about("Pairwise LCS-length matrix over a sequence collection")
        .after_help(
            r###"
This command computes the longest-common-subsequence length for every ordered pair
of records in the input, the diagonal included, and writes the full grid.

The output follows the relaxed PHYLIP shape: a count line, then one line per
record with its name and the row values, tab-separated. Rows and columns keep the
input order, the grid is symmetric and the diagonal holds each sequence's own
length.

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. Matrix over all records of a FASTA file:
   lcsq matrix input.fa

2. Save the grid for `pgr mat`:
   lcsq matrix input.fa -o matrix.phy

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file. [stdin] for standard input"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = lcsq::writer(args.get_one::<String>("outfile").unwrap())?;

    let records = fasta::read_records(lcsq::reader(args.get_one::<String>("infile").unwrap())?)?;
    let (names, seqs): (Vec<String>, Vec<Vec<u8>>) = records.into_iter().unzip();

    let matrix = lcs::pairwise_matrix(&seqs);

    writer.write_fmt(format_args!("{}\n", names.len()))?;
    for (name, row) in names.iter().zip(matrix.iter()) {
        writer.write_fmt(format_args!("{}\t{}\n", name, row.iter().join("\t")))?;
    }

    Ok(())
}
