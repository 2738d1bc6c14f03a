use anyhow::Context;
use clap::*;
use std::io::Write;

use lcsq::libs::{fasta, lcs};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("pair")
        .about("All longest common subsequences of two sequences")
        .after_help(
            r###"
This command enumerates every distinct longest common subsequence of a pair of
sequences and prints them in lexicographic order.

The first output line is `<name1>\t<name2>\t<length>`; each following line is one
subsequence. When the two sequences share no symbol at all, the length is 0 and no
subsequence lines are printed.

Notes:
* With two input files, the first record of each is compared
* With one input file, its first two records are compared
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. Compare the first two records of one file:
   lcsq pair input.fa

2. Compare records from two files:
   lcsq pair query.fa target.fa

3. Report the length only:
   lcsq pair input.fa --length

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..=2)
                .index(1)
                .help("Input FASTA file(s), one or two"),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .action(ArgAction::SetTrue)
                .help("Print the header line only"),
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
    let length_only = args.get_flag("length");

    let infiles: Vec<&String> = args.get_many::<String>("infiles").unwrap().collect();

    let ((name1, seq1), (name2, seq2)) = if infiles.len() == 2 {
        let first = fasta::read_records(lcsq::reader(infiles[0])?)?
            .into_iter()
            .next()
            .with_context(|| format!("no sequences in {}", infiles[0]))?;
        let second = fasta::read_records(lcsq::reader(infiles[1])?)?
            .into_iter()
            .next()
            .with_context(|| format!("no sequences in {}", infiles[1]))?;
        (first, second)
    } else {
        let mut records = fasta::read_records(lcsq::reader(infiles[0])?)?.into_iter();
        let first = records
            .next()
            .with_context(|| format!("no sequences in {}", infiles[0]))?;
        let second = records
            .next()
            .with_context(|| format!("fewer than two sequences in {}", infiles[0]))?;
        (first, second)
    };

    let table = lcs::LcsTable::build(&seq1, &seq2);
    match lcs::enumerate_all(&seq1, &seq2, &table) {
        Some((seqs, len)) => {
            writer.write_fmt(format_args!("{}\t{}\t{}\n", name1, name2, len))?;
            if !length_only {
                for s in seqs {
                    writer.write_all(&s)?;
                    writer.write_all(b"\n")?;
                }
            }
        }
        None => {
            writer.write_fmt(format_args!("{}\t{}\t0\n", name1, name2))?;
        }
    }

    Ok(())
}
