extern crate clap;
use clap::*;

mod cmd_lcsq;

fn main() -> anyhow::Result<()> {
    let app = Command::new("lcsq")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`lcsq` - exhaustive Longest Common Subsequence matching")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_lcsq::pair::make_subcommand())
        .subcommand(cmd_lcsq::matrix::make_subcommand())
        .after_help(
            r###"Subcommands:

* pair   - All longest common subsequences of two sequences
* matrix - Pairwise LCS-length matrix over a sequence collection

"###,
        );

    // Check which subcommand the user ran...
    match app.get_matches().subcommand() {
        Some(("pair", sub_matches)) => cmd_lcsq::pair::execute(sub_matches),
        Some(("matrix", sub_matches)) => cmd_lcsq::matrix::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
