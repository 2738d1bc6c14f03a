use std::io::BufRead;

/// Read every record of a FASTA stream as a `(name, sequence)` pair,
/// preserving input order.
pub fn read_records(reader: Box<dyn BufRead>) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    let mut fa_in = noodles_fasta::io::Reader::new(reader);

    let mut records = Vec::new();
    for result in fa_in.records() {
        let record = result?;
        let name = String::from_utf8(record.name().into())?;
        let seq = record.sequence().get(..).unwrap().to_vec();
        records.push((name, seq));
    }

    Ok(records)
}
