use anyhow::Context;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Open an input for buffered reading.
///
/// `stdin` names standard input; files ending in `.gz` are decompressed
/// transparently.
///
/// ```
/// use std::io::BufRead;
/// let reader = lcsq::reader("tests/seqs/pair.fa").unwrap();
/// assert_eq!(reader.lines().count(), 4);
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    if input == "stdin" {
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }

    let path = std::path::Path::new(input);
    let file = std::fs::File::open(path)
        .with_context(|| format!("could not open {}", path.display()))?;

    let reader: Box<dyn BufRead> = if path.extension() == Some(std::ffi::OsStr::new("gz")) {
        Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(reader)
}

/// Open an output for buffered writing. `stdout` names standard output.
pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("could not create {}", output))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_reader_plain_and_gz() {
        let dir = tempdir().unwrap();

        let plain_path = dir.path().join("plain.txt");
        std::fs::write(&plain_path, "one\ntwo\n").unwrap();

        let gz_path = dir.path().join("packed.txt.gz");
        {
            let file = std::fs::File::create(&gz_path).unwrap();
            let mut encoder = GzEncoder::new(file, flate2::Compression::default());
            writeln!(encoder, "one").unwrap();
            writeln!(encoder, "two").unwrap();
            encoder.finish().unwrap();
        }

        for path in [&plain_path, &gz_path] {
            let reader = reader(path.to_str().unwrap()).unwrap();
            let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
            assert_eq!(lines, vec!["one", "two"]);
        }
    }

    #[test]
    fn test_reader_missing_file() {
        assert!(reader("does/not/exist.txt").is_err());
    }
}
