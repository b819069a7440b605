use std::io::Write;

use crate::{BenchResult, Result};

pub const HEADER: &str = "algorithm,keyGenTimeMs,encryptOrSignTimeMs,decryptOrVerifyTimeMs,keySizeBits,publicKeyBytes,privateKeyBytes,symmetricKeyBytes,signatureBytes";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// CSV table of benchmark results: a header followed by one row per
/// primitive, in the order the results were measured.
#[derive(Debug, Clone)]
pub struct Report {
    rows: Vec<BenchResult>,
}

impl Report {
    pub fn new(rows: Vec<BenchResult>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[BenchResult] {
        &self.rows
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}{}", HEADER, LINE_ENDING)?;
        for row in &self.rows {
            write!(out, "{}{}", format_row(row), LINE_ENDING)?;
        }
        Ok(())
    }
}

pub fn format_row(r: &BenchResult) -> String {
    format!(
        "{},{:.3},{:.3},{:.3},{},{},{},{},{}",
        r.algorithm,
        r.key_gen_time_ms,
        r.encrypt_time_ms,
        r.decrypt_time_ms,
        r.key_size_bits,
        r.public_key_size_bytes,
        r.private_key_size_bytes,
        r.symmetric_key_size_bytes,
        r.signature_size_bytes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, ArtifactSizes};

    fn aes_row() -> BenchResult {
        let mut result = BenchResult::new(Algorithm::Aes, 256);
        result.key_gen_time_ms = 0.42;
        result.encrypt_time_ms = 0.0871;
        result.decrypt_time_ms = 0.06349;
        result.set_sizes(ArtifactSizes {
            symmetric_key_bytes: 32,
            ..ArtifactSizes::default()
        });
        result
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&aes_row()), "AES,0.420,0.087,0.063,256,0,0,32,0");
    }

    #[test]
    fn test_write_header_and_rows() {
        let report = Report::new(vec![aes_row(), BenchResult::new(Algorithm::Rsa, 2048)]);
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "AES,0.420,0.087,0.063,256,0,0,32,0");
        assert_eq!(lines[2], "RSA,0.000,0.000,0.000,2048,0,0,0,0");
        assert!(text.ends_with(LINE_ENDING));
    }

    #[test]
    fn test_header_has_nine_columns() {
        assert_eq!(HEADER.split(',').count(), 9);
    }
}
