//! Result files: detailed JSONL (optionally gzipped) and a CSV summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

type BoxError = Box<dyn std::error::Error>;

pub struct OutputWriter {
    jsonl: Option<(Box<dyn Write + Send>, PathBuf)>,
    csv: csv::Writer<BufWriter<File>>,
    csv_path: PathBuf,
}

/// File stem shared by every output of one run, e.g. `wiezen_2026-10-16T09-30-00Z`.
fn run_stem() -> String {
    let stamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());
    format!("wiezen_{}", stamp.replace(':', "-"))
}

fn open_jsonl(dir: &Path, stem: &str, compress: bool) -> Result<(Box<dyn Write + Send>, PathBuf), BoxError> {
    let path = dir.join(format!("{stem}.jsonl"));
    if compress {
        let gz_path = path.with_extension("jsonl.gz");
        let encoder = GzEncoder::new(File::create(&gz_path)?, Compression::default());
        Ok((Box::new(BufWriter::new(encoder)), gz_path))
    } else {
        Ok((Box::new(BufWriter::new(File::create(&path)?)), path))
    }
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: &OutputFormat, compress: bool) -> Result<Self, BoxError> {
        Self::with_stem(Path::new(output_dir), &run_stem(), format, compress)
    }

    fn with_stem(
        dir: &Path,
        stem: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, BoxError> {
        std::fs::create_dir_all(dir)?;

        let jsonl = match format {
            OutputFormat::Jsonl => Some(open_jsonl(dir, stem, compress)?),
            OutputFormat::None => None,
        };

        // Header comes from the first serialized row.
        let csv_path = dir.join(format!("{stem}_summary.csv"));
        let csv = csv::Writer::from_writer(BufWriter::new(File::create(&csv_path)?));

        Ok(Self {
            jsonl,
            csv,
            csv_path,
        })
    }

    /// Append one game: a JSONL line (when enabled) and a CSV row.
    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), BoxError> {
        if let Some((writer, _)) = self.jsonl.as_mut() {
            serde_json::to_writer(&mut *writer, metrics)?;
            writeln!(writer)?;
        }
        self.csv.serialize(CsvSummaryRow::from(metrics))?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<PathBuf>, PathBuf) {
        (
            self.jsonl.as_ref().map(|(_, p)| p.clone()),
            self.csv_path.clone(),
        )
    }

    pub fn finish(mut self) -> Result<(), BoxError> {
        if let Some((mut writer, _)) = self.jsonl.take() {
            writer.flush()?;
        }
        self.csv.flush()?;
        Ok(())
    }
}
