use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use lipi_session::{RecordError, SessionRecorder, SessionSummary};

/// Appends one JSON object per finished session to a file.
pub struct JsonlRecorder {
    path: PathBuf,
}

impl JsonlRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every recorded summary, oldest first. A missing file holds
    /// no records.
    pub fn load(&self) -> Result<Vec<SessionSummary>, RecordError> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut out = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let summary =
                serde_json::from_str(&line).map_err(|e| RecordError::Serialize(e.to_string()))?;
            out.push(summary);
        }
        Ok(out)
    }
}

impl SessionRecorder for JsonlRecorder {
    fn record(&self, summary: &SessionSummary) -> Result<(), RecordError> {
        let line =
            serde_json::to_string(summary).map_err(|e| RecordError::Serialize(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
