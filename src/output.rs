//! Transcript rendering: SRT, plain text, and JSON.
//!
//! All three files are derived from the same [`TranscriptResult`] and share a
//! base name; the byte layout of the SRT and text files is fixed so repeated
//! runs over identical input produce identical output.

use crate::error::Result;
use crate::transcript::TranscriptResult;
use crate::transcript::timestamp::format_timestamp;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Paths of the three files produced by one run.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub srt: PathBuf,
    pub txt: PathBuf,
    pub json: PathBuf,
}

/// Renders a transcript into the three output formats.
#[derive(Debug, Default)]
pub struct OutputWriter;

impl OutputWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `{base_name}.srt`, `{base_name}.txt`, and `{base_name}.json`
    /// flat into `output_dir`, creating the directory and parents if absent.
    ///
    /// Filesystem failures propagate; they are environment problems, not
    /// pipeline outcomes.
    pub fn write(
        &self,
        transcript: &TranscriptResult,
        output_dir: &Path,
        base_name: &str,
    ) -> Result<OutputPaths> {
        fs::create_dir_all(output_dir)?;

        let paths = OutputPaths {
            srt: output_dir.join(format!("{base_name}.srt")),
            txt: output_dir.join(format!("{base_name}.txt")),
            json: output_dir.join(format!("{base_name}.json")),
        };

        self.write_srt(transcript, &paths.srt)?;
        self.write_txt(transcript, &paths.txt)?;
        self.write_json(transcript, &paths.json)?;

        Ok(paths)
    }

    /// Sequential 1-based cue numbers, `HH:MM:SS,mmm --> HH:MM:SS,mmm`
    /// timestamp line, speaker-prefixed text, blank separator after each cue.
    fn write_srt(&self, transcript: &TranscriptResult, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for (cue, segment) in transcript.segments.iter().enumerate() {
            writeln!(out, "{}", cue + 1)?;
            writeln!(
                out,
                "{} --> {}",
                format_timestamp(segment.start),
                format_timestamp(segment.end)
            )?;
            writeln!(out, "{}", segment.display_text())?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Bracketed `[start --> end]` timestamp line, then the text, then a
    /// blank line per segment.
    fn write_txt(&self, transcript: &TranscriptResult, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for segment in &transcript.segments {
            writeln!(
                out,
                "[{} --> {}]",
                format_timestamp(segment.start),
                format_timestamp(segment.end)
            )?;
            writeln!(out, "{}", segment.display_text())?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Full segment sequence with every populated field, pretty-printed,
    /// non-ASCII preserved literally.
    fn write_json(&self, transcript: &TranscriptResult, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(transcript)?;
        fs::write(path, json)?;
        Ok(())
    }
}
