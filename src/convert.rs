//! External save converter invocation
//!
//! The actual format work is done by a separate command-line tool
//! (`uesave`). This module only builds its command line, runs it, and turns
//! failures into something printable.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    SavToJson,
    JsonToSav,
}

impl ConversionMode {
    /// Subcommand understood by the converter
    pub fn flag(&self) -> &'static str {
        match self {
            ConversionMode::SavToJson => "to-json",
            ConversionMode::JsonToSav => "from-json",
        }
    }

    /// Extension of files this mode reads
    pub fn input_extension(&self) -> &'static str {
        match self {
            ConversionMode::SavToJson => "sav",
            ConversionMode::JsonToSav => "json",
        }
    }

    /// Extension of files this mode writes
    pub fn output_extension(&self) -> &'static str {
        match self {
            ConversionMode::SavToJson => "json",
            ConversionMode::JsonToSav => "sav",
        }
    }

    /// Output lands next to the input with the extension swapped
    pub fn output_path(&self, input: &Path) -> PathBuf {
        input.with_extension(self.output_extension())
    }
}

/// Why a conversion did not produce output
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    /// The converter could not be started
    #[error("could not start {}: {source}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The converter ran and exited non-zero
    #[error("{}", exit_summary(.code, .stderr))]
    Failed { code: Option<i32>, stderr: String },
}

fn exit_summary(code: &Option<i32>, stderr: &str) -> String {
    let mut summary = match code {
        Some(code) => format!("converter exited with status {code}"),
        None => "converter was terminated by a signal".to_string(),
    };
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        summary.push_str(": ");
        summary.push_str(stderr);
    }
    summary
}

/// Runs the external converter
#[derive(Debug, Clone)]
pub struct Converter {
    program: PathBuf,
}

impl Converter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `<program> <flag> -i <input> -o <output>`
    pub fn command(&self, mode: ConversionMode, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(mode.flag()).arg("-i").arg(input).arg("-o").arg(output);
        cmd
    }

    /// Convert `input`, returning the path written
    pub fn run(&self, mode: ConversionMode, input: &Path) -> Result<PathBuf, ConvertError> {
        if !input.is_file() {
            return Err(ConvertError::MissingInput(input.to_path_buf()));
        }

        let expected = mode.input_extension();
        if input.extension().and_then(|ext| ext.to_str()) != Some(expected) {
            log::warn!("{} does not look like a .{} file", input.display(), expected);
        }

        let output = mode.output_path(input);
        log::info!(
            "Running {} {} on {}",
            self.program.display(),
            mode.flag(),
            input.display()
        );

        let result = self
            .command(mode, input, &output)
            .output()
            .map_err(|source| ConvertError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ConvertError::Failed {
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        Ok(output)
    }
}
