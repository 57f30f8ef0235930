//! CLI runner - executes commands

use crate::classify::StringFormat;
use crate::cli::commands::{Cli, Commands, EmitArgs, OutputFormat};
use crate::config::InferConfig;
use crate::emit::EmitOptions;
use crate::error::{Error, Result, ResultExt};
use crate::input::decoder_for;
use crate::session::{Session, Snapshot};
use serde_json::{json, Value};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the CLI command, writing results to `out`
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Infer {
                files,
                input_format,
                record_path,
                split_arrays,
                resume,
                save_snapshot,
                emit,
            } => {
                let mut config = self.load_config()?;
                if let Some(format) = input_format {
                    config.input.format = *format;
                }
                if let Some(path) = record_path {
                    config.input.record_path = Some(path.clone());
                }
                if *split_arrays {
                    config.input.split_arrays = true;
                }
                config.validate()?;
                self.infer(
                    out,
                    &config,
                    files,
                    resume.as_deref(),
                    save_snapshot.as_deref(),
                    *emit,
                )
            }
            Commands::Render { snapshot, emit } => {
                let config = self.load_config()?;
                self.render(out, &config, snapshot, *emit)
            }
            Commands::Formats => self.formats(out),
        }
    }

    /// Load configuration from `--config`, or defaults
    fn load_config(&self) -> Result<InferConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading config");
                InferConfig::from_file(path)
            }
            None => Ok(InferConfig::default()),
        }
    }

    /// Infer a schema from files or stdin
    fn infer<W: Write>(
        &self,
        out: &mut W,
        config: &InferConfig,
        files: &[PathBuf],
        resume: Option<&Path>,
        save_snapshot: Option<&Path>,
        emit: EmitArgs,
    ) -> Result<()> {
        let classifier = config.classifier();
        let mut session = match resume {
            Some(path) => {
                let snapshot = Snapshot::from_file(path)?;
                info!(
                    path = %path.display(),
                    observations = snapshot.observations,
                    "Resuming from snapshot"
                );
                Session::resume_with_classifier(snapshot, classifier)?
            }
            None => Session::with_classifier(classifier),
        };

        let decoder = decoder_for(&config.input);

        if files.is_empty() {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            let records = decoder.decode(&body).context("stdin")?;
            info!(records = records.len(), "Read stdin");
            session.observe_all(&records);
        } else {
            for path in files {
                let body = read_input(path)?;
                let records = decoder
                    .decode(&body)
                    .with_context(|| path.display().to_string())?;
                info!(path = %path.display(), records = records.len(), "Read input");
                session.observe_all(&records);
            }
        }

        if let Some(path) = save_snapshot {
            session.export_snapshot().save(path)?;
            info!(path = %path.display(), "Saved snapshot");
        }

        info!(
            observations = session.observations(),
            root = session.inferred().kind_name(),
            "Inference complete"
        );

        let schema = session.render(&self.emit_options(config, emit));
        self.output_message(out, &schema.to_json())
    }

    /// Render the schema held in a snapshot
    fn render<W: Write>(
        &self,
        out: &mut W,
        config: &InferConfig,
        path: &Path,
        emit: EmitArgs,
    ) -> Result<()> {
        let snapshot = Snapshot::from_file(path)?;
        let session = Session::resume_with_classifier(snapshot, config.classifier())?;
        info!(
            path = %path.display(),
            observations = session.observations(),
            "Loaded snapshot"
        );

        let schema = session.render(&self.emit_options(config, emit));
        self.output_message(out, &schema.to_json())
    }

    /// List recognized string formats
    fn formats<W: Write>(&self, out: &mut W) -> Result<()> {
        let formats: Vec<Value> = StringFormat::ALL
            .iter()
            .map(|format| {
                json!({
                    "name": format.name(),
                    "json_schema_format": format.json_schema_format()
                })
            })
            .collect();

        self.output_message(out, &json!({ "formats": formats }))
    }

    /// Combine config emit settings with command-line flags
    fn emit_options(&self, config: &InferConfig, emit: EmitArgs) -> EmitOptions {
        let mut options = config.emit;
        if emit.include_schema {
            options.include_document_wrapper = true;
        }
        if emit.bounds {
            options.numeric_bounds = true;
        }
        options
    }

    /// Output a message
    fn output_message<W: Write>(&self, out: &mut W, msg: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
        };
        writeln!(out, "{text}")?;
        Ok(())
    }
}

/// Read an input file
fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
