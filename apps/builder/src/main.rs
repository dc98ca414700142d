mod composer;
mod config;
mod errors;
mod export;
mod i18n;
mod models;
mod state;
mod wizard;

use std::io::{self, BufRead, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::composer::compose;
use crate::config::Config;
use crate::errors::AppError;
use crate::export::{
    export_file_name, DiskExporter, ExportFormat, ExportOutcome, ExportSession,
};
use crate::i18n::{Language, LanguageId, LanguageStore, Translations};
use crate::models::FormData;
use crate::state::AppState;
use crate::wizard::{Step, Wizard};

#[derive(Parser)]
#[command(name = "builder", about = "Resume builder for skilled workers", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose the resume document from a form-data JSON file.
    Compose {
        /// Path to the form-data JSON file.
        #[arg(long)]
        input: PathBuf,
        /// Write the document here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compose and export an artifact into the output directory.
    Export {
        /// Path to the form-data JSON file.
        #[arg(long)]
        input: PathBuf,
        /// Artifact format: pdf, png, or html.
        #[arg(long, default_value = "html")]
        format: String,
        /// Hand the artifact to the share sheet afterwards.
        #[arg(long)]
        share: bool,
        /// Send the document to the print dialog afterwards.
        #[arg(long)]
        print: bool,
        /// Copy the artifact into the gallery album afterwards.
        #[arg(long)]
        gallery: bool,
    },
    /// Run the interactive build flow in the terminal.
    Wizard,
    /// List the supported languages.
    Languages,
    /// Select and persist the app language.
    SetLanguage {
        /// Language id: en, hi, or od.
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first. Everything has a default, so this only
    // fails on a malformed override.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let languages = LanguageStore::load(&config.data_dir);
    let mut state = AppState {
        config,
        languages,
        exports: ExportSession::new(),
    };

    let cli = Cli::parse();
    match cli.command {
        Command::Compose { input, out } => run_compose(&input, out.as_deref())?,
        Command::Export {
            input,
            format,
            share,
            print,
            gallery,
        } => {
            let format = format
                .parse::<ExportFormat>()
                .map_err(AppError::Validation)?;
            let form = load_form(&input)?;
            let document = compose(&form);
            export_document(&state, &form, &document, format, share, print, gallery).await?;
        }
        Command::Wizard => run_wizard(&state).await?,
        Command::Languages => run_languages(&state),
        Command::SetLanguage { id } => run_set_language(&mut state.languages, &id)?,
    }

    Ok(())
}

/// The effective language: the confirmed selection, else the configured
/// default.
fn effective_translations(state: &AppState) -> &'static Translations {
    let id = state
        .languages
        .selected()
        .unwrap_or(state.config.default_language);
    Language::get(id).translations
}

fn load_form(path: &Path) -> Result<FormData, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Validation(format!("invalid form data in {}: {e}", path.display())))
}

fn run_compose(input: &Path, out: Option<&Path>) -> Result<(), AppError> {
    let form = load_form(input)?;
    let document = compose(&form);
    match out {
        Some(path) => {
            std::fs::write(path, &document)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

/// Renders the artifact and runs the requested follow-up targets. Every
/// follow-up failure is surfaced as a dismissible notice and never removes
/// the already-produced file.
async fn export_document(
    state: &AppState,
    form: &FormData,
    document: &str,
    format: ExportFormat,
    share: bool,
    print: bool,
    gallery: bool,
) -> Result<(), AppError> {
    let exporter = DiskExporter::new(state.config.output_dir.clone());
    let session = &state.exports;
    let file_name = export_file_name(&form.full_name, format, Utc::now().timestamp_millis());

    let handle = match session
        .render_to_file(&exporter, document, &file_name)
        .await?
    {
        ExportOutcome::Completed(handle) => handle,
        ExportOutcome::Busy => {
            warn!("An export is already in flight; try again when it finishes");
            return Ok(());
        }
    };
    println!("Saved {}", handle.path().display());

    if print {
        match session.print_document(&exporter, document).await {
            Ok(ExportOutcome::Completed(())) => info!("Sent document to the print dialog"),
            Ok(ExportOutcome::Busy) => warn!("An export is already in flight; print skipped"),
            Err(e) => warn!("Could not print: {e}"),
        }
    }

    if share {
        match session.share(&exporter, &handle).await {
            Ok(ExportOutcome::Completed(())) => info!("Opened the share sheet"),
            Ok(ExportOutcome::Busy) => warn!("An export is already in flight; share skipped"),
            Err(e) => warn!("Could not share: {e}"),
        }
    }

    if gallery {
        match session.save_to_gallery(&exporter, &handle).await {
            Ok(ExportOutcome::Completed(copy)) => {
                println!("Saved to gallery: {}", copy.path().display());
            }
            Ok(ExportOutcome::Busy) => warn!("An export is already in flight; gallery skipped"),
            Err(e) => warn!("Could not save to gallery: {e}"),
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String, AppError> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn run_wizard(state: &AppState) -> Result<(), AppError> {
    let t = effective_translations(state);
    let bt = &t.build;

    println!("{}", bt.title);
    println!("{}\n", bt.subtitle);

    let mut wizard = Wizard::new();
    loop {
        let step = wizard.step();
        println!("[{}/{}] {}", step.number(), Step::COUNT, step.label(bt));

        match step {
            Step::BasicInfo => {
                wizard.form.full_name = prompt(bt.full_name)?;
                wizard.form.age = prompt(bt.age)?;
                wizard.form.gender = prompt(bt.gender)?;
                wizard.form.phone = prompt(bt.phone)?;
                wizard.form.email = prompt(bt.email)?;
                wizard.form.location = prompt(bt.location)?;
            }
            Step::Professional => {
                wizard.form.job_type = prompt(bt.job_type)?;
                wizard.form.experience = prompt(bt.experience)?;
                wizard.form.employer = prompt(bt.employer)?;
            }
            Step::Skills => {
                // Empty line finishes the step; a leading '-' removes a skill.
                println!("{}", bt.add_skills);
                loop {
                    let entry = prompt(bt.add)?;
                    if entry.is_empty() {
                        break;
                    }
                    if let Some(skill) = entry.strip_prefix('-') {
                        wizard.form.remove_skill(skill.trim());
                    } else if !wizard.form.add_skill(&entry) {
                        warn!("Skill ignored (duplicate)");
                    }
                }
            }
            Step::Education => {
                wizard.form.education_level = prompt(bt.education_level)?;
                wizard.form.summary = prompt(bt.summary)?;
            }
        }

        println!("... {}%\n", (wizard.progress() * 100.0).round() as u8);
        if wizard.is_final_step() {
            break;
        }
        wizard.next();
    }

    let choice = prompt(&format!("1. {}  2. {}", bt.save_draft, bt.preview_download))?;
    if choice == "1" {
        // Draft persistence is an external stub; only the confirmation
        // message is produced here.
        println!("{}", wizard.save_draft(bt));
        return Ok(());
    }

    let document = compose(&wizard.form);
    export_document(
        state,
        &wizard.form,
        &document,
        ExportFormat::Html,
        false,
        false,
        false,
    )
    .await?;
    println!("{}", bt.preview_ready);
    Ok(())
}

fn run_languages(state: &AppState) {
    let t = effective_translations(state);
    println!("{}", t.modal_title);
    for lang in Language::all() {
        let marker = if state.languages.selected() == Some(lang.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {} {} ({}) [{}]",
            lang.flag, lang.native_name, lang.name, lang.id
        );
    }
}

fn run_set_language(languages: &mut LanguageStore, id: &str) -> Result<(), AppError> {
    let id = id.parse::<LanguageId>().map_err(AppError::Language)?;
    languages.set_tentative(id);
    languages.confirm()?;

    let lang = Language::get(id);
    println!("{} {} ({})", lang.flag, lang.native_name, lang.name);
    println!("{}", lang.translations.info_text);
    Ok(())
}
