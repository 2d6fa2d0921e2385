//! `pacer new` command: the setup wizard.
//!
//! Assembles a project draft from flags, runs the feasibility negotiation
//! against the configured generator, and persists the materialized project.
//! When the generator suggests adjustments, the options are printed and one
//! is chosen interactively (or the wizard is abandoned, leaving nothing
//! persisted).

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use pacer_core::generator::{Attachment, CliGenerator, RoadmapGenerator};
use pacer_core::schedule::date_set;
use pacer_core::setup::{CheckOutcome, Negotiation};
use pacer_store::models::{Priority, ProjectDraft};
use pacer_store::store::ProjectStore;

/// Flag values collected by the argument parser.
pub struct NewArgs {
    pub name: String,
    pub goal: String,
    pub background: String,
    pub priority: String,
    pub start_date: Option<String>,
    pub end_date: String,
    pub hours: f64,
    pub attach: Vec<PathBuf>,
}

/// Run the setup wizard end to end.
pub async fn run_new(store: &ProjectStore, generator_command: &str, args: NewArgs) -> Result<()> {
    let draft = build_draft(&args)?;
    let attachments = read_attachments(&args.attach)?;
    let generator = CliGenerator::with_binary(generator_command);

    let mut negotiation = Negotiation::new(draft, attachments);

    println!("Checking feasibility with {}...", generator.name());
    let outcome = negotiation.submit(&generator).await?;

    match outcome {
        CheckOutcome::ClearedForGeneration { reasoning } => {
            if !reasoning.is_empty() {
                println!("{reasoning}");
            }
        }
        CheckOutcome::AdjustmentsSuggested { reasoning, options } => {
            println!();
            println!("Adjustments suggested:");
            println!("{reasoning}");
            println!();
            for (idx, option) in options.iter().enumerate() {
                println!(
                    "  {}. [{}] {} (suggested: {})",
                    idx + 1,
                    option.kind,
                    option.description,
                    option.suggested_value
                );
            }
            println!();

            let choice = prompt_option_choice(options.len())?;
            match choice {
                Some(index) => negotiation.apply_option(index)?,
                None => {
                    println!("Wizard abandoned; nothing was saved. Re-run `pacer new` to revise.");
                    return Ok(());
                }
            }
        }
    }

    println!("Generating roadmap...");
    let project = negotiation.generate(&generator).await?;

    let days = date_set(&project.tasks).len();
    let task_count = project.tasks.len();
    let project_id = project.id;
    let project_name = project.name.clone();

    // Newest project goes to the front of the collection and becomes active.
    let mut projects = store.load()?;
    projects.insert(0, project);
    store.save(&projects)?;
    store.save_last_active(project_id)?;
    tracing::info!(project_id = %project_id, tasks = task_count, "project persisted");

    println!();
    println!("Created project {project_name} ({project_id})");
    println!("  {task_count} tasks across {days} days");
    println!("Run `pacer day` to see today's schedule.");

    Ok(())
}

/// Parse and validate the flag values into a draft.
fn build_draft(args: &NewArgs) -> Result<ProjectDraft> {
    let priority: Priority = args
        .priority
        .parse()
        .with_context(|| format!("invalid priority {:?} (expected on_time, in_time, or just_done)", args.priority))?;

    let start_date: NaiveDate = match &args.start_date {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid start date {s:?} (expected YYYY-MM-DD)"))?,
        None => chrono::Local::now().date_naive(),
    };

    let end_date: NaiveDate = args
        .end_date
        .parse()
        .with_context(|| format!("invalid end date {:?} (expected YYYY-MM-DD)", args.end_date))?;

    if args.hours <= 0.0 {
        bail!("--hours must be positive, got {}", args.hours);
    }

    Ok(ProjectDraft {
        name: args.name.clone(),
        goal: args.goal.clone(),
        background: args.background.clone(),
        priority,
        start_date,
        end_date,
        daily_work_time: args.hours,
    })
}

/// Read attachment files and wrap them for the generator.
fn read_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>> {
    paths
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read attachment {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(Attachment {
                name,
                data: base64_encode(&bytes),
                mime_type: guess_mime_type(path).to_string(),
            })
        })
        .collect()
}

/// Read the user's option choice: a 1-based number, or `q` to abandon.
fn prompt_option_choice(available: usize) -> Result<Option<usize>> {
    loop {
        print!("Apply an option [1-{available}], or q to go back and edit: ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        let answer = line.trim();

        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=available).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Please enter a number between 1 and {available}, or q."),
        }
    }
}

/// Guess a MIME type from the file extension. Unknown extensions fall back
/// to `application/octet-stream`.
fn guess_mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("json") => "application/json",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 with padding, as the generator contract expects for
/// attachment payloads.
fn base64_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = chunk.get(1).copied().unwrap_or(0) as u32;
        let b2 = chunk.get(2).copied().unwrap_or(0) as u32;
        let triple = (b0 << 16) | (b1 << 8) | b2;

        out.push(BASE64_ALPHABET[(triple >> 18) as usize & 0x3F] as char);
        out.push(BASE64_ALPHABET[(triple >> 12) as usize & 0x3F] as char);
        out.push(if chunk.len() > 1 {
            BASE64_ALPHABET[(triple >> 6) as usize & 0x3F] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            BASE64_ALPHABET[triple as usize & 0x3F] as char
        } else {
            '='
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> NewArgs {
        NewArgs {
            name: "Test".to_owned(),
            goal: "Finish".to_owned(),
            background: String::new(),
            priority: "on_time".to_owned(),
            start_date: Some("2024-01-01".to_owned()),
            end_date: "2024-02-01".to_owned(),
            hours: 2.0,
            attach: Vec::new(),
        }
    }

    #[test]
    fn draft_builds_from_valid_args() {
        let draft = build_draft(&args()).unwrap();
        assert_eq!(draft.priority, Priority::OnTime);
        assert_eq!(draft.start_date, "2024-01-01".parse::<NaiveDate>().unwrap());
        assert_eq!(draft.daily_work_time, 2.0);
    }

    #[test]
    fn draft_rejects_bad_priority() {
        let mut bad = args();
        bad.priority = "urgent".to_owned();
        assert!(build_draft(&bad).is_err());
    }

    #[test]
    fn draft_rejects_non_positive_hours() {
        let mut bad = args();
        bad.hours = 0.0;
        assert!(build_draft(&bad).is_err());
    }

    #[test]
    fn draft_rejects_malformed_dates() {
        let mut bad = args();
        bad.end_date = "02/01/2024".to_owned();
        assert!(build_draft(&bad).is_err());
    }

    #[test]
    fn base64_known_vectors() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_encode(b"f"), "Zg==");
        assert_eq!(base64_encode(b"fo"), "Zm8=");
        assert_eq!(base64_encode(b"foo"), "Zm9v");
        assert_eq!(base64_encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn mime_guess_by_extension() {
        assert_eq!(guess_mime_type(Path::new("notes.md")), "text/markdown");
        assert_eq!(guess_mime_type(Path::new("scan.PDF")), "application/pdf");
        assert_eq!(
            guess_mime_type(Path::new("mystery.bin")),
            "application/octet-stream"
        );
    }

    #[test]
    fn attachments_read_and_encode() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let attachments = read_attachments(&[path]).unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].name, "notes.txt");
        assert_eq!(attachments[0].data, "aGVsbG8=");
        assert_eq!(attachments[0].mime_type, "text/plain");
    }
}
