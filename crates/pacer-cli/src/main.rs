mod config;
mod day_cmd;
mod export_cmd;
mod new_cmd;
mod project_cmds;
mod resolve;
mod roadmap_cmd;
mod task_cmds;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use pacer_store::store::ProjectStore;

use config::PacerConfig;

#[derive(Parser)]
#[command(name = "pacer", about = "AI-assisted personal task-roadmap planner")]
struct Cli {
    /// Generator command (overrides PACER_GENERATOR_CMD env var)
    #[arg(long, global = true)]
    generator: Option<String>,

    /// Data directory (overrides PACER_DATA_DIR env var)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a pacer config file
    Init {
        /// Generator command to record in the config
        #[arg(long, default_value = config::DEFAULT_GENERATOR_COMMAND)]
        generator_cmd: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create a project: check feasibility, generate a roadmap, save it
    New {
        /// Project name
        #[arg(long)]
        name: String,
        /// Main goal (be specific)
        #[arg(long)]
        goal: String,
        /// Knowledge level, available resources, other context
        #[arg(long, default_value = "")]
        background: String,
        /// Buffer priority: on_time, in_time, or just_done
        #[arg(long, default_value = "on_time")]
        priority: String,
        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,
        /// Target end date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Available hours per day
        #[arg(long, default_value_t = 2.0)]
        hours: f64,
        /// Attach a file for the generator (repeatable)
        #[arg(long)]
        attach: Vec<PathBuf>,
    },
    /// List projects
    Projects,
    /// Switch the active project
    Use {
        /// Project name, ID, or unique ID prefix
        project: String,
    },
    /// Delete a project and all of its tasks
    Delete {
        /// Project name, ID, or unique ID prefix (defaults to the active project)
        project: Option<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show one day's schedule for the active project
    Day {
        /// Date to show (YYYY-MM-DD, defaults to the earliest scheduled day)
        date: Option<String>,
    },
    /// Task mutations
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Move a task to a new position within its day
    Move {
        /// Task ID or unique ID prefix
        task: String,
        /// New position in the day's list (0-based)
        to: usize,
    },
    /// Full-roadmap overview and bulk edits
    Roadmap {
        #[command(subcommand)]
        command: Option<RoadmapCommands>,
    },
    /// Print a calendar-event URL for one day's focus session
    Export {
        /// Date to export (YYYY-MM-DD, defaults to the earliest scheduled day)
        date: Option<String>,
        /// Session start time (HH:MM)
        #[arg(long, default_value = "14:00")]
        from: String,
        /// Session end time (HH:MM)
        #[arg(long, default_value = "19:00")]
        to: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Toggle a task between complete and incomplete
    Toggle {
        /// Task ID or unique ID prefix
        task: String,
    },
    /// Set a task's completion percentage (snapped to steps of 5)
    Progress {
        /// Task ID or unique ID prefix
        task: String,
        /// Percentage (0-100)
        percent: i64,
    },
    /// Replace a task's notes
    Note {
        /// Task ID or unique ID prefix
        task: String,
        /// Notes text
        text: String,
    },
    /// Edit a task's content and/or kind
    Edit {
        /// Task ID or unique ID prefix
        task: String,
        /// New content
        #[arg(long)]
        content: Option<String>,
        /// New kind: normal, review, or check
        #[arg(long)]
        kind: Option<String>,
    },
    /// Push a task to the next scheduled day
    Push {
        /// Task ID or unique ID prefix
        task: String,
    },
}

#[derive(Subcommand)]
pub enum RoadmapCommands {
    /// Print the entire roadmap grouped by day (default)
    Show,
    /// Edit a task's content and/or kind
    Edit {
        /// Task ID or unique ID prefix
        task: String,
        /// New content
        #[arg(long)]
        content: Option<String>,
        /// New kind: normal, review, or check
        #[arg(long)]
        kind: Option<String>,
    },
    /// Delete a task from the roadmap
    Delete {
        /// Task ID or unique ID prefix
        task: String,
    },
}

/// Execute the `pacer init` command: write the config file.
fn cmd_init(generator_cmd: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        generator: config::GeneratorSection {
            command: Some(generator_cmd.to_string()),
        },
        store: config::StoreSection { data_dir: None },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  generator.command = {generator_cmd}");
    println!();
    println!("Next: run `pacer new` to set up your first roadmap.");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Commands that need no store.
    match &cli.command {
        Commands::Init {
            generator_cmd,
            force,
        } => {
            return cmd_init(generator_cmd, *force);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "pacer",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        _ => {}
    }

    let resolved = PacerConfig::resolve(cli.generator.as_deref(), cli.data_dir.clone());
    let store = ProjectStore::open(&resolved.store_config.data_dir)?;

    match cli.command {
        Commands::Init { .. } | Commands::Completions { .. } => unreachable!("handled above"),
        Commands::New {
            name,
            goal,
            background,
            priority,
            start,
            end,
            hours,
            attach,
        } => {
            let args = new_cmd::NewArgs {
                name,
                goal,
                background,
                priority,
                start_date: start,
                end_date: end,
                hours,
                attach,
            };
            new_cmd::run_new(&store, &resolved.generator_command, args).await?;
        }
        Commands::Projects => {
            project_cmds::run_list(&store)?;
        }
        Commands::Use { project } => {
            project_cmds::run_use(&store, &project)?;
        }
        Commands::Delete { project, yes } => {
            project_cmds::run_delete(&store, project.as_deref(), yes)?;
        }
        Commands::Day { date } => {
            day_cmd::run_day(&store, date.as_deref())?;
        }
        Commands::Task { command } => match command {
            TaskCommands::Toggle { task } => task_cmds::run_toggle(&store, &task)?,
            TaskCommands::Progress { task, percent } => {
                task_cmds::run_progress(&store, &task, percent)?
            }
            TaskCommands::Note { task, text } => task_cmds::run_note(&store, &task, &text)?,
            TaskCommands::Edit {
                task,
                content,
                kind,
            } => task_cmds::run_edit(&store, &task, content.as_deref(), kind.as_deref())?,
            TaskCommands::Push { task } => task_cmds::run_push(&store, &task)?,
        },
        Commands::Move { task, to } => {
            task_cmds::run_move(&store, &task, to)?;
        }
        Commands::Roadmap { command } => match command.unwrap_or(RoadmapCommands::Show) {
            RoadmapCommands::Show => roadmap_cmd::run_show(&store)?,
            RoadmapCommands::Edit {
                task,
                content,
                kind,
            } => roadmap_cmd::run_edit(&store, &task, content.as_deref(), kind.as_deref())?,
            RoadmapCommands::Delete { task } => roadmap_cmd::run_delete(&store, &task)?,
        },
        Commands::Export { date, from, to } => {
            export_cmd::run_export(&store, date.as_deref(), &from, &to)?;
        }
    }

    Ok(())
}
