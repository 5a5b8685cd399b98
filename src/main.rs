use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::config::LOG_FILTER_ENV;
use gitlet::errors::{RepositoryError, RepositoryResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A minimal local version control system",
    long_about = "Gitlet keeps content-addressed snapshots of files in a .gitlet directory. \
    It tracks a linear history per branch and is meant to show the core ideas of a \
    version control system rather than replace one.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, help = "The path to the repository (defaults to the current directory)")]
    path: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .gitlet directory with a root commit and the default branch."
    )]
    Init,
    #[command(name = "add", about = "Stage a file for addition")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "rm",
        about = "Stage a file for removal",
        long_about = "This command marks a file as removed in the next commit. The working copy is kept."
    )]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "reset", about = "Drop a staged addition")]
    Reset {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
        #[arg(index = 1, conflicts_with = "message", help = "The commit message")]
        positional_message: Option<String>,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists branches, staged and removed files, unstaged modifications, and untracked files."
    )]
    Status,
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints a stored blob or commit. It requires the id of the object."
    )]
    CatFile {
        #[arg(index = 1)]
        sha: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(RepositoryError::User(error)) => {
            println!("{error}");
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error, "command failed");
            Err(error.into())
        }
    }
}

fn run(cli: &Cli) -> RepositoryResult<()> {
    let path = match &cli.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?.to_string_lossy().to_string(),
    };
    let repository = Repository::new(&path, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Init => repository.init().map(|_| ()),
        Commands::Add { file } => repository.add(file),
        Commands::Rm { file } => repository.rm(file),
        Commands::Reset { file } => repository.reset(file),
        Commands::Commit {
            message,
            positional_message,
        } => {
            let message = message.as_deref().or(positional_message.as_deref()).unwrap_or("");
            repository.commit(message).map(|_| ())
        }
        Commands::Log => repository.show_log(),
        Commands::GlobalLog => repository.show_global_log(),
        Commands::Find { message } => repository.show_find(message),
        Commands::Status => repository.show_status(),
        Commands::Branch { name } => repository.branch(name).map(|_| ()),
        Commands::RmBranch { name } => repository.rm_branch(name).map(|_| ()),
        Commands::CatFile { sha } => repository.cat_file(sha).map(|_| ()),
    }
}
