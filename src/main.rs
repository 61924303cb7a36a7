use anyhow::Result;
use clap::{Parser, Subcommand};
use jot::areas::repository::Repository;
use std::io::Write;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A minimal content-addressed version control engine",
    long_about = "jot is a minimal version control engine: a content-addressed \
    object store layered under branch refs, a HEAD pointer, a staging index \
    and a stash stack. It is a learning project, not a git replacement.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository")]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Add file contents to the index")]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(name = "commit", about = "Record changes to the repository")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show commit logs")]
    Log,
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(name = "branch", about = "List, create, or delete branches")]
    Branch {
        #[command(subcommand)]
        command: Option<BranchCommands>,
    },
    #[command(name = "stash", about = "Stash the staged changes")]
    Stash {
        #[command(subcommand)]
        command: Option<StashCommands>,
    },
}

#[derive(Subcommand)]
enum BranchCommands {
    #[command(about = "List all branches")]
    List,
    #[command(about = "Create a new branch at the current HEAD")]
    Create { name: String },
    #[command(about = "Switch to a branch")]
    Checkout { name: String },
    #[command(about = "Delete a branch")]
    Delete { name: String },
    #[command(about = "Merge a branch into the current branch (stub)")]
    Merge { name: String },
    #[command(about = "Reapply commits on top of another base tip (stub)")]
    Rebase { name: String },
}

#[derive(Subcommand)]
enum StashCommands {
    #[command(about = "Save the staged changes to a new stash")]
    Push {
        #[arg(short, long, help = "The stash message")]
        message: Option<String>,
    },
    #[command(about = "List all stashes")]
    List,
    #[command(about = "Show the contents of a stash")]
    Show {
        #[arg(index = 1, default_value = "stash@{0}")]
        stash: String,
    },
    #[command(about = "Re-stage the entries of a stash")]
    Apply {
        #[arg(index = 1, default_value = "stash@{0}")]
        stash: String,
    },
    #[command(about = "Remove a stash from the stash list")]
    Drop {
        #[arg(index = 1, default_value = "stash@{0}")]
        stash: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let path = path.clone().unwrap_or_else(|| ".".to_string());
            let repository = Repository::new(Path::new(&path), Box::new(std::io::stdout()))?;

            repository.init()?
        }
        command => {
            let pwd = std::env::current_dir()?;
            let mut repository = Repository::locate(&pwd, Box::new(std::io::stdout()))?;

            match command {
                Commands::Init { .. } => unreachable!(),
                Commands::Add { file } => repository.add(file)?,
                Commands::Commit { message } => repository.commit(message)?,
                Commands::Log => repository.log()?,
                Commands::Status => repository.status()?,
                Commands::Branch { command } => match command {
                    None | Some(BranchCommands::List) => repository.branch_list()?,
                    Some(BranchCommands::Create { name }) => repository.branch_create(name)?,
                    Some(BranchCommands::Checkout { name }) => repository.branch_checkout(name)?,
                    Some(BranchCommands::Delete { name }) => repository.branch_delete(name)?,
                    Some(BranchCommands::Merge { name }) => repository.branch_merge(name)?,
                    Some(BranchCommands::Rebase { name }) => repository.branch_rebase(name)?,
                },
                Commands::Stash { command } => match command {
                    None => writeln!(repository.writer(), "No stash subcommand was used")?,
                    Some(StashCommands::Push { message }) => {
                        repository.stash_push(message.as_deref())?
                    }
                    Some(StashCommands::List) => repository.stash_list()?,
                    Some(StashCommands::Show { stash }) => repository.stash_show(stash)?,
                    Some(StashCommands::Apply { stash }) => repository.stash_apply(stash)?,
                    Some(StashCommands::Drop { stash }) => repository.stash_drop(stash)?,
                },
            }
        }
    }

    Ok(())
}
