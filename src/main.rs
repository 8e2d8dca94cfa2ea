use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use grove::areas::repository::Repository;
use grove::commands::plumbing::cat_file::CatFileMode;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grove",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A content-addressable object store",
    long_about = "This is a minimal content-addressable object store, written in Rust. \
    It stores file content and directory snapshots as immutable, hash-identified objects \
    using the same loose object format as git.",
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
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path. \
        It fails if the repository already exists."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content, type or size of an object",
        long_about = "This command prints information about an object in the repository. \
        It requires the SHA of the object to be specified.",
        group(ArgGroup::new("mode").required(true).multiple(false))
    )]
    CatFile {
        #[arg(short = 'p', group = "mode", help = "Pretty-print the object content")]
        pretty: bool,
        #[arg(short = 't', group = "mode", help = "Print the object type")]
        show_type: bool,
        #[arg(short = 's', group = "mode", help = "Print the object size")]
        size: bool,
        #[arg(index = 1, help = "The object SHA")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command computes the object ID of a file as a blob and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree, or of the tree of a commit."
    )]
    LsTree {
        #[arg(long, help = "Print only the entry names, sorted")]
        name_only: bool,
        #[arg(index = 1, help = "The tree or commit SHA")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Store the working directory as a tree object",
        long_about = "This command stores every file of the working directory as a blob and every \
        directory as a tree, then prints the ID of the root tree."
    )]
    WriteTree,
    #[command(
        name = "commit-tree",
        about = "Create a commit object for a tree",
        long_about = "This command creates a commit object for an existing tree, with an optional parent. \
        Identities are read from GIT_AUTHOR_* and GIT_COMMITTER_* environment variables."
    )]
    CommitTree {
        #[arg(index = 1, help = "The tree SHA")]
        tree: String,
        #[arg(short, long, help = "The parent commit SHA")]
        parent: Option<String>,
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
}

fn open_repository(path: Option<&Path>) -> Result<Repository> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    Repository::new(&path, Box::new(std::io::stdout()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut repository = match &cli.command {
        Commands::Init { path } => open_repository(path.as_deref())?,
        _ => open_repository(None)?,
    };

    match &cli.command {
        Commands::Init { .. } => repository.init()?,
        Commands::CatFile {
            pretty,
            show_type,
            sha,
            ..
        } => {
            // clap guarantees exactly one of -p, -t and -s
            let mode = if *pretty {
                CatFileMode::Pretty
            } else if *show_type {
                CatFileMode::Type
            } else {
                CatFileMode::Size
            };

            repository.cat_file(sha, mode)?
        }
        Commands::HashObject { write, file } => repository.hash_object(file, *write)?,
        Commands::LsTree { name_only, sha } => repository.ls_tree(sha, *name_only)?,
        Commands::WriteTree => repository.write_tree().await?,
        Commands::CommitTree {
            tree,
            parent,
            message,
        } => repository.commit_tree(tree, parent.as_deref(), message)?,
    }

    repository.writer().flush()?;

    Ok(())
}
