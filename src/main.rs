// UML Project
// Command line tool for listing, renaming and saving project members

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use uml_project::core::{find_project_root, AppConfig, Project, ProjectManifest};
use uml_project::operations::ProjectWriter;

#[derive(Debug, Parser)]
#[command(name = "uml-project", version, about = "Manage the members of a UML project")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the members of a project
    Members {
        /// Project directory (defaults to the enclosing project)
        dir: Option<PathBuf>,
    },

    /// Save the project as a single XML document
    Save {
        dir: Option<PathBuf>,

        /// Output file (defaults to <root>/<base name>.xml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent of member elements
        #[arg(long)]
        indent: Option<usize>,

        /// Skip members that cannot be saved instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// Rename a member and update the manifest
    Rename {
        /// Current plain name of the member, e.g. class.pgml
        member: String,

        /// New name, plain or qualified
        new_name: String,

        /// Project directory (defaults to the enclosing project)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::default();

    match cli.command {
        Command::Members { dir } => {
            let (project, _) = open_project(dir.as_deref(), &config)?;
            for member in project.members() {
                println!(
                    "{:<6} {:<32} {}",
                    member.member_type(),
                    member.plain_name().unwrap_or_default(),
                    member.name().unwrap_or_default(),
                );
            }
        }

        Command::Save { dir, output, indent, keep_going } => {
            let (project, root) = open_project(dir.as_deref(), &config)?;
            let output = output.unwrap_or_else(|| root.join(format!("{}.xml", project.base_name())));

            let writer = ProjectWriter::new(indent.unwrap_or(config.persistence.indent))
                .fail_fast(!keep_going);
            let report = writer
                .save_to_path(&project, &output)
                .with_context(|| format!("Failed to save project {}", project.base_name()))?;

            println!("Saved {} members to {}", report.saved, output.display());
            for (name, error) in &report.skipped {
                eprintln!("Skipped {}: {}", name, error);
            }
        }

        Command::Rename { member, new_name, dir } => {
            let root = resolve_root(dir.as_deref(), &config)?;
            let manifest_path = root.join(&config.persistence.manifest_name);
            let mut manifest = ProjectManifest::load(&manifest_path)?;

            let renamed = manifest.rename_member(&root, &config.global_excludes, &member, &new_name)?;
            manifest.save(&manifest_path)?;
            println!("Renamed {} to {}", member, renamed);
        }
    }

    Ok(())
}

fn resolve_root(dir: Option<&Path>, config: &AppConfig) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(find_project_root(&cwd, &config.persistence.manifest_name))
        }
    }
}

fn open_project(dir: Option<&Path>, config: &AppConfig) -> Result<(Project, PathBuf)> {
    let root = resolve_root(dir, config)?;
    let manifest = ProjectManifest::load_from_dir(&root, &config.persistence.manifest_name)?;
    let project = Project::from_manifest(&manifest, &root, &config.global_excludes)?;
    Ok((project, root))
}
