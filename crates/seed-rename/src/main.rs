//! seed-rename - specialize a cloned seed template into a new project

use anyhow::Result;
use clap::Parser;
use renamer_core::{ProjectLayout, RenameOptions};

#[derive(Parser, Debug)]
#[command(name = "seed-rename")]
#[command(about = "Rename a cloned seed template project in place")]
#[command(version)]
pub struct Args {
    /// New project name (letters, numbers, and hyphens)
    pub name: String,

    /// Seed project name to replace (auto-detected when omitted)
    #[arg(long = "from")]
    pub from_seed: Option<String>,

    /// Treat the tree as a .NET project (solution and csproj renames)
    #[arg(long)]
    pub dotnet: bool,

    /// Skip the package-lock.json regeneration step
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    cliclack::intro("seed-rename")?;
    cliclack::log::warning("This rewrites the current directory in place and cannot be undone")?;

    if !args.yes {
        let confirm: bool = cliclack::confirm(format!("Rename this project to '{}'?", args.name))
            .initial_value(true)
            .interact()?;
        if !confirm {
            cliclack::outro("Rename cancelled.")?;
            return Ok(());
        }
    }

    let options = RenameOptions {
        new_name: args.name.clone(),
        from_seed: args.from_seed,
        layout: if args.dotnet {
            ProjectLayout::DotNet
        } else {
            ProjectLayout::Generic
        },
        root: std::env::current_dir()?,
        skip_lockfile: args.skip_install,
    };

    let result = renamer_core::run(&options).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let report = result?;
    cliclack::outro(format!(
        "Project renamed to: {} ({} files modified, {} replacements)",
        args.name,
        report.stats.modified_files.len(),
        report.stats.total_replacements
    ))?;

    Ok(())
}
