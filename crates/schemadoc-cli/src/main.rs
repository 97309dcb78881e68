use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use schemadoc_core::config::{Config, CONFIG_FILE};
use schemadoc_core::scan::{category_summary, resolved_category_dirs, schema_files};
use schemadoc_core::template::splice;
use schemadoc_core::{Result, SchemaAppender, SCHEMA_CATEGORIES};

mod args;
use args::{Cli, Commands, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let result = match cli.command {
        Some(Commands::Generate {
            schemas_dir,
            template,
            output,
        }) => handle_generate(
            &config_path,
            schemas_dir,
            template,
            output,
            cli.verbose,
            cli.quiet,
        ),
        Some(Commands::Categories { root }) => handle_categories(root.as_deref()),
        Some(Commands::Init) => handle_init(&config_path),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_generate(
    config_path: &Path,
    schemas_dir: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;

    // Flags take precedence over config values.
    let schemas_dir = schemas_dir
        .or(config.schemas.dir)
        .unwrap_or_else(|| PathBuf::from("resources/schemas"));
    let template = template.or(config.output.template);
    let output = output
        .or(config.output.file)
        .unwrap_or_else(|| PathBuf::from("api.htm"));

    if verbose {
        println!("Schema root: {}", schemas_dir.display());
        println!("Categories: {}", category_summary(&schemas_dir)?.cyan());
        match &template {
            Some(template) => println!("Template: {}", template.display()),
            None => println!("Template: {}", "(none, writing bare fragment)".yellow()),
        }
    }

    let file = File::create(&output)?;
    let mut sink = BufWriter::new(file);

    match &template {
        Some(template) => splice(template, &mut sink, |w| {
            SchemaAppender::new(w).append(&schemas_dir)
        })?,
        None => {
            SchemaAppender::new(&mut sink).append(&schemas_dir)?;
            sink.flush()?;
        }
    }

    if !quiet {
        println!("{} Wrote {}", "Done:".green(), output.display());
    }

    Ok(())
}

fn handle_categories(root: Option<&Path>) -> Result<()> {
    match root {
        Some(root) => {
            let resolved = resolved_category_dirs(root)?;
            if resolved.is_empty() {
                println!("No known category directories under {}", root.display());
                return Ok(());
            }
            for dir in resolved {
                let files = schema_files(&dir.path)?;
                println!(
                    "{} {} ({} files)",
                    dir.label.cyan(),
                    dir.path.display(),
                    files.len()
                );
            }
        }
        None => {
            for category in SCHEMA_CATEGORIES {
                println!("{} {}", category.key.cyan(), category.label);
            }
        }
    }
    Ok(())
}

fn handle_init(config_path: &Path) -> Result<()> {
    if Config::init(config_path)? {
        println!("{} Created {}", "Done:".green(), config_path.display());
    } else {
        println!(
            "{} {} already exists",
            "Skipped:".yellow(),
            config_path.display()
        );
    }
    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
