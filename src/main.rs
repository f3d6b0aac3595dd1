use clap::Parser;
use obsidian_cli::cli::{commands, Cli, Commands, TemplateAction};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays scriptable.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Ls { long } => commands::list::execute(&cli, long),
        Commands::Open { ref path, ref file } => {
            commands::open::execute(&cli, path, file.as_deref())
        }
        Commands::Rm { ref vault } => commands::remove::execute(&cli, vault),
        Commands::New {
            ref path,
            ref template,
            force,
            no_open,
        } => commands::new::execute(&cli, path, template, force, no_open),
        Commands::Template { ref action } => match action {
            TemplateAction::Info => commands::template::execute_info(&cli),
            TemplateAction::Edit { ref name } => commands::template::execute_edit(&cli, name),
        },
        Commands::Completions { shell } => commands::completions::execute(shell),
        Commands::Complete { kind, ref partial } => {
            commands::complete::execute(&cli, kind, partial)
        }
    };

    if let Err(e) = result {
        obsidian_cli::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
