use clap::{CommandFactory, Parser};
use librarian::config::{CliConfig, Config};
use librarian::core::constants::exit_codes;
use librarian::reporting::logging;
use librarian::scan::{ScanReport, Scanner};
use librarian::ui::completion::print_completions;
use librarian::ui::output;
use librarian::ui::{Cli, Commands, cli_to_config};

fn main() {
    let cli = Cli::parse();

    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_librarian_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(exit_codes::SUCCESS)
        }
        None => None,
    }
}

/// Scan the notes and print the URL list
pub fn run_librarian_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    logging::init_logger(cli_config.verbose, cli_config.quiet);

    let config = load_and_merge_config(&cli_config)?;
    logging::log_config_info(&config);

    let report = scan_notes(&config)?;

    // Printed once, after the whole tree has been scanned
    output::display_report(&report, config.output_format())?;

    Ok(exit_codes::SUCCESS)
}

/// Merge CLI arguments into the defaults and validate the result
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.merge_with_cli(cli_config);

    config.validate().inspect_err(|e| {
        logging::log_error("Invalid configuration", Some(e));
    })?;

    Ok(config)
}

/// Walk the root and extract URLs from every note
pub fn scan_notes(config: &Config) -> Result<ScanReport, Box<dyn std::error::Error>> {
    let scanner = Scanner::from_config(config);

    let report = scanner.scan().inspect_err(|e| {
        logging::log_error(
            &format!("Could not scan '{}'", scanner.root().display()),
            Some(e),
        );
    })?;

    Ok(report)
}
