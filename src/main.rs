use clap::Parser;
use spaced_report::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - the answer has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Spaced Report - Fixed-Width Report Analyzer");
    println!("===========================================");
    println!();
    println!("Parse plain-text reports whose columns are aligned by character");
    println!("position, inferring the column layout from the report's own header.");
    println!();
    println!("USAGE:");
    println!("    spaced-report <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    soccer      Find the team with the smallest goal difference");
    println!("    weather     Find the day with the smallest temperature spread");
    println!("    columns     Inspect the columns inferred from a report header");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Team with the smallest goal difference:");
    println!("    spaced-report soccer football.txt");
    println!();
    println!("    # Day with the smallest temperature spread, as JSON:");
    println!("    spaced-report weather weather.dat --format json");
    println!();
    println!("    # Inspect how a report's columns will be read:");
    println!("    spaced-report columns report.txt --lines");
    println!();
    println!("For detailed help on any command, use:");
    println!("    spaced-report <COMMAND> --help");
}
