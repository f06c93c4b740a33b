use clap::{Arg, ArgAction, Command as ClapCommand};
use std::path::PathBuf;
use std::process;
use log::{error, warn, LevelFilter};

use snipkit::commands::{exit_code, exit_codes, CommandFactory, SnipkitCommandFactory};
use snipkit::config::SnipConfig;
use snipkit::template::CancellationToken;
use snipkit::utils::exit_policy::exit_policy_for;
use snipkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("SnipKit")
        .version("1.0")
        .author("Maurice Schilpp")
        .about("Snip named tiles out of images using a segment definition file")
        .arg(
            Arg::new("files")
                .help("A segment definition file (.json or .toml) and the images to snip")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("List the files that would be written without writing them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (defaults to snipkit.toml when present)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = match SnipConfig::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(exit_codes::FAILED);
        }
    };
    let exit_policy = exit_policy_for(config.pause_on_error);

    let has_files = matches.get_many::<String>("files").map_or(false, |mut files| files.next().is_some());
    if !has_files {
        eprintln!("Usage: snipkit <SEGMENTS.json|SEGMENTS.toml> <IMAGES>...");
        eprintln!("No input files given");
        exit_policy.before_exit(exit_codes::NO_FILES);
        process::exit(exit_codes::NO_FILES);
    }

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { config.log_level };

    let logger = match &config.log_file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file.with_extension("global.log"), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(exit_codes::FAILED);
            }
            match Logger::new(log_file) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(exit_codes::FAILED);
                }
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
            Logger::disabled()
        }
    };

    let factory = SnipkitCommandFactory::new(config.progress);
    let cancellation = CancellationToken::new();
    if let Err(e) = cancellation.install_interrupt_handler() {
        warn!("{}", e);
    }

    let code = match factory.create_command(&matches, &logger) {
        Ok(command) => {
            let result = command.execute(&cancellation);
            match &result {
                Ok(snipkit::commands::CommandOutcome::NoTemplate) => {
                    eprintln!("Error: no template understands these files");
                }
                Err(e) => {
                    error!("Command execution error: {}", e);
                    eprintln!("Error: {}", e);
                }
                Ok(_) => {}
            }
            exit_code(&result)
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            exit_codes::FAILED
        }
    };

    exit_policy.before_exit(code);
    process::exit(code);
}
