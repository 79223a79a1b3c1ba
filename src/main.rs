mod cli_main;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use cli_main::{Cli, Commands};

use seqstats::io::input::file_list;
use seqstats::io::reader::ReaderOptions;
use seqstats::pipeline::{run_stat, StatConfig};

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting tracing default failed: {}", e);
    }

    match cli.command {
        Commands::Stat {
            files,
            out_file,
            threads,
            seq_type,
            alphabet_guess_seq_length,
            validate_seq,
            format,
        } => {
            let config = StatConfig {
                files: file_list(&files),
                out_file,
                threads: threads.max(1),
                reader: ReaderOptions {
                    seq_type: seq_type.fixed(),
                    guess_len: alphabet_guess_seq_length,
                    validate: validate_seq,
                },
                format: format.into(),
            };

            match run_stat(&config) {
                Ok(report) => info!("Reported {} file(s)", report.len()),
                Err(e) => {
                    error!("{}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
