use clap::Parser;

use cs_size::cli::Cli;
use cs_size::commands::run_report;
use cs_size::config::SourceConfig;
use cs_size::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = run_report(&SourceConfig::default());

    std::process::exit(exit_code);
}
