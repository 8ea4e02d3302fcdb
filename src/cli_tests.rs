use clap::Parser;

use super::*;

#[test]
fn cli_defaults_to_quiet_logging() {
    let cli = Cli::try_parse_from(["cs-size"]).unwrap();
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_counts_verbose_flags() {
    let cli = Cli::try_parse_from(["cs-size", "-vv"]).unwrap();
    assert_eq!(cli.verbose, 2);

    let cli = Cli::try_parse_from(["cs-size", "--verbose"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_rejects_root_argument() {
    let result = Cli::try_parse_from(["cs-size", "other"]);
    assert!(result.is_err());
}

#[test]
fn cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
