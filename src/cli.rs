use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cs-size")]
#[command(author, version, about = "Report line, code-line and size statistics for the C# sources under ./src")]
#[command(long_about = "Walks ./src, counts every .cs file outside bin/, obj/ and .vs/ \
    (GlobalUsings.cs excluded) and prints per-directory and total statistics.\n\n\
    Exit codes:\n  \
    0 - Report printed\n  \
    2 - A directory or source file could not be read")]
pub struct Cli {
    /// Log progress to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
