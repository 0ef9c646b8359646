use clap::Parser;
use slovar_cli::commands::Commands;
use slovar_cli::CliResult;

/// Serbian Cyrillic/Latin transliteration and Croatian variant conversion
#[derive(Debug, Parser)]
#[command(name = "slovar", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
