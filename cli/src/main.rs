mod commands;
mod terminal;

use commands::{CommandLine, Commands, convert};
use ipcast_core::Notation;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Dotted { value } => {
            print::header("converting from dotted-decimal");
            convert::run(Notation::DottedDecimal, &value)
        }
        Commands::Binary { value } => {
            print::header("converting from binary");
            convert::run(Notation::Binary, &value)
        }
        Commands::Hex { value } => {
            print::header("converting from hexadecimal");
            convert::run(Notation::Hex, &value)
        }
        Commands::Octal { value } => {
            print::header("converting from octal");
            convert::run(Notation::Octal, &value)
        }
        Commands::Decimal { value } => {
            print::header("converting from decimal");
            convert::run(Notation::Decimal, &value)
        }
    }
}
