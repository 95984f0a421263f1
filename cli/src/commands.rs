pub mod convert;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipcast")]
#[command(about = "Rewrite an IPv4 address between its textual notations.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert from dotted-decimal (e.g. "192.168.1.1")
    #[command(alias = "dd")]
    Dotted { value: String },
    /// Convert from 32-bit binary, flat or dot-grouped
    #[command(alias = "b")]
    Binary { value: String },
    /// Convert from dotted-hexadecimal (e.g. "c0.a8.01.01")
    #[command(alias = "x")]
    Hex { value: String },
    /// Convert from dotted-octal (e.g. "300.250.001.001")
    #[command(alias = "o")]
    Octal { value: String },
    /// Convert from the plain 32-bit integer (e.g. "3232235777")
    #[command(alias = "d")]
    Decimal { value: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
