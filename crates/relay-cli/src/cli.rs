use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "relay-id",
    about = "Encode and decode opaque global object ids",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode a type name and local id into a global id
    Encode(EncodeArgs),
    /// Decode one or more global ids
    Decode(DecodeArgs),
    /// Show the effective node configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    pub type_name: String,
    pub local_id: String,
}

#[derive(Args)]
pub struct DecodeArgs {
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML file to load instead of the defaults
    pub path: Option<String>,
}
