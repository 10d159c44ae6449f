use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use tracing::debug;

use relay_globalid::{decode_global_id, GlobalId};
use relay_node::NodeConfig;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Encode(args) => cmd_encode(args, cli.format)?,
        Command::Decode(args) => cmd_decode(args, cli.format)?,
        Command::Config(args) => cmd_config(args, cli.format)?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_encode(args: EncodeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let id = GlobalId::new(args.type_name, &args.local_id)?;
    let token = id.to_token();
    debug!(%token, ?id, "encoded global id");
    Ok(match format {
        OutputFormat::Text => token,
        OutputFormat::Json => json!({
            "id": token,
            "type_name": id.type_name(),
            "local_id": id.local_id(),
        })
        .to_string(),
    })
}

fn cmd_decode(args: DecodeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let ids = args
        .tokens
        .iter()
        .map(|token| decode_global_id(token).with_context(|| format!("cannot decode {token}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!(count = ids.len(), "decoded global ids");

    Ok(match format {
        OutputFormat::Text => ids
            .iter()
            .map(|id| format!("{} {}", id.type_name().cyan().bold(), id.local_id()))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let entries: Vec<_> = args
                .tokens
                .iter()
                .zip(&ids)
                .map(|(token, id)| {
                    json!({
                        "id": token,
                        "type_name": id.type_name(),
                        "local_id": id.local_id(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&entries)?
        }
    })
}

fn cmd_config(args: ConfigArgs, format: OutputFormat) -> anyhow::Result<String> {
    let config = match &args.path {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            NodeConfig::from_toml_str(&text).with_context(|| format!("loading {path}"))?
        }
        None => NodeConfig::default(),
    };
    Ok(match format {
        OutputFormat::Text => toml::to_string_pretty(&config)?,
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
    })
}
