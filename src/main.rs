// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use remote_model::config::{load_config, load_document, ModelConfig};
use remote_model::RemoteModel;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// What to print once the document is loaded
enum Query {
    Tree,
    Names,
    Type(String),
    Component(String),
}

struct Args {
    config: Option<String>,
    document: Option<String>,
    query: Query,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {0} [--config <model.yaml>] [<document.json|yaml>] [--names | --type <Type> | --comp <name>]\n\
         Example: {0} panel.json --type Button\n\
         Example: {0} --config model.yaml --names",
        program
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        config: None,
        document: None,
        query: Query::Tree,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                parsed.config = Some(iter.next().context("--config needs a file")?.clone());
            }
            "--names" => parsed.query = Query::Names,
            "--type" => {
                parsed.query = Query::Type(iter.next().context("--type needs a type name")?.clone());
            }
            "--comp" => {
                parsed.query =
                    Query::Component(iter.next().context("--comp needs a component name")?.clone());
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{}'", flag),
            path => {
                if parsed.document.is_some() {
                    bail!("Only one document may be given");
                }
                parsed.document = Some(path.to_string());
            }
        }
    }

    if parsed.config.is_none() && parsed.document.is_none() {
        bail!("Nothing to load: give a document or --config");
    }

    Ok(parsed)
}

fn build_model(args: &Args) -> Result<RemoteModel> {
    let cfg = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("Failed to load config {}", path))?,
        None => ModelConfig::default(),
    };

    // A document on the command line wins over the one named in the config.
    let model = match &args.document {
        Some(path) => {
            let root = load_document(Path::new(path))
                .with_context(|| format!("Failed to load document {}", path))?;
            RemoteModel::with_document_and_config(root, &cfg)
        }
        None => RemoteModel::from_config(&cfg).context("Failed to build model from config")?,
    };

    Ok(model)
}

fn run(args: &Args) -> Result<()> {
    let model = build_model(args)?;

    let output = match &args.query {
        Query::Tree => serde_json::to_string_pretty(model.to_json())?,
        Query::Names => model.component_names().join("\n"),
        Query::Type(kind) => serde_json::to_string_pretty(&model.components_by_type(kind))?,
        Query::Component(name) => match model.comp(name) {
            Some(node) => serde_json::to_string_pretty(node)?,
            None => bail!("No component named '{}'", name),
        },
    };

    println!("{}", output);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("remote-model");

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", usage(program));
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&parsed) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
