//! Print the OpenAPI document as JSON or YAML.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use utoipa::OpenApi;

use car_inventory::ApiDoc;

/// Output encodings supported by the dump.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Export the Car Management API OpenAPI document.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", version, about)]
struct Cli {
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();

    let rendered = match cli.format {
        Format::Json => doc
            .to_pretty_json()
            .wrap_err("failed to render OpenAPI document as JSON")?,
        Format::Yaml => doc
            .to_yaml()
            .wrap_err("failed to render OpenAPI document as YAML")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").wrap_err("failed to write OpenAPI document")?;
    Ok(())
}
