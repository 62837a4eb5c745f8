//! Operator tool: interpret a command against the sample catalogs and
//! print the result as JSON.
//!
//! Usage:
//!   vx "compras del cliente Paul10 en noviembre"
//!   vx --search "refrigeradores baratos en stock"
//!   vx --format pdf "historial del cliente Paul10"

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use vx_catalog::{CategoryDictionary, InMemoryClientDirectory, InMemoryProductCatalog};
use vx_interpreter::{Lexicon, ProductSearchInterpreter, ReportCommandInterpreter};
use vx_protocol::report::OutputFormat;
use vx_report_router::{ReportCatalog, ReportRouter};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut search_mode = false;
    let mut format_override: Option<OutputFormat> = None;
    let mut text_parts: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--search" | "-s" => search_mode = true,
            "--format" | "-f" => {
                let value = args.next().context("--format requiere un valor")?;
                format_override = Some(value.parse()?);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => text_parts.push(arg),
        }
    }

    if text_parts.is_empty() {
        print_usage();
        bail!("falta el comando a interpretar");
    }
    let text = text_parts.join(" ");

    let categories = Arc::new(CategoryDictionary::builtin_es());
    let lexicon = Arc::new(Lexicon::builtin_es());

    if search_mode {
        let interpreter = ProductSearchInterpreter::new(categories, lexicon);
        let result = interpreter.parse(&text);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let interpreter = ReportCommandInterpreter::new(
        Arc::new(InMemoryClientDirectory::with_sample_data()),
        Arc::new(InMemoryProductCatalog::with_sample_data()),
        categories,
        lexicon.clone(),
    );
    let router = ReportRouter::new(interpreter, Arc::new(ReportCatalog::builtin()), lexicon);
    let result = router.parse_report_command(&text, format_override)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn print_usage() {
    eprintln!("uso: vx [--search] [--format json|pdf|excel] \"<comando>\"");
    eprintln!("  sin --search interpreta comandos de reporte;");
    eprintln!("  con --search interpreta búsquedas de productos.");
}
