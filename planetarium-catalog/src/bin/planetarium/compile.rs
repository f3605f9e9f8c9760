//! `planetarium compile`

use crate::cli::{Cli, CompileArgs};
use anyhow::Context;
use planetarium_catalog::{CatalogCompiler, CompileOptions, SourceTexts};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(args: &CompileArgs, _cli: &Cli) -> anyhow::Result<()> {
    let texts = SourceTexts::read(&args.sources.paths())?;

    let compiler = CatalogCompiler::new(CompileOptions {
        magnitude_limit: args.mag_limit,
        ..CompileOptions::default()
    });
    let compiled = compiler
        .compile(&texts.as_sources())
        .context("Failed to compile catalog")?;

    info!(
        stars = compiled.stars.len(),
        segments = compiled.segments.len(),
        objects = compiled.objects.len(),
        named_stars = compiled.named_stars.len(),
        "compiled"
    );
    for (label, code) in compiled.categories.entries() {
        info!(code, label, "object type");
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &compiled)?;
    } else {
        serde_json::to_writer(&mut writer, &compiled)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
