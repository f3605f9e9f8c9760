//! `planetarium sky`

use crate::cli::{Cli, SkyArgs};
use anyhow::Context;
use chrono::Utc;
use planetarium_catalog::{
    CatalogCompiler, CompileOptions, Scene, SourceTexts, ViewDirection, ViewSettings, Viewport,
};
use planetarium_core::angle::{degrees_to_hms, parse_dms};
use planetarium_time::{parse_utc, Observer};

pub fn run(args: &SkyArgs, _cli: &Cli) -> anyhow::Result<()> {
    let latitude = parse_dms(&args.lat).context("Invalid --lat")?;
    let longitude = parse_dms(&args.lon).context("Invalid --lon")?;
    let utc = match &args.time {
        Some(text) => parse_utc(text).context("Invalid --time")?,
        None => Utc::now(),
    };
    let observer = Observer::new(latitude, longitude, utc)?;

    let texts = SourceTexts::read(&args.sources.paths())?;
    let compiled = CatalogCompiler::new(CompileOptions::default())
        .compile(&texts.as_sources())
        .context("Failed to compile catalog")?;

    let settings = ViewSettings {
        direction: ViewDirection::new(args.view_alt, args.view_az),
        field_deg: args.field,
        magnitude_limit: args.mag_limit,
    };
    let viewport = Viewport::new(args.width, args.height);
    let scene = Scene::compute(&compiled, &observer, &settings, &viewport)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    println!("UTC:       {}", utc.to_rfc3339());
    println!("Observer:  lat {:+.4}°, lon {:+.4}°", latitude, longitude);
    println!("LST:       {} ({:.4}°)", degrees_to_hms(scene.lst), scene.lst);
    println!(
        "View:      alt {:.1}°, az {:.1}°, field {:.1}°",
        settings.direction.altitude, settings.direction.azimuth, settings.field_deg
    );
    println!("Stars:     {}", scene.stars.len());
    println!("Segments:  {}", scene.segments.len());
    for label in scene.named_stars.iter().chain(&scene.objects) {
        println!("  {:<20} ({:>4}, {:>4})", label.name, label.x, label.y);
    }
    Ok(())
}
