use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, LevelFilter};
use pinhole::{
    config::{self, ObjectDesc, RenderConfig},
    logger::init_logger,
    output::{FileSink, ImageSink},
    renderer,
};

fn main() -> Result<()> {
    init_logger(LevelFilter::Info);

    let args: Vec<String> = env::args().skip(1).collect();
    let quiet_mode = args.iter().any(|a| a == "--quiet" || a == "-q");

    // ── scene: built-in unless a JSON file is given ──────────────────────
    let config = match args.iter().find(|a| !a.starts_with('-')) {
        Some(path) => config::load(path)?,
        None => RenderConfig::default(),
    };
    let scene = config.scene();

    info!("camera   : {:?} near {:.2}", config.camera.position, config.camera.near);
    info!("image    : {}x{} → {} ({:?} shading)", config.width, config.height, config.output, config.shading);
    for (i, obj) in config.objects.iter().enumerate() {
        match obj {
            ObjectDesc::Sphere { sphere } => info!(
                " [{}] Sphere {{ center: {:?}, radius: {:.4}, rgb: {:?} }}",
                i, sphere.center, sphere.radius, sphere.rgb
            ),
            ObjectDesc::Plane { plane } => info!(
                " [{}] Plane {{ normal: {:?}, distance: {:.4}, rgb: {:?} }}",
                i, plane.normal, plane.distance, plane.rgb
            ),
        }
    }

    // ── render loop ───────────────────────────────────────────────────────
    let bar = if !quiet_mode {
        let pb = ProgressBar::new(config.height as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise}")?);
        Some(pb)
    } else {
        None
    };

    let started = Instant::now();
    let pixels = renderer::render(&config, &scene, bar.as_ref());
    if let Some(b) = bar {
        b.finish_and_clear();
    }
    debug!("rendered in {:.2?}", started.elapsed());

    // the buffer is complete; a failed write is reported but not fatal
    match FileSink.write_image(Path::new(&config.output), config.width, config.height, &pixels) {
        Ok(()) => info!("Saved to {}", config.output),
        Err(e) => error!("Cannot save to {}: {e:#}", config.output),
    }
    Ok(())
}
