mod cli_options;
mod image;

use std::path::Path;
use std::time::{Duration, Instant};

use cli_options::CliOptions;
use scene::frame::GrayImage;
use scene::preset;
use scene::render::Renderer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match cli_options::parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\nusage: {}", message, CliOptions::message());
            std::process::exit(2);
        }
    };
    if options.show_help {
        println!("usage: {}", CliOptions::message());
        return;
    }
    if let Err(message) = run(&options) {
        log::error!("{}", message);
        std::process::exit(1);
    }
}

fn run(options: &CliOptions) -> Result<(), String> {
    let resolution = (options.width, options.height);
    let scene = preset::by_name(&options.scene_name, resolution)
        .ok_or_else(|| {
            format!(
                "Unknown scene {}, expected one of {:?}",
                options.scene_name,
                preset::SCENE_NAMES
            )
        })?
        .map_err(|e| format!("Cannot build scene {}: {}", options.scene_name, e))?;
    log::info!(
        "scene {}: {} elements, {} lights",
        options.scene_name,
        scene.elements.len(),
        scene.lights.len()
    );

    let renderer = Renderer::new(&scene);
    let start = Instant::now();
    let image = if options.use_multi_thread {
        render_with_progress(&renderer, None)
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .map_err(|e| format!("Cannot build thread pool: {}", e))?;
        render_with_progress(&renderer, Some(&pool))
    };
    log::info!("rendered in {:.2?}", start.elapsed());

    image::write_png(&image, Path::new(&options.output))?;
    log::info!("image written to {}", options.output);
    Ok(())
}

/// Renders on the given thread pool (the global one if `None`) while the calling thread keeps a
/// progress bar updated.
fn render_with_progress(renderer: &Renderer, pool: Option<&rayon::ThreadPool>) -> GrayImage {
    let progress = renderer.progress();
    let bar = indicatif::ProgressBar::new(progress.total_rows() as u64);
    bar.set_style(
        indicatif::ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}"),
    );

    std::thread::scope(|s| {
        let rendering = s.spawn(|| match pool {
            Some(pool) => pool.install(|| renderer.render()),
            None => renderer.render(),
        });
        while !rendering.is_finished() {
            bar.set_position(progress.done_rows() as u64);
            std::thread::sleep(Duration::from_millis(100));
        }
        bar.finish_and_clear();
        match rendering.join() {
            Ok(image) => image,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}
