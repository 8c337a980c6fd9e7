use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use shape::Element;

use crate::frame::{GrayImage, IntensityFrame};
use crate::Scene;

/// Completion of a render, counted in finished rows.
#[derive(Debug)]
pub struct Progress {
    done_rows: AtomicUsize,
    total_rows: usize,
}

impl Progress {
    fn new(total_rows: usize) -> Self {
        Self {
            done_rows: AtomicUsize::new(0),
            total_rows,
        }
    }

    pub fn done_rows(&self) -> usize {
        self.done_rows.load(Ordering::Relaxed)
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Fraction of the frame already computed, in [0, 1].
    pub fn fraction(&self) -> f32 {
        if self.total_rows == 0 {
            1.0
        } else {
            self.done_rows() as f32 / self.total_rows as f32
        }
    }

    fn reset(&self) {
        self.done_rows.store(0, Ordering::Relaxed);
    }

    fn advance(&self) {
        self.done_rows.fetch_add(1, Ordering::Relaxed);
    }
}

/// Renders a scene into a grayscale image: one primary ray per pixel, one shadow ray per light
/// at each hit, then a frame-wide normalization.
///
/// Rows are computed in parallel on the current rayon thread pool. The renderer can be shared
/// with another thread that polls `progress()` while `render()` runs.
pub struct Renderer<'a> {
    scene: &'a Scene,
    progress: Progress,
    // Number of primary rays or light samples dropped because of degenerate geometry.
    degenerate_samples: AtomicUsize,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        let (_, height) = scene.camera.resolution();
        Self {
            scene,
            progress: Progress::new(height as usize),
            degenerate_samples: AtomicUsize::new(0),
        }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Number of samples that hit degenerate geometry in the latest pass.
    pub fn degenerate_samples(&self) -> usize {
        self.degenerate_samples.load(Ordering::Relaxed)
    }

    /// Computes the unnormalized intensity arriving at pixel (x, y): the sum of the contributions
    /// of every light that is visible from the nearest hit, or 0 if the primary ray hits nothing.
    pub fn pixel_intensity(&self, x: u32, y: u32) -> f32 {
        let ray = match self.scene.camera.shoot_ray(x, y) {
            Some(ray) => ray,
            None => return 0.0,
        };
        if let Err(e) = ray.dir.hat() {
            log::trace!("primary ray of pixel ({}, {}): {}", x, y, e);
            self.degenerate_samples.fetch_add(1, Ordering::Relaxed);
            return 0.0;
        }
        let hit = match self.scene.nearest_hit(&ray) {
            Some(hit) => hit,
            None => return 0.0,
        };

        let mut intensity = 0.0;
        for light in self.scene.lights.iter() {
            match self.scene.light_contribution(&hit, light) {
                Ok(v) => intensity += v,
                Err(e) => {
                    log::trace!("light {:?} at pixel ({}, {}), {}: {}", light, x, y, hit, e);
                    self.degenerate_samples.fetch_add(1, Ordering::Relaxed);
                }
            }
        }
        intensity
    }

    /// Computes the raw intensity of every pixel.
    pub fn intensities(&self) -> IntensityFrame {
        let (width, height) = self.scene.camera.resolution();
        self.progress.reset();
        self.degenerate_samples.store(0, Ordering::Relaxed);

        log::info!(
            "tracing {}x{} pixels on {} threads",
            width,
            height,
            rayon::current_num_threads()
        );
        let start = Instant::now();
        let mut frame = IntensityFrame::new(width, height);
        frame
            .values_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, value) in row.iter_mut().enumerate() {
                    *value = self.pixel_intensity(x as u32, y as u32);
                }
                self.progress.advance();
            });
        log::info!("traced in {:.2?}", start.elapsed());

        let degenerate = self.degenerate_samples();
        if degenerate > 0 {
            log::warn!("{} samples dropped on degenerate geometry", degenerate);
        }
        frame
    }

    /// Renders the scene into a normalized grayscale image.
    pub fn render(&self) -> GrayImage {
        log::debug!(
            "scene: {} elements, {} lights",
            self.scene.elements.len(),
            self.scene.lights.len()
        );
        for element in self.scene.elements.iter() {
            log::debug!("  {}", element.summary());
        }
        for light in self.scene.lights.iter() {
            log::debug!("  {:?}", light);
        }
        if self.scene.lights.is_empty() {
            log::warn!("no lights in the scene, the image will be black");
        }

        let frame = self.intensities();
        let max = frame.max();
        log::info!("normalizing to max intensity {:.4}", max);
        frame.normalized()
    }
}
