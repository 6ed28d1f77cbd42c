//! Sphere rasterizer: rotate, project, depth test.
//!
//! Every sample goes through the same pipeline:
//!
//! 1. rotate about the vertical axis by the frame angle,
//! 2. project orthographically, squashing Y by the aspect scale,
//! 3. drop anything that lands outside the grid,
//! 4. keep the nearest sample per cell (largest rotated Z wins, ties lose).
//!
//! The cloud is drawn first, then each overlay stroke with the line bias so
//! rings sit on top of the cloud at equal depth.

use crate::config::{GlobeConfig, Shading};
use crate::error::ConfigError;
use crate::glyph::Glyph;
use crate::grid::{FrameBuffers, Grid};
use crate::sphere::golden_spiral;
use glam::{DMat3, DVec3};
use rand::prelude::*;

struct TracedStroke {
    points: Vec<DVec3>,
    glyph: Glyph,
}

pub struct Rasterizer {
    config: GlobeConfig,
    cloud: Vec<DVec3>,
    shades: Vec<Glyph>,
    strokes: Vec<TracedStroke>,
}

impl Rasterizer {
    pub fn new(config: GlobeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cloud = golden_spiral(config.samples, config.radius);
        let seed = match config.shading {
            Shading::Stable { seed } => seed,
            Shading::Sparkle => crate::constants::DEFAULT_SHADE_SEED,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let shades = (0..cloud.len())
            .map(|_| shade(&mut rng, config.dense_probability))
            .collect();
        let strokes = config
            .strokes
            .iter()
            .map(|s| TracedStroke {
                points: s.kind.trace(config.radius, config.ring_step),
                glyph: s.glyph,
            })
            .collect();
        log::debug!(
            "rasterizer ready: {}x{}, {} cloud points, {} strokes",
            config.width,
            config.height,
            config.samples,
            config.strokes.len()
        );
        Ok(Self {
            config,
            cloud,
            shades,
            strokes,
        })
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn buffers(&self) -> FrameBuffers {
        FrameBuffers::new(self.config.width, self.config.height)
    }

    /// One frame at `angle`. Cloud points use their fixed shade, so the
    /// result depends on the angle alone.
    pub fn render_frame(&self, angle: f64) -> Grid {
        let mut buffers = self.buffers();
        self.draw(&mut buffers, angle, |i| self.shades[i]);
        buffers.into_grid()
    }

    /// Like [`render_frame`](Self::render_frame), but sparkle shading pulls
    /// fresh glyphs from `rng`.
    pub fn render_frame_with<R: Rng>(&self, angle: f64, rng: &mut R) -> Grid {
        let mut buffers = self.buffers();
        self.render_into(&mut buffers, angle, rng);
        buffers.into_grid()
    }

    /// Render into caller-owned buffers, resetting them first.
    pub fn render_into<R: Rng>(
        &self,
        buffers: &mut FrameBuffers,
        angle: f64,
        rng: &mut R,
    ) {
        if buffers.width() != self.config.width || buffers.height() != self.config.height {
            *buffers = self.buffers();
        }
        match self.config.shading {
            Shading::Stable { .. } => self.draw(buffers, angle, |i| self.shades[i]),
            Shading::Sparkle => {
                let p = self.config.dense_probability;
                self.draw(buffers, angle, |_| shade(&mut *rng, p))
            }
        }
    }

    fn draw(
        &self,
        buffers: &mut FrameBuffers,
        angle: f64,
        mut shade_of: impl FnMut(usize) -> Glyph,
    ) {
        buffers.reset();
        let rot = DMat3::from_rotation_y(angle);
        let cfg = &self.config;

        for (i, p) in self.cloud.iter().enumerate() {
            // shade every point so sparkle draws don't depend on visibility
            let glyph = shade_of(i);
            let r = rot * *p;
            let (px, py) = project(r, cfg.width, cfg.height, cfg.aspect);
            buffers.plot(px, py, r.z, 0.0, glyph);
        }

        for stroke in &self.strokes {
            for p in &stroke.points {
                let r = rot * *p;
                let (px, py) = project(r, cfg.width, cfg.height, cfg.aspect);
                buffers.plot(px, py, r.z, cfg.line_bias, stroke.glyph);
            }
        }
    }
}

/// Rotation about the vertical axis:
/// `(x cos a + z sin a, y, -x sin a + z cos a)`.
#[inline]
pub fn rotate_y(p: DVec3, angle: f64) -> DVec3 {
    DMat3::from_rotation_y(angle) * p
}

/// Orthographic projection to (possibly out of range) cell coordinates.
#[inline]
pub fn project(r: DVec3, width: usize, height: usize, aspect: f64) -> (i64, i64) {
    let px = (r.x + width as f64 / 2.0).floor() as i64;
    let py = (r.y * aspect + height as f64 / 2.0).floor() as i64;
    (px, py)
}

#[inline]
fn shade<R: Rng>(rng: &mut R, dense_probability: f64) -> Glyph {
    if rng.gen::<f64>() < dense_probability {
        Glyph::Dot
    } else {
        Glyph::Cross
    }
}
