//! Globe configuration and the two built-in presets.
//!
//! The point-cloud preset is the golden-spiral sphere with an equator and an
//! orbiting ring; the wireframe preset sweeps latitude bands and longitude
//! rings with no cloud. Both go through the same rasterizer.

use crate::constants::*;
use crate::error::ConfigError;
use crate::glyph::Glyph;
use crate::sphere::{latitude_bands, longitude_rings, RingKind};
use smallvec::{smallvec, SmallVec};
use std::str::FromStr;

/// How cloud points choose between the sparse and dense glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Each point keeps one glyph for the lifetime of the rasterizer.
    Stable { seed: u64 },
    /// Glyphs are redrawn every frame, so the cloud twinkles.
    Sparkle,
}

impl Default for Shading {
    fn default() -> Self {
        Shading::Stable {
            seed: DEFAULT_SHADE_SEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub kind: RingKind,
    pub glyph: Glyph,
}

pub type Strokes = SmallVec<[Stroke; 2]>;

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub width: usize,
    pub height: usize,
    pub radius: f64,
    pub aspect: f64,
    pub step: f64,
    pub samples: usize,
    pub ring_step: f64,
    pub line_bias: f64,
    pub dense_probability: f64,
    pub shading: Shading,
    pub strokes: Strokes,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl GlobeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        positive("radius", self.radius)?;
        positive("aspect", self.aspect)?;
        positive("ring_step", self.ring_step)?;
        finite("step", self.step)?;
        finite("line_bias", self.line_bias)?;
        if !(0.0..=1.0).contains(&self.dense_probability) {
            return Err(ConfigError::Probability(self.dense_probability));
        }
        Ok(())
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    PointCloud,
    Wireframe,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::PointCloud => "point-cloud",
            Preset::Wireframe => "wireframe",
        }
    }

    pub fn config(self) -> GlobeConfig {
        match self {
            Preset::PointCloud => GlobeConfig {
                width: CLOUD_WIDTH,
                height: CLOUD_HEIGHT,
                radius: CLOUD_RADIUS,
                aspect: DEFAULT_ASPECT,
                step: CLOUD_STEP,
                samples: CLOUD_SAMPLES,
                ring_step: CLOUD_RING_STEP,
                line_bias: LINE_DEPTH_BIAS,
                dense_probability: DENSE_GLYPH_PROBABILITY,
                shading: Shading::default(),
                strokes: smallvec![
                    Stroke {
                        kind: RingKind::Equator,
                        glyph: Glyph::Parallel,
                    },
                    Stroke {
                        kind: RingKind::Orbit,
                        glyph: Glyph::Meridian,
                    },
                ],
            },
            Preset::Wireframe => {
                let bands = latitude_bands(WIRE_LATITUDE_SPACING_DEG.to_radians())
                    .into_iter()
                    .map(|kind| Stroke {
                        kind,
                        glyph: Glyph::Parallel,
                    });
                let rings = longitude_rings(WIRE_LONGITUDE_SPACING_DEG.to_radians())
                    .into_iter()
                    .map(|kind| Stroke {
                        kind,
                        glyph: Glyph::Meridian,
                    });
                GlobeConfig {
                    width: WIRE_WIDTH,
                    height: WIRE_HEIGHT,
                    radius: WIRE_RADIUS,
                    aspect: WIRE_ASPECT,
                    step: WIRE_STEP,
                    samples: 0,
                    ring_step: WIRE_RING_STEP,
                    line_bias: 0.0,
                    dense_probability: DENSE_GLYPH_PROBABILITY,
                    shading: Shading::default(),
                    strokes: bands.chain(rings).collect(),
                }
            }
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point-cloud" | "pointcloud" | "points" => Ok(Preset::PointCloud),
            "wireframe" | "wire" => Ok(Preset::Wireframe),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}
