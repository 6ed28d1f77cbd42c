// Shared tuning constants used by both web and native frontends.

// Point-cloud globe (default preset)
pub const CLOUD_WIDTH: usize = 64; // characters wide
pub const CLOUD_HEIGHT: usize = 64; // buffer rows, not necessarily visible rows
pub const CLOUD_RADIUS: f64 = 20.0; // in character widths
pub const CLOUD_SAMPLES: usize = 3000; // golden-spiral points
pub const CLOUD_STEP: f64 = 0.015; // radians per frame
pub const CLOUD_RING_STEP: f64 = 0.05; // radians between ring samples

// Lat/long wireframe globe
pub const WIRE_WIDTH: usize = 60;
pub const WIRE_HEIGHT: usize = 24;
pub const WIRE_RADIUS: f64 = 20.0;
pub const WIRE_STEP: f64 = 0.01;
pub const WIRE_RING_STEP: f64 = 0.03;
pub const WIRE_LATITUDE_SPACING_DEG: f64 = 30.0;
pub const WIRE_LONGITUDE_SPACING_DEG: f64 = 30.0;

// Projection
pub const DEFAULT_ASPECT: f64 = 0.55; // monospace cells are roughly twice as tall as wide
pub const WIRE_ASPECT: f64 = 0.5;

// Depth test
pub const LINE_DEPTH_BIAS: f64 = 0.5; // lines must beat the cloud by this much to draw

// Shading
pub const DENSE_GLYPH_PROBABILITY: f64 = 0.8; // chance a cloud point draws '.' rather than '+'
pub const DEFAULT_SHADE_SEED: u64 = 0x5EED_0F_610B;

// Frame statistics window
pub const STATS_WINDOW_SEC: f64 = 5.0;
