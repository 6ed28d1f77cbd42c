//! Surface sampling for the globe.
//!
//! Everything here is angle independent; the rasterizer samples once and
//! rotates the same points every frame.

use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// `n` points spread evenly over a sphere using the golden-angle spiral.
pub fn golden_spiral(n: usize, radius: f64) -> Vec<DVec3> {
    let golden = PI * (1.0 + 5.0_f64.sqrt());
    (0..n)
        .map(|i| {
            let k = i as f64 + 0.5;
            let theta = (1.0 - 2.0 * k / n as f64).acos();
            let phi = golden * k;
            spherical(radius, theta, phi)
        })
        .collect()
}

/// `r * (sinθ cosφ, sinθ sinφ, cosθ)`
#[inline]
pub fn spherical(radius: f64, theta: f64, phi: f64) -> DVec3 {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    DVec3::new(st * cp, st * sp, ct) * radius
}

/// A closed circle drawn on the sphere as a continuous line of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingKind {
    /// Horizontal great circle, `(r cos t, 0, r sin t)`.
    Equator,
    /// Great circle in the z = 0 plane. Under Y rotation it swings around
    /// the globe like an orbit.
    Orbit,
    /// Circle of constant latitude (radians, +north).
    Latitude(f64),
    /// Great circle through both poles at the given longitude (radians).
    Longitude(f64),
}

impl RingKind {
    #[inline]
    pub fn point(self, radius: f64, t: f64) -> DVec3 {
        let (s, c) = t.sin_cos();
        match self {
            RingKind::Equator => DVec3::new(c, 0.0, s) * radius,
            RingKind::Orbit => DVec3::new(c, s, 0.0) * radius,
            RingKind::Latitude(lat) => {
                let (sl, cl) = lat.sin_cos();
                DVec3::new(cl * c, sl, cl * s) * radius
            }
            RingKind::Longitude(lon) => {
                let (sm, cm) = lon.sin_cos();
                DVec3::new(c * cm, s, c * sm) * radius
            }
        }
    }

    /// Samples at `0, step, 2*step, ...` strictly below 2π.
    pub fn trace(self, radius: f64, step: f64) -> Vec<DVec3> {
        let count = (TAU / step).ceil() as usize;
        (0..count)
            .map(|i| i as f64 * step)
            .take_while(|t| *t < TAU)
            .map(|t| self.point(radius, t))
            .collect()
    }
}

/// Latitude bands every `spacing` radians, skipping the poles.
pub fn latitude_bands(spacing: f64) -> Vec<RingKind> {
    let half = PI / 2.0;
    let n = (half / spacing).floor() as i64;
    (-n..=n)
        .map(|k| k as f64 * spacing)
        .filter(|lat| lat.abs() < half - 1e-9)
        .map(RingKind::Latitude)
        .collect()
}

/// Longitude rings every `spacing` radians over half a turn; each great
/// circle already covers its antipodal meridian.
pub fn longitude_rings(spacing: f64) -> Vec<RingKind> {
    let n = (PI / spacing).round().max(1.0) as usize;
    (0..n)
        .map(|k| RingKind::Longitude(k as f64 * spacing))
        .collect()
}
