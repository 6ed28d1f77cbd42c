use std::f64::consts::TAU;

/// Y-axis spin of one mounted globe. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    angle: f64,
    step: f64,
}

impl Rotation {
    pub fn new(step: f64) -> Self {
        Self { angle: 0.0, step }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Move one step and return the new angle, kept in `[0, 2π)`.
    pub fn advance(&mut self) -> f64 {
        self.angle = wrap_angle(self.angle + self.step);
        self.angle
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }
}

#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}
