use anyhow::Context;
use globe_core::Preset;
use std::time::Duration;

pub const PRESET_ENV: &str = "ASCII_GLOBE_PRESET";
pub const FPS_ENV: &str = "ASCII_GLOBE_FPS";
pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub preset: Preset,
    pub frame_interval: Duration,
}

impl Settings {
    /// First CLI argument wins over the environment for the preset.
    pub fn resolve(
        arg: Option<&str>,
        env_preset: Option<&str>,
        env_fps: Option<&str>,
    ) -> anyhow::Result<Self> {
        let preset = match arg.or(env_preset) {
            Some(name) => name
                .parse::<Preset>()
                .with_context(|| format!("invalid preset {name:?}"))?,
            None => Preset::default(),
        };
        let fps = match env_fps {
            Some(v) => parse_fps(v)?,
            None => DEFAULT_FPS,
        };
        Ok(Self {
            preset,
            frame_interval: Duration::from_secs_f64(1.0 / fps as f64),
        })
    }
}

pub fn parse_fps(s: &str) -> anyhow::Result<u32> {
    let fps: u32 = s
        .trim()
        .parse()
        .with_context(|| format!("{FPS_ENV} must be a whole number, got {s:?}"))?;
    anyhow::ensure!(
        (1..=MAX_FPS).contains(&fps),
        "{FPS_ENV} must be between 1 and {MAX_FPS}, got {fps}"
    );
    Ok(fps)
}
