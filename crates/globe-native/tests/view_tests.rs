// Host-side tests for terminal placement, drawing and settings.
// The crate is a binary, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod view {
    include!("../src/view.rs");
}
mod settings {
    include!("../src/settings.rs");
}
mod screen {
    include!("../src/screen.rs");
}

use globe_core::{Grid, Preset, Rasterizer};
use settings::*;
use std::time::Duration;
use view::*;

#[test]
fn small_grid_is_centred_in_a_large_terminal() {
    let vp = centre(64, 64, 200, 100);
    assert_eq!(
        vp,
        Viewport {
            src_row: 0,
            src_col: 0,
            dst_row: 18,
            dst_col: 68,
            rows: 64,
            cols: 64,
        }
    );
}

#[test]
fn large_grid_is_cropped_around_its_centre() {
    // 64 rows into a 24-row terminal keeps rows 20..44, where the globe is
    let vp = centre(64, 64, 80, 24);
    assert_eq!((vp.src_row, vp.rows, vp.dst_row), (20, 24, 0));
    assert_eq!((vp.src_col, vp.cols, vp.dst_col), (0, 64, 8));
}

#[test]
fn zero_sized_terminal_draws_nothing() {
    let vp = centre(64, 64, 0, 0);
    assert_eq!((vp.rows, vp.cols), (0, 0));
    assert!(vp.src_row + vp.rows <= 64 && vp.src_col + vp.cols <= 64);
}

fn globe() -> Grid {
    Rasterizer::new(Preset::PointCloud.config())
        .unwrap()
        .render_frame(0.0)
}

fn drawn(grid: &Grid, term: (u16, u16)) -> String {
    let mut out: Vec<u8> = Vec::new();
    let mut line = String::new();
    screen::draw(&mut out, grid, term, &mut line).unwrap();
    String::from_utf8(out).unwrap()
}

fn row_text(grid: &Grid, row: usize, cols: std::ops::Range<usize>) -> String {
    grid.rows().nth(row).unwrap()[cols]
        .iter()
        .map(|g| g.as_char())
        .collect()
}

#[test]
fn draw_crops_a_grid_larger_than_the_terminal() {
    let grid = globe();
    // 64x64 into 20x10 keeps rows 27..37 and columns 22..42
    let out = drawn(&grid, (20, 10));

    let mut expected = String::from("\x1b[?2026h");
    for i in 0..10 {
        expected.push_str(&format!("\x1b[{};1H", i + 1));
        expected.push_str(&row_text(&grid, 27 + i, 22..42));
    }
    expected.push_str("\x1b[?2026l");
    assert_eq!(out, expected);
    assert!(row_text(&grid, 32, 22..42).contains(|c: char| c != ' '));
}

#[test]
fn draw_offsets_a_grid_smaller_than_the_terminal() {
    let grid = globe();
    let out = drawn(&grid, (200, 100));
    assert!(out.contains(&format!("\x1b[19;69H{}", row_text(&grid, 0, 0..64))));
    assert!(out.contains(&format!("\x1b[82;69H{}", row_text(&grid, 63, 0..64))));
    assert!(!out.contains("\x1b[83;"));
}

#[test]
fn draw_into_an_empty_terminal_writes_no_rows() {
    let out = drawn(&globe(), (0, 0));
    assert_eq!(out, "\x1b[?2026h\x1b[?2026l");
}

#[test]
fn settings_default_to_point_cloud_at_sixty_fps() {
    let s = Settings::resolve(None, None, None).unwrap();
    assert_eq!(s.preset, Preset::PointCloud);
    assert_eq!(s.frame_interval, Duration::from_secs_f64(1.0 / 60.0));
}

#[test]
fn cli_argument_beats_environment() {
    let s = Settings::resolve(Some("wire"), Some("point-cloud"), Some("30")).unwrap();
    assert_eq!(s.preset, Preset::Wireframe);
    assert_eq!(s.frame_interval, Duration::from_secs_f64(1.0 / 30.0));

    let s = Settings::resolve(None, Some("wireframe"), None).unwrap();
    assert_eq!(s.preset, Preset::Wireframe);
}

#[test]
fn bad_settings_are_reported() {
    assert!(Settings::resolve(Some("torus"), None, None).is_err());
    assert!(parse_fps("fast").is_err());
    assert!(parse_fps("0").is_err());
    assert!(parse_fps("1000").is_err());
    assert_eq!(parse_fps(" 24 ").unwrap(), 24);

    let msg = format!("{:#}", Settings::resolve(Some("torus"), None, None).unwrap_err());
    assert!(msg.contains("torus"));
}
