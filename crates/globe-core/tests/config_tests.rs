// Host-side tests for presets, constants and config validation.

use globe_core::*;

#[test]
fn presets_validate_and_match_their_constants() {
    let cloud = Preset::PointCloud.config();
    assert!(cloud.validate().is_ok());
    assert_eq!((cloud.width, cloud.height), (CLOUD_WIDTH, CLOUD_HEIGHT));
    assert_eq!(cloud.samples, CLOUD_SAMPLES);
    assert_eq!(cloud.strokes.len(), 2);
    assert_eq!(cloud.strokes[0].kind, RingKind::Equator);
    assert_eq!(cloud.strokes[1].kind, RingKind::Orbit);
    assert!(!cloud.strokes.spilled());

    let wire = Preset::Wireframe.config();
    assert!(wire.validate().is_ok());
    assert_eq!(wire.samples, 0);
    let bands = wire
        .strokes
        .iter()
        .filter(|s| matches!(s.kind, RingKind::Latitude(_)))
        .count();
    let rings = wire
        .strokes
        .iter()
        .filter(|s| matches!(s.kind, RingKind::Longitude(_)))
        .count();
    // 30° spacing: -60, -30, 0, 30, 60 and six great circles
    assert_eq!((bands, rings), (5, 6));
}

#[test]
fn default_config_is_the_point_cloud() {
    assert_eq!(GlobeConfig::default(), Preset::PointCloud.config());
    assert_eq!(Preset::default(), Preset::PointCloud);
}

#[test]
fn preset_names_parse() {
    for (s, p) in [
        ("point-cloud", Preset::PointCloud),
        ("Points", Preset::PointCloud),
        (" wireframe ", Preset::Wireframe),
        ("WIRE", Preset::Wireframe),
    ] {
        assert_eq!(s.parse::<Preset>(), Ok(p), "{s}");
    }
    for p in [Preset::PointCloud, Preset::Wireframe] {
        assert_eq!(p.name().parse::<Preset>(), Ok(p));
    }
    assert_eq!(
        "donut".parse::<Preset>(),
        Err(ConfigError::UnknownPreset("donut".into()))
    );
}

#[test]
fn invalid_configs_are_rejected() {
    let base = GlobeConfig::default();

    let err = Rasterizer::new(base.clone().with_size(0, 10)).err();
    assert_eq!(
        err,
        Some(ConfigError::EmptyGrid {
            width: 0,
            height: 10
        })
    );

    for radius in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let cfg = GlobeConfig {
            radius,
            ..base.clone()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive { name: "radius", .. })
        ));
    }

    let cfg = GlobeConfig {
        ring_step: 0.0,
        ..base.clone()
    };
    assert!(cfg.validate().is_err());

    let cfg = GlobeConfig {
        step: f64::NAN,
        ..base.clone()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite { name: "step", .. })
    ));

    let cfg = GlobeConfig {
        dense_probability: 1.5,
        ..base
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::Probability(_))));
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::UnknownPreset("donut".into()).to_string();
    assert!(msg.contains("donut"));
    assert!(msg.contains("point-cloud"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DEFAULT_ASPECT > 0.0 && DEFAULT_ASPECT < 1.0);
    assert!(WIRE_ASPECT > 0.0 && WIRE_ASPECT < 1.0);
    assert!(CLOUD_STEP > 0.0 && CLOUD_STEP < 0.1);
    assert!(WIRE_STEP > 0.0 && WIRE_STEP < 0.1);
    assert!((0.0..=1.0).contains(&DENSE_GLYPH_PROBABILITY));

    // the globe must fit inside its own grid
    assert!(CLOUD_RADIUS * 2.0 < CLOUD_WIDTH as f64);
    assert!(CLOUD_RADIUS * 2.0 * DEFAULT_ASPECT < CLOUD_HEIGHT as f64);
    assert!(WIRE_RADIUS * 2.0 < WIRE_WIDTH as f64);
    assert!(WIRE_RADIUS * 2.0 * WIRE_ASPECT < WIRE_HEIGHT as f64);
}

#[test]
fn golden_spiral_points_lie_on_the_sphere() {
    let pts = globe_core::sphere::golden_spiral(500, 7.0);
    assert_eq!(pts.len(), 500);
    for p in &pts {
        assert!((p.length() - 7.0).abs() < 1e-9);
    }
    // even spread: hemispheres hold about half each
    let north = pts.iter().filter(|p| p.z > 0.0).count();
    assert!((north as i64 - 250).abs() <= 2);
}

#[test]
fn rings_close_without_duplicating_the_seam() {
    let pts = RingKind::Equator.trace(10.0, 0.05);
    assert_eq!(pts.len(), 126);
    for kind in [
        RingKind::Equator,
        RingKind::Orbit,
        RingKind::Latitude(0.4),
        RingKind::Longitude(1.2),
    ] {
        for p in kind.trace(10.0, 0.1) {
            assert!(p.length() <= 10.0 + 1e-9);
        }
    }
    let band = RingKind::Latitude(std::f64::consts::FRAC_PI_6).trace(10.0, 0.2);
    assert!(band.iter().all(|p| (p.y - 5.0).abs() < 1e-9));
}
