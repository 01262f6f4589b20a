//! Tests for heatmap configuration.

use citygrid_common::{
    CityGridError, HeatmapConfig, NormalizationRank, TrimMode, DEFAULT_ASPECT_RATIO,
};

#[test]
fn test_defaults() {
    let config = HeatmapConfig::default();
    assert_eq!(config.width, 512);
    assert_eq!(config.pixel_scale, 1);
    assert_eq!(config.normalization, NormalizationRank::Max);
    assert_eq!(config.trim, TrimMode::Exact);
    assert_eq!(config.aspect_ratio, 1.40944);
    assert_eq!(config.image_size(100), (512, 100));
}

#[test]
fn test_from_json_partial() {
    let config = HeatmapConfig::from_json(
        r#"{ "width": 256, "pixel_scale": 4, "normalization": { "sub_max": 3 }, "trim": "trim_0_1_pct" }"#,
    )
    .unwrap();
    assert_eq!(config.width, 256);
    assert_eq!(config.pixel_scale, 4);
    assert_eq!(config.normalization, NormalizationRank::SubMax(3));
    assert_eq!(config.trim, TrimMode::Trim0_1Pct);
    assert_eq!(config.aspect_ratio, DEFAULT_ASPECT_RATIO);
}

#[test]
fn test_from_json_rejects_invalid() {
    assert!(matches!(
        HeatmapConfig::from_json(r#"{ "pixel_scale": 0 }"#),
        Err(CityGridError::InvalidParameter { .. })
    ));
    assert!(matches!(
        HeatmapConfig::from_json("not json"),
        Err(CityGridError::InvalidParameter { .. })
    ));
}

#[test]
fn test_validate_aspect_ratio() {
    for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = HeatmapConfig {
            aspect_ratio: ratio,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "ratio {} accepted", ratio);
    }
}

#[test]
fn test_from_env() {
    // The only test in this binary that touches the environment.
    std::env::set_var("CITYGRID_WIDTH", "128");
    std::env::set_var("CITYGRID_PIXEL_SCALE", "2");
    std::env::set_var("CITYGRID_RANK_OFFSET", "5");
    std::env::set_var("CITYGRID_TRIM", "0.01pct");
    std::env::set_var("CITYGRID_ASPECT_RATIO", "not-a-number");

    let config = HeatmapConfig::from_env();
    assert_eq!(config.width, 128);
    assert_eq!(config.pixel_scale, 2);
    assert_eq!(config.normalization, NormalizationRank::SubMax(5));
    assert_eq!(config.trim, TrimMode::Trim0_01Pct);
    assert_eq!(config.aspect_ratio, DEFAULT_ASPECT_RATIO);

    for key in [
        "CITYGRID_WIDTH",
        "CITYGRID_PIXEL_SCALE",
        "CITYGRID_RANK_OFFSET",
        "CITYGRID_TRIM",
        "CITYGRID_ASPECT_RATIO",
    ] {
        std::env::remove_var(key);
    }
}
