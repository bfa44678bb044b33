use super::*;

#[test]
fn layer_defaults_match_reference_look() {
    let c = LayerConfig::new(3);
    assert_eq!(c.node_spacing, 0.3);
    assert_eq!(c.node_radius, 0.08);
    assert_eq!(c.padding, 0.05);
    assert_eq!(c.style.node_color, Rgba8::BLUE);
    assert_eq!(c.style.highlight_color, Rgba8::RED);
    assert_eq!(c.style.frame_fill_color, Rgba8::BLACK);
    assert!(c.validate().is_ok());
}

#[test]
fn layer_validate_rejects_negative_sizes() {
    for bad in [
        LayerConfig::new(1).node_spacing(-0.1),
        LayerConfig::new(1).node_radius(-1.0),
        LayerConfig::new(1).padding(f64::NAN),
        LayerConfig::new(1).style(LayerStyle {
            node_stroke_width: -2.0,
            ..LayerStyle::default()
        }),
        LayerConfig::new(1).style(LayerStyle {
            frame_stroke_width: -0.5,
            ..LayerStyle::default()
        }),
    ] {
        let err = bad.validate().unwrap_err();
        assert!(err.is_invalid_parameter(), "{err}");
    }
}

#[test]
fn layer_zero_sizes_are_allowed() {
    let c = LayerConfig::new(0)
        .node_spacing(0.0)
        .node_radius(0.0)
        .padding(0.0);
    assert!(c.validate().is_ok());
}

#[test]
fn layer_json_fills_defaults() {
    let c: LayerConfig =
        serde_json::from_str(r##"{"node_count": 4, "style": {"highlight_color": "#00FF00"}}"##)
            .unwrap();
    assert_eq!(c.node_count, 4);
    assert_eq!(c.name, None);
    assert_eq!(c.node_spacing, 0.3);
    assert_eq!(c.style.highlight_color, Rgba8::rgb(0, 255, 0));
    assert_eq!(c.style.node_color, Rgba8::BLUE);
}

#[test]
fn layer_json_rejects_negative_count() {
    assert!(serde_json::from_str::<LayerConfig>(r#"{"node_count": -1}"#).is_err());
}

#[test]
fn connective_defaults_and_validation() {
    let c = ConnectiveConfig::default();
    assert_eq!(c.style, PropagationStyle::PassingFlash);
    assert_eq!(c.flash_run_time, 3.0);
    assert_eq!(c.flash_time_width, 0.2);
    assert_eq!(c.edge_width, 0.5);
    assert_eq!(c.token_radius, 0.05);
    assert!(c.validate().is_ok());

    for bad in [
        ConnectiveConfig {
            token_radius: -0.05,
            ..ConnectiveConfig::default()
        },
        ConnectiveConfig {
            edge_width: -1.0,
            ..ConnectiveConfig::default()
        },
        ConnectiveConfig {
            flash_run_time: 0.0,
            ..ConnectiveConfig::default()
        },
        ConnectiveConfig {
            flash_time_width: 1.5,
            ..ConnectiveConfig::default()
        },
    ] {
        assert!(bad.validate().unwrap_err().is_invalid_parameter());
    }
}

#[test]
fn propagation_style_is_snake_case() {
    let c: ConnectiveConfig = serde_json::from_str(r#"{"style": "moving_token"}"#).unwrap();
    assert_eq!(c.style, PropagationStyle::MovingToken);
    assert_eq!(
        ConnectiveConfig::default()
            .with_style(PropagationStyle::MovingToken)
            .style,
        PropagationStyle::MovingToken
    );
}
