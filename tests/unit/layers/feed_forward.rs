use super::*;
use crate::animation::description::Effect;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn layer(n: usize) -> FeedForwardLayer {
    FeedForwardLayer::new(LayerConfig::new(n).named("l")).unwrap()
}

#[test]
fn nodes_sit_on_the_vertical_axis() {
    for n in [0usize, 1, 3, 7] {
        for spacing in [0.0, 0.3, 1.25] {
            let l = FeedForwardLayer::new(LayerConfig::new(n).node_spacing(spacing)).unwrap();
            assert_eq!(l.nodes().len(), n);
            for (i, node) in l.nodes().iter().enumerate() {
                assert_eq!(node.center, Point::new(0.0, i as f64 * spacing));
            }
        }
    }
}

#[test]
fn frame_contains_every_node_with_padding() {
    let l = FeedForwardLayer::new(LayerConfig::new(4).node_radius(0.1).padding(0.05)).unwrap();
    let rect = l.frame().rect;
    for node in l.nodes() {
        let c = node.circle();
        assert!(rect.x0 <= c.center.x - c.radius - 0.05 + 1e-12);
        assert!(rect.x1 >= c.center.x + c.radius + 0.05 - 1e-12);
        assert!(rect.y0 <= c.center.y - c.radius - 0.05 + 1e-12);
        assert!(rect.y1 >= c.center.y + c.radius + 0.05 - 1e-12);
    }
    assert!(approx(rect.y0, -0.15));
    assert!(approx(rect.y1, 0.9 + 0.15));
    assert!(approx(rect.x0, -0.15));
    assert!(approx(rect.x1, 0.15));
}

#[test]
fn zero_padding_is_tangent_to_outer_nodes() {
    let l = FeedForwardLayer::new(LayerConfig::new(3).node_radius(0.08).padding(0.0)).unwrap();
    let rect = l.frame().rect;
    let first = l.nodes()[0].circle();
    let last = l.nodes()[2].circle();
    assert!(approx(rect.y0, first.center.y - first.radius));
    assert!(approx(rect.y1, last.center.y + last.radius));
    assert!(approx(rect.x0, -0.08));
    assert!(approx(rect.x1, 0.08));
}

#[test]
fn empty_layer_still_has_a_frame() {
    let l = FeedForwardLayer::new(LayerConfig::new(0).padding(0.05)).unwrap();
    assert!(l.nodes().is_empty());
    assert_eq!(l.frame().rect, Rect::new(-0.05, -0.05, 0.05, 0.05));
    assert_eq!(l.group().len(), 1);
}

#[test]
fn frame_is_opaque_and_styled() {
    let l = layer(2);
    assert_eq!(l.frame().fill.opacity, 1.0);
    assert_eq!(l.frame().fill.color, Rgba8::BLACK);
    assert_eq!(l.frame().stroke.width, 2.0);
    assert_eq!(l.nodes()[0].fill, Rgba8::BLUE);
}

#[test]
fn invalid_parameters_are_rejected() {
    for cfg in [
        LayerConfig::new(2).node_spacing(-0.3),
        LayerConfig::new(2).node_radius(-0.08),
        LayerConfig::new(2).padding(-1.0),
    ] {
        assert!(FeedForwardLayer::new(cfg).unwrap_err().is_invalid_parameter());
    }
}

#[test]
fn group_is_frame_then_nodes() {
    let l = layer(3);
    let group = l.group();
    let keys: Vec<&str> = group.keys().map(PrimitiveKey::as_str).collect();
    assert_eq!(keys, vec!["l/frame", "l/node/0", "l/node/1", "l/node/2"]);
}

#[test]
fn default_name_is_layer() {
    let l = FeedForwardLayer::new(LayerConfig::new(1)).unwrap();
    assert_eq!(l.name(), "layer");
}

#[test]
fn creation_is_parallel_frame_first() {
    let l = layer(3);
    let anim = l.creation_animation();
    let AnimationDescription::Parallel(p) = &anim else {
        panic!("expected parallel");
    };
    assert_eq!(p.lag, 0.0);
    assert_eq!(p.children.len(), 4);
    let targets: Vec<String> = anim
        .effects()
        .into_iter()
        .map(|e| match e {
            Effect::Create(c) => c.target.to_string(),
            other => panic!("unexpected effect {other:?}"),
        })
        .collect();
    assert_eq!(targets, vec!["l/frame", "l/node/0", "l/node/1", "l/node/2"]);
    assert_eq!(anim.duration(), CREATE_RUN_TIME);
}

#[test]
fn forward_pass_is_highlight_hold_restore() {
    for n in [0usize, 1, 5, 40] {
        let l = layer(n);
        let anim = l.forward_pass_animation();
        let AnimationDescription::Sequential(steps) = &anim else {
            panic!("expected sequential");
        };
        assert_eq!(steps.len(), 3);
        assert_eq!(anim.duration(), 1.5);

        let effects = anim.effects();
        let Effect::SetColor(up) = effects[0] else {
            panic!("expected set-color");
        };
        assert_eq!(up.run_time, 0.25);
        assert_eq!(up.from, Rgba8::BLUE);
        assert_eq!(up.to, Rgba8::RED);
        assert_eq!(up.targets.len(), n);

        assert!(matches!(effects[1], Effect::Wait(w) if w.run_time == 1.0));

        let Effect::SetColor(down) = effects[2] else {
            panic!("expected set-color");
        };
        assert_eq!(down.run_time, 0.25);
        assert_eq!(down.to, Rgba8::BLUE);
    }
}

#[test]
fn shift_moves_nodes_and_frame() {
    let mut l = layer(2);
    let before = l.frame().rect;
    l.shift(Vec2::new(2.0, -1.0));
    assert_eq!(l.nodes()[1].center, Point::new(2.0, 0.3 - 1.0));
    assert_eq!(l.frame().rect, before + Vec2::new(2.0, -1.0));
    assert_eq!(l.bounding_box(), l.frame().rect);
}

#[test]
fn construction_is_deterministic() {
    let a = layer(3);
    let b = layer(3);
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.frame(), b.frame());
    assert_eq!(a.forward_pass_animation(), b.forward_pass_animation());
}
