use super::*;
use crate::animation::description::Effect;
use crate::layers::config::{LayerConfig, PropagationStyle};
use crate::layers::feed_forward::FeedForwardLayer;

fn ff(n: usize, name: &str) -> FeedForwardLayer {
    FeedForwardLayer::new(LayerConfig::new(n).named(name)).unwrap()
}

fn chain() -> (Network, Vec<LayerId>) {
    let mut net = Network::new();
    let ids = vec![
        net.add_layer(ff(3, "a")).unwrap(),
        net.add_layer(ff(2, "b")).unwrap(),
        net.add_layer(ff(1, "c")).unwrap(),
    ];
    net.connect(ids[0], ids[1], ConnectiveConfig::default())
        .unwrap();
    net.connect(ids[1], ids[2], ConnectiveConfig::default())
        .unwrap();
    (net, ids)
}

#[test]
fn arena_hands_out_sequential_ids() {
    let mut arena = LayerArena::new();
    assert!(arena.is_empty());
    let a = arena.insert(Box::new(ff(1, "a"))).unwrap();
    let b = arena.insert(Box::new(ff(1, "b"))).unwrap();
    assert_eq!((a, b), (LayerId(0), LayerId(1)));
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(b).unwrap().name(), "b");
    assert!(arena.get(LayerId(2)).is_none());
    let names: Vec<&str> = arena.iter().map(|(_, l)| l.name()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn connect_rejects_unknown_layers_without_adding_anything() {
    let mut net = Network::new();
    let a = net.add_layer(ff(2, "a")).unwrap();
    let err = net
        .connect(a, LayerId(9), ConnectiveConfig::default())
        .unwrap_err();
    assert!(err.is_invalid_parameter());
    assert!(net.connectives().is_empty());
}

#[test]
fn unnamed_layers_cannot_share_a_network() {
    let mut net = Network::new();
    net.add_layer(FeedForwardLayer::new(LayerConfig::new(2)).unwrap())
        .unwrap();
    let err = net
        .add_layer(FeedForwardLayer::new(LayerConfig::new(2)).unwrap())
        .unwrap_err();
    assert!(err.is_invalid_parameter());
    assert!(err.to_string().contains("'layer'"));
    assert_eq!(net.layers().len(), 1);
}

#[test]
fn primitive_keys_are_unique_across_the_network() {
    let (net, _) = chain();
    let group = net.group();
    let keys: std::collections::BTreeSet<_> = group.keys().collect();
    assert_eq!(keys.len(), group.len());
}

#[test]
fn pipeline_alternates_layers_and_connectives() {
    let (net, _) = chain();
    let names: Vec<String> = net
        .pipeline()
        .iter()
        .map(|s| s.component().name().to_string())
        .collect();
    assert_eq!(names, vec!["a", "a->b", "b", "b->c", "c"]);
    assert!(matches!(net.pipeline()[1], Stage::Connective(ConnectiveId(0), _)));
}

#[test]
fn group_collects_every_stage() {
    let (net, _) = chain();
    // Frames + nodes: (1+3) + (1+2) + (1+1); edges: 6 + 2.
    assert_eq!(net.group().len(), 9 + 8);
}

#[test]
fn forward_pass_sequences_every_stage() {
    let (net, _) = chain();
    let anim = net.forward_pass_animation(1.0).unwrap();
    let AnimationDescription::Sequential(steps) = &anim else {
        panic!("expected sequential");
    };
    assert_eq!(steps.len(), 5);
    // Three layer highlights and two flash passes.
    assert_eq!(anim.duration(), 3.0 * 1.5 + 2.0 * 3.0);
    assert!(net.forward_pass_animation(0.0).is_err());
}

#[test]
fn forward_pass_moving_tokens_follows_run_time() {
    let mut net = Network::new();
    let a = net.add_layer(ff(2, "a")).unwrap();
    let b = net.add_layer(ff(2, "b")).unwrap();
    net.connect(
        a,
        b,
        ConnectiveConfig::default().with_style(PropagationStyle::MovingToken),
    )
    .unwrap();
    let anim = net.forward_pass_animation(2.0).unwrap();
    assert_eq!(anim.duration(), 1.5 + 2.0 + 1.5);
    let moves = anim
        .effects()
        .into_iter()
        .filter(|e| matches!(e, Effect::MoveAlongPath(_)))
        .count();
    assert_eq!(moves, 4);
}

#[test]
fn creation_is_sequential_over_pipeline() {
    let (net, _) = chain();
    let anim = net.creation_animation();
    assert_eq!(anim.children().len(), 5);
    assert_eq!(anim.duration(), 5.0);
}

#[test]
fn layer_ids_display_compactly() {
    assert_eq!(LayerId(4).to_string(), "#4");
}
