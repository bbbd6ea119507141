//! End-to-end tests for the multilayer network store.
//!
//! Builds one network with three layers of mixed directionality, exercises
//! every query surface, then tears entities down and checks that the
//! cascades leave all counts consistent.

use std::sync::Arc;

use plexnet_common::{AttributeType, Error};
use plexnet_engine::{Actor, EdgeMode, Layer, MlNetwork, MlNetworkConfig, Node};

struct Fixture {
    net: MlNetwork,
    a1: Arc<Actor>,
    l1: Arc<Layer>,
    l2: Arc<Layer>,
    l3: Arc<Layer>,
    n1v0: Arc<Node>,
    n2v0: Arc<Node>,
    n2v1: Arc<Node>,
    n2v2: Arc<Node>,
    n3v0: Arc<Node>,
    n3v1: Arc<Node>,
    n3v2: Arc<Node>,
}

/// Three actors, three layers (l3 directed, l2->l3 directed), nine nodes,
/// five intra-layer edges and one inter-layer edge.
fn build_fixture() -> Fixture {
    let mut net = MlNetwork::new("friends");

    let a1 = net.add_actor("a1").unwrap();
    let a2 = net.add_actor("a2").unwrap();
    let a3 = net.add_actor("Matteo").unwrap();

    let l1 = net.add_layer("l1", false).unwrap();
    let l2 = net.add_layer("l2", false).unwrap();
    let l3 = net.add_layer("Facebook", true).unwrap();
    net.set_directed(&l2, &l3, true);

    let n1v0 = net.add_node(&a1, &l1).unwrap();
    net.add_node(&a2, &l1).unwrap();
    net.add_node(&a3, &l1).unwrap();
    let n2v0 = net.add_node(&a1, &l2).unwrap();
    let n2v1 = net.add_node(&a2, &l2).unwrap();
    let n2v2 = net.add_node(&a3, &l2).unwrap();
    let n3v0 = net.add_node(&a1, &l3).unwrap();
    let n3v1 = net.add_node(&a2, &l3).unwrap();
    let n3v2 = net.add_node(&a3, &l3).unwrap();

    let n1v1 = net.get_node("a2", &l1).unwrap();
    net.add_edge(&n1v0, &n1v1).unwrap();
    net.add_edge(&n2v0, &n2v1).unwrap();
    net.add_edge(&n2v1, &n2v2).unwrap();
    net.add_edge(&n3v0, &n3v2).unwrap();
    net.add_edge(&n3v2, &n3v1).unwrap();
    net.add_edge(&n2v2, &n3v1).unwrap();

    Fixture {
        net,
        a1,
        l1,
        l2,
        l3,
        n1v0,
        n2v0,
        n2v1,
        n2v2,
        n3v0,
        n3v1,
        n3v2,
    }
}

#[test]
fn test_population_and_lookups() {
    let f = build_fixture();
    let net = &f.net;

    assert_eq!(net.num_actors(), 3);
    assert_eq!(net.num_layers(), 3);
    assert_eq!(net.num_nodes(), 9);
    assert_eq!(net.num_edges(), 6);
    assert_eq!(net.actors().count(), 3);
    assert_eq!(net.nodes().count(), 9);
    assert_eq!(net.edges().count(), 6);

    let matteo = net.get_actor("Matteo").unwrap();
    assert_eq!(matteo.name(), "Matteo");
    assert!(net.get_actor("nobody").is_none());

    let facebook = net.get_layer("Facebook").unwrap();
    assert_eq!(facebook.id(), f.l3.id());

    assert_eq!(net.num_nodes_in(&f.l1), 3);
    assert_eq!(net.nodes_in(&f.l2).count(), 3);
    assert_eq!(net.nodes_of(&f.a1).count(), 3);
    assert_eq!(net.get_node_of(&f.a1, &f.l2).unwrap().id(), f.n2v0.id());

    // Edges live under the ordered pair of their endpoints' layers.
    assert_eq!(net.edges_between(&f.l2, &f.l2).count(), 2);
    assert_eq!(net.edges_between(&f.l2, &f.l3).count(), 1);
    assert_eq!(net.edges_between(&f.l3, &f.l2).count(), 0);

    // Directedness followed the pair policy at creation time.
    assert!(!net.get_edge(&f.n2v0, &f.n2v1).unwrap().is_directed());
    assert!(net.get_edge(&f.n3v0, &f.n3v2).unwrap().is_directed());
    assert!(net.get_edge(&f.n2v2, &f.n3v1).unwrap().is_directed());

    // Undirected edges resolve in both endpoint orders; directed don't.
    assert!(net.get_edge(&f.n2v1, &f.n2v0).is_some());
    assert!(net.get_edge(&f.n3v2, &f.n3v0).is_none());
}

#[test]
fn test_id_order_and_rank_access() {
    let f = build_fixture();
    let net = &f.net;

    let ids: Vec<u64> = net.nodes().map(|n| n.id().as_u64()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    for (rank, node) in net.nodes().enumerate() {
        assert_eq!(net.node_at(rank).unwrap().id(), node.id());
    }
    assert!(net.node_at(9).is_none());
    assert_eq!(net.actor_at(0).unwrap().name(), "a1");

    // Id lookups resolve the same handles the iteration sees.
    assert_eq!(net.actor_by_id(f.a1.id()).unwrap().name(), "a1");
    assert_eq!(net.layer_by_id(f.l3.id()).unwrap().name(), "Facebook");
    assert_eq!(net.node_by_id(f.n2v1.id()).unwrap().name(), "a2");
    let first_edge = net.edge_at(0).unwrap();
    assert_eq!(net.edge_by_id(first_edge.id()).unwrap().id(), first_edge.id());
}

#[test]
fn test_duplicates_rejected_without_side_effects() {
    let mut f = build_fixture();

    assert!(matches!(
        f.net.add_actor("Matteo"),
        Err(Error::DuplicateElement(_))
    ));
    assert!(matches!(
        f.net.add_layer("Facebook", false),
        Err(Error::DuplicateElement(_))
    ));
    // Same actor manifesting twice in one layer.
    assert!(matches!(
        f.net.add_node(&f.a1, &f.l1),
        Err(Error::DuplicateElement(_))
    ));
    // Same node name in one layer under a different actor.
    let a2 = f.net.get_actor("a2").unwrap();
    assert!(matches!(
        f.net.add_named_node("a1", &a2, &f.l2),
        Err(Error::DuplicateElement(_))
    ));
    // Already connected, either endpoint order for undirected edges.
    assert!(matches!(
        f.net.add_edge(&f.n2v0, &f.n2v1),
        Err(Error::DuplicateElement(_))
    ));
    assert!(matches!(
        f.net.add_edge(&f.n2v1, &f.n2v0),
        Err(Error::DuplicateElement(_))
    ));

    assert_eq!(f.net.num_actors(), 3);
    assert_eq!(f.net.num_layers(), 3);
    assert_eq!(f.net.num_nodes(), 9);
    assert_eq!(f.net.num_edges(), 6);
}

#[test]
fn test_directed_antiparallel_edges_coexist() {
    let mut f = build_fixture();

    // l3 is directed, so the reverse of an existing edge is a new edge.
    f.net.add_edge(&f.n3v2, &f.n3v0).unwrap();
    assert_eq!(f.net.num_edges(), 7);

    // Both count once under InOut.
    let all: Vec<_> = f.net.neighbors(&f.n3v0, EdgeMode::InOut).collect();
    assert_eq!(all.len(), 1);
}

#[test]
fn test_neighbors() {
    let f = build_fixture();
    let net = &f.net;

    // n3v2 in the directed layer: in from n3v0, out to n3v1.
    assert_eq!(net.neighbors(&f.n3v2, EdgeMode::In).count(), 1);
    assert_eq!(net.neighbors(&f.n3v2, EdgeMode::Out).count(), 1);
    assert_eq!(net.neighbors(&f.n3v2, EdgeMode::InOut).count(), 2);
    assert_eq!(
        net.neighbors(&f.n3v2, EdgeMode::In).next().unwrap().id(),
        f.n3v0.id()
    );

    // n2v1 in the undirected layer sees both neighbors under every mode.
    assert_eq!(net.neighbors(&f.n2v1, EdgeMode::Out).count(), 2);
    assert_eq!(net.neighbors(&f.n2v1, EdgeMode::In).count(), 2);
    assert_eq!(net.neighbors(&f.n2v1, EdgeMode::InOut).count(), 2);

    // n3v1 also receives the inter-layer edge from n2v2.
    assert_eq!(net.neighbors(&f.n3v1, EdgeMode::In).count(), 2);
    assert_eq!(net.neighbors(&f.n3v1, EdgeMode::Out).count(), 0);
}

#[test]
fn test_directionality_policy() {
    let mut net = MlNetwork::new("policy");
    let l1 = net.add_layer("l1", false).unwrap();
    let l2 = net.add_layer("l2", false).unwrap();
    let l3 = net.add_layer("l3", true).unwrap();

    assert!(!net.is_directed(&l1, &l1));
    assert!(net.is_directed(&l3, &l3));
    // No policy set for the pair yet: the configured default applies.
    assert!(!net.is_directed(&l1, &l2));

    net.set_directed(&l1, &l2, true);
    assert!(net.is_directed(&l1, &l2));
    assert!(net.is_directed(&l2, &l1));
}

#[test]
fn test_policy_change_after_edges_exist() {
    let mut net = MlNetwork::new("policy");
    let l1 = net.add_layer("l1", false).unwrap();
    let l2 = net.add_layer("l2", false).unwrap();
    let a = net.add_actor("a").unwrap();
    let b = net.add_actor("b").unwrap();
    let n1 = net.add_node(&a, &l1).unwrap();
    let n2 = net.add_node(&b, &l2).unwrap();
    net.add_edge(&n1, &n2).unwrap();

    // The policy can always be changed; existing edges keep the flag they
    // were created with, later edges follow the new policy.
    net.set_directed(&l1, &l2, true);
    assert!(net.is_directed(&l1, &l2));
    assert!(!net.get_edge(&n1, &n2).unwrap().is_directed());

    let c = net.add_actor("c").unwrap();
    let n3 = net.add_node(&c, &l2).unwrap();
    assert!(net.add_edge(&n1, &n3).unwrap().is_directed());
}

#[test]
fn test_default_named_factories() {
    let mut net = MlNetwork::new("defaults");

    // Default names come from the fresh id.
    let a1 = net.add_default_actor().unwrap();
    assert_eq!(a1.name(), "1");
    net.add_actor("named").unwrap();
    let a3 = net.add_default_actor().unwrap();
    assert_eq!(a3.name(), "3");
    assert_eq!(net.num_actors(), 3);

    let l1 = net.add_default_layer(true).unwrap();
    assert_eq!(l1.name(), "1");
    assert!(net.is_directed(&l1, &l1));

    // A generated name can clash with an explicitly chosen one.
    net.add_actor("4").unwrap();
    assert!(matches!(
        net.add_default_actor(),
        Err(Error::DuplicateElement(_))
    ));
    assert_eq!(net.num_actors(), 4);
}

#[test]
fn test_default_directed_config() {
    let config = MlNetworkConfig::new().with_default_directed(true);
    let mut net = MlNetwork::with_config("directed-by-default", config);
    let l1 = net.add_layer("l1", true).unwrap();
    let l2 = net.add_layer("l2", true).unwrap();
    assert!(net.is_directed(&l1, &l2));
}

#[test]
fn test_attribute_registries() {
    let mut f = build_fixture();

    let features = f.net.node_features(&f.l1);
    features.add("weight", AttributeType::Numeric).unwrap();
    features.add("type", AttributeType::String).unwrap();
    f.net
        .edge_features(&f.l1, &f.l2)
        .add("weight", AttributeType::Numeric)
        .unwrap();

    f.net
        .node_features(&f.l1)
        .set_numeric(f.n1v0.id(), "weight", 32.4)
        .unwrap();
    f.net
        .node_features(&f.l1)
        .set_string(f.n1v0.id(), "type", "pro")
        .unwrap();

    let features = f.net.node_features_of(&f.l1).unwrap();
    assert_eq!(features.get_numeric(f.n1v0.id(), "weight").unwrap(), 32.4);
    assert_eq!(features.get_string(f.n1v0.id(), "type").unwrap(), "pro");
    assert_eq!(features.len(), 2);

    // The pair is ordered: the reverse direction has its own registry.
    assert_eq!(f.net.edge_features_of(&f.l1, &f.l2).unwrap().len(), 1);
    assert!(f.net.edge_features_of(&f.l2, &f.l1).is_none());

    f.net
        .actor_features_mut()
        .add("age", AttributeType::Numeric)
        .unwrap();
    f.net
        .actor_features_mut()
        .set_numeric(f.a1.id(), "age", 42.0)
        .unwrap();
    assert_eq!(
        f.net.actor_features().get_numeric(f.a1.id(), "age").unwrap(),
        42.0
    );
}

#[test]
fn test_erase_cascades() {
    let mut f = build_fixture();

    // Erasing a node drops its incident edges.
    f.net.erase_node(&f.n3v2).unwrap();
    assert_eq!(f.net.num_nodes(), 8);
    assert_eq!(f.net.num_edges(), 4);

    // Erasing one edge leaves its endpoints in place.
    let e3 = f.net.get_edge(&f.n2v1, &f.n2v2).unwrap();
    f.net.erase_edge(&e3).unwrap();
    assert_eq!(f.net.num_edges(), 3);
    assert_eq!(f.net.num_nodes(), 8);

    // Erasing an actor drops its nodes everywhere.
    f.net.erase_actor(&f.a1).unwrap();
    assert_eq!(f.net.num_actors(), 2);
    assert_eq!(f.net.num_nodes(), 5);

    // Erasing a layer drops its remaining nodes.
    f.net.erase_layer(&f.l1).unwrap();
    assert_eq!(f.net.num_layers(), 2);
    assert_eq!(f.net.num_nodes(), 3);
}

#[test]
fn test_erase_edge_updates_adjacency() {
    let mut f = build_fixture();

    let e2 = f.net.get_edge(&f.n2v0, &f.n2v1).unwrap();
    f.net.erase_edge(&e2).unwrap();

    assert!(f.net.get_edge(&f.n2v0, &f.n2v1).is_none());
    assert!(f.net.get_edge(&f.n2v1, &f.n2v0).is_none());
    assert_eq!(f.net.neighbors(&f.n2v0, EdgeMode::InOut).count(), 0);
    assert_eq!(f.net.neighbors(&f.n2v1, EdgeMode::InOut).count(), 1);
    assert_eq!(f.net.neighbors(&f.n2v1, EdgeMode::Out).count(), 1);
}

#[test]
fn test_erase_antiparallel_keeps_mutual_neighbors() {
    let mut f = build_fixture();

    f.net.add_edge(&f.n3v1, &f.n3v2).unwrap();
    assert_eq!(f.net.neighbors(&f.n3v2, EdgeMode::InOut).count(), 2);

    // Dropping one direction keeps the nodes mutual InOut neighbors.
    let forward = f.net.get_edge(&f.n3v2, &f.n3v1).unwrap();
    f.net.erase_edge(&forward).unwrap();
    assert_eq!(f.net.neighbors(&f.n3v2, EdgeMode::InOut).count(), 2);
    assert_eq!(f.net.neighbors(&f.n3v2, EdgeMode::Out).count(), 0);
    assert_eq!(f.net.neighbors(&f.n3v2, EdgeMode::In).count(), 2);
}

#[test]
fn test_erase_node_clears_attribute_values() {
    let mut f = build_fixture();

    f.net
        .node_features(&f.l2)
        .add("weight", AttributeType::Numeric)
        .unwrap();
    f.net
        .node_features(&f.l2)
        .set_numeric(f.n2v2.id(), "weight", 7.0)
        .unwrap();

    f.net.erase_node(&f.n2v2).unwrap();

    // The registry survives; the erased node reads defaults again.
    let features = f.net.node_features_of(&f.l2).unwrap();
    assert_eq!(features.get_numeric(f.n2v2.id(), "weight").unwrap(), 0.0);
}

#[test]
fn test_erase_missing_elements() {
    let mut f = build_fixture();

    f.net.erase_node(&f.n1v0).unwrap();
    assert!(matches!(
        f.net.erase_node(&f.n1v0),
        Err(Error::ElementNotFound(_))
    ));

    let e = f.net.get_edge(&f.n2v0, &f.n2v1).unwrap();
    f.net.erase_edge(&e).unwrap();
    assert!(matches!(
        f.net.erase_edge(&e),
        Err(Error::ElementNotFound(_))
    ));
}

#[test]
fn test_stale_handles_do_not_resolve() {
    let mut f = build_fixture();

    f.net.erase_actor(&f.a1).unwrap();
    // The Arc handle is still usable, the store just no longer knows it.
    assert_eq!(f.a1.name(), "a1");
    assert!(f.net.get_actor("a1").is_none());
    assert_eq!(f.net.nodes_of(&f.a1).count(), 0);
    assert!(matches!(
        f.net.add_node(&f.a1, &f.l1),
        Err(Error::ElementNotFound(_))
    ));
}

#[test]
fn test_name_reuse_after_erase() {
    let mut f = build_fixture();

    f.net.erase_actor(&f.a1).unwrap();
    let again = f.net.add_actor("a1").unwrap();
    // Same name, fresh identity.
    assert_ne!(again.id(), f.a1.id());
    assert_eq!(f.net.num_actors(), 3);
}
