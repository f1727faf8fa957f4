//! Edge-case and property tests for the chain engine, run against several
//! host shapes: the arena forest, borrowed object graphs compared by
//! address, and closure-defined relations.

use std::collections::HashMap;
use std::marker::PhantomData;

use ancestry::{chain, CapabilityTest, FnParent, Forest, NodeId, NodeRef, ParentAccessor};

// ── Borrowed object graph host ───────────────────────────────────────────────

/// A prototype-style object: a parent link and its own property names.
struct Proto<'a> {
    parent: Option<&'a Proto<'a>>,
    own: Vec<&'static str>,
}

/// Host over borrowed `Proto`s; handles compare by address.
struct ProtoHost<'a>(PhantomData<&'a Proto<'a>>);

impl<'a> ParentAccessor for ProtoHost<'a> {
    type Node = NodeRef<'a, Proto<'a>>;

    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node> {
        node.parent.map(NodeRef)
    }
}

impl<'a> CapabilityTest<NodeRef<'a, Proto<'a>>> for ProtoHost<'a> {
    fn has_capability_own(&self, node: &NodeRef<'a, Proto<'a>>, name: &str) -> bool {
        node.own.iter().any(|own| *own == name)
    }

    fn own_capability_names(&self, node: &NodeRef<'a, Proto<'a>>) -> Vec<String> {
        node.own.iter().map(|s| s.to_string()).collect()
    }
}

// ── Random-ish forest ────────────────────────────────────────────────────────

/// Deterministic forest: node i's parent is chosen from earlier nodes by a
/// fixed linear congruential sequence; every 17th node is a new root.
fn scattered_forest(size: usize) -> Forest {
    let mut forest = Forest::new();
    let mut state: u64 = 0x2545_f491;
    for i in 0..size {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let parent = if i == 0 || i % 17 == 0 {
            None
        } else {
            Some(format!("n{}", (state >> 33) as usize % i))
        };
        forest
            .insert(&format!("n{i}"), parent.as_deref(), [format!("c{}", i % 5)])
            .unwrap();
    }
    forest
}

fn ids(forest: &Forest) -> Vec<NodeId> {
    forest.iter().map(|(id, _)| id).collect()
}

// ── Properties ───────────────────────────────────────────────────────────────

#[test]
fn chain_ends_at_root_and_matches_depth() {
    let forest = scattered_forest(200);
    for n in ids(&forest) {
        let walked = chain::chain(&forest, &n, None);
        let last = walked.last().expect("chain is never empty");
        assert_eq!(walked[0], n);
        assert_eq!(forest.parent_of(last), None);
        assert_eq!(chain::depth(&forest, &n), walked.len());
    }
}

#[test]
fn ancestor_at_depth_indexes_chain() {
    let forest = scattered_forest(200);
    for n in ids(&forest) {
        let walked = chain::chain(&forest, &n, None);
        for (d, expected) in walked.iter().enumerate() {
            assert_eq!(chain::ancestor_at_depth(&forest, &n, d), Some(*expected));
        }
        assert_eq!(chain::ancestor_at_depth(&forest, &n, walked.len()), None);
        assert_eq!(chain::ancestor_at_depth(&forest, &n, walked.len() + 5), None);
    }
}

#[test]
fn is_ancestor_of_matches_strict_chain_membership() {
    let forest = scattered_forest(120);
    let all = ids(&forest);
    for n in &all {
        let walked = chain::chain(&forest, n, None);
        for c in &all {
            let expected = walked.iter().skip(1).any(|x| x == c);
            assert_eq!(chain::is_ancestor_of(&forest, n, c), expected);
        }
    }
}

#[test]
fn lca_is_symmetric_and_deepest_on_acyclic_forest() {
    let forest = scattered_forest(120);
    let all = ids(&forest);
    for a in &all {
        for b in &all {
            let ab = chain::lowest_common_ancestor(&forest, a, b);
            let ba = chain::lowest_common_ancestor(&forest, b, a);
            assert_eq!(
                ab, ba,
                "single-parent chains merge once, so LCA is symmetric"
            );

            let chain_a = chain::chain(&forest, a, None);
            let chain_b = chain::chain(&forest, b, None);
            let expected = chain_b.iter().find(|x| chain_a.contains(*x)).copied();
            assert_eq!(ab, expected);
        }
    }
}

#[test]
fn lca_of_node_with_itself_is_the_node() {
    let forest = scattered_forest(50);
    for n in ids(&forest) {
        assert_eq!(chain::lowest_common_ancestor(&forest, &n, &n), Some(n));
    }
}

#[test]
fn lca_of_ancestor_and_descendant_is_the_ancestor() {
    let forest = scattered_forest(80);
    for n in ids(&forest) {
        for ancestor in chain::ancestors(&forest, &n) {
            let up = chain::lowest_common_ancestor(&forest, &ancestor, &n);
            let down = chain::lowest_common_ancestor(&forest, &n, &ancestor);
            assert_eq!(up, Some(ancestor));
            assert_eq!(down, Some(ancestor));
        }
    }
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn siblings_under_shared_parent() {
    // b -> a -> r and c -> a -> r
    let mut forest = Forest::new();
    forest.insert("r", None, Vec::<String>::new()).unwrap();
    forest.insert("a", Some("r"), Vec::<String>::new()).unwrap();
    forest.insert("b", Some("a"), Vec::<String>::new()).unwrap();
    forest.insert("c", Some("a"), Vec::<String>::new()).unwrap();

    let b = forest.id_of("b").unwrap();
    let c = forest.id_of("c").unwrap();
    let a = forest.id_of("a").unwrap();
    assert_eq!(chain::lowest_common_ancestor(&forest, &b, &c), Some(a));
}

#[test]
fn disjoint_roots_share_nothing() {
    let mut forest = Forest::new();
    forest.insert("r1", None, Vec::<String>::new()).unwrap();
    forest.insert("x", Some("r1"), Vec::<String>::new()).unwrap();
    forest.insert("r2", None, Vec::<String>::new()).unwrap();
    forest.insert("y", Some("r2"), Vec::<String>::new()).unwrap();

    let x = forest.id_of("x").unwrap();
    let y = forest.id_of("y").unwrap();
    assert_eq!(chain::lowest_common_ancestor(&forest, &x, &y), None);
}

#[test]
fn lone_root_queries() {
    let mut forest = Forest::new();
    let n = forest.insert("n", None, ["anything"]).unwrap();

    assert_eq!(chain::chain(&forest, &n, None), vec![n]);
    assert_eq!(chain::depth(&forest, &n), 1);
    let closest = chain::closest_ancestor_with(&forest, &forest, &n, "anything");
    assert_eq!(closest, None);
    assert!(chain::has_capability(&forest, &forest, &n, "anything"));
    assert!(!chain::is_ancestor_of(&forest, &n, &n));
}

#[test]
fn capability_names_keep_colliding_entries() {
    let mut forest = Forest::new();
    forest.insert("root", None, ["name"]).unwrap();
    forest.insert("mid", Some("root"), ["name"]).unwrap();
    let leaf = forest.insert("leaf", Some("mid"), ["name"]).unwrap();

    assert_eq!(
        chain::all_capability_names(&forest, &forest, &leaf),
        vec!["name", "name", "name"]
    );
}

#[test]
fn empty_capabilities_on_single_root() {
    let mut forest = Forest::new();
    let bare = forest.insert("bare", None, Vec::<String>::new()).unwrap();
    let names = chain::all_capability_names(&forest, &forest, &bare);
    assert!(names.is_empty());
}

// ── Other host shapes ────────────────────────────────────────────────────────

#[test]
fn borrowed_objects_compare_by_identity() {
    let object = Proto {
        parent: None,
        own: vec!["to_string"],
    };
    let shape = Proto {
        parent: Some(&object),
        own: vec!["area"],
    };
    // Structurally identical to `shape`, but a different object.
    let twin = Proto {
        parent: Some(&object),
        own: vec!["area"],
    };
    let circle = Proto {
        parent: Some(&shape),
        own: vec!["radius", "area"],
    };

    let host = ProtoHost(PhantomData);
    let circle_ref = NodeRef(&circle);
    let shape_ref = NodeRef(&shape);
    let twin_ref = NodeRef(&twin);
    let object_ref = NodeRef(&object);

    assert!(chain::is_ancestor_of(&host, &circle_ref, &shape_ref));
    assert!(!chain::is_ancestor_of(&host, &circle_ref, &twin_ref));
    assert_eq!(chain::depth(&host, &circle_ref), 3);
    assert_eq!(
        chain::lowest_common_ancestor(&host, &circle_ref, &twin_ref),
        Some(object_ref)
    );
    assert_eq!(
        chain::closest_ancestor_with(&host, &host, &circle_ref, "area"),
        Some(shape_ref)
    );
    assert_eq!(
        chain::all_capability_names(&host, &host, &circle_ref),
        vec!["radius", "area", "area", "to_string"]
    );
}

#[test]
fn closure_host_with_limit_handles_cycles() {
    let edges: HashMap<u8, u8> = [(1, 2), (2, 3), (3, 1)].into_iter().collect();
    let parents = FnParent::new(move |n: &u8| edges.get(n).copied());

    assert_eq!(chain::chain(&parents, &1, Some(5)), vec![1, 2, 3, 1, 2]);
    assert!(chain::depth_bounded(&parents, &1, 50).is_err());
    let lca = chain::lowest_common_ancestor_bounded(&parents, &1, &9, 50);
    assert!(lca.is_err());
}

#[test]
fn negative_distance_is_a_usage_error() {
    let err = chain::checked_distance(-4).unwrap_err();
    assert!(err.to_string().contains("-4"));
}
