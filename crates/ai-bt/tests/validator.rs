mod common;

use ai_bt::{FnNode, RootNode, Tree, TreeError, TreeExecutor, TreeValidator};
use common::{Answer, Ctx, Leaf};

fn leaf(name: &'static str) -> Leaf {
    Leaf::new(name, Answer::Always(true)).0
}

#[test]
fn root_must_be_the_root_marker() {
    let tree = Tree::<Ctx>::new(FnNode::condition(|_: &Ctx| true)).with_child(leaf("a"));
    assert_eq!(
        TreeValidator::new().validate(&tree),
        Err(TreeError::RootNotMarker)
    );
}

#[test]
fn root_marker_without_children_is_rejected() {
    let tree = Tree::<Ctx>::new(RootNode);
    assert_eq!(
        TreeValidator::new().validate(&tree),
        Err(TreeError::RootWithoutChildren)
    );
}

#[test]
fn root_marker_with_a_child_passes() {
    let tree = Tree::<Ctx>::new(RootNode).with_child(leaf("a"));
    assert_eq!(TreeValidator::new().validate(&tree), Ok(()));
}

#[test]
fn executor_rejects_malformed_tree_at_assignment() {
    let err = TreeExecutor::with_tree(Ctx::default(), Tree::new(RootNode))
        .err()
        .expect("childless root must be rejected");
    assert_eq!(err, TreeError::RootWithoutChildren);
    assert_eq!(err.to_string(), "root node must have children");
}

#[test]
fn failed_assignment_keeps_previous_tree() {
    let mut executor =
        TreeExecutor::with_tree(Ctx::default(), Tree::new(RootNode).with_child(leaf("a")))
            .expect("valid tree");

    let bad = Tree::<Ctx>::new(leaf("not-a-root")).with_child(leaf("b"));
    assert_eq!(executor.set_tree(bad), Err(TreeError::RootNotMarker));

    let tree = executor.tree().expect("previous tree still installed");
    assert_eq!(tree.node_count(), 2);
}
