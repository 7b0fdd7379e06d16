use std::time::Duration;

use ai_bt::{FnNode, RootNode, Tree, TreeContext, TreeEvaluator, TreeExecutor, TreeState};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn never(_: &TreeState) -> bool {
    false
}

fn always(_: &TreeState) -> bool {
    true
}

/// 32 rejected guards followed by a satisfiable leaf.
fn wide_tree() -> Tree<TreeState> {
    let mut tree = Tree::new(RootNode);
    for _ in 0..32 {
        tree = tree.with_child(FnNode::condition(never));
    }
    tree.with_child(FnNode::condition(always))
}

fn bench_bt_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("ai-bt");

    let tree = wide_tree();
    let state = TreeState::new();
    let mut evaluator = TreeEvaluator::new();
    group.bench_function("evaluate(guards=32)", |b| {
        b.iter(|| black_box(evaluator.evaluate(&state, &tree)))
    });

    let mut executor = TreeExecutor::with_tree(TreeState::new(), wide_tree()).expect("tree");
    group.bench_function("execute_reevaluate(guards=32)", |b| {
        b.iter(|| {
            executor.context_mut().invalidate();
            black_box(executor.execute(Duration::from_millis(16)));
        })
    });

    group.bench_function("execute_stable", |b| {
        b.iter(|| black_box(executor.execute(Duration::from_millis(16))))
    });

    group.finish();
}

criterion_group!(benches, bench_bt_tick);
criterion_main!(benches);
