//! Plans list dependencies before the task and repeat shared ones.

use lambda_tasks::domain::entities::{Task, TaskAction};
use lambda_tasks::TaskGraph;
use proptest::prelude::*;

/// A chain `t0 <- t1 <- ... <- tn`, where every task depends on its predecessor
fn chain(len: usize) -> TaskGraph<'static> {
    let mut graph = TaskGraph::new();
    for i in 0..len {
        let deps: Vec<String> = if i == 0 {
            Vec::new()
        } else {
            vec![format!("t{}", i - 1)]
        };
        graph
            .register(Task::new(format!("t{}", i), deps, TaskAction::Nothing))
            .unwrap();
    }
    graph
}

proptest! {
    #[test]
    fn chain_plan_is_in_dependency_order(len in 1usize..30) {
        let graph = chain(len);
        let plan = graph.plan(&format!("t{}", len - 1)).unwrap();
        let expected: Vec<String> = (0..len).map(|i| format!("t{}", i)).collect();
        prop_assert_eq!(plan, expected);
    }

    #[test]
    fn sequence_repeats_shared_dependencies(len in 1usize..10, repeats in 1usize..5) {
        let mut graph = chain(len);
        let top = format!("t{}", len - 1);
        graph
            .register(Task::sequence("all", vec![top.clone(); repeats]))
            .unwrap();

        let plan = graph.plan("all").unwrap();
        prop_assert_eq!(plan.len(), len * repeats + 1);
        prop_assert_eq!(plan.iter().filter(|s| **s == top).count(), repeats);
    }
}
