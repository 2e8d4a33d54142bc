#![no_main]

use libfuzzer_sys::fuzz_target;

use lambda_tasks::domain::entities::{Task, TaskAction};
use lambda_tasks::TaskGraph;

fuzz_target!(|data: &[u8]| {
    // Each byte pair is an edge `a -> b` among 8 tasks; planning must
    // either succeed or report a cycle, never overflow the stack.
    let mut deps: Vec<Vec<String>> = vec![Vec::new(); 8];
    for pair in data.chunks_exact(2) {
        let from = (pair[0] % 8) as usize;
        // no memoization: plans grow with the product of fan-outs
        if deps[from].len() < 2 {
            deps[from].push(format!("t{}", pair[1] % 8));
        }
    }

    let mut graph = TaskGraph::new();
    for (i, d) in deps.into_iter().enumerate() {
        let _ = graph.register(Task::new(format!("t{}", i), d, TaskAction::Nothing));
    }
    for i in 0..8 {
        let _ = graph.plan(&format!("t{}", i));
    }
});
