//! Strongly connected components (iterative Tarjan) over an index-based
//! edge subset.

const UNVISITED: usize = usize::MAX;

/// Component id per vertex, in `0..count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Components {
    pub component_of: Vec<usize>,
    pub count: usize,
}

/// Strongly connected components of the graph given by `adj`. Uses an
/// explicit DFS stack so deep chains cannot overflow the call stack.
pub(crate) fn strongly_connected(adj: &[Vec<usize>]) -> Components {
    let n = adj.len();
    let mut index_counter = 0usize;
    let mut stack: Vec<usize> = Vec::new();
    let mut on_stack = vec![false; n];
    let mut indices = vec![UNVISITED; n];
    let mut lowlinks = vec![UNVISITED; n];
    let mut component_of = vec![UNVISITED; n];
    let mut count = 0usize;

    for start in 0..n {
        if indices[start] != UNVISITED {
            continue;
        }

        let mut dfs: Vec<(usize, usize)> = vec![(start, 0)];
        indices[start] = index_counter;
        lowlinks[start] = index_counter;
        index_counter += 1;
        stack.push(start);
        on_stack[start] = true;

        while let Some(frame) = dfs.last_mut() {
            let v = frame.0;
            if frame.1 < adj[v].len() {
                let w = adj[v][frame.1];
                frame.1 += 1;
                if indices[w] == UNVISITED {
                    indices[w] = index_counter;
                    lowlinks[w] = index_counter;
                    index_counter += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    dfs.push((w, 0));
                } else if on_stack[w] {
                    lowlinks[v] = lowlinks[v].min(indices[w]);
                }
                continue;
            }

            if lowlinks[v] == indices[v] {
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    component_of[w] = count;
                    if w == v {
                        break;
                    }
                }
                count += 1;
            }
            let low = lowlinks[v];
            dfs.pop();
            if let Some(&(parent, _)) = dfs.last() {
                lowlinks[parent] = lowlinks[parent].min(low);
            }
        }
    }

    Components {
        component_of,
        count,
    }
}
