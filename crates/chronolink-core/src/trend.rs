//! Trend discovery: the dates at which a user's reachable set changes size
//!
//! Phase 1 walks the graph with an explicit work-stack, collecting every
//! transition date that could affect reachability from the root without
//! sampling the timeline. Phase 2 evaluates the neighborhood size at each
//! candidate and keeps only the dates where the size actually moves.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use petgraph::stable_graph::NodeIndex;

use crate::link::LinkHistory;
use crate::model::{Day, NetworkError};
use crate::network::Network;
use crate::search::neighborhood;

/// One pending branch of the exploration: a node to expand, the time window
/// still under consideration, and the members this branch has already passed
/// through. The visited set is branch-local: it is cloned on every push, so a
/// member excluded on one branch can still be revisited on another branch
/// through a different path and window.
struct Branch {
    node: NodeIndex,
    window: (Day, Day),
    visited: HashSet<NodeIndex>,
}

/// Dates at which the size of `id`'s unbounded neighborhood changes, with the
/// size in force from each kept date on. Consecutive kept sizes always differ.
pub fn neighborhood_trend(
    network: &Network,
    id: &str,
) -> Result<BTreeMap<Day, usize>, NetworkError> {
    let root = network.index_of(id).ok_or(NetworkError::InvalidUsers)?;

    let candidates = discover_candidates(network, root);
    tracing::debug!(root = id, candidates = candidates.len(), "candidate change dates discovered");

    let mut trend = BTreeMap::new();
    let mut last_size = None;
    for date in candidates {
        let size = neighborhood(network, id, date)?.len();
        if last_size != Some(size) {
            trend.insert(date, size);
            last_size = Some(size);
        }
    }
    Ok(trend)
}

/// Phase 1: every transition date that could change reachability from `root`,
/// anywhere on the timeline.
fn discover_candidates(network: &Network, root: NodeIndex) -> BTreeSet<Day> {
    let mut candidates = BTreeSet::new();
    let mut stack = vec![Branch {
        node: root,
        window: (Day::MIN, Day::MAX),
        visited: HashSet::new(),
    }];

    while let Some(branch) = stack.pop() {
        for (neighbor, history) in network.links_of(branch.node) {
            if branch.visited.contains(&neighbor) {
                continue;
            }
            // The branch carries the node it came through, not the neighbor,
            // so the neighbor stays re-entrant from other branches.
            let mut carried = branch.visited.clone();
            carried.insert(branch.node);
            scan_link(history, neighbor, carried, branch.window, &mut candidates, &mut stack);
        }
    }
    candidates
}

/// Walk one link's transitions inside `window`, recording candidates and
/// queueing the neighbor wherever the link's activity lets reachability
/// continue through it.
fn scan_link(
    history: &LinkHistory,
    neighbor: NodeIndex,
    visited: HashSet<NodeIndex>,
    window: (Day, Day),
    candidates: &mut BTreeSet<Day>,
    stack: &mut Vec<Branch>,
) {
    let (start, end) = window;
    let mut cursor = history.next_transition_after(start);

    loop {
        let Some(event) = cursor else {
            // Log exhausted: an unterminated activation stays reachable
            // through to the end of this branch's window.
            if let Some(last) = history.last_transition() {
                if history.is_active_at(last) {
                    stack.push(Branch { node: neighbor, window: (last, end), visited });
                }
            }
            return;
        };

        if start <= event && event < end {
            candidates.insert(event);
            if history.is_active_at(event) {
                // The neighbor is reachable only while this activation holds,
                // so deeper exploration is confined to that span.
                match history.next_transition_after(event) {
                    Some(next) if next <= end => {
                        stack.push(Branch {
                            node: neighbor,
                            window: (event, next),
                            visited: visited.clone(),
                        });
                    }
                    // Activity runs past the window: truncate and stop.
                    _ => {
                        stack.push(Branch { node: neighbor, window: (event, end), visited });
                        return;
                    }
                }
            }
        } else {
            // First transition at or past the window's end: the defining
            // activation, if any, happened before this window opened.
            if let Some(previous) = history.previous_transition_before(event) {
                if event <= end && previous < start {
                    stack.push(Branch { node: neighbor, window: (start, event), visited });
                } else if previous >= start {
                    stack.push(Branch { node: neighbor, window: (previous, end), visited });
                }
            }
            return;
        }

        cursor = history.next_transition_after(event);
    }
}
