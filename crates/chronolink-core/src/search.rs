//! Distance-bounded breadth-first reachability at a fixed date

use std::collections::{HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::model::{Day, Friend, NetworkError};
use crate::network::Network;

/// Everyone reachable from `id` over links active on `date`, at any distance.
pub fn neighborhood(
    network: &Network,
    id: &str,
    date: Day,
) -> Result<HashSet<Friend>, NetworkError> {
    neighborhood_within(network, id, date, i32::MAX)
}

/// Everyone reachable from `id` over links active on `date`, at most
/// `max_distance` hops away. The root is always included at distance 0, and
/// each reachable user appears once with its shortest hop count.
pub fn neighborhood_within(
    network: &Network,
    id: &str,
    date: Day,
    max_distance: i32,
) -> Result<HashSet<Friend>, NetworkError> {
    let root = network.index_of(id).ok_or(NetworkError::InvalidUsers)?;
    if max_distance < 0 {
        return Err(NetworkError::InvalidDistance);
    }
    let bound = max_distance as u32;

    let mut friends = HashSet::new();
    friends.insert(Friend::new(network.user_at(root).clone(), 0));

    let mut seen: HashSet<NodeIndex> = HashSet::from([root]);
    let mut queue: VecDeque<(NodeIndex, u32)> = VecDeque::from([(root, 0)]);

    // The date is one snapshot for the whole search; only hop count varies.
    while let Some((node, distance)) = queue.pop_front() {
        if distance >= bound {
            continue;
        }
        for (neighbor, history) in network.links_of(node) {
            if history.is_active_at(date) && seen.insert(neighbor) {
                friends.insert(Friend::new(network.user_at(neighbor).clone(), distance + 1));
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    tracing::trace!(root = id, %date, reachable = friends.len(), "neighborhood computed");
    Ok(friends)
}
