//! The social graph: members plus one shared link history per linked pair

use std::collections::HashMap;
use std::fmt;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;

use crate::link::{LinkHistory, LinkState};
use crate::model::{Day, NetworkError, User};

/// An in-memory social graph whose links toggle active and inactive over time.
///
/// Backed by an undirected petgraph with stable indices, so each linked pair
/// shares exactly one `LinkHistory` no matter which endpoint a query starts
/// from. Lifecycle operations either fully commit a transition or fail with
/// the network unchanged.
pub struct Network {
    inner: StableUnGraph<User, LinkHistory>,
    ids: HashMap<String, NodeIndex>,
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("member_count", &self.inner.node_count())
            .field("link_count", &self.inner.edge_count())
            .finish()
    }
}

impl Network {
    pub fn new() -> Self {
        Network {
            inner: StableUnGraph::with_capacity(0, 0),
            ids: HashMap::new(),
        }
    }

    /// Add a member. Fails if the id is empty or already taken.
    pub fn add_user(&mut self, user: User) -> Result<(), NetworkError> {
        if user.id().is_empty() || self.ids.contains_key(user.id()) {
            return Err(NetworkError::InvalidUsers);
        }
        let id = user.id().to_owned();
        let idx = self.inner.add_node(user);
        self.ids.insert(id, idx);
        tracing::debug!(member_count = self.ids.len(), "user added");
        Ok(())
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.ids.get(id).map(|&idx| &self.inner[idx])
    }

    pub fn member_count(&self) -> usize {
        self.ids.len()
    }

    pub fn link_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Record an activation on the pair's link, creating the link on first use.
    pub fn establish(&mut self, a: &str, b: &str, date: Day) -> Result<(), NetworkError> {
        let (ia, ib) = self.pair_indices(a, b)?;
        match self.inner.find_edge(ia, ib) {
            Some(edge) => self.inner[edge].record(date, LinkState::Active),
            None => {
                let mut history = LinkHistory::new();
                history.record(date, LinkState::Active)?;
                self.inner.add_edge(ia, ib, history);
                tracing::debug!(%a, %b, %date, "link established");
                Ok(())
            }
        }
    }

    /// Record a deactivation on the pair's link.
    pub fn tear_down(&mut self, a: &str, b: &str, date: Day) -> Result<(), NetworkError> {
        let (ia, ib) = self.pair_indices(a, b)?;
        match self.inner.find_edge(ia, ib) {
            Some(edge) => self.inner[edge].record(date, LinkState::Inactive),
            // The pair has never been linked: nothing to tear down.
            None => Err(NetworkError::AlreadyInactive),
        }
    }

    /// Was the link between `a` and `b` active on `date`? False for
    /// non-members and for pairs that were never linked.
    pub fn is_active(&self, a: &str, b: &str, date: Day) -> bool {
        let Ok((ia, ib)) = self.pair_indices(a, b) else {
            return false;
        };
        self.inner
            .find_edge(ia, ib)
            .map_or(false, |edge| self.inner[edge].is_active_at(date))
    }

    /// The event log for a linked pair, if one exists.
    pub fn link(&self, a: &str, b: &str) -> Option<&LinkHistory> {
        let (ia, ib) = self.pair_indices(a, b).ok()?;
        self.inner.find_edge(ia, ib).map(|edge| &self.inner[edge])
    }

    /// Resolve two ids to distinct member indices.
    fn pair_indices(&self, a: &str, b: &str) -> Result<(NodeIndex, NodeIndex), NetworkError> {
        if a == b {
            return Err(NetworkError::InvalidUsers);
        }
        match (self.ids.get(a), self.ids.get(b)) {
            (Some(&ia), Some(&ib)) => Ok((ia, ib)),
            _ => Err(NetworkError::InvalidUsers),
        }
    }

    // ── Read access for the query algorithms ────────────────

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.ids.get(id).copied()
    }

    pub(crate) fn user_at(&self, idx: NodeIndex) -> &User {
        &self.inner[idx]
    }

    /// Incident links of a node as `(neighbor, history)` pairs.
    pub(crate) fn links_of(
        &self,
        idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, &LinkHistory)> + '_ {
        self.inner.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (other, edge.weight())
        })
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
