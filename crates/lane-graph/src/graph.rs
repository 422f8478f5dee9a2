//! The graph store: a directed multigraph of facilities and routes with
//! named lookup and forward/reverse adjacency.
//!
//! Mutation is append-only (spec §3 "Lifecycle": facilities and routes are
//! never deleted), which keeps `NodeId`/`EdgeId` stable for the lifetime of
//! the graph and lets readers hold a shared borrow across an entire
//! `solve()` without any copying.

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as CodeMap;
#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as CodeMap;

use lane_core::{EdgeId, NodeId};

use crate::error::GraphError;
use crate::facility::Facility;
use crate::route::Route;

struct Edge {
    source: NodeId,
    target: NodeId,
    route: Route,
}

/// `(V, E, fwd_adj, rev_adj, by_code_v, by_code_e)` from spec §3.
#[derive(Default)]
pub struct Graph {
    facilities: Vec<Facility>,
    edges: Vec<Edge>,
    fwd_adj: Vec<Vec<EdgeId>>,
    rev_adj: Vec<Vec<EdgeId>>,
    by_code_v: CodeMap<String, NodeId>,
    by_code_e: CodeMap<String, EdgeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            facilities: Vec::new(),
            edges: Vec::new(),
            fwd_adj: Vec::new(),
            rev_adj: Vec::new(),
            by_code_v: CodeMap::default(),
            by_code_e: CodeMap::default(),
        }
    }

    // ── Node/edge counts ───────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.facilities.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── Lookup ──────────────────────────────────────────────────────────────

    pub fn node_by_code(&self, code: &str) -> Option<NodeId> {
        self.by_code_v.get(code).copied()
    }

    pub fn edge_by_code(&self, code: &str) -> Option<EdgeId> {
        self.by_code_e.get(code).copied()
    }

    pub fn facility(&self, id: NodeId) -> &Facility {
        &self.facilities[id.index()]
    }

    pub fn route(&self, id: EdgeId) -> &Route {
        &self.edges[id.index()].route
    }

    pub fn edge_source(&self, id: EdgeId) -> NodeId {
        self.edges[id.index()].source
    }

    pub fn edge_target(&self, id: EdgeId) -> NodeId {
        self.edges[id.index()].target
    }

    pub(crate) fn fwd_adj(&self, node: NodeId) -> &[EdgeId] {
        &self.fwd_adj[node.index()]
    }

    pub(crate) fn rev_adj(&self, node: NodeId) -> &[EdgeId] {
        &self.rev_adj[node.index()]
    }

    // ── Mutation ────────────────────────────────────────────────────────────

    /// Insert a facility, or update an already-present one in place (keyed
    /// by `code`). Re-ingesting an identical record is therefore a no-op
    /// (spec §8, idempotence).
    pub fn upsert_facility(&mut self, facility: Facility) -> NodeId {
        if let Some(&id) = self.by_code_v.get(&facility.code) {
            self.facilities[id.index()] = facility;
            return id;
        }
        let id = NodeId(self.facilities.len() as u32);
        self.by_code_v.insert(facility.code.clone(), id);
        self.facilities.push(facility);
        self.fwd_adj.push(Vec::new());
        self.rev_adj.push(Vec::new());
        id
    }

    /// Insert a route between two facilities named by code.
    ///
    /// Returns [`GraphError::UnknownFacility`] if either endpoint does not
    /// yet exist; the live updater drops such routes rather than buffering
    /// them (spec §3 "Lifecycle", §4.5).
    pub fn add_route(
        &mut self,
        source_code: &str,
        target_code: &str,
        route: Route,
    ) -> Result<EdgeId, GraphError> {
        let source = self
            .node_by_code(source_code)
            .ok_or_else(|| GraphError::UnknownFacility(source_code.to_string()))?;
        let target = self
            .node_by_code(target_code)
            .ok_or_else(|| GraphError::UnknownFacility(target_code.to_string()))?;

        if let Some(&id) = self.by_code_e.get(&route.code) {
            return Ok(id);
        }

        let id = EdgeId(self.edges.len() as u32);
        self.by_code_e.insert(route.code.clone(), id);
        self.edges.push(Edge { source, target, route });
        self.fwd_adj[source.index()].push(id);
        self.rev_adj[target.index()].push(id);
        Ok(id)
    }
}
