//! Route — a walk through the street network, one segment per step.

use serde::{Deserialize, Serialize};

use crate::model::{is_present, NodeId, SegmentId};

/// One traversed segment: from -[rua]-> to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub from: NodeId,
    pub to: NodeId,
    pub segment: SegmentId,
    pub weight: f64,
    pub rua: Option<String>,
}

/// A route in the graph: start -[step]-> node -[step]-> node ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    start: NodeId,
    steps: Vec<RouteStep>,
}

impl Route {
    /// Zero-length route that starts and ends at `start`.
    pub fn single(start: NodeId) -> Self {
        Self { start, steps: Vec::new() }
    }

    pub(crate) fn from_steps(start: NodeId, steps: Vec<RouteStep>) -> Self {
        Self { start, steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.steps.last().map_or(self.start, |s| s.to)
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    /// Extend the route by one step. The step must start where the route ends.
    pub fn append(&mut self, step: RouteStep) {
        debug_assert_eq!(step.from, self.end());
        self.steps.push(step);
    }

    /// Total weight of all steps.
    pub fn distance(&self) -> f64 {
        self.steps.iter().map(|s| s.weight).sum()
    }

    /// Visited vertices, start first. Always one longer than `steps`.
    pub fn nodes(&self) -> Vec<NodeId> {
        std::iter::once(self.start).chain(self.steps.iter().map(|s| s.to)).collect()
    }

    pub fn segments(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.steps.iter().map(|s| s.segment)
    }

    /// Street name of every step, blanks included.
    pub fn street_names(&self) -> Vec<Option<&str>> {
        self.steps.iter().map(|s| s.rua.as_deref()).collect()
    }

    /// Streets as a traveller reads them: blanks dropped, repeats collapsed.
    pub fn streets(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for rua in self.steps.iter().filter_map(|s| s.rua.as_deref()) {
            if is_present(Some(rua)) && out.last() != Some(&rua) {
                out.push(rua);
            }
        }
        out
    }
}
