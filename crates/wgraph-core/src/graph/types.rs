use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{GraphError, Result};

/// Node identifier, valid in `0..node_count`
pub type NodeId = usize;

/// Weight of an edge or accumulated path cost.
///
/// Integer weights print without a fractional part so the diagnostic
/// tables read the same as the integers they were built from.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    /// Weight given to every edge of an unweighted graph
    pub const UNIT: Weight = Weight(1.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Sum clamped to the finite range, so adding two finite weights never
    /// produces the unreachable sentinel.
    pub fn saturating_add(self, other: Weight) -> Weight {
        Weight((self.0 + other.0).clamp(f64::MIN, f64::MAX))
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<i32> for Weight {
    fn from(weight: i32) -> Self {
        Weight(f64::from(weight))
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            write!(f, "{}", if self.0 > 0.0 { "inf" } else { "-inf" })
        } else if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// A weighted connection between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: impl Into<Weight>) -> Self {
        Edge {
            from,
            to,
            weight: weight.into(),
        }
    }

    /// An edge of unit weight, for unweighted graphs
    pub fn unweighted(from: NodeId, to: NodeId) -> Self {
        Edge::new(from, to, Weight::UNIT)
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((from, to): (NodeId, NodeId)) -> Self {
        Edge::unweighted(from, to)
    }
}

impl From<(NodeId, NodeId, i32)> for Edge {
    fn from((from, to, weight): (NodeId, NodeId, i32)) -> Self {
        Edge::new(from, to, weight)
    }
}

/// Immutable per-graph configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphOptions {
    /// Store edges only from source to destination
    pub directed: bool,
    /// Keep supplied weights; when false every edge weighs 1
    pub weighted: bool,
}

impl GraphOptions {
    pub fn directed() -> Self {
        GraphOptions {
            directed: true,
            weighted: true,
        }
    }

    pub fn undirected() -> Self {
        GraphOptions {
            directed: false,
            weighted: true,
        }
    }

    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Weight actually stored for an edge under these options
    pub(crate) fn effective_weight(&self, weight: Weight) -> Weight {
        if self.weighted {
            weight
        } else {
            Weight::UNIT
        }
    }
}

/// Convert a signed node id (as typed on a command line) into a `NodeId`
pub fn node_from_signed(node: i64, node_count: usize) -> Result<NodeId> {
    match usize::try_from(node) {
        Ok(id) if id < node_count => Ok(id),
        _ => Err(GraphError::InvalidNode { node, node_count }),
    }
}

/// Unvalidated edge as written on the command line: `FROM:TO[:WEIGHT]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub from: i64,
    pub to: i64,
    pub weight: Option<f64>,
}

impl EdgeSpec {
    /// Validate the endpoints against a node count and build an [`Edge`].
    /// A missing weight means 1.
    pub fn resolve(&self, node_count: usize) -> Result<Edge> {
        let from = node_from_signed(self.from, node_count)?;
        let to = node_from_signed(self.to, node_count)?;
        Ok(Edge::new(from, to, self.weight.unwrap_or(1.0)))
    }
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) {
            crate::bail_invalid!("edge (expected FROM:TO[:WEIGHT])", s);
        }

        let parse_node = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| GraphError::invalid_value("edge endpoint", part))
        };
        let from = parse_node(parts[0])?;
        let to = parse_node(parts[1])?;
        let weight = match parts.get(2) {
            Some(part) => Some(
                part.parse::<f64>()
                    .map_err(|_| GraphError::invalid_value("edge weight", part))?,
            ),
            None => None,
        };

        Ok(EdgeSpec { from, to, weight })
    }
}
