//! Configuration type definitions

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Representation used for graphs produced by the solvers
    #[serde(default)]
    pub representation: Representation,

    /// Disjoint-group strategy used by Kruskal
    #[serde(default)]
    pub grouping: Grouping,
}

/// Immutable graph representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// Node to incident-edge map
    #[default]
    Basic,
    /// Dense symmetric adjacency matrix
    Adjacency,
}

/// How Kruskal tracks which nodes are already connected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// Union-find with path compression and union by size
    #[default]
    UnionFind,
    /// Explicit list of node groups, merged smaller into larger
    GroupList,
}

impl Representation {
    pub const ALL: [Representation; 2] = [Representation::Basic, Representation::Adjacency];

    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::Basic => "basic",
            Representation::Adjacency => "adjacency",
        }
    }
}

impl Grouping {
    pub const ALL: [Grouping; 2] = [Grouping::UnionFind, Grouping::GroupList];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::UnionFind => "union-find",
            Grouping::GroupList => "group-list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "map" => Ok(Representation::Basic),
            "adjacency" | "matrix" => Ok(Representation::Adjacency),
            other => crate::bail_invalid!("representation", other),
        }
    }
}

impl FromStr for Grouping {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union-find" | "union_find" => Ok(Grouping::UnionFind),
            "group-list" | "group_list" => Ok(Grouping::GroupList),
            other => crate::bail_invalid!("grouping", other),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            version: default_version(),
            representation: Representation::default(),
            grouping: Grouping::default(),
        }
    }
}
