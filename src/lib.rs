//! wgraph - weighted undirected graphs
//!
//! Build a graph in either representation, then hand it to a solver:
//!
//! ```
//! use wgraph::prelude::*;
//!
//! let graph = BasicGraph::try_new(
//!     ["a", "b", "c"].into_iter().collect(),
//!     [Edge::new("a", "b", 1), Edge::new("b", "c", 1), Edge::new("a", "c", 5)]
//!         .into_iter()
//!         .collect(),
//! )?;
//!
//! let path = DijkstraPathCalculator::new(&graph).calculate_path(&"a", &"c")?;
//! assert_eq!(path, vec!["a", "b", "c"]);
//!
//! let mst = KruskalMstCalculator::new(&graph).calculate_mst()?;
//! assert_eq!(mst.edges().len(), 2);
//! # Ok::<(), wgraph::GraphError>(())
//! ```

pub use wgraph_core::{config, error, graph, logging, solver};

pub use wgraph_core::error::{GraphError, Result};

/// Everything needed to build graphs and run the solvers
pub mod prelude {
    pub use wgraph_core::config::{Grouping, Representation, SolverConfig};
    pub use wgraph_core::error::{GraphError, Result};
    pub use wgraph_core::graph::{
        AdjacencyGraph, BasicGraph, Edge, Graph, ImmutableGraph, MutableGraph, Node, Weight,
    };
    pub use wgraph_core::solver::{
        DijkstraPathCalculator, KruskalMstCalculator, MstCalculator, PathCalculator,
        ShortestPath, SpanningForest,
    };
}
