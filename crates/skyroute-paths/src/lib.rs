//! Weighted route search on skyroute grids.
//!
//! - **Dijkstra** single-target search with lazy deletion ([`Solver`])
//! - **Reconstruction** of the origin-to-destination [`Route`] and run
//!   [`Metrics`] from a [`SearchResult`]
//! - **Replay** of the visitation order in fixed-size batches ([`Replay`])
//! - **Cancellation** between expansions ([`CancelToken`])
//!
//! The solver works on anything implementing [`WeightedPather`];
//! [`Grid`](skyroute_core::Grid) implements it with 4-directional moves
//! whose cost is that of the cell entered.

mod cancel;
mod node;
mod replay;
mod result;
mod route;
mod solver;
mod traits;

pub use cancel::CancelToken;
pub use node::UNREACHABLE;
pub use replay::{DEFAULT_REPLAY_SPEED, Replay};
pub use result::{Outcome, SearchResult};
#[cfg(feature = "serde")]
pub use result::ResultTableError;
pub use route::{Metrics, Route, reconstruct};
pub use solver::Solver;
pub use traits::{Pather, WeightedPather};
