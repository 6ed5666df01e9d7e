//! Tool probing — session seam, result normalization, sequential runner.
//!
//! The remote procedure transport itself is an external collaborator; this
//! module owns everything on this side of it: the [`ToolSession`] seam the
//! frontend binds a real client to, the [`ToolOutcome`] normalization of
//! externally-shaped results, and the one-at-a-time invocation loop with
//! per-tool failure isolation.

pub mod outcome;
pub mod runner;
pub mod session;

pub use outcome::ToolOutcome;
pub use runner::{probe_tools, ProbePhase, ToolReport};
pub use session::{ToolDescriptor, ToolSession};
