//! # Philia: Social Network Graph Queries
//!
//! Philia loads an undirected friendship network from a line-oriented text
//! file and answers two questions about it: who are an account's direct
//! friends, and what is the shortest chain of friendships linking two
//! accounts. It is a library first; the `philia` binary is a thin CLI over
//! the same queries.
//!
//! ## Design Philosophy
//!
//! - **Load once, query forever** - the graph is immutable after
//!   construction; queries never lock or copy
//! - **All-or-nothing loading** - a malformed file yields an error and no
//!   graph, never a partially populated one
//! - **Distinct outcomes** - an out-of-range account ID is an error; a pair
//!   of valid but unconnected accounts is a plain `None`
//!
//! ## Quick Start
//!
//! ```no_run
//! use philia::{AccountId, SocialGraph};
//! use std::path::Path;
//!
//! let network = SocialGraph::load(Path::new("friends.txt"))?;
//!
//! // Who does account 0 know directly?
//! let friends = network.friends_of(AccountId::from(0))?;
//! println!("{} direct friends", friends.len());
//!
//! // How is account 0 linked to account 3?
//! match network.shortest_path(AccountId::from(0), AccountId::from(3))? {
//!     Some(connection) => println!("{} hops apart", connection.hops()),
//!     None => println!("not connected"),
//! }
//! # Ok::<(), philia::Error>(())
//! ```

mod error;
mod graph;
mod search;
mod types;

pub use error::{Error, Result};
pub use graph::SocialGraph;
pub use types::{AccountId, Connection, NetworkStats};
