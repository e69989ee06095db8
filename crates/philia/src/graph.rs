//! Graph Store: parsing and read-only queries over a friendship network.
//!
//! The network file is line-oriented text. The first non-blank line carries
//! the account count (any further tokens on that line, such as an edge
//! count, are ignored). Every following non-blank line is a whitespace
//! separated pair of account IDs declaring one friendship:
//!
//! ```text
//! 4 2
//! 0 1
//! 1 2
//! ```
//!
//! ## Design
//!
//! - Construction is all-or-nothing: the constructors return a fully
//!   populated graph or an error, so callers can never observe a half
//!   loaded network
//! - Friendships are symmetric; both directions are inserted at load time
//!   and never re-checked afterwards
//! - Adjacency lists preserve insertion order and suppress duplicates with
//!   a linear contains scan. Expected node degree is small; a set-backed
//!   structure would change nothing observable
//! - Every parsed endpoint is range-checked against the declared account
//!   count, so adjacency indexing after load cannot go out of bounds

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{AccountId, NetworkStats};

/// An immutable, undirected friendship graph over dense account IDs.
///
/// Built once from a network file; every query borrows `self` immutably,
/// so a loaded graph is freely shareable across readers.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    account_count: usize,
    adjacency: Vec<Vec<AccountId>>,
}

impl SocialGraph {
    /// Load a network from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if `path` does not resolve to a
    /// readable file, [`Error::Io`] if reading fails partway, and the
    /// format errors documented on [`SocialGraph::from_reader`].
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let graph = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            accounts = graph.account_count,
            friendships = graph.friendship_count(),
            "network loaded"
        );
        Ok(graph)
    }

    /// Parse a network from any buffered text source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFile`] if the source holds no non-blank lines,
    /// [`Error::InvalidFormat`] for a malformed account count, a malformed
    /// or incomplete friendship pair, or a pair endpoint outside
    /// `[0, account_count)`, and [`Error::Io`] if reading fails. The first
    /// bad line aborts the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines().enumerate();

        // Header: first token of the first non-blank line is the account
        // count. Anything after it on the same line is ignored.
        let account_count = loop {
            let Some((index, line)) = lines.next() else {
                return Err(Error::EmptyFile);
            };
            let line = line?;
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            break token.parse::<usize>().map_err(|_| {
                Error::invalid_format(
                    index + 1,
                    format!("account count is not a non-negative integer: {token:?}"),
                )
            })?;
        };

        let mut adjacency: Vec<Vec<AccountId>> = vec![Vec::new(); account_count];

        for (index, line) in lines {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue; // blank lines between pairs are tolerated
            };
            let Some(second) = tokens.next() else {
                return Err(Error::invalid_format(
                    index + 1,
                    "friendship line needs two account ids",
                ));
            };

            let a = parse_endpoint(first, account_count, index + 1)?;
            let b = parse_endpoint(second, account_count, index + 1)?;

            insert_friend(&mut adjacency, a, b);
            insert_friend(&mut adjacency, b, a);
        }

        Ok(Self {
            account_count,
            adjacency,
        })
    }

    /// Whether `id` names an account in the loaded network.
    #[must_use]
    pub fn is_valid_id(&self, id: AccountId) -> bool {
        id.as_usize() < self.account_count
    }

    /// The direct friends of `id`, in the order their friendships appeared
    /// in the network file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if `id` is outside the loaded range.
    pub fn friends_of(&self, id: AccountId) -> Result<&[AccountId]> {
        if !self.is_valid_id(id) {
            return Err(Error::InvalidId {
                id: id.as_usize(),
                accounts: self.account_count,
            });
        }
        Ok(&self.adjacency[id.as_usize()])
    }

    /// Total number of accounts in the network.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.account_count
    }

    /// Number of distinct friendships (undirected edges).
    ///
    /// Counts each unordered pair once; a self-friendship counts once.
    #[must_use]
    pub fn friendship_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(id, friends)| friends.iter().filter(|f| f.as_usize() >= id).count())
            .sum()
    }

    /// Summary statistics over the loaded network.
    #[must_use]
    pub fn stats(&self) -> NetworkStats {
        let isolated = self
            .adjacency
            .iter()
            .filter(|friends| friends.is_empty())
            .count();
        let most_connected = self
            .adjacency
            .iter()
            .enumerate()
            .filter(|(_, friends)| !friends.is_empty())
            .max_by_key(|(_, friends)| friends.len())
            .map(|(id, friends)| (AccountId::from(id), friends.len()));

        NetworkStats {
            accounts: self.account_count,
            friendships: self.friendship_count(),
            isolated,
            most_connected,
        }
    }
}

/// Parse one endpoint of a friendship pair, enforcing the ID range.
fn parse_endpoint(token: &str, account_count: usize, line: usize) -> Result<usize> {
    let id = token.parse::<usize>().map_err(|_| {
        Error::invalid_format(line, format!("{token:?} is not a valid account id"))
    })?;
    if id >= account_count {
        return Err(Error::invalid_format(
            line,
            format!("account id {id} is out of range for {account_count} accounts"),
        ));
    }
    Ok(id)
}

/// Insert `friend` into `account`'s adjacency list unless already present.
fn insert_friend(adjacency: &mut [Vec<AccountId>], account: usize, friend: usize) {
    let friend = AccountId::from(friend);
    if !adjacency[account].contains(&friend) {
        adjacency[account].push(friend);
    }
}
