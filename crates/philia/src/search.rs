//! Path Finder: BFS shortest-path search over a loaded network.
//!
//! The search queues whole paths rather than parent pointers: each queue
//! entry carries the route that discovered it, so reaching the goal yields
//! the answer directly. Accounts are marked visited when enqueued, never
//! re-expanded, which bounds the traversal to one visit per account. Ties
//! between equally short routes resolve to whichever neighbor was inserted
//! first at load time.

use std::collections::VecDeque;

use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::SocialGraph;
use crate::types::{AccountId, Connection};

impl SocialGraph {
    /// Find one shortest friendship path from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when the two accounts live in different
    /// components. The path from an account to itself is the single
    /// element connection with zero hops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if either endpoint is outside the
    /// loaded range; that outcome is distinct from `Ok(None)`.
    pub fn shortest_path(&self, start: AccountId, goal: AccountId) -> Result<Option<Connection>> {
        for id in [start, goal] {
            if !self.is_valid_id(id) {
                return Err(Error::InvalidId {
                    id: id.as_usize(),
                    accounts: self.account_count(),
                });
            }
        }

        let mut visited = vec![false; self.account_count()];
        let mut queue: VecDeque<(AccountId, Vec<AccountId>)> = VecDeque::new();

        visited[start.as_usize()] = true;
        queue.push_back((start, vec![start]));

        while let Some((last, path)) = queue.pop_front() {
            if last == goal {
                trace!(%start, %goal, hops = path.len() - 1, "connection found");
                // Queued paths are never empty, so this is always Some.
                return Ok(Connection::new(path));
            }

            for &neighbor in self.friends_of(last)? {
                if !visited[neighbor.as_usize()] {
                    visited[neighbor.as_usize()] = true;
                    let mut next = path.clone();
                    next.push(neighbor);
                    queue.push_back((neighbor, next));
                }
            }
        }

        trace!(%start, %goal, "no connection");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(text: &str) -> SocialGraph {
        SocialGraph::from_reader(text.as_bytes()).expect("network should parse")
    }

    fn ids(raw: &[usize]) -> Vec<AccountId> {
        raw.iter().copied().map(AccountId::from).collect()
    }

    fn path(graph: &SocialGraph, start: usize, goal: usize) -> Option<Connection> {
        graph
            .shortest_path(AccountId(start), AccountId(goal))
            .expect("endpoints should be valid")
    }

    #[test]
    fn self_path_is_the_single_element_connection() {
        let network = graph("4\n0 1\n1 2\n");

        let connection = path(&network, 1, 1).expect("should connect");
        assert_eq!(connection.accounts(), ids(&[1]).as_slice());
        assert_eq!(connection.hops(), 0);
    }

    #[test]
    fn direct_friends_are_one_hop_apart() {
        let network = graph("4\n0 1\n1 2\n");

        let connection = path(&network, 0, 1).expect("should connect");
        assert_eq!(connection.accounts(), ids(&[0, 1]).as_slice());
    }

    #[test]
    fn finds_shortest_chain_through_intermediary() {
        let network = graph("4\n0 1\n1 2\n");

        let connection = path(&network, 0, 2).expect("should connect");
        assert_eq!(connection.accounts(), ids(&[0, 1, 2]).as_slice());
        assert_eq!(connection.hops(), 2);
    }

    #[test]
    fn disconnected_accounts_have_no_path() {
        let network = graph("4\n0 1\n1 2\n");

        assert_eq!(path(&network, 0, 3), None);
        assert_eq!(path(&network, 3, 0), None);
    }

    #[test]
    fn isolated_account_reaches_only_itself() {
        let network = graph("7\n0 1\n");

        assert!(path(&network, 6, 0).is_none());
        assert!(path(&network, 6, 6).is_some());
    }

    #[test]
    fn invalid_endpoint_is_an_error_not_a_missing_path() {
        let network = graph("4\n0 1\n");

        let err = network
            .shortest_path(AccountId(0), AccountId(9))
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidId { id: 9, accounts: 4 }),
            "{err}"
        );

        let err = network
            .shortest_path(AccountId(9), AccountId(0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidId { id: 9, .. }), "{err}");
    }

    #[test]
    fn ties_resolve_to_the_earlier_inserted_neighbor() {
        // Two length-2 routes from 0 to 3; the 0-1 edge loads first.
        let network = graph("4\n0 1\n0 2\n1 3\n2 3\n");

        let connection = path(&network, 0, 3).expect("should connect");
        assert_eq!(connection.accounts(), ids(&[0, 1, 3]).as_slice());
    }

    #[test]
    fn cycle_paths_have_minimal_length() {
        // Six accounts in a ring; opposite corners are exactly 3 hops apart.
        let network = graph("6\n0 1\n1 2\n2 3\n3 4\n4 5\n5 0\n");

        let connection = path(&network, 0, 3).expect("should connect");
        assert_eq!(connection.hops(), 3);
    }

    #[test]
    fn search_does_not_mutate_the_graph() {
        let network = graph("4\n0 1\n1 2\n");
        let before: Vec<Vec<AccountId>> = (0..4)
            .map(|id| network.friends_of(AccountId(id)).unwrap().to_vec())
            .collect();

        let _ = path(&network, 0, 2);
        let _ = path(&network, 0, 3);

        let after: Vec<Vec<AccountId>> = (0..4)
            .map(|id| network.friends_of(AccountId(id)).unwrap().to_vec())
            .collect();
        assert_eq!(before, after);
    }
}
