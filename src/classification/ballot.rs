//! Plurality voting over selected neighbors.

use super::neighbors::Neighbor;
use std::collections::HashMap;
use std::hash::Hash;

/// Votes and closest voter recorded for one candidate label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Number of neighbors voting for the label
    pub votes: usize,
    /// Nearest neighbor among those voters
    pub closest: Neighbor,
}

/// Per-query election among candidate labels.
///
/// Each selected neighbor casts one vote for its own label. The winner has
/// the most votes; ties go to the label whose closest voter is nearest to
/// the query, and a remaining tie on that distance goes to the closest voter
/// with the lower training index. Labels whose closest voters are identical
/// fall back to the label that received its first vote earliest.
///
/// # Example
///
/// ```
/// use plurality::classification::{Ballot, Neighbor};
///
/// let (a, b) = ("A", "B");
/// let mut ballot = Ballot::new();
/// ballot.cast(&a, Neighbor::new(1.0, 0));
/// ballot.cast(&b, Neighbor::new(2.0, 1));
/// ballot.cast(&a, Neighbor::new(5.0, 2));
/// ballot.cast(&b, Neighbor::new(3.0, 3));
/// assert_eq!(ballot.winner(), Some(&"A"));
/// ```
#[derive(Debug, Clone)]
pub struct Ballot<'a, L> {
    /// Slot of each label in `tallies`
    slots: HashMap<&'a L, usize>,
    /// Candidates in first-cast order
    tallies: Vec<(&'a L, Tally)>,
}

impl<'a, L: Eq + Hash> Ballot<'a, L> {
    /// Creates an empty ballot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            tallies: Vec::new(),
        }
    }

    /// Records one vote for `label` by `voter`.
    pub fn cast(&mut self, label: &'a L, voter: Neighbor) {
        match self.slots.get(label) {
            Some(&slot) => {
                let tally = &mut self.tallies[slot].1;
                tally.votes += 1;
                if voter < tally.closest {
                    tally.closest = voter;
                }
            }
            None => {
                self.slots.insert(label, self.tallies.len());
                self.tallies.push((
                    label,
                    Tally {
                        votes: 1,
                        closest: voter,
                    },
                ));
            }
        }
    }

    /// Tally for `label`, if it received any vote.
    #[must_use]
    pub fn tally(&self, label: &L) -> Option<Tally> {
        self.slots.get(label).map(|&slot| self.tallies[slot].1)
    }

    /// Number of distinct candidate labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    /// Returns true if no vote has been cast.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Resolves the election; `None` only for an empty ballot.
    #[must_use]
    pub fn winner(&self) -> Option<&'a L> {
        self.tallies
            .iter()
            .enumerate()
            .max_by(|(i, (_, a)), (j, (_, b))| {
                a.votes
                    .cmp(&b.votes)
                    .then_with(|| b.closest.cmp(&a.closest))
                    .then_with(|| j.cmp(i))
            })
            .map(|(_, (label, _))| *label)
    }
}

impl<L: Eq + Hash> Default for Ballot<'_, L> {
    fn default() -> Self {
        Self::new()
    }
}
