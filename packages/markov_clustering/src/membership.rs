// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::errors::ClusterError;
use std::ops::Index;

pub struct MembershipItem<'a> {
    pub column: usize,
    pub members: &'a [usize],
}

/// The interpreted output of a converged MCL run. The result is column
/// indexed: `members_of(i)` lists every node that still flows a significant
/// amount of probability mass into column i, in ascending node-id order.
/// Columns that lost all incoming mass legitimately have empty lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    attractor_lists: Vec<Vec<usize>>,
    membership_count: usize,
}

impl Membership {
    /// Wraps pre-computed attractor lists, deriving the total membership
    /// count across all columns as a side value.
    pub(crate) fn from_lists(attractor_lists: Vec<Vec<usize>>) -> Membership {
        let membership_count: usize = attractor_lists.iter().map(|members| members.len()).sum();
        return Membership {
            attractor_lists,
            membership_count,
        };
    }

    /// The number of columns, which always equals the node count of the
    /// matrix this result was interpreted from.
    pub fn num_columns(&self) -> usize {
        return self.attractor_lists.len();
    }

    /// The total number of (node, column) memberships across every column.
    pub fn membership_count(&self) -> usize {
        return self.membership_count;
    }

    pub fn members_of(
        &self,
        column: usize,
    ) -> Result<&[usize], ClusterError> {
        return self
            .attractor_lists
            .get(column)
            .map(|members| members.as_slice())
            .ok_or(ClusterError::IndexingError);
    }

    /// Whether the column retained any incoming mass at all.
    pub fn is_attractor(
        &self,
        column: usize,
    ) -> bool {
        return self
            .attractor_lists
            .get(column)
            .map_or(false, |members| !members.is_empty());
    }
}

impl From<Membership> for Vec<Vec<usize>> {
    fn from(membership: Membership) -> Self {
        return membership.attractor_lists;
    }
}

pub struct MembershipIterator<'a> {
    membership_ref: &'a Membership,
    next_column: usize,
}

impl<'a> Iterator for MembershipIterator<'a> {
    type Item = MembershipItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        return if self.next_column == self.membership_ref.attractor_lists.len() {
            None
        } else {
            let item = MembershipItem {
                column: self.next_column,
                members: &self.membership_ref.attractor_lists[self.next_column],
            };
            self.next_column += 1;
            Some(item)
        };
    }
}

impl<'a> IntoIterator for &'a Membership {
    type Item = MembershipItem<'a>;
    type IntoIter = MembershipIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        return MembershipIterator {
            membership_ref: &self,
            next_column: 0,
        };
    }
}

impl Index<usize> for Membership {
    type Output = Vec<usize>;

    fn index(
        &self,
        index: usize,
    ) -> &Self::Output {
        &self.attractor_lists[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Membership;
    use crate::errors::ClusterError;

    #[test]
    fn test_membership_count_is_sum_of_list_lengths() {
        let membership: Membership =
            Membership::from_lists(vec![vec![0, 1, 2], vec![], vec![2]]);
        assert_eq!(membership.num_columns(), 3);
        assert_eq!(membership.membership_count(), 4);
    }

    #[test]
    fn test_members_of() {
        let membership: Membership = Membership::from_lists(vec![vec![0, 1], vec![]]);
        assert_eq!(membership.members_of(0).unwrap(), &[0, 1]);
        assert_eq!(membership.members_of(1).unwrap(), &[] as &[usize]);
        assert_eq!(membership.members_of(2), Err(ClusterError::IndexingError));
    }

    #[test]
    fn test_is_attractor() {
        let membership: Membership = Membership::from_lists(vec![vec![0], vec![]]);
        assert!(membership.is_attractor(0));
        assert!(!membership.is_attractor(1));
        assert!(!membership.is_attractor(7));
    }

    #[test]
    fn test_iteration_yields_columns_in_order() {
        let membership: Membership =
            Membership::from_lists(vec![vec![0, 1], vec![], vec![2, 3]]);
        let columns: Vec<usize> = membership.into_iter().map(|item| item.column).collect();
        assert_eq!(columns, vec![0, 1, 2]);
        let members: Vec<&[usize]> = membership.into_iter().map(|item| item.members).collect();
        assert_eq!(members[2], &[2, 3]);
    }

    #[test]
    fn test_empty_membership() {
        let membership: Membership = Membership::from_lists(Vec::new());
        assert_eq!(membership.num_columns(), 0);
        assert_eq!(membership.membership_count(), 0);
        assert!(membership.into_iter().next().is_none());
    }
}
