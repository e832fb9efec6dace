// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Splits the request batch into the directional views the two solver
//! phases consume. Every target floor lands in exactly one view: above the
//! origin it belongs to the upward sweep, below it to the downward queue.

use crate::problem::prob::Problem;
use lift_plan_core::prelude::FloorPoint;
use std::cmp::Reverse;

/// The upward share of one origin floor's demand.
///
/// One group exists per request even when no target lies above the origin:
/// the sweep still has to pass through the origin itself, so every origin
/// contributes to the peak the upward lift is forced to reach.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpwardGroup<T> {
    origin: FloorPoint<T>,
    targets: Vec<FloorPoint<T>>,
}

impl<T: Copy + Ord> UpwardGroup<T> {
    #[inline]
    pub fn new(origin: FloorPoint<T>, targets: Vec<FloorPoint<T>>) -> Self {
        debug_assert!(targets.iter().all(|&t| t > origin));
        Self { origin, targets }
    }

    #[inline]
    pub fn origin(&self) -> FloorPoint<T> {
        self.origin
    }

    #[inline]
    pub fn targets(&self) -> &[FloorPoint<T>] {
        &self.targets
    }

    #[inline]
    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Highest floor this group forces the sweep through.
    #[inline]
    pub fn peak(&self) -> FloorPoint<T> {
        self.targets
            .iter()
            .copied()
            .max()
            .map_or(self.origin, |t| t.max(self.origin))
    }
}

/// The downward share of one origin floor's demand. Never empty.
///
/// Targets are kept sorted ascending, so the first one is the lowest
/// destination the serving lift has to descend to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownwardGroup<T> {
    origin: FloorPoint<T>,
    targets: Vec<FloorPoint<T>>,
}

impl<T: Copy + Ord> DownwardGroup<T> {
    /// Returns `None` when no target lies below the origin.
    #[inline]
    pub fn new(origin: FloorPoint<T>, mut targets: Vec<FloorPoint<T>>) -> Option<Self> {
        debug_assert!(targets.iter().all(|&t| t < origin));
        if targets.is_empty() {
            return None;
        }
        targets.sort_unstable();
        Some(Self { origin, targets })
    }

    #[inline]
    pub fn origin(&self) -> FloorPoint<T> {
        self.origin
    }

    #[inline]
    pub fn targets(&self) -> &[FloorPoint<T>] {
        &self.targets
    }

    /// Lowest destination of the group.
    #[inline]
    pub fn lowest_target(&self) -> FloorPoint<T> {
        // Targets are non-empty and sorted ascending by construction.
        self.targets[0]
    }
}

/// All non-empty downward groups, ordered by origin floor descending.
///
/// The allocator's break-even rule assumes the frontier only ever moves
/// down, which holds exactly because groups are visited highest origin
/// first. The queue is sorted once here and never re-sorted.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownwardQueue<T>(Vec<DownwardGroup<T>>);

impl<T: Copy + Ord> DownwardQueue<T> {
    #[inline]
    pub fn new(mut groups: Vec<DownwardGroup<T>>) -> Self {
        groups.sort_by_key(|g| Reverse(g.origin()));
        Self(groups)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DownwardGroup<T>> {
        self.0.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[DownwardGroup<T>] {
        &self.0
    }
}

/// Splits the batch into the upward view and the downward queue.
pub fn partition<T: Copy + Ord>(problem: &Problem<T>) -> (Vec<UpwardGroup<T>>, DownwardQueue<T>)
where
    T: num_traits::Zero,
{
    let mut upward = Vec::with_capacity(problem.request_count());
    let mut downward = Vec::new();

    for r in problem.iter_requests() {
        upward.push(UpwardGroup::new(
            r.origin(),
            r.iter_upward_targets().collect(),
        ));
        if let Some(g) = DownwardGroup::new(r.origin(), r.iter_downward_targets().collect()) {
            downward.push(g);
        }
    }

    (upward, DownwardQueue::new(downward))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{builder::ProblemBuilder, req::FloorRequest};

    #[inline]
    fn fp(v: i64) -> FloorPoint<i64> {
        FloorPoint::new(v)
    }

    fn req(origin: i64, targets: &[i64]) -> FloorRequest<i64> {
        FloorRequest::new(fp(origin), targets.iter().copied().map(fp).collect())
            .expect("valid request")
    }

    fn problem(floors: i64, requests: &[(i64, &[i64])]) -> Problem<i64> {
        ProblemBuilder::new()
            .with_floors(fp(floors))
            .with_fleet_size(4)
            .with_requests(requests.iter().map(|(o, ts)| req(*o, ts)))
            .build()
            .expect("valid problem")
    }

    #[test]
    fn test_every_target_classified_exactly_once() {
        let p = problem(10, &[(3, &[1, 5, 0, 7])]);
        let (up, down) = partition(&p);

        assert_eq!(up.len(), 1);
        assert_eq!(up[0].targets(), &[fp(5), fp(7)]);

        assert_eq!(down.len(), 1);
        let g = &down.as_slice()[0];
        assert_eq!(g.targets(), &[fp(0), fp(1)]);
        assert_eq!(g.lowest_target(), fp(0));
    }

    #[test]
    fn test_downward_only_floor_still_yields_an_upward_group() {
        let p = problem(10, &[(4, &[1])]);
        let (up, down) = partition(&p);

        assert_eq!(up.len(), 1);
        assert!(!up[0].has_targets());
        assert_eq!(up[0].peak(), fp(4));
        assert_eq!(down.len(), 1);
    }

    #[test]
    fn test_upward_only_floor_yields_no_downward_group() {
        let p = problem(10, &[(2, &[8, 9])]);
        let (up, down) = partition(&p);

        assert_eq!(up[0].peak(), fp(9));
        assert!(down.is_empty());
    }

    #[test]
    fn test_queue_sorted_by_origin_descending() {
        let p = problem(20, &[(3, &[1]), (15, &[2]), (9, &[0])]);
        let (_, down) = partition(&p);
        let origins: Vec<_> = down.iter().map(|g| g.origin()).collect();
        assert_eq!(origins, vec![fp(15), fp(9), fp(3)]);
    }

    #[test]
    fn test_downward_targets_sorted_ascending() {
        let g = DownwardGroup::new(fp(9), vec![fp(4), fp(1), fp(7)]).expect("non-empty");
        assert_eq!(g.targets(), &[fp(1), fp(4), fp(7)]);
        assert_eq!(g.lowest_target(), fp(1));
    }

    #[test]
    fn test_empty_downward_group_is_none() {
        assert_eq!(DownwardGroup::<i64>::new(fp(3), vec![]), None);
    }

    #[test]
    fn test_peak_over_origin_and_targets() {
        let g = UpwardGroup::new(fp(3), vec![fp(5), fp(4)]);
        assert_eq!(g.peak(), fp(5));
        let g = UpwardGroup::new(fp(6), vec![]);
        assert_eq!(g.peak(), fp(6));
    }
}
