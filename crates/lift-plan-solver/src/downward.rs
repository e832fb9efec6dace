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

use crate::{
    err::{ArithmeticOverflowError, PlanError, PlanPhase},
    upward::UpwardPhase,
};
use lift_plan_core::prelude::{Energy, FloorPoint};
use lift_plan_model::partition::DownwardQueue;
use num_traits::{CheckedAdd, CheckedSub, Zero};

/// Accumulated downward energy and the final number of lifts in service,
/// counting the upward lift when one was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DownwardOutcome {
    energy: Energy,
    lifts_used: usize,
}

impl DownwardOutcome {
    #[inline]
    pub fn energy(&self) -> Energy {
        self.energy
    }

    #[inline]
    pub fn lifts_used(&self) -> usize {
        self.lifts_used
    }
}

/// Greedy walk over the downward queue, highest origin floor first.
///
/// For each group the allocator either rides the lift that is already
/// descending from the frontier, or brings a fresh one up from the ground
/// floor. Reusing costs `(top - dest)` floors, a fresh lift costs
/// `(2*origin - dest)`, so reuse wins exactly when `2*origin >= top`; the
/// second trigger is an exhausted fleet, where reuse is the only option.
/// The rule is only break-even-optimal because the queue is sorted by
/// origin descending, which keeps the frontier monotonically falling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownwardAllocator;

impl DownwardAllocator {
    pub fn allocate<T>(
        &self,
        queue: &DownwardQueue<T>,
        upward: Option<&UpwardPhase<T>>,
        fleet_size: usize,
        energy_per_floor: Energy,
    ) -> Result<DownwardOutcome, PlanError>
    where
        T: Copy + Ord + Zero + CheckedAdd + CheckedSub + Into<Energy>,
    {
        let mut frontier: Option<FloorPoint<T>> = upward.map(|u| u.frontier());
        let mut lifts_used = usize::from(upward.is_some());
        let mut energy: Energy = 0;

        for group in queue.iter() {
            let origin = group.origin();
            let lowest = group.lowest_target();
            let origin_height: Energy = origin.value().into();
            let doubled_origin = origin_height
                .checked_mul(2)
                .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Downward))?;

            match frontier {
                Some(top) if lifts_used == fleet_size || doubled_origin >= top.value().into() => {
                    // Ride the descending lift. The stop floor is clipped to
                    // the frontier; under the sort invariant the origin never
                    // exceeds it, but the guard keeps the arithmetic total.
                    let stop = lowest.min(top);
                    let drop = top
                        .checked_delta_from(stop)
                        .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Downward))?;
                    let fell: Energy = drop.value().into();
                    energy = charge(energy, fell, energy_per_floor)?;
                    frontier = Some(stop);
                    tracing::trace!(
                        origin = origin_height,
                        floors = fell,
                        "reusing descending lift"
                    );
                }
                _ => {
                    // Fresh lift: ascend from the ground floor to the origin,
                    // then descend to the group's lowest destination.
                    let ascent = origin
                        .checked_delta_from(FloorPoint::zero())
                        .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Downward))?;
                    let descent = origin
                        .checked_delta_from(lowest)
                        .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Downward))?;
                    let travelled = ascent
                        .checked_add(descent)
                        .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Downward))?;
                    let floors: Energy = travelled.value().into();
                    energy = charge(energy, floors, energy_per_floor)?;
                    frontier = Some(lowest);
                    lifts_used += 1;
                    tracing::trace!(
                        origin = origin_height,
                        floors,
                        "dispatching fresh lift from the ground floor"
                    );
                }
            }
        }

        Ok(DownwardOutcome { energy, lifts_used })
    }
}

#[inline]
fn charge(energy: Energy, floors: Energy, rate: Energy) -> Result<Energy, ArithmeticOverflowError> {
    floors
        .checked_mul(rate)
        .and_then(|cost| energy.checked_add(cost))
        .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Downward))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upward::UpwardSweep;
    use lift_plan_model::partition::{DownwardGroup, DownwardQueue, UpwardGroup};

    #[inline]
    fn fp(v: i64) -> FloorPoint<i64> {
        FloorPoint::new(v)
    }

    fn queue(groups: &[(i64, &[i64])]) -> DownwardQueue<i64> {
        DownwardQueue::new(
            groups
                .iter()
                .map(|(o, ts)| {
                    DownwardGroup::new(fp(*o), ts.iter().copied().map(fp).collect())
                        .expect("non-empty group")
                })
                .collect(),
        )
    }

    fn after_upward(peak: i64) -> UpwardPhase<i64> {
        UpwardSweep
            .solve(&[UpwardGroup::new(fp(0), vec![fp(peak)])], 1)
            .unwrap()
            .expect("upward demand exists")
    }

    #[test]
    fn test_reuse_when_origin_at_least_half_the_frontier() {
        // Frontier 5, pickup at 4: 2*4 >= 5, ride down to 1 for 4 floors.
        let up = after_upward(5);
        let out = DownwardAllocator
            .allocate(&queue(&[(4, &[1])]), Some(&up), 2, 1)
            .unwrap();
        assert_eq!(out.energy(), 4);
        assert_eq!(out.lifts_used(), 1);
    }

    #[test]
    fn test_fresh_lift_when_pickup_far_below_frontier() {
        // Frontier 20, pickup at 4: 2*4 < 20, a ground lift is cheaper
        // (4 up + 3 down = 7 instead of 20 - 1 = 19).
        let up = after_upward(20);
        let out = DownwardAllocator
            .allocate(&queue(&[(4, &[1])]), Some(&up), 2, 1)
            .unwrap();
        assert_eq!(out.energy(), 7);
        assert_eq!(out.lifts_used(), 2);
    }

    #[test]
    fn test_exhausted_fleet_forces_reuse() {
        // Same geometry as above but no spare lift remains.
        let up = after_upward(20);
        let out = DownwardAllocator
            .allocate(&queue(&[(4, &[1])]), Some(&up), 1, 1)
            .unwrap();
        assert_eq!(out.energy(), 19);
        assert_eq!(out.lifts_used(), 1);
    }

    #[test]
    fn test_frontier_falls_across_groups() {
        // 10 -> ride to 6 (cost 4), then pickup 5 with 2*5 >= 6 rides to 0.
        let up = after_upward(10);
        let out = DownwardAllocator
            .allocate(&queue(&[(8, &[6]), (5, &[0])]), Some(&up), 3, 1)
            .unwrap();
        assert_eq!(out.energy(), 4 + 6);
        assert_eq!(out.lifts_used(), 1);
    }

    #[test]
    fn test_destination_clipped_to_frontier() {
        // First group drops the frontier to 2; the next group's lowest
        // destination (3) is above it, so the ride costs nothing.
        let up = after_upward(10);
        let out = DownwardAllocator
            .allocate(&queue(&[(9, &[2]), (5, &[3])]), Some(&up), 1, 1)
            .unwrap();
        assert_eq!(out.energy(), 8);
        assert_eq!(out.lifts_used(), 1);
    }

    #[test]
    fn test_cold_start_dispatches_fresh_lift() {
        // No upward phase: the first group cannot reuse anything.
        let out = DownwardAllocator
            .allocate(&queue(&[(4, &[1])]), None, 2, 1)
            .unwrap();
        assert_eq!(out.energy(), 7);
        assert_eq!(out.lifts_used(), 1);
    }

    #[test]
    fn test_empty_queue_is_free() {
        let up = after_upward(5);
        let out = DownwardAllocator
            .allocate(&queue(&[]), Some(&up), 2, 1)
            .unwrap();
        assert_eq!(out.energy(), 0);
        assert_eq!(out.lifts_used(), 1);

        let cold = DownwardAllocator.allocate(&queue(&[]), None, 2, 1).unwrap();
        assert_eq!(cold.energy(), 0);
        assert_eq!(cold.lifts_used(), 0);
    }

    #[test]
    fn test_rate_multiplies_every_move() {
        let up = after_upward(5);
        let out = DownwardAllocator
            .allocate(&queue(&[(4, &[1])]), Some(&up), 2, 3)
            .unwrap();
        assert_eq!(out.energy(), 12);
    }

    #[test]
    fn test_lifts_never_exceed_fleet_size() {
        // Three far-apart groups but only two lifts in the building.
        let up = after_upward(100);
        let out = DownwardAllocator
            .allocate(
                &queue(&[(40, &[35]), (10, &[5]), (2, &[0])]),
                Some(&up),
                2,
                1,
            )
            .unwrap();
        assert_eq!(out.lifts_used(), 2);
    }
}
