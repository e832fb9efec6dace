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
    downward::DownwardAllocator,
    err::{ArithmeticOverflowError, PlanError, PlanPhase},
    upward::UpwardSweep,
};
use lift_plan_core::prelude::Energy;
use lift_plan_model::{partition::partition, prelude::FleetPlan, problem::Problem};
use num_traits::{CheckedAdd, CheckedSub, Zero};

pub trait Planner<T> {
    #[inline]
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn plan(&self, problem: &Problem<T>) -> Result<FleetPlan, PlanError>;
}

/// The two-phase greedy heuristic: one upward sweep, then the top-down
/// reuse-or-dispatch walk over the downward queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GreedyPlanner;

impl GreedyPlanner {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> Planner<T> for GreedyPlanner
where
    T: Copy + Ord + Zero + CheckedAdd + CheckedSub + Into<Energy>,
{
    fn plan(&self, problem: &Problem<T>) -> Result<FleetPlan, PlanError> {
        let (upward_groups, downward_queue) = partition(problem);
        let rate = problem.energy_per_floor();

        let upward = UpwardSweep.solve(&upward_groups, rate)?;
        if let Some(u) = &upward {
            let frontier: Energy = u.frontier().value().into();
            tracing::debug!(energy = u.energy(), frontier, "upward sweep complete");
        }

        let downward = DownwardAllocator.allocate(
            &downward_queue,
            upward.as_ref(),
            problem.fleet_size(),
            rate,
        )?;

        let upward_energy = upward.as_ref().map_or(0, |u| u.energy());
        let total_energy = upward_energy
            .checked_add(downward.energy())
            .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Downward))?;

        Ok(FleetPlan::new(total_energy, downward.lifts_used()))
    }
}
