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

use crate::err::{ArithmeticOverflowError, PlanError, PlanPhase};
use lift_plan_core::prelude::{Energy, FloorPoint};
use lift_plan_model::partition::UpwardGroup;
use num_traits::{CheckedSub, Zero};

/// Outcome of the upward sweep: the energy it cost and the floor the lift
/// is parked at afterwards, available as the first descending lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpwardPhase<T> {
    energy: Energy,
    frontier: FloorPoint<T>,
}

impl<T: Copy> UpwardPhase<T> {
    #[inline]
    pub fn energy(&self) -> Energy {
        self.energy
    }

    #[inline]
    pub fn frontier(&self) -> FloorPoint<T> {
        self.frontier
    }
}

/// Serves all upward demand with a single lift in one continuous ascent.
///
/// With unlimited capacity one lift suffices: it must climb to the highest
/// floor any upward group forces it through, and intermediate stops cost
/// nothing extra, so the minimal energy is exactly that climb. Origins of
/// downward-only floors count toward the peak as well, since the sweep
/// passes through every origin on its way up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpwardSweep;

impl UpwardSweep {
    /// Returns `None` when the batch has no upward target at all; no lift
    /// is dispatched in that case and the downward phase starts cold.
    pub fn solve<T>(
        &self,
        groups: &[UpwardGroup<T>],
        energy_per_floor: Energy,
    ) -> Result<Option<UpwardPhase<T>>, PlanError>
    where
        T: Copy + Ord + Zero + CheckedSub + Into<Energy>,
    {
        if !groups.iter().any(|g| g.has_targets()) {
            return Ok(None);
        }

        let peak = groups
            .iter()
            .map(|g| g.peak())
            .max()
            .unwrap_or_else(FloorPoint::zero);

        let climb = peak
            .checked_delta_from(FloorPoint::zero())
            .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Upward))?;
        let floors: Energy = climb.value().into();
        let energy = floors
            .checked_mul(energy_per_floor)
            .ok_or_else(|| ArithmeticOverflowError::new(PlanPhase::Upward))?;

        Ok(Some(UpwardPhase {
            energy,
            frontier: peak,
        }))
    }
}
