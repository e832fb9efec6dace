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

use lift_plan_core::prelude::Energy;

/// Result of one planning run: the energy lower bound and how many lifts
/// the plan actually dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FleetPlan {
    total_energy: Energy,
    lifts_used: usize,
}

impl FleetPlan {
    #[inline]
    pub fn new(total_energy: Energy, lifts_used: usize) -> Self {
        Self {
            total_energy,
            lifts_used,
        }
    }

    #[inline]
    pub fn total_energy(&self) -> Energy {
        self.total_energy
    }

    #[inline]
    pub fn lifts_used(&self) -> usize {
        self.lifts_used
    }
}

impl std::fmt::Display for FleetPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FleetPlan: energy {}, lifts used {}",
            self.total_energy, self.lifts_used
        )
    }
}
