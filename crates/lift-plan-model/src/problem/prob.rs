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

use crate::problem::{
    err::{
        InvalidEnergyRateError, InvalidFleetSizeError, OriginOutOfRangeError, ProblemError,
        TargetOutOfRangeError,
    },
    req::{FloorRequest, FloorRequestContainer},
};
use lift_plan_core::prelude::{Energy, FloorPoint};
use num_traits::Zero;

/// One planning instance: a building, a fleet and the full request batch.
///
/// All lifts are assumed to wait at the ground floor before the plan starts.
#[derive(Debug, Clone)]
pub struct Problem<T> {
    floors: FloorPoint<T>,
    fleet_size: usize,
    energy_per_floor: Energy,
    requests: FloorRequestContainer<T>,
}

impl<T: Copy + Ord + Zero> Problem<T> {
    #[inline]
    pub fn new(
        floors: FloorPoint<T>,
        fleet_size: usize,
        energy_per_floor: Energy,
        requests: FloorRequestContainer<T>,
    ) -> Result<Self, ProblemError<T>> {
        if fleet_size < 1 {
            return Err(InvalidFleetSizeError::new(fleet_size))?;
        }
        if energy_per_floor < 1 {
            return Err(InvalidEnergyRateError::new(energy_per_floor))?;
        }

        let ground = FloorPoint::zero();
        for r in requests.iter() {
            if r.origin() < ground || r.origin() > floors {
                return Err(OriginOutOfRangeError::new(r.origin(), floors))?;
            }
            for t in r.iter_targets() {
                if t < ground || t > floors {
                    return Err(TargetOutOfRangeError::new(r.origin(), t, floors))?;
                }
            }
        }

        Ok(Self {
            floors,
            fleet_size,
            energy_per_floor,
            requests,
        })
    }

    #[inline]
    pub fn floors(&self) -> FloorPoint<T> {
        self.floors
    }

    #[inline]
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    #[inline]
    pub fn energy_per_floor(&self) -> Energy {
        self.energy_per_floor
    }

    #[inline]
    pub fn requests(&self) -> &FloorRequestContainer<T> {
        &self.requests
    }

    #[inline]
    pub fn iter_requests(&self) -> impl Iterator<Item = &FloorRequest<T>> {
        self.requests.iter()
    }

    #[inline]
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.requests.iter().map(|r| r.passenger_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn fp(v: i64) -> FloorPoint<i64> {
        FloorPoint::new(v)
    }

    fn req(origin: i64, targets: &[i64]) -> FloorRequest<i64> {
        FloorRequest::new(fp(origin), targets.iter().copied().map(fp).collect())
            .expect("valid request")
    }

    #[test]
    fn test_new_ok_and_accessors() {
        let requests: FloorRequestContainer<i64> =
            [req(3, &[1, 5]), req(4, &[1, 1])].into_iter().collect();
        let p = Problem::new(fp(5), 2, 1, requests).expect("valid problem");
        assert_eq!(p.floors(), fp(5));
        assert_eq!(p.fleet_size(), 2);
        assert_eq!(p.energy_per_floor(), 1);
        assert_eq!(p.request_count(), 2);
        assert_eq!(p.passenger_count(), 4);
    }

    #[test]
    fn test_empty_batch_is_allowed() {
        let p = Problem::<i64>::new(fp(10), 3, 2, FloorRequestContainer::new())
            .expect("empty batch is a valid instance");
        assert_eq!(p.request_count(), 0);
        assert_eq!(p.passenger_count(), 0);
    }

    #[test]
    fn test_zero_fleet_rejected() {
        let err = Problem::<i64>::new(fp(5), 0, 1, FloorRequestContainer::new())
            .expect_err("a fleet of zero lifts must be rejected");
        assert_eq!(
            err,
            ProblemError::InvalidFleetSize(InvalidFleetSizeError::new(0))
        );
    }

    #[test]
    fn test_non_positive_energy_rate_rejected() {
        let err = Problem::<i64>::new(fp(5), 1, 0, FloorRequestContainer::new())
            .expect_err("zero per-floor cost must be rejected");
        assert_eq!(
            err,
            ProblemError::InvalidEnergyRate(InvalidEnergyRateError::new(0))
        );
    }

    #[test]
    fn test_origin_above_top_floor_rejected() {
        let requests: FloorRequestContainer<i64> = [req(6, &[1])].into_iter().collect();
        let err = Problem::new(fp(5), 1, 1, requests).expect_err("origin above roof");
        assert_eq!(
            err,
            ProblemError::OriginOutOfRange(OriginOutOfRangeError::new(fp(6), fp(5)))
        );
    }

    #[test]
    fn test_negative_origin_rejected() {
        let requests: FloorRequestContainer<i64> = [req(-1, &[2])].into_iter().collect();
        let err = Problem::new(fp(5), 1, 1, requests).expect_err("origin below ground");
        assert_eq!(
            err,
            ProblemError::OriginOutOfRange(OriginOutOfRangeError::new(fp(-1), fp(5)))
        );
    }

    #[test]
    fn test_target_out_of_range_rejected() {
        let requests: FloorRequestContainer<i64> = [req(3, &[9])].into_iter().collect();
        let err = Problem::new(fp(5), 1, 1, requests).expect_err("target above roof");
        assert_eq!(
            err,
            ProblemError::TargetOutOfRange(TargetOutOfRangeError::new(fp(3), fp(9), fp(5)))
        );
    }

    #[test]
    fn test_boundary_floors_accepted() {
        let requests: FloorRequestContainer<i64> =
            [req(0, &[5]), req(5, &[0])].into_iter().collect();
        assert!(Problem::new(fp(5), 1, 1, requests).is_ok());
    }
}
