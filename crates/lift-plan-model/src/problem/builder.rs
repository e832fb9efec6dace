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
    err::ProblemError,
    prob::Problem,
    req::{FloorRequest, FloorRequestContainer},
};
use lift_plan_core::prelude::{Energy, FloorPoint};
use num_traits::Zero;

#[derive(Debug, Clone)]
pub struct ProblemBuilder<T> {
    floors: FloorPoint<T>,
    fleet_size: usize,
    energy_per_floor: Energy,
    requests: FloorRequestContainer<T>,
}

impl<T: Copy + Ord + Zero> Default for ProblemBuilder<T> {
    fn default() -> Self {
        Self {
            floors: FloorPoint::zero(),
            fleet_size: 1,
            energy_per_floor: 1,
            requests: FloorRequestContainer::new(),
        }
    }
}

impl<T: Copy + Ord + Zero> ProblemBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_floors(mut self, floors: FloorPoint<T>) -> Self {
        self.floors = floors;
        self
    }

    #[inline]
    pub fn with_fleet_size(mut self, fleet_size: usize) -> Self {
        self.fleet_size = fleet_size;
        self
    }

    #[inline]
    pub fn with_energy_per_floor(mut self, rate: Energy) -> Self {
        self.energy_per_floor = rate;
        self
    }

    #[inline]
    pub fn with_requests<I>(mut self, requests: I) -> Self
    where
        I: IntoIterator<Item = FloorRequest<T>>,
    {
        self.requests = requests.into_iter().collect();
        self
    }

    /// Inserts one request, replacing any earlier one for the same origin.
    #[inline]
    pub fn add_request(&mut self, request: FloorRequest<T>) -> &mut Self {
        self.requests.insert(request);
        self
    }

    #[inline]
    pub fn extend_requests<I>(&mut self, requests: I) -> &mut Self
    where
        I: IntoIterator<Item = FloorRequest<T>>,
    {
        for r in requests {
            self.requests.insert(r);
        }
        self
    }

    #[inline]
    pub fn contains_origin(&self, origin: FloorPoint<T>) -> bool {
        self.requests.contains_origin(origin)
    }

    #[inline]
    pub fn build(self) -> Result<Problem<T>, ProblemError<T>> {
        Problem::new(
            self.floors,
            self.fleet_size,
            self.energy_per_floor,
            self.requests,
        )
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
    fn test_build_with_fluent_setters() {
        let p = ProblemBuilder::new()
            .with_floors(fp(5))
            .with_fleet_size(2)
            .with_energy_per_floor(3)
            .with_requests([req(3, &[1, 5]), req(4, &[1])])
            .build()
            .expect("valid problem");
        assert_eq!(p.floors(), fp(5));
        assert_eq!(p.fleet_size(), 2);
        assert_eq!(p.energy_per_floor(), 3);
        assert_eq!(p.request_count(), 2);
    }

    #[test]
    fn test_add_request_replaces_same_origin() {
        let mut b = ProblemBuilder::new().with_floors(fp(9));
        b.add_request(req(4, &[1]));
        b.add_request(req(4, &[2]));
        assert!(b.contains_origin(fp(4)));
        let p = b.build().expect("valid problem");
        assert_eq!(p.request_count(), 1);
        assert_eq!(p.requests().get(fp(4)), Some(&req(4, &[2])));
    }

    #[test]
    fn test_build_propagates_validation_errors() {
        let err = ProblemBuilder::<i64>::new()
            .with_floors(fp(5))
            .with_fleet_size(0)
            .build()
            .expect_err("zero fleet must fail");
        assert!(matches!(err, ProblemError::InvalidFleetSize(_)));
    }

    #[test]
    fn test_defaults_build_an_empty_single_lift_problem() {
        let p = ProblemBuilder::<i64>::new().build().expect("valid problem");
        assert_eq!(p.fleet_size(), 1);
        assert_eq!(p.energy_per_floor(), 1);
        assert!(p.requests().is_empty());
    }
}
