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

use crate::problem::err::{EmptyTargetListError, RequestError, TargetEqualsOriginError};
use lift_plan_core::prelude::FloorPoint;
use std::collections::BTreeMap;

/// The passengers waiting at one origin floor, one entry per person.
///
/// Duplicate targets are allowed (several people may share a destination);
/// a target equal to the origin is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FloorRequest<T> {
    origin: FloorPoint<T>,
    targets: Vec<FloorPoint<T>>,
}

impl<T: Copy + Ord> FloorRequest<T> {
    #[inline]
    pub fn new(
        origin: FloorPoint<T>,
        targets: Vec<FloorPoint<T>>,
    ) -> Result<Self, RequestError<T>> {
        if targets.is_empty() {
            return Err(EmptyTargetListError::new(origin))?;
        }
        if targets.iter().any(|&t| t == origin) {
            return Err(TargetEqualsOriginError::new(origin))?;
        }
        Ok(Self { origin, targets })
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
    pub fn passenger_count(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn iter_targets(&self) -> impl Iterator<Item = FloorPoint<T>> + '_ {
        self.targets.iter().copied()
    }

    /// Targets strictly above the origin, in input order.
    #[inline]
    pub fn iter_upward_targets(&self) -> impl Iterator<Item = FloorPoint<T>> + '_ {
        let origin = self.origin;
        self.targets.iter().copied().filter(move |&t| t > origin)
    }

    /// Targets strictly below the origin, in input order.
    #[inline]
    pub fn iter_downward_targets(&self) -> impl Iterator<Item = FloorPoint<T>> + '_ {
        let origin = self.origin;
        self.targets.iter().copied().filter(move |&t| t < origin)
    }
}

impl<T: Copy + Ord + std::fmt::Display> std::fmt::Display for FloorRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let targets: Vec<String> = self.targets.iter().map(|t| format!("{}", t)).collect();
        write!(
            f,
            "Request: Origin {}, Targets {}",
            self.origin,
            targets.join(", ")
        )
    }
}

/// Requests keyed by origin floor.
///
/// The keying enforces the batch invariant that each origin floor appears at
/// most once; inserting a second request for the same origin replaces the
/// first and hands it back.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorRequestContainer<T>(BTreeMap<FloorPoint<T>, FloorRequest<T>>);

impl<T: Copy + Ord> Default for FloorRequestContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Ord> FloorRequestContainer<T> {
    #[inline]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[inline]
    pub fn insert(&mut self, request: FloorRequest<T>) -> Option<FloorRequest<T>> {
        self.0.insert(request.origin(), request)
    }

    #[inline]
    pub fn remove(&mut self, origin: FloorPoint<T>) -> Option<FloorRequest<T>> {
        self.0.remove(&origin)
    }

    #[inline]
    pub fn contains_origin(&self, origin: FloorPoint<T>) -> bool {
        self.0.contains_key(&origin)
    }

    #[inline]
    pub fn get(&self, origin: FloorPoint<T>) -> Option<&FloorRequest<T>> {
        self.0.get(&origin)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in ascending origin order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FloorRequest<T>> {
        self.0.values()
    }
}

impl<T: Copy + Ord> FromIterator<FloorRequest<T>> for FloorRequestContainer<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = FloorRequest<T>>>(iter: I) -> Self {
        let mut c = Self::new();
        for r in iter {
            c.insert(r);
        }
        c
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
        let r = req(3, &[1, 5, 5]);
        assert_eq!(r.origin(), fp(3));
        assert_eq!(r.targets(), &[fp(1), fp(5), fp(5)]);
        assert_eq!(r.passenger_count(), 3);
    }

    #[test]
    fn test_empty_target_list_rejected() {
        let err = FloorRequest::<i64>::new(fp(4), vec![]).expect_err("no targets must be rejected");
        assert_eq!(
            err,
            RequestError::EmptyTargetList(EmptyTargetListError::new(fp(4)))
        );
    }

    #[test]
    fn test_target_equal_to_origin_rejected() {
        let err = FloorRequest::new(fp(4), vec![fp(2), fp(4)])
            .expect_err("origin as target must be rejected");
        assert_eq!(
            err,
            RequestError::TargetEqualsOrigin(TargetEqualsOriginError::new(fp(4)))
        );
    }

    #[test]
    fn test_upward_and_downward_target_split() {
        let r = req(3, &[1, 5, 0, 7]);
        let up: Vec<_> = r.iter_upward_targets().collect();
        let down: Vec<_> = r.iter_downward_targets().collect();
        assert_eq!(up, vec![fp(5), fp(7)]);
        assert_eq!(down, vec![fp(1), fp(0)]);
    }

    #[test]
    fn test_duplicate_targets_are_kept() {
        let r = req(2, &[5, 5, 5]);
        assert_eq!(r.iter_upward_targets().count(), 3);
    }

    #[test]
    fn test_container_keyed_by_origin() {
        let mut c = FloorRequestContainer::new();
        assert!(c.insert(req(3, &[5])).is_none());
        assert!(c.insert(req(7, &[1])).is_none());
        assert_eq!(c.len(), 2);
        assert!(c.contains_origin(fp(3)));
        assert!(!c.contains_origin(fp(4)));

        // A second record for the same origin replaces the first.
        let prev = c.insert(req(3, &[2]));
        assert_eq!(prev, Some(req(3, &[5])));
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(fp(3)), Some(&req(3, &[2])));
    }

    #[test]
    fn test_container_iterates_in_ascending_origin_order() {
        let c: FloorRequestContainer<i64> =
            [req(9, &[1]), req(2, &[4]), req(5, &[0])].into_iter().collect();
        let origins: Vec<_> = c.iter().map(|r| r.origin()).collect();
        assert_eq!(origins, vec![fp(2), fp(5), fp(9)]);
    }

    #[test]
    fn test_display_contains_origin_and_targets() {
        let s = format!("{}", req(4, &[1, 6]));
        assert!(s.contains("Floor(4)"));
        assert!(s.contains("Floor(1)"));
        assert!(s.contains("Floor(6)"));
    }
}
