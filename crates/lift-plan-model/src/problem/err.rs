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

use lift_plan_core::prelude::{Energy, FloorPoint};
use std::num::ParseIntError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyTargetListError<T> {
    origin: FloorPoint<T>,
}

impl<T> EmptyTargetListError<T> {
    pub fn new(origin: FloorPoint<T>) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> FloorPoint<T>
    where
        T: Copy,
    {
        self.origin
    }
}

impl<T: std::fmt::Display> std::fmt::Display for EmptyTargetListError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request at {} has no target floors", self.origin)
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for EmptyTargetListError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetEqualsOriginError<T> {
    origin: FloorPoint<T>,
}

impl<T> TargetEqualsOriginError<T> {
    pub fn new(origin: FloorPoint<T>) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> FloorPoint<T>
    where
        T: Copy,
    {
        self.origin
    }
}

impl<T: std::fmt::Display> std::fmt::Display for TargetEqualsOriginError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Request at {} lists its own origin as a target floor",
            self.origin
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for TargetEqualsOriginError<T> {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestError<T> {
    EmptyTargetList(EmptyTargetListError<T>),
    TargetEqualsOrigin(TargetEqualsOriginError<T>),
}

impl<T: std::fmt::Display> std::fmt::Display for RequestError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::EmptyTargetList(e) => write!(f, "{}", e),
            RequestError::TargetEqualsOrigin(e) => write!(f, "{}", e),
        }
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for RequestError<T> {}

impl<T> From<EmptyTargetListError<T>> for RequestError<T> {
    fn from(err: EmptyTargetListError<T>) -> Self {
        RequestError::EmptyTargetList(err)
    }
}

impl<T> From<TargetEqualsOriginError<T>> for RequestError<T> {
    fn from(err: TargetEqualsOriginError<T>) -> Self {
        RequestError::TargetEqualsOrigin(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OriginOutOfRangeError<T> {
    origin: FloorPoint<T>,
    floors: FloorPoint<T>,
}

impl<T> OriginOutOfRangeError<T> {
    pub fn new(origin: FloorPoint<T>, floors: FloorPoint<T>) -> Self {
        Self { origin, floors }
    }

    pub fn origin(&self) -> FloorPoint<T>
    where
        T: Copy,
    {
        self.origin
    }

    pub fn floors(&self) -> FloorPoint<T>
    where
        T: Copy,
    {
        self.floors
    }
}

impl<T: std::fmt::Display> std::fmt::Display for OriginOutOfRangeError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Origin {} lies outside the building (top floor {})",
            self.origin, self.floors
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for OriginOutOfRangeError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetOutOfRangeError<T> {
    origin: FloorPoint<T>,
    target: FloorPoint<T>,
    floors: FloorPoint<T>,
}

impl<T> TargetOutOfRangeError<T> {
    pub fn new(origin: FloorPoint<T>, target: FloorPoint<T>, floors: FloorPoint<T>) -> Self {
        Self {
            origin,
            target,
            floors,
        }
    }

    pub fn origin(&self) -> FloorPoint<T>
    where
        T: Copy,
    {
        self.origin
    }

    pub fn target(&self) -> FloorPoint<T>
    where
        T: Copy,
    {
        self.target
    }

    pub fn floors(&self) -> FloorPoint<T>
    where
        T: Copy,
    {
        self.floors
    }
}

impl<T: std::fmt::Display> std::fmt::Display for TargetOutOfRangeError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Target {} of the request at {} lies outside the building (top floor {})",
            self.target, self.origin, self.floors
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for TargetOutOfRangeError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidFleetSizeError {
    fleet_size: usize,
}

impl InvalidFleetSizeError {
    pub fn new(fleet_size: usize) -> Self {
        Self { fleet_size }
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }
}

impl std::fmt::Display for InvalidFleetSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fleet size {} is invalid, at least one lift is required",
            self.fleet_size
        )
    }
}

impl std::error::Error for InvalidFleetSizeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidEnergyRateError {
    rate: Energy,
}

impl InvalidEnergyRateError {
    pub fn new(rate: Energy) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Energy {
        self.rate
    }
}

impl std::fmt::Display for InvalidEnergyRateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Energy rate {} is invalid, the per-floor cost must be positive",
            self.rate
        )
    }
}

impl std::error::Error for InvalidEnergyRateError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemError<T> {
    OriginOutOfRange(OriginOutOfRangeError<T>),
    TargetOutOfRange(TargetOutOfRangeError<T>),
    InvalidFleetSize(InvalidFleetSizeError),
    InvalidEnergyRate(InvalidEnergyRateError),
}

impl<T: std::fmt::Display> std::fmt::Display for ProblemError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::OriginOutOfRange(e) => write!(f, "{}", e),
            ProblemError::TargetOutOfRange(e) => write!(f, "{}", e),
            ProblemError::InvalidFleetSize(e) => write!(f, "{}", e),
            ProblemError::InvalidEnergyRate(e) => write!(f, "{}", e),
        }
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for ProblemError<T> {}

impl<T> From<OriginOutOfRangeError<T>> for ProblemError<T> {
    fn from(err: OriginOutOfRangeError<T>) -> Self {
        ProblemError::OriginOutOfRange(err)
    }
}

impl<T> From<TargetOutOfRangeError<T>> for ProblemError<T> {
    fn from(err: TargetOutOfRangeError<T>) -> Self {
        ProblemError::TargetOutOfRange(err)
    }
}

impl<T> From<InvalidFleetSizeError> for ProblemError<T> {
    fn from(err: InvalidFleetSizeError) -> Self {
        ProblemError::InvalidFleetSize(err)
    }
}

impl<T> From<InvalidEnergyRateError> for ProblemError<T> {
    fn from(err: InvalidEnergyRateError) -> Self {
        ProblemError::InvalidEnergyRate(err)
    }
}

#[derive(Debug)]
pub enum ProblemLoaderError {
    Io(std::io::Error),
    ParseInt(ParseIntError),
    UnexpectedEof,
    NonPositiveCounts,
    DuplicateOrigin(FloorPoint<i64>),
    Request(RequestError<i64>),
    Problem(ProblemError<i64>),
}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseIntError> for ProblemLoaderError {
    fn from(e: ParseIntError) -> Self {
        Self::ParseInt(e)
    }
}

impl From<RequestError<i64>> for ProblemLoaderError {
    fn from(e: RequestError<i64>) -> Self {
        Self::Request(e)
    }
}

impl From<ProblemError<i64>> for ProblemLoaderError {
    fn from(e: ProblemError<i64>) -> Self {
        Self::Problem(e)
    }
}

impl std::fmt::Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ProblemLoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt(e) => write!(f, "parse-int error: {e}"),
            UnexpectedEof => write!(f, "unexpected end of file while parsing instance"),
            NonPositiveCounts => write!(f, "floor, lift, rate and record counts must be positive"),
            DuplicateOrigin(o) => write!(f, "more than one record for origin {o}"),
            Request(e) => write!(f, "request error: {e}"),
            Problem(e) => write!(f, "problem error: {e}"),
        }
    }
}

impl std::error::Error for ProblemLoaderError {}
