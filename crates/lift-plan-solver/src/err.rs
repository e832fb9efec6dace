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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanPhase {
    Upward,
    Downward,
}

impl std::fmt::Display for PlanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanPhase::Upward => write!(f, "upward"),
            PlanPhase::Downward => write!(f, "downward"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArithmeticOverflowError {
    phase: PlanPhase,
}

impl ArithmeticOverflowError {
    #[inline]
    pub fn new(phase: PlanPhase) -> Self {
        Self { phase }
    }

    #[inline]
    pub fn phase(&self) -> PlanPhase {
        self.phase
    }
}

impl std::fmt::Display for ArithmeticOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Energy accumulation overflowed during the {} phase",
            self.phase
        )
    }
}

impl std::error::Error for ArithmeticOverflowError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlanError {
    ArithmeticOverflow(ArithmeticOverflowError),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::ArithmeticOverflow(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<ArithmeticOverflowError> for PlanError {
    fn from(err: ArithmeticOverflowError) -> Self {
        PlanError::ArithmeticOverflow(err)
    }
}
