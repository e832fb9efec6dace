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
    builder::ProblemBuilder, err::ProblemLoaderError, prob::Problem, req::FloorRequest,
};
use lift_plan_core::prelude::FloorPoint;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Reads a planning instance from whitespace-separated text.
///
/// Layout: `n l k r`, followed by `r` floor records of the form
/// `fi p f1 ... fp` where `fi` is the origin floor, `p` the number of
/// waiting passengers and `f1..fp` their target floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProblemLoader;

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn from_bufread<R: BufRead>(&self, mut br: R) -> Result<Problem<i64>, ProblemLoaderError> {
        let mut sc = Scanner::new(&mut br);

        let floors = sc.next_i64()?;
        let lifts = sc.next_i64()?;
        let rate = sc.next_i64()?;
        let records = sc.next_i64()?;
        if floors <= 0 || lifts <= 0 || rate <= 0 || records < 0 {
            return Err(ProblemLoaderError::NonPositiveCounts);
        }

        let mut builder = ProblemBuilder::new()
            .with_floors(FloorPoint::new(floors))
            .with_fleet_size(lifts as usize)
            .with_energy_per_floor(rate);

        for _ in 0..records {
            let origin = FloorPoint::new(sc.next_i64()?);
            let people = sc.next_i64()?;
            if people <= 0 {
                return Err(ProblemLoaderError::NonPositiveCounts);
            }

            let mut targets = Vec::with_capacity(people as usize);
            for _ in 0..people {
                targets.push(FloorPoint::new(sc.next_i64()?));
            }

            if builder.contains_origin(origin) {
                return Err(ProblemLoaderError::DuplicateOrigin(origin));
            }
            builder.add_request(FloorRequest::new(origin, targets)?);
        }

        Ok(builder.build()?)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem<i64>, ProblemLoaderError> {
        let file = File::open(path).map_err(ProblemLoaderError::Io)?;
        let br = BufReader::new(file);
        self.from_bufread(br)
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

#[derive(Debug)]
struct Scanner<R: BufRead> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    #[inline]
    fn fill_line(&mut self) -> Result<(), ProblemLoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self
            .rdr
            .read_line(&mut self.buf)
            .map_err(ProblemLoaderError::Io)?;
        if n == 0 {
            return Err(ProblemLoaderError::UnexpectedEof);
        }
        Ok(())
    }

    #[inline]
    fn skip_ws(&mut self) -> Result<(), ProblemLoaderError> {
        loop {
            if self.pos >= self.buf.len() {
                self.fill_line()?;
                continue;
            }
            while self.pos < self.buf.len() && self.buf.as_bytes()[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.buf.len() {
                continue;
            }
            return Ok(());
        }
    }

    #[inline]
    fn next_i64(&mut self) -> Result<i64, ProblemLoaderError> {
        self.skip_ws()?;
        let start = self.pos;
        while self.pos < self.buf.len() && !self.buf.as_bytes()[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let tok = &self.buf[start..self.pos];
        tok.parse::<i64>().map_err(ProblemLoaderError::ParseInt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_OK: &str = r#"
        5 2 1
        2
        3 1  5
        4 2  1 1
    "#;

    #[test]
    fn test_loads_minimal_instance() {
        let loader = ProblemLoader::new();
        let p = loader.from_str(SMALL_OK).unwrap();

        assert_eq!(p.floors(), FloorPoint::new(5));
        assert_eq!(p.fleet_size(), 2);
        assert_eq!(p.energy_per_floor(), 1);
        assert_eq!(p.request_count(), 2);
        assert_eq!(p.passenger_count(), 3);

        let r = p.requests().get(FloorPoint::new(4)).expect("record kept");
        assert_eq!(r.targets(), &[FloorPoint::new(1), FloorPoint::new(1)]);
    }

    #[test]
    fn test_zero_records_is_an_empty_batch() {
        let p = ProblemLoader::new().from_str("10 3 2 0").unwrap();
        assert!(p.requests().is_empty());
    }

    #[test]
    fn test_truncated_input_reports_eof() {
        let err = ProblemLoader::new()
            .from_str("5 2 1 1\n3 2 5")
            .expect_err("missing second target");
        assert!(matches!(err, ProblemLoaderError::UnexpectedEof));
    }

    #[test]
    fn test_non_numeric_token_reports_parse_error() {
        let err = ProblemLoader::new()
            .from_str("5 2 1 1\n3 one 5")
            .expect_err("word instead of count");
        assert!(matches!(err, ProblemLoaderError::ParseInt(_)));
    }

    #[test]
    fn test_non_positive_counts_rejected() {
        assert!(matches!(
            ProblemLoader::new().from_str("0 2 1 0"),
            Err(ProblemLoaderError::NonPositiveCounts)
        ));
        assert!(matches!(
            ProblemLoader::new().from_str("5 0 1 0"),
            Err(ProblemLoaderError::NonPositiveCounts)
        ));
        assert!(matches!(
            ProblemLoader::new().from_str("5 2 1 1\n3 0"),
            Err(ProblemLoaderError::NonPositiveCounts)
        ));
    }

    #[test]
    fn test_duplicate_origin_rejected() {
        let err = ProblemLoader::new()
            .from_str("5 2 1 2\n3 1 5\n3 1 1")
            .expect_err("two records for floor 3");
        assert!(matches!(
            err,
            ProblemLoaderError::DuplicateOrigin(o) if o == FloorPoint::new(3)
        ));
    }

    #[test]
    fn test_self_target_rejected_at_load() {
        let err = ProblemLoader::new()
            .from_str("5 2 1 1\n3 1 3")
            .expect_err("target equals origin");
        assert!(matches!(err, ProblemLoaderError::Request(_)));
    }

    #[test]
    fn test_out_of_range_origin_rejected_at_build() {
        let err = ProblemLoader::new()
            .from_str("5 2 1 1\n7 1 2")
            .expect_err("origin above roof");
        assert!(matches!(err, ProblemLoaderError::Problem(_)));
    }
}
