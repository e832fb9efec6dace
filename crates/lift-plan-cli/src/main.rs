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

use chrono::{DateTime, Utc};
use lift_plan_model::prelude::{Problem, ProblemLoader};
use lift_plan_solver::planner::{GreedyPlanner, Planner};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

fn find_instances_dir() -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join("instances");
        if cand.is_dir() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

fn instances() -> impl Iterator<Item = (Problem<i64>, String)> {
    let inst_dir = find_instances_dir()
        .expect("Could not find an `instances/` directory in any ancestor of CARGO_MANIFEST_DIR");
    let mut files: Vec<PathBuf> = std::fs::read_dir(&inst_dir)
        .expect("read_dir(instances) failed")
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().map(|ft| ft.is_file()).unwrap_or(false)
                && e.path().extension().map(|x| x == "txt").unwrap_or(false)
        })
        .map(|e| e.path())
        .collect();

    files.sort();
    files.into_iter().filter_map(|f| {
        let loader = ProblemLoader::default();
        match loader.from_path(&f) {
            Ok(problem) => {
                let name = f
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| f.to_string_lossy().into_owned());
                Some((problem, name))
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", f.display(), e);
                None
            }
        }
    })
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    iteration: usize,
    filename: String,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    energy: Option<i64>,
    lifts_used: Option<usize>,
}

fn main() {
    enable_tracing();

    let mut results: Vec<RunRecord> = Vec::new();

    for (iter, (problem, file)) in instances().enumerate() {
        let iteration = iter + 1;

        tracing::info!(
            "Planning [{}] {} with {} lifts, {} floor records and {} passengers",
            iteration,
            file,
            problem.fleet_size(),
            problem.request_count(),
            problem.passenger_count()
        );

        let start_ts = Utc::now();
        let t0 = Instant::now();

        let plan = GreedyPlanner::new().plan(&problem);

        let runtime_ms = t0.elapsed().as_millis();
        let end_ts = Utc::now();

        match &plan {
            Ok(p) => tracing::info!(
                "Planned {} in {} ms: energy {}, {} of {} lifts used",
                file,
                runtime_ms,
                p.total_energy(),
                p.lifts_used(),
                problem.fleet_size()
            ),
            Err(e) => tracing::error!("Planning {} failed: {}", file, e),
        }

        results.push(RunRecord {
            iteration,
            filename: file,
            start_ts,
            end_ts,
            runtime_ms,
            energy: plan.as_ref().ok().map(|p| p.total_energy()),
            lifts_used: plan.as_ref().ok().map(|p| p.lifts_used()),
        });
    }

    let json = serde_json::to_string_pretty(&results).expect("serializing run records failed");
    let mut out = File::create("lift-plan-results.json").expect("creating results file failed");
    out.write_all(json.as_bytes())
        .expect("writing results file failed");

    tracing::info!("Wrote {} run records to lift-plan-results.json", results.len());
}
