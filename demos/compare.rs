#![allow(non_snake_case)]

use qpbench::algebra::*;
use qpbench::bench::*;

fn problem_data() -> QpProblem<f64> {
    let P: CscMatrix<f64> = CscMatrix::new(
        2,             // m
        2,             // n
        vec![0, 1, 2], // colptr
        vec![0, 1],    // rowval
        vec![6., 4.],  // nzval
    );

    let q = vec![-1., -4.];

    let A: CscMatrix<f64> = CscMatrix::new(
        5,                               // m
        2,                               // n
        vec![0, 3, 6],                   // colptr
        vec![0, 1, 3, 0, 2, 4],          // rowval
        vec![1., 1., -1., -2., 1., -1.], // nzval
    );

    let b = vec![0., 1., 1., 1., 1.];

    let cones = vec![ConstraintBlock::Equality(1), ConstraintBlock::Inequality(4)];

    QpProblem::new(P, q, A, b, cones).unwrap()
}

// Replays an ECOS run recorded by an external harness
struct RecordedEcos {
    status: String,
    obj_val: f64,
    x: Vec<f64>,
    y: Vec<f64>,
    info: EngineInfo,
}

impl Engine<f64> for RecordedEcos {
    type Map = EcosStatusMap;

    fn solve(&mut self, _problem: &QpProblem<f64>, _verbose: bool) -> Result<f64, EngineError> {
        Ok(self.obj_val)
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn info(&self) -> EngineInfo {
        self.info
    }

    fn revert(&self, _problem: &QpProblem<f64>) -> CandidateSolution<f64> {
        CandidateSolution {
            x: Some(self.x.clone()),
            y: Some(self.y.clone()),
        }
    }
}

fn main() {
    let problem = problem_data();

    let settings = BenchSettingsBuilder::default()
        .verbose(true)
        .time_limit(10.)
        .build()
        .unwrap();

    // a truncated run that claims optimality
    let recorded = RecordedEcos {
        status: "optimal".to_string(),
        obj_val: -1.5,
        x: vec![0.4, 0.2],
        y: vec![0., 0., 0., 0., 0.],
        info: EngineInfo {
            setup_time: Some(1e-4),
            solve_time: Some(2e-3),
            iterations: Some(9),
        },
    };

    let mut solvers: Vec<SolverAdapter<f64>> = vec![
        ClarabelAdapter::with_settings(settings.clone()).into(),
        EcosAdapter::<f64>::with_engine(Box::new(recorded), settings).into(),
    ];

    for solver in solvers.iter_mut() {
        let results = solver.solve(&problem);
        println!(
            "{:<10} {:<20} obj = {:?}  iter = {:?}",
            solver.name(),
            results.status(),
            results.obj_val(),
            results.niter()
        );
    }
}
