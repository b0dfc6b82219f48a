#![allow(non_snake_case)]

use super::{QpProblem, RowKind};
use crate::algebra::*;
use itertools::izip;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance level used when re-verifying a candidate solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrecisionTier {
    /// eps_abs = eps_rel = 1e-3
    #[default]
    Standard,
    /// eps_abs = eps_rel = 1e-5
    High,
}

impl PrecisionTier {
    pub fn eps_abs<T: FloatT>(&self) -> T {
        match self {
            PrecisionTier::Standard => (1e-3).as_T(),
            PrecisionTier::High => (1e-5).as_T(),
        }
    }

    pub fn eps_rel<T: FloatT>(&self) -> T {
        self.eps_abs()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
/// Reason a candidate solution failed re-verification
pub enum ValidationFailure {
    #[error("Candidate solution is missing x or y")]
    MissingSolution,
    #[error("Candidate {which} has length {found}, expected {expected}")]
    BadLength {
        which: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Candidate {0} has non-finite entries")]
    NonFinite(&'static str),
    #[error("Primal residual {residual:e} exceeds tolerance {tolerance:e}")]
    PrimalResidual { residual: f64, tolerance: f64 },
    #[error("Dual sign violation {residual:e} exceeds tolerance {tolerance:e}")]
    DualSign { residual: f64, tolerance: f64 },
    #[error("Stationarity residual {residual:e} exceeds tolerance {tolerance:e}")]
    Stationarity { residual: f64, tolerance: f64 },
    #[error("Complementary slackness residual {residual:e} exceeds tolerance {tolerance:e}")]
    Complementarity { residual: f64, tolerance: f64 },
    #[error("Duality gap {gap_abs:e} (relative {gap_rel:e}) exceeds tolerance {tolerance:e}")]
    DualityGap {
        gap_abs: f64,
        gap_rel: f64,
        tolerance: f64,
    },
}

/// Residuals of a candidate solution that passed every check
#[derive(Debug, Clone, PartialEq)]
pub struct KktResiduals<T> {
    /// ‖primal violation‖∞
    pub res_primal: T,
    /// ‖max(−y, 0)‖∞ over inequality rows
    pub res_dual_sign: T,
    /// ‖Px + q + Aᵀy‖∞
    pub res_stationarity: T,
    /// ‖s∘y‖∞ over inequality rows
    pub res_complementarity: T,
    pub cost_primal: T,
    pub cost_dual: T,
    pub gap_abs: T,
    pub gap_rel: T,
}

fn as_f64<T: FloatT>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// NaN residuals must fail, so compare with `<=` rather than `!(>)`
fn within<T: FloatT>(residual: T, tolerance: T) -> bool {
    residual <= tolerance
}

/// Re-verify a candidate `(x, y)` against the optimality conditions of
/// `problem`, independently of anything the producing engine reported.
///
/// Checks are made in order: primal feasibility, dual sign, stationarity,
/// complementary slackness and the duality gap.  The first failure is
/// returned.
pub fn check_optimality<T: FloatT>(
    problem: &QpProblem<T>,
    x: Option<&[T]>,
    y: Option<&[T]>,
    tier: PrecisionTier,
) -> Result<KktResiduals<T>, ValidationFailure> {
    let (x, y) = match (x, y) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(ValidationFailure::MissingSolution),
    };

    let (n, m) = (problem.n(), problem.m());
    if x.len() != n {
        return Err(ValidationFailure::BadLength {
            which: "x",
            expected: n,
            found: x.len(),
        });
    }
    if y.len() != m {
        return Err(ValidationFailure::BadLength {
            which: "y",
            expected: m,
            found: y.len(),
        });
    }
    if !x.is_finite() {
        return Err(ValidationFailure::NonFinite("x"));
    }
    if !y.is_finite() {
        return Err(ValidationFailure::NonFinite("y"));
    }

    let eps_abs: T = tier.eps_abs();
    let eps_rel: T = tier.eps_rel();
    let b = problem.b();
    let q = problem.q();

    // products with the problem data
    let mut Ax = vec![T::zero(); m];
    problem.A().gemv(&mut Ax, x, T::one(), T::zero());
    let mut Px = vec![T::zero(); n];
    problem.P().sym().symv(&mut Px, x, T::one(), T::zero());
    let mut Aty = vec![T::zero(); n];
    problem.A().t().gemv(&mut Aty, y, T::one(), T::zero());

    // slack s = b - Ax, and per row violations
    let kinds: Vec<RowKind> = problem.row_kinds().collect();
    let mut rprimal = vec![T::zero(); m];
    let mut rsign = vec![T::zero(); m];
    let mut slack = vec![T::zero(); m];

    for (rp, rs, si, &kind, &Axi, &bi, &yi) in izip!(
        rprimal.iter_mut(),
        rsign.iter_mut(),
        slack.iter_mut(),
        &kinds,
        &Ax,
        b,
        y
    ) {
        let r = Axi - bi;
        match kind {
            RowKind::Equality => {
                *rp = T::abs(r);
            }
            RowKind::Inequality => {
                *rp = T::max(r, T::zero());
                *rs = T::max(-yi, T::zero());
                *si = bi - Axi;
            }
        }
    }

    let normAx = Ax.norm_inf();
    let normy = y.norm_inf();

    // primal feasibility
    let res_primal = rprimal.norm_inf();
    let tol = eps_abs + eps_rel * normAx;
    if !within(res_primal, tol) {
        return Err(ValidationFailure::PrimalResidual {
            residual: as_f64(res_primal),
            tolerance: as_f64(tol),
        });
    }

    // dual feasibility : sign of y on inequality rows
    let res_dual_sign = rsign.norm_inf();
    let tol = eps_abs + eps_rel * normy;
    if !within(res_dual_sign, tol) {
        return Err(ValidationFailure::DualSign {
            residual: as_f64(res_dual_sign),
            tolerance: as_f64(tol),
        });
    }

    // dual feasibility : stationarity Px + q + Aᵀy = 0
    let mut rdual = Px.clone();
    rdual.axpby(T::one(), q, T::one());
    rdual.axpby(T::one(), &Aty, T::one());
    let res_stationarity = rdual.norm_inf();
    let scale = T::max(Px.norm_inf(), T::max(q.norm_inf(), Aty.norm_inf()));
    let tol = eps_abs + eps_rel * scale;
    if !within(res_stationarity, tol) {
        return Err(ValidationFailure::Stationarity {
            residual: as_f64(res_stationarity),
            tolerance: as_f64(tol),
        });
    }

    // complementary slackness.  Equality rows carry zero slack.
    let res_complementarity = slack.norm_inf_hadamard(y);
    let tol = eps_abs + eps_rel * T::max(normAx, normy);
    if !within(res_complementarity, tol) {
        return Err(ValidationFailure::Complementarity {
            residual: as_f64(res_complementarity),
            tolerance: as_f64(tol),
        });
    }

    // duality gap
    let xPx_over2 = x.dot(&Px) / (2.).as_T();
    let cost_primal = xPx_over2 + q.dot(x);
    let cost_dual = -xPx_over2 - b.dot(y);
    let gap_abs = T::abs(cost_primal - cost_dual);
    let gap_rel = gap_abs / T::max(T::one(), T::min(T::abs(cost_primal), T::abs(cost_dual)));

    if !(within(gap_abs, eps_abs) || within(gap_rel, eps_rel)) {
        return Err(ValidationFailure::DualityGap {
            gap_abs: as_f64(gap_abs),
            gap_rel: as_f64(gap_rel),
            tolerance: as_f64(eps_abs),
        });
    }

    Ok(KktResiduals {
        res_primal,
        res_dual_sign,
        res_stationarity,
        res_complementarity,
        cost_primal,
        cost_dual,
        gap_abs,
        gap_rel,
    })
}

/// True if `(x, y)` satisfies the optimality conditions of `problem` at
/// the requested precision tier.  Never panics on malformed candidates.
pub fn is_qp_solution_optimal<T: FloatT>(
    problem: &QpProblem<T>,
    x: Option<&[T]>,
    y: Option<&[T]>,
    tier: PrecisionTier,
) -> bool {
    check_optimality(problem, x, y, tier).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::ConstraintBlock;

    // minimize x² subject to x ≥ 1
    fn scenario() -> QpProblem<f64> {
        QpProblem::new(
            CscMatrix::from_dense(1, 1, &[2.]),
            vec![0.],
            CscMatrix::from_dense(1, 1, &[-1.]),
            vec![-1.],
            vec![ConstraintBlock::Inequality(1)],
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_optimal() {
        let problem = scenario();
        let res =
            check_optimality(&problem, Some(&[1.][..]), Some(&[2.][..]), PrecisionTier::High).unwrap();
        assert_eq!(res.cost_primal, 1.);
        assert_eq!(res.cost_dual, 1.);
        assert_eq!(res.gap_abs, 0.);
    }

    #[test]
    fn test_scenario_infeasible_point() {
        let problem = scenario();
        let res = check_optimality(&problem, Some(&[0.5][..]), Some(&[2.][..]), PrecisionTier::Standard);
        assert!(matches!(
            res,
            Err(ValidationFailure::PrimalResidual { residual, .. }) if residual == 0.5
        ));
    }

    #[test]
    fn test_tier_tolerance() {
        let problem = scenario();
        // primal violation 1e-4 passes Standard but not High
        let x = [1. - 1e-4];
        let y = [2. * x[0]];
        assert!(is_qp_solution_optimal(&problem, Some(&x[..]), Some(&y[..]), PrecisionTier::Standard));
        assert!(!is_qp_solution_optimal(&problem, Some(&x[..]), Some(&y[..]), PrecisionTier::High));
    }

    #[test]
    fn test_malformed_candidates() {
        let problem = scenario();
        let tier = PrecisionTier::Standard;
        assert_eq!(
            check_optimality(&problem, None, Some(&[2.][..]), tier),
            Err(ValidationFailure::MissingSolution)
        );
        assert_eq!(
            check_optimality(&problem, Some(&[1.][..]), None, tier),
            Err(ValidationFailure::MissingSolution)
        );
        assert!(matches!(
            check_optimality(&problem, Some(&[1., 0.][..]), Some(&[2.][..]), tier),
            Err(ValidationFailure::BadLength { which: "x", .. })
        ));
        assert_eq!(
            check_optimality(&problem, Some(&[f64::NAN][..]), Some(&[2.][..]), tier),
            Err(ValidationFailure::NonFinite("x"))
        );
    }

    #[test]
    fn test_dual_checks() {
        let problem = scenario();
        let tier = PrecisionTier::Standard;

        // wrong sign multiplier
        assert!(matches!(
            check_optimality(&problem, Some(&[1.][..]), Some(&[-2.][..]), tier),
            Err(ValidationFailure::DualSign { .. })
        ));

        // feasible, interior, but with nonzero multiplier
        assert!(matches!(
            check_optimality(&problem, Some(&[2.][..]), Some(&[4.][..]), tier),
            Err(ValidationFailure::Complementarity { .. })
        ));

        // zero multiplier violates stationarity at x = 1
        assert!(matches!(
            check_optimality(&problem, Some(&[1.][..]), Some(&[0.][..]), tier),
            Err(ValidationFailure::Stationarity { .. })
        ));
    }

    #[test]
    fn test_equality_rows() {
        // minimize ½(x₁² + x₂²) subject to x₁ + x₂ = 2
        let problem = QpProblem::new(
            CscMatrix::identity(2),
            vec![0., 0.],
            CscMatrix::from_dense(1, 2, &[1., 1.]),
            vec![2.],
            vec![ConstraintBlock::Equality(1)],
        )
        .unwrap();

        // free sign multiplier on the equality row
        let tier = PrecisionTier::High;
        assert!(is_qp_solution_optimal(&problem, Some(&[1., 1.][..]), Some(&[-1.][..]), tier));
        assert!(matches!(
            check_optimality(&problem, Some(&[1.5, 1.5][..]), Some(&[-1.5][..]), tier),
            Err(ValidationFailure::PrimalResidual { .. })
        ));
    }
}
