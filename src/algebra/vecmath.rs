use super::{FloatT, VectorMath};
use itertools::izip;
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for &v in self {
            // NaN is sticky so that a poisoned residual
            // can never look small
            if v.is_nan() {
                return T::nan();
            }
            out = T::max(out, v.abs());
        }
        out
    }

    fn norm_inf_hadamard(&self, v: &[T]) -> T {
        assert_eq!(self.len(), v.len());
        let mut out = T::zero();
        for (&x, &v) in zip(self, v) {
            let xv = x * v;
            if xv.is_nan() {
                return T::nan();
            }
            out = T::max(out, xv.abs());
        }
        out
    }

    fn dist(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y)
            .fold(T::zero(), |acc, (&x, &y)| acc + (x - y) * (x - y))
            .sqrt()
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        for (y, &x) in izip!(self.iter_mut(), x) {
            *y = a * x + b * *y;
        }
        self
    }
}

#[test]
fn test_norms() {
    let x = [1., -4., 2.];
    assert_eq!(x.norm_inf(), 4.);
    assert_eq!(x.norm_inf_hadamard(&[0., 0.5, -3.]), 6.);
    assert!([1., f64::NAN].norm_inf().is_nan());
    assert_eq!(<[f64]>::norm_inf(&[]), 0.);
}

#[test]
fn test_dot_dist() {
    let x = [1., 2., 3.];
    let y = [4., -5., 6.];
    assert_eq!(x.dot(&y), 12.);
    assert_eq!([0., 0.].dist(&[3., 4.]), 5.);
}

#[test]
fn test_axpby() {
    let mut y = vec![1., 1.];
    y.axpby(2., &[1., 2.], -1.);
    assert_eq!(y, [1., 3.]);
}
