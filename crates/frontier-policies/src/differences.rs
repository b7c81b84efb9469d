//! Central finite differences of a level function over the unit cube.
//!
//! Samples falling outside the domain take the value at the centre, which
//! amounts to a zero-flux boundary.

use frontier_core::PointId;
use frontier_policy::SpeedContext;
use frontier_space::GridDomain;

/// Gradient magnitude below which the curvature is reported as zero.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Values of a level function on the 3^n cube around a point, stored in
/// lexicographic offset order.
#[derive(Clone, Debug)]
pub struct CubeSamples {
    ndim: usize,
    values: [f64; 27],
}

impl CubeSamples {
    /// Sample `phi` around `p`.
    pub fn gather(domain: &GridDomain, p: PointId, mut phi: impl FnMut(PointId) -> f64) -> Self {
        let ndim = domain.ndim();
        let centre = phi(p);
        let count = 3usize.pow(ndim as u32);
        let mut values = [centre; 27];
        let mut delta = [0i32; 3];
        for (cell, value) in values.iter_mut().enumerate().take(count) {
            let mut rest = cell;
            for axis in (0..ndim).rev() {
                delta[axis] = (rest % 3) as i32 - 1;
                rest /= 3;
            }
            if let Some(q) = domain.offset(p, &delta[..ndim]) {
                if q != p {
                    *value = phi(q);
                }
            }
        }
        Self { ndim, values }
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    fn at(&self, delta: &[i32]) -> f64 {
        let cell = delta
            .iter()
            .fold(0usize, |acc, &d| acc * 3 + (d + 1) as usize);
        self.values[cell]
    }

    fn unit(&self, axis: usize, sign: i32) -> [i32; 3] {
        let mut d = [0i32; 3];
        d[axis] = sign;
        d
    }

    /// Value at the centre point.
    pub fn centre(&self) -> f64 {
        self.values[3usize.pow(self.ndim as u32) / 2]
    }

    /// First derivative along each axis.
    pub fn gradient(&self) -> [f64; 3] {
        let n = self.ndim;
        let mut g = [0.0; 3];
        for (axis, slot) in g.iter_mut().enumerate().take(n) {
            let fwd = self.at(&self.unit(axis, 1)[..n]);
            let bwd = self.at(&self.unit(axis, -1)[..n]);
            *slot = (fwd - bwd) / 2.0;
        }
        g
    }

    /// Matrix of second derivatives.
    pub fn hessian(&self) -> [[f64; 3]; 3] {
        let n = self.ndim;
        let c = self.centre();
        let mut h = [[0.0; 3]; 3];
        for i in 0..n {
            let fwd = self.at(&self.unit(i, 1)[..n]);
            let bwd = self.at(&self.unit(i, -1)[..n]);
            h[i][i] = fwd - 2.0 * c + bwd;
            for j in (i + 1)..n {
                let mut pp = [0i32; 3];
                pp[i] = 1;
                pp[j] = 1;
                let mut pm = pp;
                pm[j] = -1;
                let mut mp = pp;
                mp[i] = -1;
                let mut mm = mp;
                mm[j] = -1;
                let v = (self.at(&pp[..n]) - self.at(&pm[..n]) - self.at(&mp[..n])
                    + self.at(&mm[..n]))
                    / 4.0;
                h[i][j] = v;
                h[j][i] = v;
            }
        }
        h
    }

    /// Sum of the pure second derivatives.
    pub fn laplacian(&self) -> f64 {
        let h = self.hessian();
        (0..self.ndim).map(|i| h[i][i]).sum()
    }

    /// Mean curvature of the level set through the centre.
    ///
    /// `(|∇φ|² tr H − ∇φᵀ H ∇φ) / |∇φ|³`, summed over principal curvatures
    /// (not averaged). Returns 0 when `|∇φ| < epsilon`.
    pub fn mean_curvature(&self, epsilon: f64) -> f64 {
        let n = self.ndim;
        let g = self.gradient();
        let h = self.hessian();
        let norm2: f64 = g[..n].iter().map(|v| v * v).sum();
        let norm = norm2.sqrt();
        if norm < epsilon {
            return 0.0;
        }
        let trace: f64 = (0..n).map(|i| h[i][i]).sum();
        let mut quad = 0.0;
        for i in 0..n {
            for j in 0..n {
                quad += g[i] * h[i][j] * g[j];
            }
        }
        (norm2 * trace - quad) / (norm2 * norm)
    }
}

/// Narrow-band level function `w·[q inside] + T(q)`, increasing towards
/// the inside and continuous across the frontier.
pub fn level_value(ctx: &SpeedContext<'_>, q: PointId) -> f64 {
    let base = if ctx.labels().is_inside(q) {
        ctx.band_width()
    } else {
        0.0
    };
    base + ctx.time().get(q)
}

/// Level function samples around `p`.
pub fn level_samples(ctx: &SpeedContext<'_>, p: PointId) -> CubeSamples {
    CubeSamples::gather(ctx.domain(), p, |q| level_value(ctx, q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn radial<'a>(domain: &'a GridDomain, centre: &[f64]) -> impl Fn(PointId) -> f64 + 'a {
        let centre = centre.to_vec();
        move |q| {
            let c = domain.coord_of(q);
            let r2: f64 = c
                .iter()
                .zip(&centre)
                .map(|(&x, &o)| (f64::from(x) - o).powi(2))
                .sum();
            -r2.sqrt()
        }
    }

    #[test]
    fn linear_function_has_zero_curvature() {
        let domain = GridDomain::with_extents(&[5, 5]).unwrap();
        let p = domain.index_of(&[2, 2]).unwrap();
        let s = CubeSamples::gather(&domain, p, |q| {
            let c = domain.coord_of(q);
            2.0 * f64::from(c[0]) - f64::from(c[1])
        });
        let g = s.gradient();
        assert!((g[0] - 2.0).abs() < 1e-12);
        assert!((g[1] + 1.0).abs() < 1e-12);
        assert!(s.mean_curvature(DEFAULT_EPSILON).abs() < 1e-12);
        assert!(s.laplacian().abs() < 1e-12);
    }

    #[test]
    fn flat_function_reports_zero() {
        let domain = GridDomain::with_extents(&[3, 3]).unwrap();
        let s = CubeSamples::gather(&domain, PointId(4), |_| 0.5);
        assert_eq!(s.mean_curvature(DEFAULT_EPSILON), 0.0);
        assert_eq!(s.centre(), 0.5);
    }

    #[test]
    fn circle_curvature_is_negative_inverse_radius() {
        let domain = GridDomain::with_extents(&[41, 41]).unwrap();
        let phi = radial(&domain, &[20.0, 20.0]);
        let p = domain.index_of(&[20, 30]).unwrap();
        let k = CubeSamples::gather(&domain, p, &phi).mean_curvature(DEFAULT_EPSILON);
        assert!((k + 0.1).abs() < 0.01, "got {k}");
    }

    #[test]
    fn sphere_curvature_sums_principal_curvatures() {
        let domain = GridDomain::with_extents(&[21, 21, 21]).unwrap();
        let phi = radial(&domain, &[10.0, 10.0, 10.0]);
        let p = domain.index_of(&[10, 10, 18]).unwrap();
        let k = CubeSamples::gather(&domain, p, &phi).mean_curvature(DEFAULT_EPSILON);
        assert!((k + 2.0 / 8.0).abs() < 0.02, "got {k}");
    }

    #[test]
    fn out_of_domain_samples_reuse_centre() {
        let domain = GridDomain::with_extents(&[3, 3]).unwrap();
        let s = CubeSamples::gather(&domain, PointId(0), |q| q.index() as f64);
        // Corner (0, 0): backward neighbours are missing.
        let g = s.gradient();
        assert_eq!(g[0], 1.5);
        assert_eq!(g[1], 0.5);
    }

    proptest! {
        #[test]
        fn curvature_ignores_scale_and_flips_with_orientation(
            a in 1.0f64..3.0,
            b in -1.0f64..1.0,
            q in -0.5f64..0.5,
            scale in 0.1f64..10.0,
        ) {
            let domain = GridDomain::with_extents(&[5, 5]).unwrap();
            let p = domain.index_of(&[2, 2]).unwrap();
            let phi = |r: PointId| {
                let c = domain.coord_of(r);
                let (x, y) = (f64::from(c[0] - 2), f64::from(c[1] - 2));
                a * x + b * y + q * x * y + q * y * y
            };
            let k = CubeSamples::gather(&domain, p, phi).mean_curvature(DEFAULT_EPSILON);
            let scaled = CubeSamples::gather(&domain, p, |r| scale * phi(r))
                .mean_curvature(DEFAULT_EPSILON);
            let flipped = CubeSamples::gather(&domain, p, |r| -phi(r))
                .mean_curvature(DEFAULT_EPSILON);
            let tol = 1e-9 * (1.0 + k.abs());
            prop_assert!((scaled - k).abs() < tol, "{scaled} vs {k}");
            prop_assert!((flipped + k).abs() < tol, "{flipped} vs {k}");
        }
    }
}
