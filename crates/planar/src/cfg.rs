//! Tolerances and scale factors for the planar kernel.
//!
//! Policy
//! - Defaults are fixed constants tuned for coordinates of order 1..1e4. They
//!   are empirical, not derived; callers working at other scales should pass an
//!   explicit `GeomCfg` instead of relying on the defaults.
//! - Every algorithm has a default entry point plus a `*_with_cfg` variant so
//!   call sites never juggle raw epsilons.

/// Absolute slack on `d² − r²` for circle membership (boundary counts as inside).
pub(crate) const CIRCLE_EPS: f64 = 1e-8;
/// Minimum `|D|` of the circumcenter system before a triangle counts as collinear.
pub(crate) const COLLINEAR_EPS: f64 = 1e-10;
/// Super-triangle size relative to the input bounding box.
pub(crate) const SUPER_SCALE: f64 = 1000.0;

/// Kernel configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Boundary slack used by `Circle::contains_eps`.
    pub eps_circle: f64,
    /// Collinearity threshold used by `Triangle::circumcircle_eps`.
    pub eps_collinear: f64,
    /// Scale factor used by `delaunay::super_triangle`.
    pub super_scale: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_circle: CIRCLE_EPS,
            eps_collinear: COLLINEAR_EPS,
            super_scale: SUPER_SCALE,
        }
    }
}
