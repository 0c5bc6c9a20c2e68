//! Tolerance defaults for planar geometry.
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling” at call sites.
//! - `EPS` is absolute and applies to coordinates, cross products and
//!   on-boundary tests. `REL_EPS` applies to derived scalars (lengths, angles,
//!   ratios) that are compared after several floating-point operations.

/// Absolute tolerance for coordinate equality and geometric predicates.
pub const EPS: f64 = 1e-9;
/// Relative tolerance for derived scalar comparisons, see [`approx_eq`].
pub const REL_EPS: f64 = 1e-9;

/// `|a - b| <= REL_EPS * max(1, |a|, |b|)`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_EPS * 1f64.max(a.abs()).max(b.abs())
}
