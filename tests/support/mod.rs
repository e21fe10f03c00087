use nalgebra::Vector3;
use tumbler_cad::Solid;
use tumbler_cad::float_types::Real;

pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Total width of `solid` along the (unit) direction `dir`, measured via the
/// support function: `support(dir) + support(-dir)`.
pub fn extent(solid: &Solid, dir: Vector3<Real>) -> Real {
    solid.support(&dir).expect("support undefined along dir")
        + solid.support(&-dir).expect("support undefined along -dir")
}
