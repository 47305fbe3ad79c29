//! Free-function vector kernel over [`Vector3`].
//!
//! None of these fail. NaN components propagate to the result.

use super::Vector3;

/// Euclidean length of `v`.
#[inline]
#[must_use]
pub fn length(v: &Vector3) -> f64 {
    v.norm()
}

/// Returns `v` scaled to unit length, or the zero vector if `v` has length 0.
#[inline]
#[must_use]
pub fn normalize(v: &Vector3) -> Vector3 {
    v.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
}

/// Writes the normalized `v` into `out`. Same zero-length policy as [`normalize`].
#[inline]
pub fn normalize_into(v: &Vector3, out: &mut Vector3) {
    *out = normalize(v);
}

#[inline]
#[must_use]
pub fn dot(u: &Vector3, v: &Vector3) -> f64 {
    u.dot(v)
}

/// Right-handed cross product.
#[inline]
#[must_use]
pub fn cross(u: &Vector3, v: &Vector3) -> Vector3 {
    Vector3::new(
        u.y * v.z - u.z * v.y,
        u.z * v.x - u.x * v.z,
        u.x * v.y - u.y * v.x,
    )
}

#[inline]
#[must_use]
pub fn add(u: &Vector3, v: &Vector3) -> Vector3 {
    u + v
}

#[inline]
#[must_use]
pub fn subtract(u: &Vector3, v: &Vector3) -> Vector3 {
    u - v
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4_0() {
        assert!((length(&Vector3::new(3.0, 4.0, 0.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_unit_length() {
        let n = normalize(&Vector3::new(1.0, 2.0, -2.0));
        assert!((n.norm() - 1.0).abs() < 1e-12);
        assert!((n.y - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_is_zero() {
        let n = normalize(&Vector3::zeros());
        assert_eq!(n, Vector3::zeros());
        assert!(n.iter().all(|c| !c.is_nan()));
    }

    #[test]
    fn normalize_nan_propagates() {
        let n = normalize(&Vector3::new(f64::NAN, 1.0, 0.0));
        assert!(n.x.is_nan());
    }

    #[test]
    fn normalize_into_writes_destination() {
        let mut out = Vector3::new(9.0, 9.0, 9.0);
        normalize_into(&Vector3::new(0.0, 0.0, 5.0), &mut out);
        assert_eq!(out, Vector3::z());

        normalize_into(&Vector3::zeros(), &mut out);
        assert_eq!(out, Vector3::zeros());
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(cross(&Vector3::x(), &Vector3::y()), Vector3::z());
        assert_eq!(cross(&Vector3::y(), &Vector3::x()), -Vector3::z());
        assert_eq!(cross(&Vector3::y(), &Vector3::z()), Vector3::x());
    }

    #[test]
    fn cross_matches_nalgebra() {
        let u = Vector3::new(1.5, -2.0, 0.25);
        let v = Vector3::new(-0.5, 3.0, 4.0);
        assert!((cross(&u, &v) - u.cross(&v)).norm() < 1e-12);
    }

    #[test]
    fn dot_add_subtract() {
        let u = Vector3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(dot(&u, &v), 12.0);
        assert_eq!(add(&u, &v), Vector3::new(5.0, -3.0, 9.0));
        assert_eq!(subtract(&u, &v), Vector3::new(-3.0, 7.0, -3.0));
    }
}
