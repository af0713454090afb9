use nalgebra::{Rotation3, Vector3};

/// Returns the rotation taking a vector in the orbital plane (periapsis along
/// x, orbit normal along z) to the primary-centered inertial frame.
///
/// The three turns are applied to the vector in this order:
/// 1. around z by the longitude of the ascending node,
/// 2. around the resulting x axis by the inclination, in the clockwise sense
///    (z' = z cos i - y sin i),
/// 3. around the resulting z axis by the argument of periapsis.
///
/// All angles are in radians. Rotations don't commute, so the order above is
/// load-bearing.
pub fn orbit_rotation(incl: f64, lan: f64, argp: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), argp)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), -incl)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), lan)
}

/// Places a point given in orbital-plane polar coordinates (radius and true
/// anomaly) into the inertial frame.
pub fn plane_to_inertial(rotation: &Rotation3<f64>, radius: f64, theta: f64) -> Vector3<f64> {
    let in_plane = Vector3::new(radius * theta.cos(), radius * theta.sin(), 0.0);
    rotation * in_plane
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use super::*;

    // The rotation written out longhand, one axis at a time
    fn rotate_longhand(p: Vector3<f64>, incl: f64, lan: f64, argp: f64) -> Vector3<f64> {
        let x1 = p.x * lan.cos() - p.y * lan.sin();
        let y1 = p.x * lan.sin() + p.y * lan.cos();

        let z2 = p.z * incl.cos() - y1 * incl.sin();
        let y2 = p.z * incl.sin() + y1 * incl.cos();

        let x3 = x1 * argp.cos() - y2 * argp.sin();
        let y3 = x1 * argp.sin() + y2 * argp.cos();

        Vector3::new(x3, y3, z2)
    }

    #[test]
    fn test_identity() {
        let r = orbit_rotation(0.0, 0.0, 0.0);
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(r * p, p);
    }

    #[test]
    fn test_matches_longhand() {
        let angles = [
            (15.0_f64, 30.0_f64, 45.0_f64),
            (11.77999525, 334.5698056, 186.5403463),
            (90.0, 0.0, 0.0),
            (170.0, 200.0, 350.0),
        ];
        let points = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.3, -2.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
        ];

        for (incl, lan, argp) in angles {
            let (incl, lan, argp) = (incl.to_radians(), lan.to_radians(), argp.to_radians());
            let r = orbit_rotation(incl, lan, argp);
            for p in points {
                assert_relative_eq!(
                    r * p,
                    rotate_longhand(p, incl, lan, argp),
                    epsilon = 1e-14
                );
            }
        }
    }

    #[test]
    fn test_order_matters() {
        let p = Vector3::new(1.0, 0.0, 0.0);
        let a = orbit_rotation(0.5, 1.0, 0.0) * p;
        let b = orbit_rotation(0.5, 0.0, 1.0) * p;
        assert!((a - b).norm() > 1e-3);
    }

    #[test]
    fn test_plane_to_inertial() {
        let r = orbit_rotation(0.0, 0.0, 0.0);
        assert_relative_eq!(
            plane_to_inertial(&r, 2.0, PI / 2.0),
            Vector3::new(0.0, 2.0, 0.0),
            epsilon = 1e-15
        );

        // A quarter turn of inclination tips the plane's y axis onto -z
        let r = orbit_rotation(PI / 2.0, 0.0, 0.0);
        assert_relative_eq!(
            plane_to_inertial(&r, 1.0, PI / 2.0),
            Vector3::new(0.0, 0.0, -1.0),
            epsilon = 1e-15
        );

        // Rotations preserve the radius
        let r = orbit_rotation(0.3, 1.2, 4.0);
        assert_relative_eq!(plane_to_inertial(&r, 3.5, 2.2).norm(), 3.5, epsilon = 1e-14);
    }
}
