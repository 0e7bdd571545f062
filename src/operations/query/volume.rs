use crate::math::Point3;
use crate::model::{Shell, Solid};

/// Determinant of the 3x3 matrix whose rows are `p1`, `p2`, `p3`.
///
/// Equals six times the signed volume of the tetrahedron spanned by the
/// origin and the triangle `p1 p2 p3`; positive when the triangle winds
/// counter-clockwise seen from the side facing away from the origin.
#[must_use]
pub fn signed_determinant(p1: &Point3, p2: &Point3, p3: &Point3) -> f64 {
    p1.x * p2.y * p3.z + p1.y * p2.z * p3.x + p1.z * p3.y * p2.x
        - p1.z * p2.y * p3.x
        - p1.y * p2.x * p3.z
        - p1.x * p3.y * p2.z
}

/// Computes the volume enclosed by a closed triangulated shell.
///
/// Signed tetrahedron method: each triangle contributes the signed volume of
/// the tetrahedron it forms with the origin. Over a closed, consistently wound
/// shell everything outside the solid cancels, whatever the origin.
///
/// Closedness and winding are not checked. An open or mixed-winding shell
/// gives a wrong number, not an error.
pub struct ShellVolume<'a> {
    shell: &'a Shell,
}

impl<'a> ShellVolume<'a> {
    /// Creates a new `ShellVolume` query.
    #[must_use]
    pub fn new(shell: &'a Shell) -> Self {
        Self { shell }
    }

    /// Signed volume: positive for outward-wound shells, negative for
    /// inward-wound ones.
    #[must_use]
    pub fn signed(&self) -> f64 {
        let sum: f64 = self
            .shell
            .faces
            .iter()
            .map(|face| {
                let [v0, v1, v2] = face.vertices();
                signed_determinant(v0, v1, v2)
            })
            .sum();
        sum / 6.0
    }

    /// Executes the query, returning the volume (absolute value).
    #[must_use]
    pub fn execute(&self) -> f64 {
        let signed = self.signed();
        tracing::debug!(
            faces = self.shell.faces.len(),
            signed_volume = signed,
            "shell volume"
        );
        signed.abs()
    }
}

/// Computes the volume of a solid: its outer shell minus its cavities.
pub struct SolidVolume<'a> {
    solid: &'a Solid,
}

impl<'a> SolidVolume<'a> {
    /// Creates a new `SolidVolume` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query. Never negative; cavities larger than the
    /// envelope clamp the result to zero.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let outer = ShellVolume::new(&self.solid.outer).execute();
        let cavities: f64 = self
            .solid
            .inner
            .iter()
            .map(|shell| ShellVolume::new(shell).execute())
            .sum();
        let net = outer - cavities;
        if net < 0.0 {
            tracing::warn!(outer, cavities, "cavities exceed the outer shell, clamping volume to 0");
            return 0.0;
        }
        net
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::model::TriangulatedFace;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Axis-aligned box, 12 triangles wound counter-clockwise seen from outside.
    fn box_shell(min: Point3, max: Point3) -> Shell {
        let c = [
            p(min.x, min.y, min.z),
            p(max.x, min.y, min.z),
            p(max.x, max.y, min.z),
            p(min.x, max.y, min.z),
            p(min.x, min.y, max.z),
            p(max.x, min.y, max.z),
            p(max.x, max.y, max.z),
            p(min.x, max.y, max.z),
        ];
        let tris: [[usize; 3]; 12] = [
            [0, 3, 2],
            [0, 2, 1],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 7, 6],
            [3, 6, 2],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];
        Shell::new(
            tris.iter()
                .map(|t| TriangulatedFace::new(c[t[0]], c[t[1]], c[t[2]]))
                .collect(),
        )
    }

    fn unit_cube() -> Shell {
        box_shell(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
    }

    #[test]
    fn determinant_of_axes() {
        let d = signed_determinant(&p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0), &p(0.0, 0.0, 1.0));
        assert_relative_eq!(d, 1.0);
        let d = signed_determinant(&p(0.0, 1.0, 0.0), &p(1.0, 0.0, 0.0), &p(0.0, 0.0, 1.0));
        assert_relative_eq!(d, -1.0);
    }

    #[test]
    fn determinant_matches_triple_product() {
        let (a, b, c) = (p(1.0, 2.0, 3.0), p(-4.0, 0.5, 2.0), p(0.3, -1.0, 7.0));
        let triple = a.coords.dot(&b.coords.cross(&c.coords));
        assert_relative_eq!(signed_determinant(&a, &b, &c), triple, epsilon = 1e-12);
    }

    #[test]
    fn unit_cube_volume() {
        assert_relative_eq!(ShellVolume::new(&unit_cube()).execute(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn outward_cube_is_positive() {
        assert_relative_eq!(ShellVolume::new(&unit_cube()).signed(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn reversed_winding_keeps_magnitude() {
        let reversed = unit_cube().reversed();
        assert_relative_eq!(ShellVolume::new(&reversed).signed(), -1.0, epsilon = 1e-9);
        assert_relative_eq!(ShellVolume::new(&reversed).execute(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn translation_does_not_change_volume() {
        let shell = box_shell(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0));
        let moved = shell.translated(&Vector3::new(10.5, -20.25, 3.0));
        assert_relative_eq!(ShellVolume::new(&shell).execute(), 24.0, epsilon = 1e-9);
        assert_relative_eq!(ShellVolume::new(&moved).execute(), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn offset_box_volume() {
        let shell = box_shell(p(1.0, 2.0, 3.0), p(3.0, 5.0, 7.0));
        assert_relative_eq!(ShellVolume::new(&shell).execute(), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn tetrahedron_volume() {
        let (o, a, b, c) = (
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        );
        let shell = Shell::from_faces(&[[o, b, a], [o, a, c], [o, c, b], [a, b, c]]).unwrap();
        assert_relative_eq!(ShellVolume::new(&shell).execute(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_shell_has_no_volume() {
        assert_relative_eq!(ShellVolume::new(&Shell::default()).execute(), 0.0);
    }

    #[test]
    fn solid_subtracts_cavity() {
        let solid = Solid::new(box_shell(p(0.0, 0.0, 0.0), p(4.0, 4.0, 4.0)))
            .with_cavity(box_shell(p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)).reversed());
        assert_relative_eq!(SolidVolume::new(&solid).execute(), 63.0, epsilon = 1e-9);
    }

    #[test]
    fn solid_without_cavities_is_outer_volume() {
        let solid = Solid::new(unit_cube());
        assert_relative_eq!(SolidVolume::new(&solid).execute(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn oversized_cavity_clamps_to_zero() {
        let solid = Solid::new(unit_cube()).with_cavity(box_shell(
            p(0.0, 0.0, 0.0),
            p(2.0, 2.0, 2.0),
        ));
        assert_relative_eq!(SolidVolume::new(&solid).execute(), 0.0);
    }
}
