use crate::error::{OperationError, Result};
use crate::math::Point3;

/// A triangle of a triangulated shell, vertices in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulatedFace(pub [Point3; 3]);

impl TriangulatedFace {
    /// Creates a face from three points.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self([a, b, c])
    }

    /// Creates a face from a point list produced by a model loader.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless exactly 3 points are given.
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        Self::labeled_from_points(points, "triangulated face")
    }

    fn labeled_from_points(points: &[Point3], label: &str) -> Result<Self> {
        match points {
            [a, b, c] => Ok(Self::new(*a, *b, *c)),
            _ => Err(OperationError::InvalidInput(format!(
                "{label} has {} points, expected 3",
                points.len()
            ))
            .into()),
        }
    }

    /// The three vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.0
    }

    /// The same triangle with opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.0;
        Self([a, c, b])
    }
}

/// A closed triangulated surface bounding a solid or a cavity.
///
/// All faces are expected to share one winding sense and the surface to be
/// watertight. Neither is checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shell {
    /// The triangles of the shell.
    pub faces: Vec<TriangulatedFace>,
}

impl Shell {
    /// Creates a shell from faces.
    #[must_use]
    pub fn new(faces: Vec<TriangulatedFace>) -> Self {
        Self { faces }
    }

    /// Creates a shell from raw per-face point lists, e.g.
    /// `[[v1, v2, v3], [v4, v5, v6], ...]`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if any face does not have
    /// exactly 3 points. The message names the offending face index.
    pub fn from_faces<F: AsRef<[Point3]>>(faces: &[F]) -> Result<Self> {
        let faces = faces
            .iter()
            .enumerate()
            .map(|(i, pts)| {
                TriangulatedFace::labeled_from_points(pts.as_ref(), &format!("face {i}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { faces })
    }

    /// The same shell with every face's winding reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            faces: self.faces.iter().map(TriangulatedFace::reversed).collect(),
        }
    }

    /// The shell with every vertex moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &crate::math::Vector3) -> Self {
        Self {
            faces: self
                .faces
                .iter()
                .map(|f| {
                    let [a, b, c] = f.0;
                    TriangulatedFace([a + offset, b + offset, c + offset])
                })
                .collect(),
        }
    }
}

/// A solid bounded by one outer shell and zero or more cavity shells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    /// The exterior envelope.
    pub outer: Shell,
    /// Cavities inside the envelope.
    pub inner: Vec<Shell>,
}

impl Solid {
    /// Creates a solid without cavities.
    #[must_use]
    pub fn new(outer: Shell) -> Self {
        Self {
            outer,
            inner: Vec::new(),
        }
    }

    /// Adds a cavity shell.
    #[must_use]
    pub fn with_cavity(mut self, cavity: Shell) -> Self {
        self.inner.push(cavity);
        self
    }
}
