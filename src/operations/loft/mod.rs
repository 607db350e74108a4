mod adjacency;
mod rays;
mod repair;
mod strip;

pub use adjacency::AdjacencyMatrix;
pub use rays::cast_rays;
pub use repair::RepairPolicy;

use tracing::{debug, trace};

use crate::error::Result;
use crate::math::Point3;
use crate::operations::planarize::PlanarPath;
use crate::tessellation::{flatten_points, MeshBuffers, Triangulate};

/// Parameters controlling how a loft is stitched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoftParams {
    /// How the raw angular partition is patched before the strip walk.
    pub repair: RepairPolicy,
    /// Also close both ends with triangulated caps.
    pub caps: bool,
}

/// Stitches two closed paths into a triangle collar.
///
/// The path with more vertices is the larger path; on a tie it is `end`. The
/// output vertex buffer holds the larger path's vertices followed by the smaller
/// path's, both untransformed and in the caller's order. The collar has one
/// triangle per vertex of either path.
pub struct Loft<'a> {
    start: &'a [Point3],
    end: &'a [Point3],
    params: LoftParams,
}

/// The two input paths, assigned to their roles.
struct Pairing<'a> {
    large_raw: &'a [Point3],
    small_raw: &'a [Point3],
    large: PlanarPath,
    small: PlanarPath,
}

impl<'a> Loft<'a> {
    /// Creates a new `Loft` operation with default parameters.
    #[must_use]
    pub fn new(start: &'a [Point3], end: &'a [Point3]) -> Self {
        Self {
            start,
            end,
            params: LoftParams::default(),
        }
    }

    /// Sets custom loft parameters.
    #[must_use]
    pub fn with_params(mut self, params: LoftParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the adjacency matrix the strip walk would follow, repair included.
    ///
    /// # Errors
    ///
    /// Returns an error if either path cannot be planarized.
    pub fn adjacency(&self) -> Result<AdjacencyMatrix> {
        Ok(self.pair()?.matrix(self.params.repair))
    }

    /// Executes the loft.
    ///
    /// # Errors
    ///
    /// Returns an error if either path has fewer than three vertices or is
    /// degenerate, if the adjacency matrix admits no complete strip, or if a cap
    /// cannot be triangulated.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<MeshBuffers> {
        let pairing = self.pair()?;
        let matrix = pairing.matrix(self.params.repair);

        let indices = strip::walk_strip(&matrix, &pairing.large, &pairing.small)?;
        let mut mesh = MeshBuffers {
            vertices: flatten_points(pairing.large_raw.iter().chain(pairing.small_raw)),
            indices,
        };

        if self.params.caps {
            let large_cap = Triangulate::new(pairing.large_raw).execute()?;
            let small_cap = Triangulate::new(pairing.small_raw).execute()?;
            mesh.extend_triangles(&large_cap, 0);
            mesh.extend_triangles(&small_cap, pairing.large_raw.len() as u32);
        }

        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            caps = self.params.caps,
            "lofted paths"
        );
        Ok(mesh)
    }

    fn pair(&self) -> Result<Pairing<'a>> {
        let start = PlanarPath::new(self.start)?;
        let end = PlanarPath::new(self.end)?;
        let pairing = if self.start.len() > self.end.len() {
            Pairing {
                large_raw: self.start,
                small_raw: self.end,
                large: start,
                small: end,
            }
        } else {
            Pairing {
                large_raw: self.end,
                small_raw: self.start,
                large: end,
                small: start,
            }
        };
        debug!(
            large = pairing.large_raw.len(),
            small = pairing.small_raw.len(),
            large_reversed = pairing.large.is_reversed(),
            small_reversed = pairing.small.is_reversed(),
            "paired loft paths"
        );
        Ok(pairing)
    }
}

impl Pairing<'_> {
    fn matrix(&self, repair: RepairPolicy) -> AdjacencyMatrix {
        let rays = cast_rays(self.small.points());
        let mut matrix = AdjacencyMatrix::from_rays(self.large.points(), &rays);
        trace!(%matrix, "angular partition");

        let added = repair.apply(&mut matrix);
        debug!(
            ?repair,
            added,
            connections = matrix.count(),
            irregular = matrix.irregular_cells().count(),
            "adjacency matrix ready"
        );
        trace!(%matrix, "repaired partition");
        matrix
    }
}
