//! The rendered height-field surface and the interface the wave core writes through.

mod mesh;

// Re-export public types
pub use mesh::{SurfaceGrid, Vertex};

/// A vertex with a fixed planar position and a mutable height
pub trait SurfaceVertex {
    /// (x, y) position in meters
    fn planar_position(&self) -> (f64, f64);

    fn height(&self) -> f64;

    fn set_height(&mut self, height: f64);
}

/// A collection of vertices whose heights are rewritten every frame.
///
/// `mark_dirty` tells the owner that the geometry must be re-uploaded
/// before the next draw.
pub trait HeightSurface {
    type Vertex: SurfaceVertex;

    fn vertices_mut(&mut self) -> &mut [Self::Vertex];

    fn mark_dirty(&mut self);
}
