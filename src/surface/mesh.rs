//! Rectangular vertex grid spanning the simulation extent.

use bytemuck::{Pod, Zeroable};

use super::{HeightSurface, SurfaceVertex};
use crate::params::SimulationParams;

/// Vertex data for the surface mesh (position only, Z up)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl SurfaceVertex for Vertex {
    fn planar_position(&self) -> (f64, f64) {
        (self.position[0] as f64, self.position[1] as f64)
    }

    fn height(&self) -> f64 {
        self.position[2] as f64
    }

    fn set_height(&mut self, height: f64) {
        self.position[2] = height as f32;
    }
}

/// Flat XY grid over [0, size_x] x [0, size_y] whose z is the wave height
pub struct SurfaceGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    columns: usize,
    rows: usize,
    dirty: bool,
}

impl SurfaceGrid {
    /// Create a new surface grid with the extent and spacing in `params`
    pub fn new(params: &SimulationParams) -> Self {
        let (segments_x, segments_y) = params.segments();
        let columns = segments_x + 1;
        let rows = segments_y + 1;

        // Spacing is stretched so the last vertex lands exactly on the extent
        let step_x = params.size_x_m / segments_x as f64;
        let step_y = params.size_y_m / segments_y as f64;

        let mut vertices = Vec::with_capacity(columns * rows);
        let mut indices = Vec::with_capacity(segments_x * segments_y * 6);

        for j in 0..rows {
            for i in 0..columns {
                vertices.push(Vertex {
                    position: [
                        (i as f64 * step_x) as f32,
                        (j as f64 * step_y) as f32,
                        0.0,
                    ],
                });
            }
        }

        // Generate triangle indices (counter-clockwise seen from +Z)
        for j in 0..segments_y {
            for i in 0..segments_x {
                let bottom_left = (j * columns + i) as u32;
                let bottom_right = bottom_left + 1;
                let top_left = ((j + 1) * columns + i) as u32;
                let top_right = top_left + 1;

                indices.extend_from_slice(&[
                    bottom_left,
                    bottom_right,
                    top_left,
                    top_left,
                    bottom_right,
                    top_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            columns,
            rows,
            // Upload the initial flat grid
            dirty: true,
        }
    }

    /// Vertex count along (x, y)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Centre of the grid in the XY plane (meters)
    pub fn center(&self) -> [f32; 3] {
        let far = self.vertices.last().map(|v| v.position).unwrap_or([0.0; 3]);
        [far[0] / 2.0, far[1] / 2.0, 0.0]
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear and return the dirty flag (called by the renderer after upload)
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl HeightSurface for SurfaceGrid {
    type Vertex = Vertex;

    fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
