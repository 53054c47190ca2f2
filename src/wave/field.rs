//! The set of active plane waves and the per-frame height update.

use std::collections::VecDeque;

use super::PlaneWave;
use crate::surface::{HeightSurface, SurfaceVertex};

/// Ordered collection of plane waves superposed over the surface.
///
/// Waves are only ever appended. Without a capacity limit the field grows
/// with every spawn; with one, the oldest wave is evicted to make room.
#[derive(Debug, Clone, Default)]
pub struct WaveField {
    waves: VecDeque<PlaneWave>,
    max_waves: Option<usize>,
}

impl WaveField {
    /// Create an empty, unbounded field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty field holding at most `max_waves` waves (if set)
    pub fn with_max_waves(max_waves: Option<usize>) -> Self {
        Self {
            waves: VecDeque::new(),
            max_waves,
        }
    }

    /// Append a wave, evicting the oldest one if the field is full.
    pub fn add_wave(&mut self, wave: PlaneWave) {
        if let Some(max) = self.max_waves {
            while self.waves.len() >= max {
                if self.waves.pop_front().is_none() {
                    break;
                }
                log::debug!("Wave field full ({} waves), evicted oldest", max);
            }
            if max == 0 {
                return;
            }
        }
        self.waves.push_back(wave);
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn max_waves(&self) -> Option<usize> {
        self.max_waves
    }

    /// Waves in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PlaneWave> {
        self.waves.iter()
    }

    /// Sum of all source amplitudes (the height normalization factor)
    pub fn amplitude_sum(&self) -> f64 {
        self.waves.iter().map(|w| w.source().amplitude()).sum()
    }

    /// Raw superposed signal at `(x, y, t)`
    pub fn intensity_at(&self, x: f64, y: f64, t: f64) -> f64 {
        self.waves.iter().map(|w| w.signal(x, y, t)).sum()
    }

    /// Normalized height at `(x, y, t)`.
    ///
    /// `None` when the amplitude sum is indistinguishable from zero; the
    /// caller should then keep whatever height it had.
    pub fn height_at(&self, x: f64, y: f64, t: f64) -> Option<f64> {
        normalize(self.intensity_at(x, y, t), self.amplitude_sum())
    }

    /// Write the normalized height of every vertex at time `t`.
    ///
    /// Vertices are left untouched when the amplitude guard fires. The
    /// surface is marked dirty if anything was written.
    ///
    /// # Returns
    /// Number of vertices written
    pub fn update_heights<S: HeightSurface>(&self, surface: &mut S, t: f64) -> usize {
        // Identical for every vertex
        let amplitude = self.amplitude_sum();
        if amplitude.abs() <= f64::EPSILON {
            return 0;
        }

        let mut written = 0;
        for vertex in surface.vertices_mut() {
            let (x, y) = vertex.planar_position();
            let intensity = self.intensity_at(x, y, t);
            vertex.set_height(intensity / amplitude);
            written += 1;
        }

        if written > 0 {
            surface.mark_dirty();
        }
        written
    }
}

fn normalize(intensity: f64, amplitude: f64) -> Option<f64> {
    if amplitude.abs() <= f64::EPSILON {
        None
    } else {
        Some(intensity / amplitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::PointSource;
    use std::f64::consts::TAU;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct TestVertex {
        x: f64,
        y: f64,
        z: f64,
    }

    impl SurfaceVertex for TestVertex {
        fn planar_position(&self) -> (f64, f64) {
            (self.x, self.y)
        }

        fn height(&self) -> f64 {
            self.z
        }

        fn set_height(&mut self, height: f64) {
            self.z = height;
        }
    }

    #[derive(Debug, Clone)]
    struct TestSurface {
        vertices: Vec<TestVertex>,
        dirty: bool,
    }

    impl TestSurface {
        fn grid(n: usize, spacing: f64, initial_height: f64) -> Self {
            let mut vertices = Vec::new();
            for j in 0..n {
                for i in 0..n {
                    vertices.push(TestVertex {
                        x: i as f64 * spacing,
                        y: j as f64 * spacing,
                        z: initial_height,
                    });
                }
            }
            Self {
                vertices,
                dirty: false,
            }
        }
    }

    impl HeightSurface for TestSurface {
        type Vertex = TestVertex;

        fn vertices_mut(&mut self) -> &mut [TestVertex] {
            &mut self.vertices
        }

        fn mark_dirty(&mut self) {
            self.dirty = true;
        }
    }

    fn wave(x: f64, y: f64, amp: f64, freq: f64, phase: f64, kx: f64, ky: f64) -> PlaneWave {
        PlaneWave::new(Arc::new(PointSource::new(x, y, amp, freq, phase)), kx, ky)
    }

    fn sample_waves() -> Vec<PlaneWave> {
        vec![
            wave(0.0, 0.0, 1.0, 0.1, 0.0, TAU / 5.0, 0.0),
            wave(10.0, 4.0, 3.5, 0.05, 1.1, 0.3, -0.8),
            wave(2.0, 9.0, 0.25, 0.08, 4.0, -1.0, 0.2),
            wave(7.0, 7.0, 6.0, 0.01, 0.5, 0.0, 1.2),
        ]
    }

    #[test]
    fn test_empty_field_leaves_heights() {
        let field = WaveField::new();
        let mut surface = TestSurface::grid(5, 1.0, 0.75);

        let written = field.update_heights(&mut surface, 3.0);

        assert_eq!(written, 0);
        assert!(!surface.dirty);
        assert!(surface.vertices.iter().all(|v| v.z == 0.75));
        assert_eq!(field.amplitude_sum(), 0.0);
        assert_eq!(field.height_at(1.0, 1.0, 3.0), None);
    }

    #[test]
    fn test_cancelling_amplitudes_leave_heights() {
        let mut field = WaveField::new();
        field.add_wave(wave(0.0, 0.0, 2.0, 0.1, 0.0, 1.0, 0.0));
        field.add_wave(wave(5.0, 5.0, -2.0, 0.1, 0.0, 0.0, 1.0));

        let mut surface = TestSurface::grid(4, 2.0, -0.3);
        assert_eq!(field.update_heights(&mut surface, 10.0), 0);
        assert!(surface.vertices.iter().all(|v| v.z == -0.3));
    }

    #[test]
    fn test_single_wave_normalizes_to_unit_sinusoid() {
        let mut field = WaveField::new();
        field.add_wave(wave(0.0, 0.0, 4.0, 0.1, 0.0, TAU / 5.0, 0.0));

        let mut surface = TestSurface::grid(3, 1.0, 0.0);
        let written = field.update_heights(&mut surface, 2.5);

        assert_eq!(written, 9);
        assert!(surface.dirty);
        // Vertex (0, 0) sits on the source: sin(pi/2)
        assert!((surface.vertices[0].z - 1.0).abs() < 1e-12);
        assert!(surface.vertices.iter().all(|v| v.z.abs() <= 1.0 + 1e-12));
    }

    #[test]
    fn test_matches_direct_superposition() {
        let mut field = WaveField::new();
        for w in sample_waves() {
            field.add_wave(w);
        }

        let mut surface = TestSurface::grid(6, 1.7, 0.0);
        let t = 123.4;
        field.update_heights(&mut surface, t);

        let amplitude: f64 = sample_waves().iter().map(|w| w.source().amplitude()).sum();
        for vertex in &surface.vertices {
            let intensity: f64 = sample_waves()
                .iter()
                .map(|w| w.signal(vertex.x, vertex.y, t))
                .sum();
            assert!((vertex.z - intensity / amplitude).abs() < 1e-12);
            assert_eq!(field.height_at(vertex.x, vertex.y, t), Some(vertex.z));
        }
    }

    #[test]
    fn test_order_independent() {
        let forward = sample_waves();
        let mut reversed = sample_waves();
        reversed.reverse();
        let mut rotated = sample_waves();
        rotated.rotate_left(2);

        let mut heights = Vec::new();
        for order in [forward, reversed, rotated] {
            let mut field = WaveField::new();
            for w in order {
                field.add_wave(w);
            }
            let mut surface = TestSurface::grid(8, 1.3, 0.0);
            field.update_heights(&mut surface, 77.0);
            heights.push(surface.vertices);
        }

        for other in &heights[1..] {
            for (a, b) in heights[0].iter().zip(other) {
                assert!((a.z - b.z).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_append_only_keeps_insertion_order() {
        let mut field = WaveField::new();
        for w in sample_waves() {
            field.add_wave(w);
        }

        assert_eq!(field.len(), 4);
        let amplitudes: Vec<f64> = field.iter().map(|w| w.source().amplitude()).collect();
        assert_eq!(amplitudes, vec![1.0, 3.5, 0.25, 6.0]);
    }

    #[test]
    fn test_max_waves_evicts_oldest() {
        let mut field = WaveField::with_max_waves(Some(2));
        for w in sample_waves() {
            field.add_wave(w);
            assert!(field.len() <= 2);
        }

        let amplitudes: Vec<f64> = field.iter().map(|w| w.source().amplitude()).collect();
        assert_eq!(amplitudes, vec![0.25, 6.0]);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut field = WaveField::new();
        for _ in 0..1000 {
            field.add_wave(wave(0.0, 0.0, 1.0, 0.1, 0.0, 1.0, 0.0));
        }
        assert_eq!(field.len(), 1000);
        assert_eq!(field.max_waves(), None);
    }
}
