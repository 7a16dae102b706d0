use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Quad vertex: a position in local mesh space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit quad hanging below the origin: x in [0, 1], y in [-1, 0].
///
/// The origin is the quad's top-left corner, so a translation to a sprite's
/// top-left NDC position places it directly.
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [0.0, -1.0, 0.0] },
    QuadVertex { position: [1.0, -1.0, 0.0] },
    QuadVertex { position: [1.0, 0.0, 0.0] },
    QuadVertex { position: [0.0, 0.0, 0.0] },
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// GPU copy of the quad. Uploaded once and shared by every sprite draw.
pub struct QuadMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
}

impl QuadMesh {
    pub fn upload(device: &wgpu::Device) -> Self {
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sand quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sand quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self { vbo, ibo }
    }

    pub const fn index_count() -> u32 {
        QUAD_INDICES.len() as u32
    }

    pub(super) fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.set_index_buffer(self.ibo.slice(..), wgpu::IndexFormat::Uint32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec2, Vec3};

    fn corner(i: u32) -> Vec2 {
        let p = QUAD_VERTICES[i as usize].position;
        Vec2::new(p[0], p[1])
    }

    fn signed_area(tri: &[u32]) -> f32 {
        let (a, b, c) = (corner(tri[0]), corner(tri[1]), corner(tri[2]));
        0.5 * (b - a).perp_dot(c - a)
    }

    #[test]
    fn stride_is_twelve_bytes() {
        assert_eq!(QuadVertex::layout().array_stride, 12);
        assert_eq!(QuadVertex::layout().attributes[0].shader_location, 0);
        assert_eq!(QuadVertex::layout().attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn identity_model_reproduces_corners() {
        let expected = [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        for (v, want) in QUAD_VERTICES.iter().zip(expected) {
            let got = Mat4::IDENTITY.transform_point3(Vec3::from_array(v.position));
            assert_eq!(got, want);
        }
    }

    #[test]
    fn quad_spans_unit_square_below_origin() {
        let (min, max) = QUAD_VERTICES.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec2::new(v.position[0], v.position[1]);
                (lo.min(p), hi.max(p))
            },
        );
        assert_eq!(min, Vec2::new(0.0, -1.0));
        assert_eq!(max, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn indices_form_two_triangles() {
        assert_eq!(QuadMesh::index_count(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
        for tri in QUAD_INDICES.chunks(3) {
            assert!(signed_area(tri).abs() > 0.0, "degenerate triangle {tri:?}");
        }
    }

    #[test]
    fn triangles_cover_quad_without_overlap() {
        // Equal winding and areas summing to the quad's area rule out both gaps and overlap.
        let areas: Vec<f32> = QUAD_INDICES.chunks(3).map(signed_area).collect();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].signum(), areas[1].signum());
        assert!((areas[0].abs() + areas[1].abs() - 1.0).abs() < 1e-6);

        // They share exactly the diagonal 0-2.
        let shared: Vec<u32> = QUAD_INDICES[..3]
            .iter()
            .copied()
            .filter(|i| QUAD_INDICES[3..].contains(i))
            .collect();
        assert_eq!(shared, vec![0, 2]);
    }

    #[test]
    fn all_vertices_are_used() {
        for i in 0..QUAD_VERTICES.len() as u32 {
            assert!(QUAD_INDICES.contains(&i));
        }
    }
}
