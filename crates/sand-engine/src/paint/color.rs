/// Linear premultiplied RGBA color.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::from_premul(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Clear value for a render pass load op.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_clears_to_opaque_black() {
        assert_eq!(Color::BLACK.to_wgpu(), wgpu::Color::BLACK);
    }

    #[test]
    fn components_widen_unchanged() {
        let c = Color::from_premul(0.5, 0.25, 0.125, 0.5).to_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 0.125, 0.5));
    }
}
