//! Surface materials, mirroring the stock material models of common web 3D
//! libraries so a renderer can map them one-to-one.

use serde::Serialize;

/// 24-bit sRGB color written as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFF_FF_FF);

    /// Components in `[0, 1]`, still sRGB encoded.
    pub fn rgb(self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xFF) as f32 / 255.0,
            ((self.0 >> 8) & 0xFF) as f32 / 255.0,
            (self.0 & 0xFF) as f32 / 255.0,
        ]
    }

    /// Components converted to linear RGB.
    pub fn linear_rgb(self) -> [f32; 3] {
        self.rgb().map(srgb_to_linear)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Which faces of a surface are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// Material assigned to a mesh or line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Material {
    /// Physically based. Used for the Sun and the star backdrop.
    Standard {
        color: Color,
        emissive: Color,
        emissive_intensity: f32,
        texture: Option<String>,
        side: Side,
    },
    /// Specular-shaded textured surface. Used for planets.
    Phong { texture: String },
    /// Diffuse-only textured surface. Used for the Moon.
    Lambert { texture: String },
    /// Unlit, optionally translucent. Used for Saturn's rings.
    Basic {
        texture: String,
        opacity: f32,
        side: Side,
    },
    /// Unlit translucent polyline. Used for orbit paths.
    Line { color: Color, opacity: f32 },
}

impl Material {
    /// Whether the renderer must blend this material.
    pub fn is_transparent(&self) -> bool {
        match self {
            Material::Basic { opacity, .. } | Material::Line { opacity, .. } => *opacity < 1.0,
            _ => false,
        }
    }

    /// Texture path relative to the asset root, if any.
    pub fn texture(&self) -> Option<&str> {
        match self {
            Material::Standard { texture, .. } => texture.as_deref(),
            Material::Phong { texture }
            | Material::Lambert { texture }
            | Material::Basic { texture, .. } => Some(texture.as_str()),
            Material::Line { .. } => None,
        }
    }
}
