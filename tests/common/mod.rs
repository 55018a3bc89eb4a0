// Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::path::Path;

use sh_core::{CubeFace, Cubemap, FaceImage};

/// Every face filled with the same color.
pub fn uniform_cubemap(size: u32, rgb: [u8; 3]) -> Cubemap {
    per_face_cubemap(size, [rgb; 6])
}

/// One solid color per face, in canonical face order.
pub fn per_face_cubemap(size: u32, colors: [[u8; 3]; 6]) -> Cubemap {
    Cubemap::from_faces(colors.map(|c| Some(FaceImage::solid(size, size, c))))
        .expect("six faces present")
}

/// Write `posx.png` ... `negz.png` into `dir`.
pub fn write_cubemap_dir(dir: &Path, size: u32, colors: [[u8; 3]; 6]) {
    for face in CubeFace::ALL {
        let img = image::RgbImage::from_pixel(size, size, image::Rgb(colors[face.index()]));
        img.save(dir.join(format!("{}.png", face.file_stem())))
            .expect("write face png");
    }
}

pub fn sqrt_four_pi() -> f32 {
    (4.0 * std::f32::consts::PI).sqrt()
}
