//! Cube faces, their direction frames, and decoded face images.
//!
//! Faces follow the OpenGL cubemap convention and are always stored in the
//! order +X, -X, +Y, -Y, +Z, -Z. Each face carries a fixed frame that maps a
//! texel's normalized `[-1, 1]` coordinate to a direction from the cube center.

use std::ops::Index;
use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

/// Direction frame of a cube face: `normal + u * axis_x + v * axis_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBasis {
    pub normal: Vec3,
    pub axis_x: Vec3,
    pub axis_y: Vec3,
}

const FACE_BASES: [FaceBasis; 6] = [
    FaceBasis {
        normal: Vec3::X,
        axis_x: Vec3::NEG_Z,
        axis_y: Vec3::Y,
    },
    FaceBasis {
        normal: Vec3::NEG_X,
        axis_x: Vec3::Z,
        axis_y: Vec3::Y,
    },
    FaceBasis {
        normal: Vec3::Y,
        axis_x: Vec3::NEG_X,
        axis_y: Vec3::NEG_Z,
    },
    FaceBasis {
        normal: Vec3::NEG_Y,
        axis_x: Vec3::X,
        axis_y: Vec3::Z,
    },
    FaceBasis {
        normal: Vec3::Z,
        axis_x: Vec3::X,
        axis_y: Vec3::Y,
    },
    FaceBasis {
        normal: Vec3::NEG_Z,
        axis_x: Vec3::NEG_X,
        axis_y: Vec3::Y,
    },
];

// Extensions tried, in order, when loading a face from a directory.
const FACE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Position of the face in the canonical order (also the GPU array layer).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn basis(self) -> &'static FaceBasis {
        &FACE_BASES[self.index()]
    }

    /// File stem used for this face inside a cubemap directory.
    pub fn file_stem(self) -> &'static str {
        match self {
            CubeFace::PosX => "posx",
            CubeFace::NegX => "negx",
            CubeFace::PosY => "posy",
            CubeFace::NegY => "negy",
            CubeFace::PosZ => "posz",
            CubeFace::NegZ => "negz",
        }
    }
}

/// Decoded 8-bit RGB face, row-major, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FaceImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(Error::InvalidInput(format!(
                "face buffer has {} bytes, expected {} for {}x{} RGB",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A face filled with a single color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Pixels expanded to RGBA8 with opaque alpha, for GPU upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
            .collect()
    }

    /// Decode an image file and convert it to RGB8.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| Error::MissingResource {
            resource: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self::new(width, height, rgb.into_raw())
    }
}

/// Six decoded faces in canonical order.
#[derive(Clone, Debug)]
pub struct Cubemap {
    faces: [FaceImage; 6],
}

impl Cubemap {
    /// Assemble a cubemap, failing if any face is absent or the faces differ
    /// in size.
    pub fn from_faces(faces: [Option<FaceImage>; 6]) -> Result<Self> {
        let mut out: Vec<FaceImage> = Vec::with_capacity(6);
        for (face, image) in CubeFace::ALL.into_iter().zip(faces) {
            match image {
                Some(image) => out.push(image),
                None => {
                    return Err(Error::MissingResource {
                        resource: PathBuf::from(face.file_stem()),
                        reason: "face image not provided".into(),
                    })
                }
            }
        }
        let faces: [FaceImage; 6] = out
            .try_into()
            .map_err(|_| Error::InvalidInput("cubemap needs exactly six faces".into()))?;
        let (width, height) = (faces[0].width(), faces[0].height());
        if let Some((face, image)) = CubeFace::ALL
            .into_iter()
            .zip(&faces)
            .find(|(_, img)| img.width() != width || img.height() != height)
        {
            return Err(Error::InvalidInput(format!(
                "cube face {:?} is {}x{}, expected {}x{} like {:?}",
                face,
                image.width(),
                image.height(),
                width,
                height,
                CubeFace::PosX
            )));
        }
        Ok(Self { faces })
    }

    /// Load `posx`, `negx`, ... from `dir`, trying `.jpg`, `.jpeg` and `.png`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut faces: [Option<FaceImage>; 6] = Default::default();
        for face in CubeFace::ALL {
            let path = find_face_file(dir, face).ok_or_else(|| Error::MissingResource {
                resource: dir.join(face.file_stem()),
                reason: format!("no file with extension {:?}", FACE_EXTENSIONS),
            })?;
            log::debug!("loading cube face {:?} from {}", face, path.display());
            faces[face.index()] = Some(FaceImage::open(&path)?);
        }
        Self::from_faces(faces)
    }

    pub fn faces(&self) -> &[FaceImage; 6] {
        &self.faces
    }

    /// Width and height shared by all six faces.
    pub fn face_size(&self) -> (u32, u32) {
        (self.faces[0].width(), self.faces[0].height())
    }

    /// Mean color of a face in `[0, 1]` RGB, over every texel.
    pub fn face_average(&self, face: CubeFace) -> Vec3 {
        let image = &self[face];
        let texels = (image.width() as usize * image.height() as usize).max(1);
        let sum = image
            .pixels()
            .chunks_exact(3)
            .fold(Vec3::ZERO, |acc, p| {
                acc + Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32)
            });
        sum / (texels as f32 * 255.0)
    }
}

impl Index<CubeFace> for Cubemap {
    type Output = FaceImage;

    fn index(&self, face: CubeFace) -> &FaceImage {
        &self.faces[face.index()]
    }
}

fn find_face_file(dir: &Path, face: CubeFace) -> Option<PathBuf> {
    FACE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", face.file_stem(), ext)))
        .find(|p| p.is_file())
}
