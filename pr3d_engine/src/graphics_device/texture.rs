/// Texture trait and descriptor

/// Pixel format of a 2D texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8_UNORM,
    R8G8B8A8_UNORM,
}

impl TextureFormat {
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8_UNORM => 3,
            TextureFormat::R8G8B8A8_UNORM => 4,
        }
    }
}

/// Descriptor for creating a 2D texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDesc {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    /// Generate a full mip chain after upload
    pub generate_mipmaps: bool,
}

impl TextureDesc {
    /// Expected length of the pixel data, in bytes
    pub fn data_size(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.format.bytes_per_pixel() as u64
    }
}

/// GPU texture resource
pub trait Texture: Send + Sync {
    fn desc(&self) -> &TextureDesc;
}
