use crate::refs::{ObjectReferences, RefType};
use image::{ColorType, DynamicImage, GrayImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Pdf};

/// A raster image that can be placed on a [Canvas](crate::Canvas). Greyscale
/// images are embedded as `DeviceGray`, everything else as `DeviceRGB`; alpha
/// is discarded.
pub struct Image {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
    /// Whether viewers may smooth the image when scaling it. Off for QR codes,
    /// whose modules must stay crisp.
    pub interpolate: bool,
}

struct EncodeOutput {
    bytes: Vec<u8>,
    grey: bool,
}

impl Image {
    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width();
        let height = image.height();
        Image {
            image,
            width,
            height,
            interpolate: true,
        }
    }

    /// Wrap a 1-channel bitmap with interpolation disabled
    pub fn new_bitmap(bitmap: GrayImage) -> Image {
        Image {
            interpolate: false,
            ..Self::new_raster(DynamicImage::ImageLuma8(bitmap))
        }
    }

    fn encode(&self) -> EncodeOutput {
        let level = CompressionLevel::DefaultLevel as u8;
        match self.image.color() {
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => EncodeOutput {
                bytes: compress_to_vec_zlib(self.image.to_luma8().as_raw(), level),
                grey: true,
            },
            _ => EncodeOutput {
                bytes: compress_to_vec_zlib(self.image.to_rgb8().as_raw(), level),
                grey: false,
            },
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(self.width as i32);
        image.height(self.height as i32);
        if encoded.grey {
            image.color_space().device_gray();
        } else {
            image.color_space().device_rgb();
        }
        image.bits_per_component(8);
        image.interpolate(self.interpolate);
    }
}
