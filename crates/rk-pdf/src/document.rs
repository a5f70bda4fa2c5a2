//! PDF assembly: one A4 page per rendered slice.

use crate::error::Result;
use crate::paginate::RenderedPage;
use crate::{MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PX_PER_MM, RASTER_DPI};
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};

const LAYER_NAME: &str = "content";

/// Assemble rendered page slices into a PDF document.
///
/// Each slice becomes a grayscale image anchored at the top-left content
/// margin of its own A4 page.
pub fn build_document(title: &str, pages: &[RenderedPage]) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    for (i, slice) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            doc.get_page(page).get_layer(layer)
        };

        let image = Image::from(ImageXObject {
            width: Px(slice.width as usize),
            height: Px(slice.height as usize),
            color_space: ColorSpace::Greyscale,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: slice.pixels.clone(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        });

        // PDF coordinates grow upward, so the translate pins the image's
        // bottom edge below the top content margin.
        let slice_mm = slice.height as f32 / PX_PER_MM;
        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(MARGIN_MM)),
                translate_y: Some(Mm(PAGE_HEIGHT_MM - MARGIN_MM - slice_mm)),
                dpi: Some(RASTER_DPI),
                ..Default::default()
            },
        );
    }

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_page(width: u32, height: u32) -> RenderedPage {
        RenderedPage {
            width,
            height,
            pixels: vec![255; (width * height) as usize],
        }
    }

    #[test]
    fn test_build_document_emits_pdf_header() {
        let bytes = build_document("doc", &[blank_page(10, 10)]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_multi_page_document_is_larger() {
        let one = build_document("doc", &[blank_page(10, 10)]).unwrap();
        let three = build_document(
            "doc",
            &[blank_page(10, 10), blank_page(10, 10), blank_page(10, 10)],
        )
        .unwrap();
        assert!(three.len() > one.len());
    }
}
