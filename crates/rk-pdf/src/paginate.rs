//! Page slicing: cut the rendered strip into page-height pieces.

use crate::raster::RasterImage;

/// One page worth of grayscale rows.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Slice a strip into pages of at most `page_height_px` rows.
///
/// Every source row lands on exactly one page; the last page keeps whatever
/// remainder is left. An empty strip still yields one blank page so the
/// output document is never page-less.
pub fn paginate(image: &RasterImage, page_height_px: u32) -> Vec<RenderedPage> {
    let page_height = page_height_px.max(1);
    let row_bytes = image.width as usize;

    let mut pages = Vec::new();
    let mut top = 0u32;
    while top < image.height {
        let slice_height = page_height.min(image.height - top);
        let start = top as usize * row_bytes;
        let end = (top + slice_height) as usize * row_bytes;
        pages.push(RenderedPage {
            width: image.width,
            height: slice_height,
            pixels: image.pixels[start..end].to_vec(),
        });
        top += slice_height;
    }

    if pages.is_empty() {
        pages.push(RenderedPage {
            width: image.width.max(1),
            height: 1,
            pixels: vec![255; image.width.max(1) as usize],
        });
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(width: u32, height: u32) -> RasterImage {
        // Each row is filled with its own index so slices are traceable.
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            pixels.extend(std::iter::repeat((row % 256) as u8).take(width as usize));
        }
        RasterImage {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_single_page_when_strip_fits() {
        let pages = paginate(&strip(10, 50), 100);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].height, 50);
    }

    #[test]
    fn test_exact_multiple_splits_evenly() {
        let pages = paginate(&strip(10, 300), 100);
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p.height == 100));
    }

    #[test]
    fn test_remainder_goes_to_last_page() {
        let pages = paginate(&strip(10, 250), 100);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].height, 50);
    }

    #[test]
    fn test_no_rows_dropped_or_duplicated() {
        let image = strip(7, 233);
        let pages = paginate(&image, 90);

        let total: u32 = pages.iter().map(|p| p.height).sum();
        assert_eq!(total, image.height);

        let mut rejoined = Vec::new();
        for page in &pages {
            rejoined.extend_from_slice(&page.pixels);
        }
        assert_eq!(rejoined, image.pixels);
    }

    #[test]
    fn test_empty_strip_yields_blank_page() {
        let image = RasterImage {
            width: 10,
            height: 0,
            pixels: Vec::new(),
        };
        let pages = paginate(&image, 100);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].pixels.iter().all(|&p| p == 255));
    }
}
