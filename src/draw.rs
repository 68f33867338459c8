use image::{Rgb, RgbImage};

/// Draw a rectangle outline onto the buffer, clipped to image bounds.
///
/// Each edge is written `thickness` pixels deep, growing inward from its
/// side: top rows `y..y+thickness`, bottom rows down from `y+height-1`,
/// left columns `x..x+thickness`, right columns down from `x+width-1`.
/// Out-of-range coordinates are dropped, so a box may straddle or sit
/// entirely outside the image. An edge whose span is empty (zero or
/// negative extent in that dimension) writes nothing, so a box with one
/// zero extent still draws its other pair of edges as a thin line and a
/// box with both extents non-positive writes nothing at all.
pub fn draw_box_outline(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    color: Rgb<u8>,
    thickness: u32,
) {
    let thickness = thickness as i64;

    // Top and bottom edges span the full width.
    for t in 0..thickness {
        for col in x..x + width {
            put_pixel_clipped(img, col, y + t, color);
            put_pixel_clipped(img, col, y + height - t - 1, color);
        }
    }

    // Left and right edges span the full height.
    for t in 0..thickness {
        for row in y..y + height {
            put_pixel_clipped(img, x + t, row, color);
            put_pixel_clipped(img, x + width - t - 1, row, color);
        }
    }
}

fn put_pixel_clipped(img: &mut RgbImage, col: i64, row: i64, color: Rgb<u8>) {
    if col >= 0 && col < img.width() as i64 && row >= 0 && row < img.height() as i64 {
        img.put_pixel(col as u32, row as u32, color);
    }
}
