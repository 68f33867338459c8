/// One annotation row: an axis-aligned box in pixel coordinates of its
/// owning image, origin top-left, y growing downward. Coordinates are
/// taken as-is from the label file and may fall outside the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox {
    pub class_id: i64,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}
