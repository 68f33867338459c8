use image::Rgb;

/// Color used when a label references a class id the registry does not
/// know. The box still renders so the item is not lost.
const FALLBACK_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Immutable class id -> (color, name) table for the dataset classes.
/// Built once at startup and handed to the annotator.
#[derive(Debug, Clone)]
pub struct ClassRegistry {
    entries: &'static [(i64, Rgb<u8>, &'static str)],
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self {
            entries: &[
                (0, Rgb([255, 0, 0]), "person"),
                (1, Rgb([0, 255, 0]), "bag"),
                (2, Rgb([0, 0, 255]), "car"),
                (3, Rgb([255, 255, 0]), "bicycle"),
                (4, Rgb([255, 0, 255]), "dog"),
            ],
        }
    }

    pub fn color_for(&self, class_id: i64) -> Rgb<u8> {
        self.entries
            .iter()
            .find(|(id, _, _)| *id == class_id)
            .map(|(_, color, _)| *color)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn name_for(&self, class_id: i64) -> &'static str {
        self.entries
            .iter()
            .find(|(id, _, _)| *id == class_id)
            .map(|(_, _, name)| *name)
            .unwrap_or("")
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classes_resolve() {
        let registry = ClassRegistry::new();

        assert_eq!(registry.color_for(0), Rgb([255, 0, 0]));
        assert_eq!(registry.name_for(0), "person");
        assert_eq!(registry.color_for(4), Rgb([255, 0, 255]));
        assert_eq!(registry.name_for(4), "dog");
    }

    #[test]
    fn unknown_class_falls_back() {
        let registry = ClassRegistry::new();

        assert_eq!(registry.color_for(99), Rgb([0, 0, 0]));
        assert_eq!(registry.name_for(99), "");
    }
}
