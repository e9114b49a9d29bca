// Opaque sprite handle system

/// Opaque handle to a drawable image resource
///
/// The runtime never touches raw image bytes; the host loader decodes
/// images and associates them with the same path-derived id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub(crate) u64);

impl SpriteId {
    /// Create a sprite id from a string path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Create a sprite id from a raw u64
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_id_from_path() {
        let id1 = SpriteId::from_path("player/down.png");
        let id2 = SpriteId::from_path("player/down.png");
        let id3 = SpriteId::from_path("player/up.png");

        assert_eq!(id1, id2, "Same paths should produce same IDs");
        assert_ne!(id1, id3, "Different paths should produce different IDs");
    }

    #[test]
    fn test_sprite_id_roundtrip() {
        let id = SpriteId::from_u64(12345);
        assert_eq!(id.as_u64(), 12345);
    }
}
