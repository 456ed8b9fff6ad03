//! The fixed category catalog.

/// A browsable category. `name` doubles as the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub image_url: &'static str,
}

pub const CATEGORIES: [Category; 8] = [
    Category {
        id: "abstract",
        name: "Abstract",
        image_url: "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=400&q=80",
    },
    Category {
        id: "nature",
        name: "Nature",
        image_url: "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?w=400&q=80",
    },
    Category {
        id: "minimal",
        name: "Minimal",
        image_url: "https://images.unsplash.com/photo-1516617442634-75371039cb3a?w=400&q=80",
    },
    Category {
        id: "urban",
        name: "Urban",
        image_url: "https://images.unsplash.com/photo-1604076913837-52ab5629fba9?w=400&q=80",
    },
    Category {
        id: "space",
        name: "Space",
        image_url: "https://images.unsplash.com/photo-1614850523296-d8c1af93d400?w=400&q=80",
    },
    Category {
        id: "neon",
        name: "Neon",
        image_url: "https://images.unsplash.com/photo-1557682250-33bd709cbe85?w=400&q=80",
    },
    Category {
        id: "geometric",
        name: "Geometric",
        image_url: "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead?w=400&q=80",
    },
    Category {
        id: "gradient",
        name: "Gradient",
        image_url: "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=400&q=80",
    },
];

/// Look a category up by id or (case-insensitively) by name.
pub fn find_category(key: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|c| c.id == key || c.name.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATEGORIES.len());
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category("neon").map(|c| c.name), Some("Neon"));
        assert_eq!(find_category("SPACE").map(|c| c.id), Some("space"));
        assert!(find_category("cats").is_none());
    }
}
