//! Simple line-based CLI output.

use std::io::{self, Write};

use crate::models::{Category, WallpaperItem};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Title followed by a rule.
///
/// ```text
/// Results for "neon" (128 total)
/// ════════════════════════════════════════════════════════════
/// ```
pub fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "═".repeat(LINE_WIDTH))
}

/// One wallpaper per block.
///
/// ```text
///   ♥ Misty Forest  [Nature]
///     id:       abc123
///     by:       Ansel
///     image:    https://images.unsplash.com/...
///     download: https://images.unsplash.com/...
/// ```
pub fn write_item<W: Write>(out: &mut W, item: &WallpaperItem) -> io::Result<()> {
    let heart = if item.is_favorite { "♥" } else { "·" };
    match &item.category {
        Some(category) => writeln!(out, "  {} {}  [{}]", heart, item.title, category)?,
        None => writeln!(out, "  {} {}", heart, item.title)?,
    }
    writeln!(out, "    id:       {}", item.id)?;
    if let Some(author) = &item.author {
        writeln!(out, "    by:       {}", author)?;
    }
    writeln!(out, "    image:    {}", item.image_url)?;
    if let Some(download) = &item.download_url {
        writeln!(out, "    download: {}", download)?;
    }
    Ok(())
}

pub fn write_items<W: Write>(out: &mut W, items: &[WallpaperItem]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "  (no wallpapers)");
    }
    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

pub fn write_categories<W: Write>(out: &mut W, categories: &[Category]) -> io::Result<()> {
    for category in categories {
        writeln!(out, "  {:<10} {:<10} {}", category.id, category.name, category.image_url)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATEGORIES;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_item() {
        let item = WallpaperItem {
            id: "abc".to_string(),
            image_url: "https://img/abc".to_string(),
            title: "Misty Forest".to_string(),
            is_favorite: true,
            category: Some("Nature".to_string()),
            author: Some("Ansel".to_string()),
            download_url: None,
        };
        let text = render(|out| write_item(out, &item));
        assert!(text.starts_with("  ♥ Misty Forest  [Nature]\n"));
        assert!(text.contains("id:       abc"));
        assert!(text.contains("by:       Ansel"));
        assert!(!text.contains("download"));
    }

    #[test]
    fn test_write_empty_items() {
        assert_eq!(render(|out| write_items(out, &[])), "  (no wallpapers)\n");
    }

    #[test]
    fn test_write_categories_lists_all() {
        let text = render(|out| write_categories(out, &CATEGORIES));
        assert_eq!(text.lines().count(), CATEGORIES.len());
        assert!(text.contains("gradient"));
    }
}
