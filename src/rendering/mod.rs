//! Render orchestration: styled tree + resolved fonts to a finished bitmap.
//!
//! The pipeline is validate, lay out, paint, rasterize — strictly in that
//! order, each step fatal on failure. A missing font aborts before any vector
//! or raster work so no partial output can ever reach the writer.

pub mod layout;
pub mod paint;
pub mod raster;

use crate::fonts::FontSet;
use crate::tree::Node;
use crate::{Canvas, Error, Result};

/// Raster output of one render pass
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Render the tree against the canvas using the resolved font set
pub fn render_card(root: &Node, fonts: &FontSet, canvas: Canvas) -> Result<Bitmap> {
    for family in referenced_families(root) {
        if !fonts.contains_family(&family) {
            return Err(Error::MissingFont(family));
        }
    }

    let placed = layout::solve(root, canvas);
    let svg = paint::to_svg(&placed, canvas);
    log::debug!("vector document is {} bytes", svg.len());
    raster::rasterize(&svg, fonts, canvas)
}

/// Font families referenced by text leaves, inheritance applied, in first-use
/// order. Leaves with no family anywhere in scope fall back to the
/// rasterizer's default and are not listed.
pub fn referenced_families(root: &Node) -> Vec<String> {
    let mut families = Vec::new();
    collect_families(root, None, &mut families);
    families
}

fn collect_families(node: &Node, inherited: Option<&str>, out: &mut Vec<String>) {
    let family = node.style().font_family.as_deref().or(inherited);
    match node {
        Node::Text { .. } => {
            if let Some(family) = family {
                if !out.iter().any(|f| f == family) {
                    out.push(family.to_string());
                }
            }
        }
        Node::Box { children, .. } => {
            for child in children {
                collect_families(child, family, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontStyle, ResolvedFont};
    use crate::tree::Node;

    fn font(family: &str) -> ResolvedFont {
        ResolvedFont {
            family: family.to_string(),
            weight: 400,
            style: FontStyle::Normal,
            data: Vec::new(),
        }
    }

    #[test]
    fn referenced_families_dedupes_in_first_use_order() {
        let tree = Node::column()
            .child(Node::text("a").font("Lora"))
            .child(Node::text("b").font("Crimson Text"))
            .child(Node::text("c").font("Lora"));
        assert_eq!(referenced_families(&tree), vec!["Lora", "Crimson Text"]);
    }

    #[test]
    fn inherited_families_count_as_references() {
        let tree = Node::column().font("JetBrains Mono").child(Node::text("x"));
        assert_eq!(referenced_families(&tree), vec!["JetBrains Mono"]);
    }

    #[test]
    fn unreferenced_container_family_is_ignored() {
        // family on a container with no text leaves never reaches shaping
        let tree = Node::column().font("Lora").child(Node::row());
        assert!(referenced_families(&tree).is_empty());
    }

    #[test]
    fn missing_font_aborts_the_render() {
        let tree = Node::row().child(Node::text("hi").font("Lora"));
        let canvas = Canvas { width: 50, height: 50 };
        let err = render_card(&tree, &FontSet::new(), canvas).unwrap_err();
        match err {
            Error::MissingFont(family) => assert_eq!(family, "Lora"),
            other => panic!("expected MissingFont, got {:?}", other),
        }
    }

    #[test]
    fn render_succeeds_when_references_are_covered() {
        let tree = Node::row()
            .background("#0C0C0F")
            .child(Node::text("hi").font("Lora"));
        let mut fonts = FontSet::new();
        fonts.insert(font("Lora")).unwrap();
        let canvas = Canvas { width: 50, height: 50 };
        let bitmap = render_card(&tree, &fonts, canvas).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (50, 50));
        assert!(!bitmap.png_data.is_empty());
    }
}
