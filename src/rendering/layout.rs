//! Constrained flex layout: resolves the styled tree into positioned boxes
//! and text runs.
//!
//! Containers stack children along a single axis. Sizes are absolute pixels,
//! percentages of the parent content box, or intrinsic (text measure / content
//! sum). Leftover main-axis space goes to `grow` nodes, otherwise to the
//! `justify` offset. Intrinsic text sizes come from a per-family advance
//! estimate; content is authored to fit and overflow is clipped where the tree
//! asks for it.

use crate::tree::{Align, Axis, Dimension, Justify, Node, Style, TextAlign};
use crate::Canvas;

const LINE_HEIGHT: f32 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A container after layout, with resolved paint attributes
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBox {
    pub rect: Rect,
    pub background: Option<String>,
    pub corner_radius: f32,
    pub clip: bool,
    pub children: Vec<Placed>,
}

/// A text leaf after layout, with inherited typography applied
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub rect: Rect,
    pub content: String,
    pub family: Option<String>,
    pub size: f32,
    pub weight: u16,
    pub italic: bool,
    pub color: String,
    pub align: TextAlign,
    pub letter_spacing: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Placed {
    Box(PlacedBox),
    Text(TextRun),
}

/// Inherited typography context carried down the tree
#[derive(Debug, Clone)]
struct TextContext {
    family: Option<String>,
    size: f32,
    weight: u16,
    italic: bool,
    color: String,
}

impl Default for TextContext {
    fn default() -> Self {
        Self {
            family: None,
            size: 16.0,
            weight: 400,
            italic: false,
            color: "#000000".to_string(),
        }
    }
}

impl TextContext {
    fn apply(&self, style: &Style) -> TextContext {
        TextContext {
            family: style.font_family.clone().or_else(|| self.family.clone()),
            size: style.font_size.unwrap_or(self.size),
            weight: style.font_weight.unwrap_or(self.weight),
            italic: style.italic.unwrap_or(self.italic),
            color: style.color.clone().unwrap_or_else(|| self.color.clone()),
        }
    }
}

/// Lay the tree out against the full canvas
pub fn solve(root: &Node, canvas: Canvas) -> Placed {
    let rect = Rect {
        x: 0.0,
        y: 0.0,
        width: canvas.width as f32,
        height: canvas.height as f32,
    };
    layout_node(root, rect, &TextContext::default())
}

fn layout_node(node: &Node, rect: Rect, ctx: &TextContext) -> Placed {
    match node {
        Node::Text { style, content } => {
            let resolved = ctx.apply(style);
            Placed::Text(TextRun {
                rect,
                content: content.clone(),
                family: resolved.family,
                size: resolved.size,
                weight: resolved.weight,
                italic: resolved.italic,
                color: resolved.color,
                align: style.text_align,
                letter_spacing: style.letter_spacing,
            })
        }
        Node::Box { style, children } => {
            let ctx = ctx.apply(style);
            let content = Rect {
                x: rect.x + style.padding.left,
                y: rect.y + style.padding.top,
                width: (rect.width - style.padding.horizontal()).max(0.0),
                height: (rect.height - style.padding.vertical()).max(0.0),
            };
            let (main_avail, cross_avail) = match style.direction {
                Axis::Row => (content.width, content.height),
                Axis::Column => (content.height, content.width),
            };

            // main/cross size per child, before grow distribution
            let sizes: Vec<(f32, f32)> = children
                .iter()
                .map(|child| child_size(child, style, main_avail, cross_avail, &ctx))
                .collect();

            let gaps = style.gap * children.len().saturating_sub(1) as f32;
            let used: f32 = sizes.iter().map(|(main, _)| main).sum::<f32>() + gaps;
            let leftover = (main_avail - used).max(0.0);
            let grow_count = children.iter().filter(|c| c.style().grow).count();
            let extra = if grow_count > 0 { leftover / grow_count as f32 } else { 0.0 };

            let mut cursor = if grow_count > 0 {
                0.0
            } else {
                match style.justify {
                    Justify::Start => 0.0,
                    Justify::Center => leftover / 2.0,
                    Justify::End => leftover,
                }
            };

            let mut placed_children = Vec::with_capacity(children.len());
            for (child, (main, cross)) in children.iter().zip(sizes) {
                let main = if child.style().grow { main + extra } else { main };
                let cross_offset = match style.align {
                    Align::Stretch | Align::Start => 0.0,
                    Align::Center => ((cross_avail - cross) / 2.0).max(0.0),
                };
                let child_rect = match style.direction {
                    Axis::Row => Rect {
                        x: content.x + cursor,
                        y: content.y + cross_offset,
                        width: main,
                        height: cross,
                    },
                    Axis::Column => Rect {
                        x: content.x + cross_offset,
                        y: content.y + cursor,
                        width: cross,
                        height: main,
                    },
                };
                placed_children.push(layout_node(child, child_rect, &ctx));
                cursor += main + style.gap;
            }

            Placed::Box(PlacedBox {
                rect,
                background: style.background.clone(),
                corner_radius: style.corner_radius,
                clip: style.clip,
                children: placed_children,
            })
        }
    }
}

/// Resolve one child's main and cross size against its parent's content box
fn child_size(
    child: &Node,
    parent: &Style,
    main_avail: f32,
    cross_avail: f32,
    ctx: &TextContext,
) -> (f32, f32) {
    let style = child.style();
    let (main_dim, cross_dim) = match parent.direction {
        Axis::Row => (style.width, style.height),
        Axis::Column => (style.height, style.width),
    };
    let (intrinsic_w, intrinsic_h) = measure(child, ctx);
    let (intrinsic_main, intrinsic_cross) = match parent.direction {
        Axis::Row => (intrinsic_w, intrinsic_h),
        Axis::Column => (intrinsic_h, intrinsic_w),
    };

    let main = match main_dim {
        Dimension::Px(v) => v,
        Dimension::Percent(p) => main_avail * p / 100.0,
        Dimension::Auto => intrinsic_main,
    };
    let cross = match cross_dim {
        Dimension::Px(v) => v,
        Dimension::Percent(p) => cross_avail * p / 100.0,
        Dimension::Auto => match child {
            // containers stretch across the parent unless it opts out
            Node::Box { .. } if parent.align == Align::Stretch => cross_avail,
            _ => intrinsic_cross,
        },
    };
    (main, cross)
}

/// Intrinsic size of a node, ignoring percentages (which only resolve against
/// a parent). Absolute dimensions override the content measure.
fn measure(node: &Node, ctx: &TextContext) -> (f32, f32) {
    let style = node.style();
    let resolved = ctx.apply(style);
    let (content_w, content_h) = match node {
        Node::Text { content, .. } => {
            let glyphs = content.chars().count() as f32;
            let advance = resolved.size * advance_ratio(resolved.family.as_deref());
            let width = glyphs * advance + style.letter_spacing * (glyphs - 1.0).max(0.0);
            (width, resolved.size * LINE_HEIGHT)
        }
        Node::Box { children, .. } => {
            let mut main = 0.0f32;
            let mut cross = 0.0f32;
            for child in children {
                let (w, h) = measure(child, &resolved);
                let (m, c) = match style.direction {
                    Axis::Row => (w, h),
                    Axis::Column => (h, w),
                };
                main += m;
                cross = cross.max(c);
            }
            main += style.gap * children.len().saturating_sub(1) as f32;
            match style.direction {
                Axis::Row => (
                    main + style.padding.horizontal(),
                    cross + style.padding.vertical(),
                ),
                Axis::Column => (
                    cross + style.padding.horizontal(),
                    main + style.padding.vertical(),
                ),
            }
        }
    };
    let width = match style.width {
        Dimension::Px(v) => v,
        _ => content_w,
    };
    let height = match style.height {
        Dimension::Px(v) => v,
        _ => content_h,
    };
    (width, height)
}

/// Crude advance-width estimate per family category. Only used for intrinsic
/// text sizing; the rasterizer shapes with real metrics.
fn advance_ratio(family: Option<&str>) -> f32 {
    match family {
        Some(name) if name.to_ascii_lowercase().contains("mono") => 0.6,
        _ => 0.52,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{pct, px, Node};

    fn canvas(width: u32, height: u32) -> Canvas {
        Canvas { width, height }
    }

    fn as_box(placed: &Placed) -> &PlacedBox {
        match placed {
            Placed::Box(b) => b,
            Placed::Text(_) => panic!("expected a box"),
        }
    }

    #[test]
    fn percent_widths_split_the_parent() {
        let tree = Node::row()
            .child(Node::row().width(pct(40.0)))
            .child(Node::row().width(pct(60.0)));
        let root = solve(&tree, canvas(1000, 500));
        let root = as_box(&root);
        let left = as_box(&root.children[0]);
        let right = as_box(&root.children[1]);
        assert_eq!(left.rect.width, 400.0);
        assert_eq!(left.rect.x, 0.0);
        assert_eq!(right.rect.width, 600.0);
        assert_eq!(right.rect.x, 400.0);
        // auto cross size stretches containers
        assert_eq!(left.rect.height, 500.0);
    }

    #[test]
    fn padding_and_gap_shift_children() {
        let tree = Node::column()
            .padding(10.0)
            .gap(5.0)
            .child(Node::row().height(px(20.0)))
            .child(Node::row().height(px(20.0)));
        let root = solve(&tree, canvas(100, 100));
        let root = as_box(&root);
        let first = as_box(&root.children[0]);
        let second = as_box(&root.children[1]);
        assert_eq!(first.rect.y, 10.0);
        assert_eq!(first.rect.width, 80.0);
        assert_eq!(second.rect.y, 35.0);
    }

    #[test]
    fn grow_node_absorbs_leftover_space() {
        let tree = Node::column()
            .child(Node::row().height(px(30.0)))
            .child(Node::spacer())
            .child(Node::row().height(px(50.0)));
        let root = solve(&tree, canvas(200, 200));
        let root = as_box(&root);
        let spacer = as_box(&root.children[1]);
        let last = as_box(&root.children[2]);
        assert_eq!(spacer.rect.height, 120.0);
        assert_eq!(last.rect.y, 150.0);
    }

    #[test]
    fn justify_center_offsets_children() {
        let tree = Node::row()
            .justify(Justify::Center)
            .child(Node::row().width(px(40.0)));
        let root = solve(&tree, canvas(100, 50));
        let child = as_box(&as_box(&root).children[0]);
        assert_eq!(child.rect.x, 30.0);
    }

    #[test]
    fn text_inherits_typography_from_ancestors() {
        let tree = Node::column()
            .font("JetBrains Mono")
            .size(11.0)
            .color("#565F89")
            .child(Node::text("src/").color("#7AA2F7"));
        let root = solve(&tree, canvas(100, 100));
        match &as_box(&root).children[0] {
            Placed::Text(run) => {
                assert_eq!(run.family.as_deref(), Some("JetBrains Mono"));
                assert_eq!(run.size, 11.0);
                assert_eq!(run.color, "#7AA2F7");
            }
            Placed::Box(_) => panic!("expected a text run"),
        }
    }

    #[test]
    fn text_measure_scales_with_content() {
        let short = Node::text("ab").font("JetBrains Mono").size(10.0);
        let long = Node::text("abcd").font("JetBrains Mono").size(10.0);
        let ctx = TextContext::default();
        let (short_w, h) = measure(&short, &ctx);
        let (long_w, _) = measure(&long, &ctx);
        assert_eq!(long_w, short_w * 2.0);
        assert_eq!(h, 10.0 * LINE_HEIGHT);
    }

    #[test]
    fn solve_is_deterministic() {
        let tree = crate::card::compose(&crate::card::CardContent::gitlogue());
        let canvas = canvas(1200, 630);
        assert_eq!(solve(&tree, canvas), solve(&tree, canvas));
    }
}
