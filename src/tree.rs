//! Styled layout tree: a tagged box/text node with a typed style record.
//!
//! The tree is built once through the builder API below, stays immutable, and
//! is discarded after the vector document has been produced. Containers lay
//! their children out along a single axis; text leaves carry literal content.

/// Size of a node along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Derived from content (text measure) or stretched by the parent
    Auto,
    /// Absolute pixels
    Px(f32),
    /// Percentage of the parent's content box (0.0..=100.0)
    Percent(f32),
}

/// Shorthand for [`Dimension::Px`]
pub fn px(value: f32) -> Dimension {
    Dimension::Px(value)
}

/// Shorthand for [`Dimension::Percent`]
pub fn pct(value: f32) -> Dimension {
    Dimension::Percent(value)
}

/// Main axis of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// Distribution of leftover space along the main axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
}

/// Placement of children along the cross axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Containers fill the cross axis, text keeps its measured size
    Stretch,
    Start,
    Center,
}

/// Horizontal alignment of a text run inside its assigned box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// Per-side box padding
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub fn uniform(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Layout and typography attributes of a single node
///
/// Typography fields (`color`, `font_family`, `font_size`, `font_weight`,
/// `italic`) are inheritable: `None` means "take the nearest ancestor value".
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub width: Dimension,
    pub height: Dimension,
    pub direction: Axis,
    pub padding: Edges,
    pub gap: f32,
    /// Absorb leftover space on the parent's main axis
    pub grow: bool,
    pub justify: Justify,
    pub align: Align,
    pub background: Option<String>,
    pub corner_radius: f32,
    /// Overflow hidden: children are clipped to this node's border box
    pub clip: bool,
    pub text_align: TextAlign,
    pub letter_spacing: f32,
    pub color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub italic: Option<bool>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
            direction: Axis::Row,
            padding: Edges::default(),
            gap: 0.0,
            grow: false,
            justify: Justify::Start,
            align: Align::Stretch,
            background: None,
            corner_radius: 0.0,
            clip: false,
            text_align: TextAlign::Left,
            letter_spacing: 0.0,
            color: None,
            font_family: None,
            font_size: None,
            font_weight: None,
            italic: None,
        }
    }
}

/// A node in the layout tree: either a container or a text leaf
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Box { style: Style, children: Vec<Node> },
    Text { style: Style, content: String },
}

impl Node {
    /// Container laying children out horizontally
    pub fn row() -> Node {
        Node::Box { style: Style::default(), children: Vec::new() }
    }

    /// Container laying children out vertically
    pub fn column() -> Node {
        let style = Style { direction: Axis::Column, ..Style::default() };
        Node::Box { style, children: Vec::new() }
    }

    /// Text leaf with literal content
    pub fn text(content: impl Into<String>) -> Node {
        Node::Text { style: Style::default(), content: content.into() }
    }

    /// Empty container that absorbs leftover space on the parent's main axis
    pub fn spacer() -> Node {
        let style = Style { grow: true, ..Style::default() };
        Node::Box { style, children: Vec::new() }
    }

    pub fn style(&self) -> &Style {
        match self {
            Node::Box { style, .. } | Node::Text { style, .. } => style,
        }
    }

    fn style_mut(&mut self) -> &mut Style {
        match self {
            Node::Box { style, .. } | Node::Text { style, .. } => style,
        }
    }

    /// Total number of nodes in this subtree, the root included
    pub fn node_count(&self) -> usize {
        match self {
            Node::Text { .. } => 1,
            Node::Box { children, .. } => {
                1 + children.iter().map(Node::node_count).sum::<usize>()
            }
        }
    }

    // --- builder-style setters, consuming self ---

    pub fn width(mut self, dim: Dimension) -> Self {
        self.style_mut().width = dim;
        self
    }

    pub fn height(mut self, dim: Dimension) -> Self {
        self.style_mut().height = dim;
        self
    }

    pub fn padding(mut self, value: f32) -> Self {
        self.style_mut().padding = Edges::uniform(value);
        self
    }

    pub fn padding_edges(mut self, edges: Edges) -> Self {
        self.style_mut().padding = edges;
        self
    }

    pub fn gap(mut self, value: f32) -> Self {
        self.style_mut().gap = value;
        self
    }

    pub fn grow(mut self) -> Self {
        self.style_mut().grow = true;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.style_mut().justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.style_mut().align = align;
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.style_mut().background = Some(color.into());
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.style_mut().corner_radius = radius;
        self
    }

    pub fn clip(mut self) -> Self {
        self.style_mut().clip = true;
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.style_mut().text_align = align;
        self
    }

    pub fn letter_spacing(mut self, value: f32) -> Self {
        self.style_mut().letter_spacing = value;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.style_mut().color = Some(color.into());
        self
    }

    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.style_mut().font_family = Some(family.into());
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.style_mut().font_size = Some(size);
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.style_mut().font_weight = Some(weight);
        self
    }

    pub fn italic(mut self) -> Self {
        self.style_mut().italic = Some(true);
        self
    }

    /// Append one child. Panics if called on a text leaf: leaves carry
    /// literal content and never children.
    pub fn child(mut self, node: Node) -> Self {
        match &mut self {
            Node::Box { children, .. } => children.push(node),
            Node::Text { .. } => panic!("text leaves cannot have children"),
        }
        self
    }

    /// Append several children
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        for node in nodes {
            self = self.child(node);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_style_fields() {
        let node = Node::column()
            .width(pct(40.0))
            .padding(40.0)
            .gap(30.0)
            .background("#0C0C0F");
        let style = node.style();
        assert_eq!(style.width, Dimension::Percent(40.0));
        assert_eq!(style.direction, Axis::Column);
        assert_eq!(style.padding.left, 40.0);
        assert_eq!(style.gap, 30.0);
        assert_eq!(style.background.as_deref(), Some("#0C0C0F"));
    }

    #[test]
    fn text_leaf_has_content_and_no_children() {
        let node = Node::text("hello").font("Lora").size(24.0);
        match &node {
            Node::Text { content, style } => {
                assert_eq!(content, "hello");
                assert_eq!(style.font_family.as_deref(), Some("Lora"));
            }
            Node::Box { .. } => panic!("expected a text leaf"),
        }
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    #[should_panic(expected = "text leaves cannot have children")]
    fn text_leaf_rejects_children() {
        let _ = Node::text("leaf").child(Node::row());
    }

    #[test]
    fn node_count_walks_the_whole_tree() {
        let tree = Node::row()
            .child(Node::column().child(Node::text("a")).child(Node::text("b")))
            .child(Node::spacer());
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn identical_builders_produce_equal_trees() {
        let build = || {
            Node::row()
                .width(px(100.0))
                .child(Node::text("x").color("#FFFFFF"))
                .child(Node::spacer())
        };
        assert_eq!(build(), build());
    }
}
