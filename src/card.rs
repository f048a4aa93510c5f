//! The fixed card composition: static content in, styled tree out.
//!
//! The card is a two-column 1200x630 layout. The left column carries the
//! project title, tagline and use-case list; the right column simulates a
//! terminal application window with a file tree, an annotated code listing,
//! commit metadata and a terminal transcript. The structure is fixed; only the
//! leaf content is data-driven.

use crate::tree::{pct, px, Align, Edges, Justify, Node, TextAlign};

pub const SERIF_DISPLAY: &str = "Crimson Text";
pub const SERIF_BODY: &str = "Lora";
pub const MONO: &str = "JetBrains Mono";

const CANVAS_BG: &str = "#0C0C0F";
const WINDOW_BG: &str = "#1A1B26";
const PANEL_BG: &str = "#16161E";
const DIVIDER: &str = "#3B4261";
const FOREGROUND: &str = "#E5E5E5";
const MUTED: &str = "#565F89";
const META_FG: &str = "#9AA5CE";
const LINE_NUMBER: &str = "#3B4261";
const BLUE: &str = "#7AA2F7";
const GREEN: &str = "#9ECE6A";
const YELLOW: &str = "#E0AF68";

/// One bullet in the use-case list
#[derive(Debug, Clone, PartialEq)]
pub struct UseCase {
    pub label: String,
    pub note: String,
    pub color: String,
}

/// A single colored line in one of the window panels
#[derive(Debug, Clone, PartialEq)]
pub struct TintedLine {
    pub text: String,
    pub color: String,
    pub indent: bool,
}

impl TintedLine {
    fn new(text: &str, color: &str) -> Self {
        Self { text: text.to_string(), color: color.to_string(), indent: false }
    }

    fn indented(text: &str, color: &str) -> Self {
        Self { text: text.to_string(), color: color.to_string(), indent: true }
    }
}

/// One row of the annotated code listing
#[derive(Debug, Clone, PartialEq)]
pub struct CodeLine {
    pub number: String,
    pub source: String,
    pub color: String,
    /// Diff highlight behind the whole row
    pub background: Option<String>,
}

impl CodeLine {
    fn plain(number: &str, source: &str) -> Self {
        Self {
            number: number.to_string(),
            source: source.to_string(),
            color: FOREGROUND.to_string(),
            background: None,
        }
    }

    fn diff(number: &str, source: &str, color: &str, background: &str) -> Self {
        Self {
            number: number.to_string(),
            source: source.to_string(),
            color: color.to_string(),
            background: Some(background.to_string()),
        }
    }
}

/// Content of the simulated application window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowContent {
    pub tree_entries: Vec<TintedLine>,
    pub code_lines: Vec<CodeLine>,
    pub meta_lines: Vec<TintedLine>,
    pub terminal_lines: Vec<TintedLine>,
}

/// Static configuration for one card
///
/// All fields are literal content: the builder derives nothing at render time,
/// so identical content always yields an identical tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub tagline: Vec<String>,
    pub subcopy: String,
    pub use_cases: Vec<UseCase>,
    pub repo_url: String,
    pub window: WindowContent,
}

impl CardContent {
    /// The gitlogue card shipped by default
    pub fn gitlogue() -> Self {
        let use_case = |label: &str, note: &str, color: &str| UseCase {
            label: label.to_string(),
            note: note.to_string(),
            color: color.to_string(),
        };
        Self {
            title: "gitlogue".to_string(),
            tagline: vec![
                "Cinematic Git commit replay".to_string(),
                "for your terminal".to_string(),
            ],
            subcopy: "Watch your code history come alive.".to_string(),
            use_cases: vec![
                use_case("▸ Screensaver", "— Ambient coding display", BLUE),
                use_case("▸ Education", "— Visualize code evolution", GREEN),
                use_case("▸ Presentations", "— Replay commit histories", YELLOW),
                use_case("▸ Content Creation", "— Record with VHS/asciinema", "#BB9AF7"),
                use_case("▸ Desktop Ricing", "— Living terminal decoration", "#7DCFFF"),
            ],
            repo_url: "github.com/unhappychoice/gitlogue".to_string(),
            window: WindowContent {
                tree_entries: vec![
                    TintedLine::new("src/", BLUE),
                    TintedLine::indented("~ ui.rs +28 -7", GREEN),
                    TintedLine::indented("  animation.rs", MUTED),
                    TintedLine::indented("  config.rs", MUTED),
                    TintedLine::indented("  git.rs", MUTED),
                    TintedLine::new("Cargo.toml", BLUE),
                    TintedLine::new("README.md", BLUE),
                ],
                code_lines: vec![
                    CodeLine::plain("174", "    "),
                    CodeLine::plain("175", "    pub fn new(config: Config) -> Self {"),
                    CodeLine::plain("176", "        Self { engine: Engine::new(config) }"),
                    CodeLine::plain("177", "    }"),
                    CodeLine::plain("178", "    "),
                    CodeLine::diff(
                        "179",
                        "-   pub fn load(&mut self, meta: Metadata) {",
                        "#E06C75",
                        "#3F1F1F",
                    ),
                    CodeLine::diff(
                        "180",
                        "+   pub fn load(&mut self, meta: Metadata) -> Result<()> {",
                        "#89E051",
                        "#1F3F1F",
                    ),
                    CodeLine::plain("181", "        self.metadata = Some(meta.clone());"),
                    CodeLine::plain("182", "        self.engine.load(meta)?;"),
                    CodeLine::diff("183", "+       self.validate_state()?;", "#89E051", "#1F3F1F"),
                    CodeLine::plain("184", "        Ok(())"),
                    CodeLine::plain("185", "    }"),
                    CodeLine::plain("186", "    "),
                    CodeLine::plain("187", "    pub fn render(&mut self) -> Result<()> {"),
                ],
                meta_lines: vec![
                    TintedLine::new("hash: f16f674", YELLOW),
                    TintedLine::new("author: Yuji Ueki", META_FG),
                    TintedLine::new("date: 2025-11-09", MUTED),
                    TintedLine::new("      16:51:33", MUTED),
                    TintedLine::new("feat: implement", BLUE),
                    TintedLine::new("input handling", BLUE),
                ],
                terminal_lines: vec![
                    TintedLine::new("~ time-travel 2025-11-09 16:51:33", GREEN),
                    TintedLine::new("Compressing digital dreams: 100%", META_FG),
                    TintedLine::new("Signing with invisible ink: done.", META_FG),
                    TintedLine::new("3a62bb4..3a62bb4  SUCCESS", GREEN),
                    TintedLine::new("Arrived at 2025-11-09 16:51:33", BLUE),
                ],
            },
        }
    }
}

/// Build the complete card tree from static content.
///
/// Pure and deterministic: no randomness, no clock reads, nothing derived from
/// the environment. Two calls with equal content produce equal trees.
pub fn compose(content: &CardContent) -> Node {
    Node::row()
        .width(pct(100.0))
        .height(pct(100.0))
        .background(CANVAS_BG)
        .child(info_panel(content))
        .child(window_panel(&content.window))
}

/// Left column: title, tagline, use cases, repository URL
fn info_panel(content: &CardContent) -> Node {
    let mut panel = Node::column()
        .width(pct(40.0))
        .height(pct(100.0))
        .padding(40.0)
        .gap(30.0)
        .align(Align::Start)
        .child(
            Node::text(&content.title)
                .font(SERIF_DISPLAY)
                .size(76.0)
                .weight(700)
                .letter_spacing(-1.5)
                .color(FOREGROUND),
        );

    let tagline = content.tagline.iter().fold(
        Node::column().gap(6.0).font(SERIF_BODY).size(24.0).color("#A0A0A0"),
        |column, line| column.child(Node::text(line)),
    );
    panel = panel.child(tagline).child(
        Node::text(&content.subcopy)
            .font(SERIF_BODY)
            .size(18.0)
            .italic()
            .color("#61AFEF"),
    );

    let use_cases = content.use_cases.iter().fold(
        Node::column().gap(6.0).font(SERIF_BODY).size(16.0),
        |column, case| {
            column.child(
                Node::row()
                    .gap(6.0)
                    .child(Node::text(&case.label).color(&*case.color))
                    .child(Node::text(&case.note).color(MUTED)),
            )
        },
    );
    panel
        .child(use_cases)
        .child(Node::spacer())
        .child(Node::text(&content.repo_url).font(SERIF_BODY).size(16.0).color("#4B5263"))
}

/// Right column: padded wrapper centering the simulated application window
fn window_panel(window: &WindowContent) -> Node {
    Node::row()
        .width(pct(60.0))
        .height(pct(100.0))
        .padding(30.0)
        .justify(Justify::Center)
        .align(Align::Center)
        .background(CANVAS_BG)
        .child(
            Node::column()
                .width(pct(100.0))
                .height(pct(100.0))
                .background(WINDOW_BG)
                .rounded(8.0)
                .clip()
                .child(
                    Node::row()
                        .height(pct(75.0))
                        .child(file_tree_pane(&window.tree_entries))
                        .child(editor_pane(&window.code_lines)),
                )
                .child(Node::row().height(px(1.0)).background(DIVIDER))
                .child(
                    Node::row()
                        .grow()
                        .child(commit_meta_pane(&window.meta_lines))
                        .child(terminal_pane(&window.terminal_lines)),
                ),
        )
}

fn file_tree_pane(entries: &[TintedLine]) -> Node {
    entries.iter().fold(
        Node::column()
            .width(pct(25.0))
            .background(PANEL_BG)
            .padding(15.0)
            .gap(4.0)
            .font(MONO)
            .size(11.0)
            .color(MUTED),
        |pane, entry| pane.child(tinted_text(entry)),
    )
}

fn editor_pane(lines: &[CodeLine]) -> Node {
    lines.iter().fold(
        Node::column()
            .width(pct(75.0))
            .background(WINDOW_BG)
            .padding(15.0)
            .gap(1.0)
            .font(MONO)
            .size(11.0),
        |pane, line| pane.child(code_row(line)),
    )
}

fn code_row(line: &CodeLine) -> Node {
    let mut row = Node::row()
        .padding_edges(Edges { top: 0.0, right: 4.0, bottom: 0.0, left: 4.0 })
        .child(
            Node::text(&line.number)
                .width(px(30.0))
                .size(10.0)
                .text_align(TextAlign::Right)
                .color(LINE_NUMBER),
        )
        .child(Node::row().width(px(12.0)))
        .child(Node::text(&line.source).color(&*line.color));
    if let Some(background) = &line.background {
        row = row.background(background);
    }
    row
}

fn commit_meta_pane(lines: &[TintedLine]) -> Node {
    lines.iter().fold(
        Node::column()
            .width(pct(25.0))
            .background(PANEL_BG)
            .padding(15.0)
            .gap(6.0)
            .font(MONO)
            .size(10.0)
            .color(META_FG),
        |pane, line| pane.child(tinted_text(line)),
    )
}

fn terminal_pane(lines: &[TintedLine]) -> Node {
    lines.iter().fold(
        Node::column()
            .width(pct(75.0))
            .background(WINDOW_BG)
            .padding(15.0)
            .gap(3.0)
            .font(MONO)
            .size(10.0)
            .color(MUTED),
        |pane, line| pane.child(tinted_text(line)),
    )
}

fn tinted_text(line: &TintedLine) -> Node {
    let text = Node::text(&line.text).color(&*line.color);
    if line.indent {
        Node::row().padding_edges(Edges { left: 10.0, ..Edges::default() }).child(text)
    } else {
        text
    }
}
