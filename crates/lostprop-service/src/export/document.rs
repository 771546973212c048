//! Layout-independent document model.

/// Horizontal alignment of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One layout block. Blocks are placed top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A single line of text.
    Text {
        text: String,
        size: f32,
        bold: bool,
        align: Align,
    },
    /// A `label : value` row with the values aligned in one column.
    Field { label: String, value: String },
    /// A grid with a header row. `widths` are fractions of the text width.
    Table {
        headers: Vec<String>,
        widths: Vec<f32>,
        rows: Vec<Vec<String>>,
        /// Shown in a single row when `rows` is empty.
        empty_text: String,
    },
    /// A horizontal line across the text width.
    Rule { thickness: f32 },
    /// Vertical gap in points.
    Space(f32),
    /// Start a new page.
    PageBreak,
}

/// An ordered list of blocks with a title for the PDF metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn text(&mut self, text: impl Into<String>, size: f32, bold: bool, align: Align) {
        self.blocks.push(Block::Text {
            text: text.into(),
            size,
            bold,
            align,
        });
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.space(6.0);
        self.text(text, 11.0, true, Align::Left);
        self.space(2.0);
    }

    pub fn field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.blocks.push(Block::Field {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn table(
        &mut self,
        headers: &[&str],
        widths: &[f32],
        rows: Vec<Vec<String>>,
        empty_text: &str,
    ) {
        self.blocks.push(Block::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            widths: widths.to_vec(),
            rows,
            empty_text: empty_text.to_string(),
        });
    }

    pub fn rule(&mut self, thickness: f32) {
        self.blocks.push(Block::Rule { thickness });
    }

    pub fn space(&mut self, points: f32) {
        self.blocks.push(Block::Space(points));
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// Every piece of text in reading order.
    pub fn plain_text(&self) -> Vec<String> {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Text { text, .. } => out.push(text.clone()),
                Block::Field { label, value } => out.push(format!("{label}: {value}")),
                Block::Table {
                    headers,
                    rows,
                    empty_text,
                    ..
                } => {
                    out.push(headers.join(" | "));
                    if rows.is_empty() {
                        out.push(empty_text.clone());
                    }
                    out.extend(rows.iter().map(|r| r.join(" | ")));
                }
                Block::Rule { .. } | Block::Space(_) | Block::PageBreak => {}
            }
        }
        out
    }
}
