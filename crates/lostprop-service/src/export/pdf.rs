//! A4 PDF rendering of a [`Document`] with `pdf-writer`.
//!
//! Only the standard Helvetica faces are used, so nothing is embedded.
//! Text is written in WinAnsi; characters outside Latin-1 print as `?`.
//! Widths are estimated from an average glyph width, which is enough for
//! wrapping form text and table cells.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use super::document::{Align, Block, Document};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const LABEL_WIDTH: f32 = 150.0;
const BODY_SIZE: f32 = 10.0;
const TABLE_SIZE: f32 = 9.0;
const CELL_PAD: f32 = 4.0;
const LEADING: f32 = 1.35;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Rendered PDF bytes.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Lay out and serialize `doc`.
pub fn render(doc: &Document) -> RenderedPdf {
    let mut layout = Layout::new();
    for block in &doc.blocks {
        layout.place(block);
    }
    let pages = layout.finish();
    let page_count = pages.len();

    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };
    let catalog_id = alloc();
    let tree_id = alloc();
    let info_id = alloc();
    let regular_id = alloc();
    let bold_id = alloc();
    let page_ids: Vec<(Ref, Ref)> = (0..page_count).map(|_| (alloc(), alloc())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page, _)| *page))
        .count(page_count as i32);
    pdf.document_info(info_id)
        .title(TextStr(&doc.title))
        .producer(TextStr("lostprop-portal"));
    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for ((page_id, content_id), content) in page_ids.iter().zip(pages) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(tree_id);
        page.contents(*content_id);
        page.resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        page.finish();
        pdf.stream(*content_id, &content.finish());
    }

    RenderedPdf {
        bytes: pdf.finish(),
        pages: page_count,
    }
}

/// Top-to-bottom cursor over a sequence of pages.
struct Layout {
    done: Vec<Content>,
    current: Content,
    y: f32,
    /// Whether anything was drawn on the current page.
    dirty: bool,
}

impl Layout {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Content::new(),
            y: PAGE_HEIGHT - MARGIN,
            dirty: false,
        }
    }

    fn finish(mut self) -> Vec<Content> {
        if self.dirty || self.done.is_empty() {
            self.done.push(self.current);
        }
        self.done
    }

    fn new_page(&mut self) {
        let full = std::mem::replace(&mut self.current, Content::new());
        self.done.push(full);
        self.y = PAGE_HEIGHT - MARGIN;
        self.dirty = false;
    }

    /// Start a new page unless `height` still fits.
    fn ensure(&mut self, height: f32) {
        if self.dirty && self.y - height < MARGIN {
            self.new_page();
        }
    }

    fn place(&mut self, block: &Block) {
        match block {
            Block::Text {
                text,
                size,
                bold,
                align,
            } => {
                for line in wrap(text, TEXT_WIDTH, *size) {
                    let height = size * LEADING;
                    self.ensure(height);
                    let x = match align {
                        Align::Left => MARGIN,
                        Align::Center => MARGIN + (TEXT_WIDTH - text_width(&line, *size)) / 2.0,
                        Align::Right => MARGIN + TEXT_WIDTH - text_width(&line, *size),
                    };
                    self.y -= height;
                    self.show(x, self.y, &line, *size, *bold);
                }
            }
            Block::Field { label, value } => {
                let lines = wrap(value, TEXT_WIDTH - LABEL_WIDTH - 8.0, BODY_SIZE);
                let height = BODY_SIZE * LEADING;
                self.ensure(height * lines.len() as f32);
                self.y -= height;
                self.show(MARGIN, self.y, label, BODY_SIZE, false);
                self.show(MARGIN + LABEL_WIDTH, self.y, ":", BODY_SIZE, false);
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        self.y -= height;
                    }
                    self.show(MARGIN + LABEL_WIDTH + 8.0, self.y, line, BODY_SIZE, false);
                }
            }
            Block::Table {
                headers,
                widths,
                rows,
                empty_text,
            } => self.table(headers, widths, rows, empty_text),
            Block::Rule { thickness } => {
                self.ensure(thickness + 2.0);
                self.y -= thickness;
                self.current
                    .set_line_width(*thickness)
                    .move_to(MARGIN, self.y)
                    .line_to(MARGIN + TEXT_WIDTH, self.y)
                    .stroke();
                self.dirty = true;
            }
            Block::Space(points) => {
                self.y -= points;
            }
            Block::PageBreak => {
                if self.dirty {
                    self.new_page();
                }
            }
        }
    }

    fn table(&mut self, headers: &[String], widths: &[f32], rows: &[Vec<String>], empty: &str) {
        let columns: Vec<f32> = widths.iter().map(|w| w * TEXT_WIDTH).collect();

        self.row(headers, &columns, true);
        if rows.is_empty() {
            self.row(&[empty.to_string()], &[TEXT_WIDTH], false);
            return;
        }
        for cells in rows {
            let height = row_height(cells, &columns);
            if self.dirty && self.y - height < MARGIN {
                self.new_page();
                self.row(headers, &columns, true);
            }
            self.row(cells, &columns, false);
        }
    }

    fn row(&mut self, cells: &[String], columns: &[f32], header: bool) {
        let height = row_height(cells, columns);
        self.ensure(height);
        let top = self.y;
        let bottom = top - height;

        if header {
            self.current
                .set_fill_gray(0.92)
                .rect(MARGIN, bottom, TEXT_WIDTH, height)
                .fill_nonzero()
                .set_fill_gray(0.0);
        }

        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(columns) {
            self.current
                .set_line_width(0.5)
                .rect(x, bottom, *width, height)
                .stroke();
            let mut line_y = top - CELL_PAD;
            for line in wrap(cell, width - 2.0 * CELL_PAD, TABLE_SIZE) {
                line_y -= TABLE_SIZE * LEADING;
                self.show(x + CELL_PAD, line_y + 2.0, &line, TABLE_SIZE, header);
            }
            x += width;
        }

        self.y = bottom;
        self.dirty = true;
    }

    fn show(&mut self, x: f32, y: f32, text: &str, size: f32, bold: bool) {
        let bytes = win_ansi(text);
        self.current
            .begin_text()
            .set_font(if bold { BOLD } else { REGULAR }, size)
            .next_line(x, y)
            .show(Str(&bytes))
            .end_text();
        self.dirty = true;
    }
}

fn row_height(cells: &[String], columns: &[f32]) -> f32 {
    let lines = cells
        .iter()
        .zip(columns)
        .map(|(cell, width)| wrap(cell, width - 2.0 * CELL_PAD, TABLE_SIZE).len())
        .max()
        .unwrap_or(1);
    lines as f32 * TABLE_SIZE * LEADING + 2.0 * CELL_PAD
}

/// Estimated width of `text` in points.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Break `text` into lines no wider than `width`, splitting long words.
fn wrap(text: &str, width: f32, size: f32) -> Vec<String> {
    let max_chars = ((width / (size * 0.5)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let needed = line.chars().count() + usize::from(!line.is_empty()) + word.chars().count();
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Latin-1 subset of WinAnsi; anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}
