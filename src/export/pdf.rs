use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

use crate::error::{HealError, Result};
use crate::export::report::{Block, ReportDocument, TextStyle};
use crate::planner::constants::REPORT_TITLE;

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

const MARGIN: f32 = 72.0;
const BODY_SIZE: f32 = 10.0;
const BODY_LEADING: f32 = 12.0;
const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 12.0;

const TABLE_COL_WIDTHS: [f32; 2] = [160.0, 330.0];
const CELL_PADDING: f32 = 6.0;
const HEADER_GRAY: f32 = 0.83;
const GRID_GRAY: f32 = 0.5;

/// Rough average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.52;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const FONT_ITALIC: &str = "F3";

fn export_error(err: impl std::fmt::Display) -> HealError {
    HealError::ExportFailed(err.to_string())
}

/// Encode text for the standard fonts' WinAnsiEncoding; unmapped characters become '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH
}

/// Greedy word wrap to an approximate width. Words longer than a line are split across lines.
fn wrap(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let max_chars = ((max_width / (size * AVG_GLYPH_WIDTH)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(max_chars) {
            let piece: String = piece.iter().collect();
            let candidate = if line.is_empty() {
                piece.clone()
            } else {
                format!("{} {}", line, piece)
            };

            if text_width(&candidate, size) > max_width && !line.is_empty() {
                lines.push(std::mem::replace(&mut line, piece));
            } else {
                line = candidate;
            }
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn font_for(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Normal => FONT_REGULAR,
        TextStyle::Bold => FONT_BOLD,
        TextStyle::Italic => FONT_ITALIC,
    }
}

/// Accumulates content-stream operations, starting a new page when the cursor runs out.
struct PageWriter {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN && !self.current.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn text_at(&mut self, font: &str, size: f32, x: f32, baseline: f32, text: &str) {
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), baseline.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, op: &str) {
        self.current.push(Operation::new(
            "re",
            vec![x.into(), y.into(), w.into(), h.into()],
        ));
        self.current.push(Operation::new(op, vec![]));
    }

    /// Left-aligned wrapped paragraph.
    fn paragraph(&mut self, text: &str, font: &str, size: f32, leading: f32) {
        for line in wrap(text, size, PAGE_WIDTH - 2.0 * MARGIN) {
            self.ensure_space(leading);
            self.y -= leading;
            self.text_at(font, size, MARGIN, self.y + (leading - size), &line);
        }
    }

    fn title(&mut self, text: &str) {
        let leading = TITLE_SIZE * 1.2;
        self.ensure_space(leading + 12.0);
        self.y -= leading;
        let x = ((PAGE_WIDTH - text_width(text, TITLE_SIZE)) / 2.0).max(MARGIN);
        self.text_at(FONT_BOLD, TITLE_SIZE, x, self.y + (leading - TITLE_SIZE), text);
        self.y -= 12.0;
    }

    fn heading(&mut self, text: &str) {
        self.y -= 12.0;
        self.paragraph(text, FONT_BOLD, HEADING_SIZE, HEADING_SIZE * 1.2);
        self.y -= 6.0;
    }

    fn spacer(&mut self, height: f32) {
        self.y -= height;
    }

    fn table_row(&mut self, cells: &[String; 2], font: &str, shaded: bool) {
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(TABLE_COL_WIDTHS)
            .map(|(text, width)| wrap(text, BODY_SIZE, width - 2.0 * CELL_PADDING))
            .collect();
        let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        let height = line_count as f32 * BODY_LEADING + CELL_PADDING;

        self.ensure_space(height);
        let top = self.y;
        let bottom = top - height;
        let table_width: f32 = TABLE_COL_WIDTHS.iter().sum();
        let left = (PAGE_WIDTH - table_width) / 2.0;

        if shaded {
            self.current
                .push(Operation::new("g", vec![HEADER_GRAY.into()]));
            self.rect(left, bottom, table_width, height, "f");
            self.current.push(Operation::new("g", vec![0.into()]));
        }

        self.current.push(Operation::new("G", vec![GRID_GRAY.into()]));
        self.current.push(Operation::new("w", vec![1.into()]));
        let mut x = left;
        for width in TABLE_COL_WIDTHS {
            self.rect(x, bottom, width, height, "S");
            x += width;
        }

        let mut x = left;
        for (lines, width) in wrapped.iter().zip(TABLE_COL_WIDTHS) {
            let mut baseline = top - CELL_PADDING / 2.0 - BODY_SIZE;
            for line in lines {
                self.text_at(font, BODY_SIZE, x + CELL_PADDING, baseline, line);
                baseline -= BODY_LEADING;
            }
            x += width;
        }

        self.y = bottom;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Lay out blocks into per-page operation lists.
fn layout(report: &ReportDocument) -> Vec<Vec<Operation>> {
    let mut writer = PageWriter::new();

    for block in &report.blocks {
        match block {
            Block::Title(text) => writer.title(text),
            Block::Paragraph { text, style } => {
                writer.paragraph(text, font_for(*style), BODY_SIZE, BODY_LEADING)
            }
            Block::Heading(text) => writer.heading(text),
            Block::Spacer(height) => writer.spacer(*height),
            Block::Table { header, rows } => {
                writer.table_row(header, FONT_BOLD, true);
                for row in rows {
                    writer.table_row(row, FONT_REGULAR, false);
                }
            }
        }
    }

    writer.finish()
}

fn add_font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

fn build_document(report: &ReportDocument) -> Result<Document> {
    let pages = layout(report);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = add_font(&mut doc, "Helvetica");
    let bold = add_font(&mut doc, "Helvetica-Bold");
    let italic = add_font(&mut doc, "Helvetica-Oblique");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular,
            FONT_BOLD => bold,
            FONT_ITALIC => italic,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let stream = Stream::new(dictionary! {}, content.encode().map_err(export_error)?);
        let content_id = doc.add_object(stream);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(win_ansi(REPORT_TITLE), StringFormat::Literal),
        "Producer" => Object::string_literal(concat!("heal_meal ", env!("CARGO_PKG_VERSION"))),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

/// Render the report as a PDF into `sink`. Write and flush errors surface as `ExportFailed`.
pub fn render_pdf_to<W: Write>(report: &ReportDocument, sink: &mut W) -> Result<()> {
    let mut doc = build_document(report)?;
    doc.save_to(sink).map_err(export_error)?;
    sink.flush().map_err(export_error)
}

/// Render the report as a complete PDF file in memory.
pub fn render_pdf(report: &ReportDocument) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    render_pdf_to(report, &mut buffer)?;
    Ok(buffer)
}
