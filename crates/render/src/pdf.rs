//! `lopdf` backend: serializes laid-out bands into a single-page PDF.
//!
//! The backend builds the document object graph in memory (catalog, pages,
//! one content stream) and flips the layout's top-down coordinates into
//! PDF's bottom-up space.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};

use crate::error::RenderError;
use crate::layout::{self, Band, Element, Fill};

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

pub(crate) fn write_pdf(bands: &[Band]) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular_id,
            FONT_BOLD => bold_id,
        },
    });

    let content = page_content(bands);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            layout::PAGE_WIDTH.into(),
            layout::PAGE_HEIGHT.into(),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

fn page_content(bands: &[Band]) -> Content {
    let mut writer = PageWriter::new();
    for band in bands {
        for element in &band.elements {
            writer.draw(element);
        }
    }
    writer.finish()
}

/// Builds the content stream, deduplicating font and fill-color switches.
struct PageWriter {
    ops: Vec<Operation>,
    font: Option<(&'static str, f32)>,
    gray: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            ops: Vec::new(),
            font: None,
            gray: 0.0,
        }
    }

    fn finish(self) -> Content {
        Content {
            operations: self.ops,
        }
    }

    fn draw(&mut self, element: &Element) {
        match element {
            Element::Text {
                content,
                x,
                y,
                size,
                bold,
                white,
            } => self.draw_text(content, *x, *y, *size, *bold, *white),
            Element::Line { x1, y1, x2, y2 } => {
                self.ops
                    .push(Operation::new("m", vec![(*x1).into(), flip(*y1).into()]));
                self.ops
                    .push(Operation::new("l", vec![(*x2).into(), flip(*y2).into()]));
                self.ops.push(Operation::new("S", vec![]));
            }
            Element::Rect {
                x,
                y,
                width,
                height,
            } => {
                self.push_rect(*x, *y, *width, *height);
                self.ops.push(Operation::new("S", vec![]));
            }
            Element::FilledRect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                let gray = match fill {
                    Fill::LightGray => 0.9,
                    Fill::Black => 0.0,
                };
                self.set_gray(gray);
                self.push_rect(*x, *y, *width, *height);
                // Fill and stroke, like the paper form's boxed rows.
                self.ops.push(Operation::new("B", vec![]));
            }
        }
    }

    fn draw_text(&mut self, content: &str, x: f32, y: f32, size: f32, bold: bool, white: bool) {
        if content.trim().is_empty() {
            return;
        }
        self.ops.push(Operation::new("BT", vec![]));
        self.set_font(if bold { FONT_BOLD } else { FONT_REGULAR }, size);
        self.set_gray(if white { 1.0 } else { 0.0 });
        self.ops
            .push(Operation::new("Td", vec![x.into(), flip(y).into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(content), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        // `y` is the top edge in layout space; PDF rects anchor at the bottom.
        let pdf_y = layout::PAGE_HEIGHT - y - height;
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), pdf_y.into(), width.into(), height.into()],
        ));
    }

    fn set_font(&mut self, name: &'static str, size: f32) {
        if self.font != Some((name, size)) {
            self.ops
                .push(Operation::new("Tf", vec![name.into(), size.into()]));
            self.font = Some((name, size));
        }
    }

    fn set_gray(&mut self, gray: f32) {
        if self.gray != gray {
            self.ops.push(Operation::new(
                "rg",
                vec![gray.into(), gray.into(), gray.into()],
            ));
            self.gray = gray;
        }
    }
}

/// Flip a top-down layout coordinate into PDF's bottom-up space.
fn flip(y: f32) -> f32 {
    layout::PAGE_HEIGHT - y
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_replaces_out_of_range_chars() {
        assert_eq!(to_win_ansi("Rs. 500/-"), b"Rs. 500/-".to_vec());
        assert_eq!(to_win_ansi("₨"), vec![b'?']);
    }

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(flip(flip(137.0)), 137.0);
    }
}
