//! Pure layout pass: positions every mark of the four-copy challan page.
//!
//! Coordinates are top-down (y grows toward the page bottom, text `y` is the
//! baseline); the PDF backend flips into PDF's bottom-up space when
//! serializing. All quantities are points.

use chrono::{DateTime, Utc};

use parchi_challans::ChallanRecord;
use parchi_core::ChallanId;

use crate::error::RenderError;
use crate::metrics;
use crate::profile::InstitutionProfile;

// ─────────────────────────────────────────────────────────────────────────────
// Page geometry
// ─────────────────────────────────────────────────────────────────────────────

/// A4 portrait.
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

/// Fixed margin on all four sides.
pub const MARGIN: f32 = 20.0;

/// Vertical gap between consecutive copies.
pub const BAND_GAP: f32 = 10.0;

/// The four copy labels, in stacking order from the page top.
pub const COPY_LABELS: [&str; 4] =
    ["Bank Copy", "Accounts Copy", "Department Copy", "Student Copy"];

/// Timestamp format stamped on the document.
pub const GENERATED_AT_FORMAT: &str = "%d-%m-%Y %I:%M:%S %p";

/// Validity date format stamped on the document.
pub const VALID_TILL_FORMAT: &str = "%d/%m/%Y";

/// Width of one copy band.
pub fn band_width() -> f32 {
    PAGE_WIDTH - 2.0 * MARGIN
}

/// Height of one copy band: a quarter of the content height minus the
/// inter-band gap.
pub fn band_height() -> f32 {
    (PAGE_HEIGHT - 2.0 * MARGIN) / 4.0 - BAND_GAP
}

/// The challan number printed on the document, derived from the record
/// identity (zero-padded decimal).
pub fn challan_number(id: ChallanId) -> String {
    format!("{:010}", id.as_i64())
}

// Vertical rhythm inside one band: baseline/edge offsets from the band top.
// The column is sized so the amount table's bottom edge stays inside the
// band height for every band.
const LABEL_BASELINE: f32 = 13.0;
const LABEL_RULE: f32 = 17.0;
const NAME_BASELINE: f32 = 28.0;
const REGISTRATION_BASELINE: f32 = 37.0;
const BANK_BLOCK_START: f32 = 45.0;
const BANK_LINE_STEP: f32 = 7.0;
const SEPARATOR_RULE: f32 = 86.0;
const TIMESTAMP_BASELINE: f32 = 95.0;
const CHALLAN_NO_BASELINE: f32 = 105.0;
const VALID_TILL_BASELINE: f32 = 114.0;
const DETAIL_BLOCK_START: f32 = 121.0;
const DETAIL_LINE_STEP: f32 = 8.0;
const TABLE_TOP: f32 = 150.0;
const TABLE_HEIGHT: f32 = 40.0;
const TABLE_ROW_HEIGHT: f32 = 12.0;

/// Horizontal inset of rules, text and the amount table from the band edges.
const INSET: f32 = 10.0;
/// Left edge of table cell text.
const CELL_TEXT_INSET: f32 = 15.0;
/// Divider between the particulars and amount columns, measured from the
/// band's right edge. This fixes the amount column width.
const AMOUNT_COLUMN_OFFSET: f32 = 80.0;
/// Left edge of amount-column text, measured from the band's right edge.
const AMOUNT_TEXT_OFFSET: f32 = 75.0;

// ─────────────────────────────────────────────────────────────────────────────
// Elements
// ─────────────────────────────────────────────────────────────────────────────

/// Grayscale fill behind table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Header row background.
    LightGray,
    /// Total row background (text on it is white).
    Black,
}

/// One positioned mark on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A text run; `x` is the left edge, `y` the baseline.
    Text {
        content: String,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        white: bool,
    },
    /// A stroked line segment.
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// A stroked rectangle outline; `y` is the top edge.
    Rect { x: f32, y: f32, width: f32, height: f32 },
    /// A filled and stroked rectangle; `y` is the top edge.
    FilledRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Fill,
    },
}

impl Element {
    /// Lowest page-coordinate extent of the mark (its bottom edge).
    pub fn bottom(&self) -> f32 {
        match self {
            Element::Text { y, .. } => *y,
            Element::Line { y1, y2, .. } => y1.max(*y2),
            Element::Rect { y, height, .. } | Element::FilledRect { y, height, .. } => {
                y + height
            }
        }
    }
}

/// One laid-out copy of the challan.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub label: &'static str,
    pub x: f32,
    /// Top edge, measured from the page top.
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

/// Lay out the full page: four geometrically identical bands, one per copy
/// label.
pub fn layout_page(
    record: &ChallanRecord,
    profile: &InstitutionProfile,
    generated_at: DateTime<Utc>,
) -> Result<Vec<Band>, RenderError> {
    require_field("student_name", record.student_name())?;
    require_field("roll_number", record.roll_number().as_str())?;
    require_field("reason", record.reason())?;

    Ok((0..COPY_LABELS.len())
        .map(|index| layout_band(record, profile, generated_at, index))
        .collect())
}

fn require_field(field: &str, value: &str) -> Result<(), RenderError> {
    if value.trim().is_empty() {
        return Err(RenderError::InvalidRecord(format!("{field} is empty")));
    }
    Ok(())
}

fn layout_band(
    record: &ChallanRecord,
    profile: &InstitutionProfile,
    generated_at: DateTime<Utc>,
    index: usize,
) -> Band {
    let label = COPY_LABELS[index];
    let x = MARGIN;
    let width = band_width();
    let height = band_height();
    let top = MARGIN + index as f32 * (height + BAND_GAP);

    let mut elements = Vec::new();

    // Band border.
    elements.push(Element::Rect {
        x,
        y: top,
        width,
        height,
    });

    // Copy label and its underline.
    elements.push(centered(label, x, width, top + LABEL_BASELINE, 12.0, true));
    elements.push(Element::Line {
        x1: x + INSET,
        y1: top + LABEL_RULE,
        x2: x + width - INSET,
        y2: top + LABEL_RULE,
    });

    // Institution header.
    elements.push(left(&profile.name, x + INSET, top + NAME_BASELINE, 10.0, true));
    elements.push(left(
        &profile.registration_line,
        x + INSET,
        top + REGISTRATION_BASELINE,
        8.0,
        false,
    ));

    // Bank-account detail block.
    for (i, line) in profile.bank_details.iter().enumerate() {
        let y = top + BANK_BLOCK_START + i as f32 * BANK_LINE_STEP;
        elements.push(left(line, x + INSET, y, 7.0, false));
    }

    // Separator rule.
    elements.push(Element::Line {
        x1: x + INSET,
        y1: top + SEPARATOR_RULE,
        x2: x + width - INSET,
        y2: top + SEPARATOR_RULE,
    });

    // Generation stamp, challan number and validity.
    elements.push(centered(
        &generated_at.format(GENERATED_AT_FORMAT).to_string(),
        x,
        width,
        top + TIMESTAMP_BASELINE,
        8.0,
        false,
    ));
    elements.push(centered(
        &format!("Challan No: {}", challan_number(record.id())),
        x,
        width,
        top + CHALLAN_NO_BASELINE,
        9.0,
        true,
    ));
    elements.push(centered(
        &format!(
            "Challan Valid Till: {}",
            record.valid_till().format(VALID_TILL_FORMAT)
        ),
        x,
        width,
        top + VALID_TILL_BASELINE,
        8.0,
        true,
    ));

    // Student detail lines.
    let details = [
        format!("Name: {}", record.student_name()),
        format!("CNIC: {}", record.id_card_number()),
        format!("Roll No: {}", record.roll_number()),
        format!("Reason: {}", record.reason()),
    ];
    for (i, line) in details.iter().enumerate() {
        let y = top + DETAIL_BLOCK_START + i as f32 * DETAIL_LINE_STEP;
        elements.push(left(line, x + INSET, y, 8.0, false));
    }

    // Amount table.
    elements.extend(amount_table(record, x, width, top + TABLE_TOP));

    Band {
        label,
        x,
        top,
        width,
        height,
        elements,
    }
}

/// The two-column amount box: header row, one content row, inverted total
/// row, with a vertical divider fixing the amount column width.
fn amount_table(record: &ChallanRecord, x: f32, width: f32, table_top: f32) -> Vec<Element> {
    let left_edge = x + INSET;
    let table_width = width - 2.0 * INSET;
    let right_edge = x + width;
    let amount_text = record.amount().formatted();

    vec![
        // Table border.
        Element::Rect {
            x: left_edge,
            y: table_top,
            width: table_width,
            height: TABLE_HEIGHT,
        },
        // Header row.
        Element::FilledRect {
            x: left_edge,
            y: table_top,
            width: table_width,
            height: TABLE_ROW_HEIGHT,
            fill: Fill::LightGray,
        },
        // Column divider, full table height.
        Element::Line {
            x1: right_edge - AMOUNT_COLUMN_OFFSET,
            y1: table_top,
            x2: right_edge - AMOUNT_COLUMN_OFFSET,
            y2: table_top + TABLE_HEIGHT,
        },
        left(
            "Particular",
            x + CELL_TEXT_INSET,
            table_top + 9.0,
            8.0,
            true,
        ),
        left(
            "Amount (Rs)",
            right_edge - AMOUNT_TEXT_OFFSET,
            table_top + 9.0,
            8.0,
            true,
        ),
        // Content row.
        left(record.reason(), x + CELL_TEXT_INSET, table_top + 24.0, 8.0, false),
        left(
            &amount_text,
            right_edge - AMOUNT_TEXT_OFFSET,
            table_top + 24.0,
            8.0,
            false,
        ),
        // Total row, inverted.
        Element::FilledRect {
            x: left_edge,
            y: table_top + TABLE_HEIGHT - TABLE_ROW_HEIGHT,
            width: table_width,
            height: TABLE_ROW_HEIGHT,
            fill: Fill::Black,
        },
        white_text(
            "Total Amount to Pay",
            x + CELL_TEXT_INSET,
            table_top + TABLE_HEIGHT - 3.0,
            8.0,
        ),
        white_text(
            &amount_text,
            right_edge - AMOUNT_TEXT_OFFSET,
            table_top + TABLE_HEIGHT - 3.0,
            8.0,
        ),
    ]
}

fn left(content: &str, x: f32, y: f32, size: f32, bold: bool) -> Element {
    Element::Text {
        content: content.to_string(),
        x,
        y,
        size,
        bold,
        white: false,
    }
}

fn centered(content: &str, band_x: f32, band_width: f32, y: f32, size: f32, bold: bool) -> Element {
    let text_width = metrics::text_width(content, size, bold);
    Element::Text {
        content: content.to_string(),
        x: band_x + (band_width - text_width) / 2.0,
        y,
        size,
        bold,
        white: false,
    }
}

fn white_text(content: &str, x: f32, y: f32, size: f32) -> Element {
    Element::Text {
        content: content.to_string(),
        x,
        y,
        size,
        bold: true,
        white: true,
    }
}
