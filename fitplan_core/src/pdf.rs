//! Minimal PDF document model and writer.
//!
//! Documents are a list of pages holding positioned single-line text.
//! Positions are in millimetres measured from the top-left corner; the
//! writer converts them to PDF points with a bottom-left origin and hands
//! the objects to `pdf-writer`. Only the standard Helvetica fonts are used,
//! so nothing is embedded.

use crate::{Error, Result};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use std::path::Path;

/// Points per millimetre
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// Font face of a text item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    fn resource_name(&self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"F1",
            FontStyle::Bold => b"F2",
        }
    }
}

/// RGB fill color, 0-255 per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A single line of text placed on a page
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub x_mm: f32,
    /// Baseline, measured down from the top edge
    pub y_mm: f32,
    pub size_pt: f32,
    pub style: FontStyle,
    pub color: Rgb,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub items: Vec<TextItem>,
}

/// A paginated document ready to be serialized
#[derive(Clone, Debug, PartialEq)]
pub struct PdfDocument {
    pub width_mm: f32,
    pub height_mm: f32,
    pub pages: Vec<Page>,
}

impl PdfDocument {
    /// Create a document with one empty page
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
            pages: vec![Page::default()],
        }
    }

    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Place text on the last page
    pub fn text(&mut self, item: TextItem) {
        if self.pages.is_empty() {
            self.add_page();
        }
        let last = self.pages.len() - 1;
        self.pages[last].items.push(item);
    }

    /// Serialize to PDF bytes
    ///
    /// Non-finite geometry is rejected rather than written as `NaN` operands.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.check_finite()?;

        let width_pt = self.width_mm * MM_TO_PT;
        let height_pt = self.height_mm * MM_TO_PT;

        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let page_ids: Vec<Ref> = (0..self.pages.len())
            .map(|i| Ref::new(5 + 2 * i as i32))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        for (page, page_id) in self.pages.iter().zip(&page_ids) {
            let content_id = Ref::new(page_id.get() + 1);

            let mut writer = pdf.page(*page_id);
            writer
                .media_box(Rect::new(0.0, 0.0, width_pt, height_pt))
                .parent(tree_id)
                .contents(content_id);
            writer
                .resources()
                .fonts()
                .pair(Name(FontStyle::Regular.resource_name()), regular_id)
                .pair(Name(FontStyle::Bold.resource_name()), bold_id);
            writer.finish();

            pdf.stream(content_id, &content_stream(page, height_pt));
        }

        Ok(pdf.finish())
    }

    fn check_finite(&self) -> Result<()> {
        if !self.width_mm.is_finite() || !self.height_mm.is_finite() {
            return Err(Error::Pdf(format!(
                "page size {}x{}mm is not finite",
                self.width_mm, self.height_mm
            )));
        }
        for item in self.pages.iter().flat_map(|p| &p.items) {
            if !(item.x_mm.is_finite() && item.y_mm.is_finite() && item.size_pt.is_finite()) {
                return Err(Error::Pdf(format!(
                    "'{}' has non-finite position or size",
                    item.text
                )));
            }
        }
        Ok(())
    }

    /// Serialize and write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        tracing::info!(
            "Wrote {} page PDF ({} bytes) to {:?}",
            self.page_count(),
            bytes.len(),
            path
        );
        Ok(())
    }
}

fn content_stream(page: &Page, height_pt: f32) -> Vec<u8> {
    let mut content = Content::new();
    for item in &page.items {
        let Rgb(r, g, b) = item.color;
        let text = encode_text(&item.text);
        content
            .begin_text()
            .set_font(Name(item.style.resource_name()), item.size_pt)
            .set_fill_rgb(
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            )
            .next_line(item.x_mm * MM_TO_PT, height_pt - item.y_mm * MM_TO_PT)
            .show(Str(&text))
            .end_text();
    }
    content.finish()
}

/// Encode text as WinAnsi bytes
fn encode_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ' '..='~' => bytes.push(ch as u8),
            '\u{2022}' => bytes.push(0x95),
            '\u{2013}' => bytes.push(0x96),
            '\u{2014}' => bytes.push(0x97),
            '\u{2018}' => bytes.push(0x91),
            '\u{2019}' => bytes.push(0x92),
            '\u{00A0}'..='\u{00FF}' => bytes.push(ch as u32 as u8),
            _ => bytes.push(b'?'),
        }
    }
    bytes
}

/// Helvetica advance widths for ' '..='~', in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Width of `text` set in regular Helvetica, in millimetres
pub fn helvetica_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|ch| match ch {
            ' '..='~' => u32::from(HELVETICA_WIDTHS[ch as usize - 0x20]),
            '\u{2022}' => 350,
            _ => 556,
        })
        .sum();
    units as f32 / 1000.0 * size_pt / MM_TO_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, y_mm: f32) -> TextItem {
        TextItem {
            x_mm: 20.0,
            y_mm,
            size_pt: 12.0,
            style: FontStyle::Regular,
            color: Rgb(0, 0, 0),
            text: text.into(),
        }
    }

    #[test]
    fn test_document_structure() {
        let mut doc = PdfDocument::new(210.0, 297.0);
        doc.text(item("Page one", 20.0));
        doc.add_page();
        doc.text(item("Page two", 20.0));

        let bytes = doc.to_bytes().unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("Page one"));
        assert!(text.contains("Page two"));
        assert!(text.contains("/Helvetica-Bold"));
        assert!(text.contains("/WinAnsiEncoding"));
    }

    #[test]
    fn test_text_is_encoded_as_win_ansi() {
        assert_eq!(encode_text("Child's pose"), b"Child's pose".to_vec());
        assert_eq!(encode_text("\u{2022} Sets"), vec![0x95, b' ', b'S', b'e', b't', b's']);
        assert_eq!(encode_text("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_text("\u{1F4AA}"), b"?".to_vec());
    }

    #[test]
    fn test_y_is_flipped_to_bottom_origin() {
        let top = Page {
            items: vec![item("x", 0.0)],
        };
        let bottom = Page {
            items: vec![item("x", 297.0)],
        };
        let height_pt = 297.0 * MM_TO_PT;

        let top_stream = String::from_utf8_lossy(&content_stream(&top, height_pt)).into_owned();
        let bottom_stream =
            String::from_utf8_lossy(&content_stream(&bottom, height_pt)).into_owned();

        assert!(top_stream.contains("Td"));
        assert!(top_stream.contains(&format!("{}", (height_pt as i32))));
        assert!(bottom_stream.contains(" 0 Td"));
    }

    #[test]
    fn test_non_finite_geometry_is_rejected() {
        let mut doc = PdfDocument::new(210.0, 297.0);
        doc.text(item("Lost", f32::NAN));
        assert!(matches!(doc.to_bytes(), Err(Error::Pdf(_))));

        let doc = PdfDocument::new(210.0, f32::INFINITY);
        assert!(matches!(doc.to_bytes(), Err(Error::Pdf(_))));
    }

    #[test]
    fn test_helvetica_width() {
        // "ab" = 556 + 556 units at 10pt
        let expected = 1.112 * 10.0 / MM_TO_PT;
        assert!((helvetica_width_mm("ab", 10.0) - expected).abs() < 1e-4);
        assert!(helvetica_width_mm("WWW", 12.0) > helvetica_width_mm("iii", 12.0));
    }

    #[test]
    fn test_save_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("plan.pdf");

        let doc = PdfDocument::new(210.0, 297.0);
        doc.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
