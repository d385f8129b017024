//! Shared fixture builders for the integration suite.
//!
//! All builders produce in-memory bytes; panics are acceptable here since
//! this code runs only under the test harness.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc, dead_code)]

use std::io::Cursor;
use std::io::Write;

use lopdf::Document;
use lopdf::Object;
use lopdf::Stream;
use lopdf::content::Content;
use lopdf::content::Operation;
use lopdf::dictionary;
use rust_xlsxwriter::Workbook;

/// The expected CSV fixture, with the first field quoted to exercise the
/// reader's quoting support.
pub fn csv_fixture_bytes() -> Vec<u8> {
    "\"тест1\",тест2,тест123\nэто,зеленый,тест\nтест2,тест3,тест666\n"
        .as_bytes()
        .to_vec()
}

/// A CSV payload with only two rows, for the negative row-count case.
pub fn csv_short_bytes() -> Vec<u8> {
    "тест1,тест2,тест123\nэто,зеленый,тест\n".as_bytes().to_vec()
}

/// ToUnicode CMap mapping single-byte codes to the Cyrillic letters of the
/// fixture snippet (plus space), so a plain `Tj` string round-trips through
/// text extraction as "Билет на каток".
const TO_UNICODE_CMAP: &str = "/CIDInit /ProcSet findresource begin\n\
12 dict begin\n\
begincmap\n\
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
/CMapName /Adobe-Identity-UCS def\n\
/CMapType 2 def\n\
1 begincodespacerange\n\
<00> <FF>\n\
endcodespacerange\n\
10 beginbfchar\n\
<20> <0020>\n\
<41> <0411>\n\
<42> <0438>\n\
<43> <043B>\n\
<44> <0435>\n\
<45> <0442>\n\
<46> <043D>\n\
<47> <0430>\n\
<48> <043A>\n\
<49> <043E>\n\
endbfchar\n\
endcmap\n\
CMapName currentdict /CMap defineresource pop\n\
end\n\
end";

/// Byte codes that decode to "Билет на каток" under the CMap above.
const SNIPPET_CODES: &str = "ABCDE FG HGEIH";

/// A one-page PDF whose extracted text contains "Билет на каток".
pub fn pdf_fixture_bytes() -> Vec<u8> {
    build_pdf(SNIPPET_CODES, true)
}

/// A one-page PDF with unrelated ASCII text (no fixture snippet).
pub fn pdf_plain_bytes(text: &str) -> Vec<u8> {
    build_pdf(text, false)
}

fn build_pdf(text: &str, with_cmap: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut font = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    };
    if with_cmap {
        let cmap_id = doc.add_object(Stream::new(
            dictionary! {},
            TO_UNICODE_CMAP.as_bytes().to_vec(),
        ));
        font.set("ToUnicode", cmap_id);
    }
    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
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
    doc.save_to(&mut out).unwrap();
    out
}

/// A three-sheet workbook holding `cell_value` at (sheet 2, row 2, col 1).
pub fn xlsx_fixture_bytes_with(cell_value: &str) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for index in 0..3 {
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "заголовок").unwrap();
        if index == 2 {
            sheet.write_string(1, 0, "№").unwrap();
            sheet.write_string(2, 0, "1").unwrap();
            sheet.write_string(2, 1, cell_value).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// The expected XLSX fixture.
pub fn xlsx_fixture_bytes() -> Vec<u8> {
    xlsx_fixture_bytes_with("Склад")
}

/// The expected client JSON document.
pub fn json_fixture_bytes() -> Vec<u8> {
    br#"{
        "client": {
            "uuid": "0f8f24c6-2dd5-4a61-9b2f-7a1b5e2f9f10",
            "title": "Mr.",
            "name": "John",
            "surname": "Doe",
            "dateOfBirth": "12 Jan 1988",
            "description": "example client",
            "userGroups": ["EXT", "PREMIUM"],
            "address": {
                "country": "France",
                "city": "Paris",
                "street": "Rue Mumia Abu-Jamal",
                "building": "6",
                "flat": "104"
            }
        }
    }"#
    .to_vec()
}

/// Builder for in-memory zip fixture archives.
pub struct ZipFixtureBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipFixtureBuilder {
    /// Creates a new zip fixture builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a deflate-compressed file entry.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        use zip::write::SimpleFileOptions;

        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        use zip::write::SimpleFileOptions;

        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the archive bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipFixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The canonical fixture archive: one csv, one pdf, one xlsx entry plus
/// an entry and a directory the verifier must skip.
pub fn fixture_archive_bytes() -> Vec<u8> {
    ZipFixtureBuilder::new()
        .add_directory("docs/")
        .add_file("данные.csv", &csv_fixture_bytes())
        .add_file("docs/билет.pdf", &pdf_fixture_bytes())
        .add_file("отчет.xlsx", &xlsx_fixture_bytes())
        .add_file("readme.txt", "пропустить".as_bytes())
        .build()
}
