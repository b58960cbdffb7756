//! PDF builders shared by unit and integration tests.
#![allow(dead_code)]

use lopdf::{Object, Stream, dictionary};

/// Content stream showing one line of `/F1` text.
pub fn line_content(text: &str) -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes()
}

/// Content stream showing each line below the previous one, the way
/// typesetters lay out paragraphs.
pub fn lines_content(lines: &[&str]) -> Vec<u8> {
    let body = lines
        .iter()
        .map(|line| format!("({line}) Tj"))
        .collect::<Vec<_>>()
        .join(" 0 -14 Td ");
    format!("BT /F1 12 Tf 72 720 Td {body} ET").into_bytes()
}

/// Builds a PDF with one line of Helvetica text per page.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let contents: Vec<Vec<u8>> = texts.iter().map(|text| line_content(text)).collect();
    pdf_with_contents(&contents)
}

/// Builds a PDF from raw content streams, one per page.
///
/// Every page has two fonts: `/F1` is Helvetica, and `/F2` is a composite
/// font with no `ToUnicode` map, so text shown in it cannot be decoded.
pub fn pdf_with_contents(contents: &[Vec<u8>]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let helvetica_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let composite_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "SimSun",
        "Encoding" => "Identity-H",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => Object::Reference(helvetica_id),
                    "F2" => Object::Reference(composite_id),
                },
            },
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(i64::try_from(contents.len()).expect("page count fits i64")),
    });

    for &pid in &page_ids {
        if let Ok(dict) = doc.get_object_mut(pid).and_then(Object::as_dict_mut) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("Failed to serialize PDF");
    buf
}
