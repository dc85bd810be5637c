//! Reads a rendered package back into a small structure the tests can
//! assert against.

#![allow(dead_code)]

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

#[derive(Debug, Default, Clone)]
pub struct ParsedRun {
    pub text: String,
    pub bold: bool,
    pub underline: bool,
}

#[derive(Debug, Default, Clone)]
pub struct ParsedParagraph {
    pub runs: Vec<ParsedRun>,
    pub alignment: Option<String>,
}

impl ParsedParagraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParsedCell {
    pub width: Option<u32>,
    pub span: u32,
    pub paragraph: ParsedParagraph,
}

impl ParsedCell {
    pub fn text(&self) -> String {
        self.paragraph.text()
    }

    pub fn is_bold(&self) -> bool {
        let visible: Vec<_> = self.paragraph.runs.iter().filter(|r| !r.text.is_empty()).collect();
        !visible.is_empty() && visible.iter().all(|r| r.bold)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParsedRow {
    pub height: Option<(u32, String)>,
    pub cells: Vec<ParsedCell>,
}

impl ParsedRow {
    pub fn logical_columns(&self) -> u32 {
        self.cells.iter().map(|c| c.span).sum()
    }

    pub fn total_width(&self) -> u32 {
        self.cells.iter().filter_map(|c| c.width).sum()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParsedTable {
    pub grid: Vec<u32>,
    pub layout: Option<String>,
    pub rows: Vec<ParsedRow>,
}

#[derive(Debug, Default, Clone)]
pub struct ParsedDocument {
    pub paragraphs: Vec<ParsedParagraph>,
    pub tables: Vec<ParsedTable>,
    pub page_width: u32,
    pub margin_left: u32,
    pub margin_right: u32,
}

impl ParsedDocument {
    pub fn usable_width(&self) -> u32 {
        self.page_width - self.margin_left - self.margin_right
    }

    pub fn table(&self) -> &ParsedTable {
        &self.tables[0]
    }
}

/// Read one part of the package as a string
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut part = archive.by_name(name).expect("part present");
    let mut content = String::new();
    part.read_to_string(&mut content).expect("utf-8 part");
    content
}

pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    archive.file_names().map(str::to_string).collect()
}

fn attr(e: &BytesStart, name: &str) -> Option<String> {
    e.try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

fn attr_u32(e: &BytesStart, name: &str) -> Option<u32> {
    attr(e, name).and_then(|v| v.parse().ok())
}

/// Parse word/document.xml out of a rendered package
pub fn parse_document(bytes: &[u8]) -> ParsedDocument {
    let xml = read_part(bytes, "word/document.xml");
    let mut reader = Reader::from_str(&xml);

    let mut doc = ParsedDocument::default();
    let mut table_depth = 0usize;
    let mut in_cell = false;
    let mut in_ppr = false;
    let mut in_text = false;
    let mut paragraph: Option<ParsedParagraph> = None;
    let mut run: Option<ParsedRun> = None;

    loop {
        let event = reader.read_event().expect("well-formed document.xml");
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                match e.name().as_ref() {
                    b"w:tbl" => {
                        table_depth += 1;
                        doc.tables.push(ParsedTable::default());
                    }
                    b"w:gridCol" => {
                        if let Some(t) = doc.tables.last_mut() {
                            t.grid.push(attr_u32(e, "w:w").unwrap_or(0));
                        }
                    }
                    b"w:tblLayout" => {
                        if let Some(t) = doc.tables.last_mut() {
                            t.layout = attr(e, "w:type");
                        }
                    }
                    b"w:tr" => {
                        if let Some(t) = doc.tables.last_mut() {
                            t.rows.push(ParsedRow::default());
                        }
                    }
                    b"w:trHeight" => {
                        if let Some(row) = doc.tables.last_mut().and_then(|t| t.rows.last_mut()) {
                            row.height = Some((
                                attr_u32(e, "w:val").unwrap_or(0),
                                attr(e, "w:hRule").unwrap_or_default(),
                            ));
                        }
                    }
                    b"w:tc" => {
                        in_cell = true;
                        if let Some(row) = doc.tables.last_mut().and_then(|t| t.rows.last_mut()) {
                            row.cells.push(ParsedCell { span: 1, ..Default::default() });
                        }
                    }
                    b"w:tcW" => {
                        if let Some(cell) = current_cell(&mut doc) {
                            cell.width = attr_u32(e, "w:w");
                        }
                    }
                    b"w:gridSpan" => {
                        if let Some(cell) = current_cell(&mut doc) {
                            cell.span = attr_u32(e, "w:val").unwrap_or(1);
                        }
                    }
                    b"w:p" => {
                        paragraph = Some(ParsedParagraph::default());
                        if is_empty {
                            finish_paragraph(&mut doc, paragraph.take(), table_depth, in_cell);
                        }
                    }
                    b"w:pPr" if !is_empty => in_ppr = true,
                    b"w:jc" if in_ppr => {
                        if let Some(p) = paragraph.as_mut() {
                            p.alignment = attr(e, "w:val");
                        }
                    }
                    b"w:r" => run = Some(ParsedRun::default()),
                    b"w:b" => {
                        if let Some(r) = run.as_mut() {
                            r.bold = attr(e, "w:val").map_or(true, |v| v != "0");
                        }
                    }
                    b"w:u" => {
                        if let Some(r) = run.as_mut() {
                            r.underline = attr(e, "w:val").map_or(true, |v| v != "none");
                        }
                    }
                    b"w:br" => {
                        if let Some(r) = run.as_mut() {
                            r.text.push('\n');
                        }
                    }
                    b"w:tab" => {
                        if let Some(r) = run.as_mut() {
                            r.text.push('\t');
                        }
                    }
                    b"w:t" if !is_empty => in_text = true,
                    b"w:pgSz" => doc.page_width = attr_u32(e, "w:w").unwrap_or(0),
                    b"w:pgMar" => {
                        doc.margin_left = attr_u32(e, "w:left").unwrap_or(0);
                        doc.margin_right = attr_u32(e, "w:right").unwrap_or(0);
                    }
                    _ => {}
                }
            }
            Event::Text(ref t) if in_text => {
                if let Some(r) = run.as_mut() {
                    r.text.push_str(&t.unescape().expect("valid text"));
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:pPr" => in_ppr = false,
                b"w:r" => {
                    if let (Some(p), Some(r)) = (paragraph.as_mut(), run.take()) {
                        p.runs.push(r);
                    }
                }
                b"w:p" => finish_paragraph(&mut doc, paragraph.take(), table_depth, in_cell),
                b"w:tc" => in_cell = false,
                b"w:tbl" => table_depth -= 1,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    doc
}

fn current_cell(doc: &mut ParsedDocument) -> Option<&mut ParsedCell> {
    doc.tables
        .last_mut()
        .and_then(|t| t.rows.last_mut())
        .and_then(|r| r.cells.last_mut())
}

fn finish_paragraph(
    doc: &mut ParsedDocument,
    paragraph: Option<ParsedParagraph>,
    table_depth: usize,
    in_cell: bool,
) {
    let Some(paragraph) = paragraph else { return };
    if in_cell {
        if let Some(cell) = current_cell(doc) {
            cell.paragraph = paragraph;
        }
    } else if table_depth == 0 {
        doc.paragraphs.push(paragraph);
    }
}
