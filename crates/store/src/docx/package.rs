//! Package manifest
//!
//! A form package always holds the same three content parts. Each part is
//! listed once below with its content type and the relationship that
//! reaches it; `[Content_Types].xml` and both `.rels` parts are derived
//! from that list, so they cannot disagree with what the writer emits.

const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const PACKAGE_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const OFFICE_RELS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Content type of every `.rels` part
pub const RELATIONSHIPS_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-package.relationships+xml";

/// Archive path of the content types part
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// Which part a relationship hangs off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelsOwner {
    /// The package root (`_rels/.rels`)
    Package,
    /// The main document part (`word/_rels/document.xml.rels`)
    Document,
}

impl RelsOwner {
    /// Archive path of this owner's relationship part
    pub fn rels_path(self) -> &'static str {
        match self {
            RelsOwner::Package => "_rels/.rels",
            RelsOwner::Document => "word/_rels/document.xml.rels",
        }
    }

    /// Directory relationship targets are resolved against
    fn base_dir(self) -> &'static str {
        match self {
            RelsOwner::Package => "",
            RelsOwner::Document => "word/",
        }
    }
}

/// One content part of the package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackagePart {
    /// Path inside the archive, without a leading slash
    pub path: &'static str,
    pub content_type: &'static str,
    pub owner: RelsOwner,
    /// Relationship type suffix under the officeDocument namespace
    pub relationship: &'static str,
}

impl PackagePart {
    fn relationship_type(&self) -> String {
        format!("{}/{}", OFFICE_RELS, self.relationship)
    }

    /// Target relative to the owning part's directory
    fn target(&self) -> &'static str {
        self.path
            .strip_prefix(self.owner.base_dir())
            .unwrap_or(self.path)
    }
}

pub const DOCUMENT_PART: PackagePart = PackagePart {
    path: "word/document.xml",
    content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
    owner: RelsOwner::Package,
    relationship: "officeDocument",
};

pub const STYLES_PART: PackagePart = PackagePart {
    path: "word/styles.xml",
    content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
    owner: RelsOwner::Document,
    relationship: "styles",
};

pub const SETTINGS_PART: PackagePart = PackagePart {
    path: "word/settings.xml",
    content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml",
    owner: RelsOwner::Document,
    relationship: "settings",
};

/// Every content part, in the order it is written
pub const PARTS: [PackagePart; 3] = [DOCUMENT_PART, STYLES_PART, SETTINGS_PART];

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// `[Content_Types].xml`: extension defaults, then one override per part
pub fn content_types_xml() -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<Types xmlns="{}">"#, CONTENT_TYPES_NS));
    xml.push_str(&format!(
        r#"<Default Extension="rels" ContentType="{}"/>"#,
        RELATIONSHIPS_CONTENT_TYPE
    ));
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    for part in &PARTS {
        xml.push_str(&format!(
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            part.path, part.content_type
        ));
    }

    xml.push_str("</Types>");
    xml
}

/// Relationship part for `owner`. Ids are numbered in part order.
pub fn rels_xml(owner: RelsOwner) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, PACKAGE_RELS_NS));

    for (index, part) in PARTS.iter().filter(|p| p.owner == owner).enumerate() {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
            index + 1,
            part.relationship_type(),
            part.target()
        ));
    }

    xml.push_str("</Relationships>");
    xml
}
