//! Typed resume model: each known section parsed into the body shape it renders as.

use serde::Serialize;
use tracing::debug;

use crate::formatter::entries::{split_entries, Entry};
use crate::formatter::header::Header;
use crate::formatter::lists::parse_items;
use crate::formatter::segment::{segment, Sections, IMPLICIT_SUMMARY};
use crate::formatter::skills::{parse_skills, SkillCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Education,
    WorkExperience,
    Projects,
}

/// The sections the template knows how to render, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ProfessionalSummary,
    Education,
    WorkExperience,
    Projects,
    Skills,
    Languages,
    Certifications,
    Interests,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::ProfessionalSummary,
        SectionKind::Education,
        SectionKind::WorkExperience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Certifications,
        SectionKind::Interests,
    ];

    /// Lowercased header name as produced by segmentation.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::ProfessionalSummary => IMPLICIT_SUMMARY,
            SectionKind::Education => "education",
            SectionKind::WorkExperience => "work experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::Certifications => "certifications",
            SectionKind::Interests => "interests",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::ProfessionalSummary => "Professional Summary",
            SectionKind::Education => "Education",
            SectionKind::WorkExperience => "Work Experience",
            SectionKind::Projects => "Key Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Languages => "Languages",
            SectionKind::Certifications => "Certifications",
            SectionKind::Interests => "Interests",
        }
    }

    pub fn column(self) -> Column {
        match self {
            SectionKind::ProfessionalSummary
            | SectionKind::Education
            | SectionKind::WorkExperience
            | SectionKind::Projects => Column::Left,
            SectionKind::Skills
            | SectionKind::Languages
            | SectionKind::Certifications
            | SectionKind::Interests => Column::Right,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    fn parse_body(self, raw: &str) -> SectionBody {
        match self {
            SectionKind::ProfessionalSummary => SectionBody::Summary(raw.to_string()),
            SectionKind::Education => {
                SectionBody::Entries(EntryKind::Education, split_entries(raw))
            }
            SectionKind::WorkExperience => {
                SectionBody::Entries(EntryKind::WorkExperience, split_entries(raw))
            }
            SectionKind::Projects => SectionBody::Entries(EntryKind::Projects, split_entries(raw)),
            SectionKind::Skills => SectionBody::Skills(parse_skills(raw)),
            SectionKind::Languages | SectionKind::Certifications | SectionKind::Interests => {
                SectionBody::Items(parse_items(raw))
            }
        }
    }
}

/// Parsed section content, one variant per rendering shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Summary(String),
    Entries(EntryKind, Vec<Entry>),
    Skills(Vec<SkillCategory>),
    Items(Vec<String>),
}

impl SectionBody {
    pub fn is_empty(&self) -> bool {
        match self {
            SectionBody::Summary(text) => text.is_empty(),
            SectionBody::Entries(_, entries) => entries.is_empty(),
            SectionBody::Skills(categories) => categories.is_empty(),
            SectionBody::Items(items) => items.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub body: SectionBody,
}

/// A resume ready for layout. Sections are in template order; empty ones are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeDocument {
    pub header: Header,
    pub sections: Vec<Section>,
    /// Segmented sections the template does not render.
    pub unrendered: Vec<String>,
}

impl ResumeDocument {
    pub fn build(resume_text: &str, header: Header) -> Self {
        Self::from_sections(&segment(resume_text), header)
    }

    pub fn from_sections(sections: &Sections, header: Header) -> Self {
        let parsed: Vec<Section> = SectionKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let body = kind.parse_body(sections.get(kind.key())?);
                (!body.is_empty()).then_some(Section { kind, body })
            })
            .collect();

        let unrendered: Vec<String> = sections
            .names()
            .filter(|name| SectionKind::from_key(name).is_none())
            .map(String::from)
            .collect();
        if !unrendered.is_empty() {
            debug!("Sections without a template slot: {:?}", unrendered);
        }

        Self {
            header,
            sections: parsed,
            unrendered,
        }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionBody> {
        self.sections
            .iter()
            .find(|section| section.kind == kind)
            .map(|section| &section.body)
    }

    pub fn column(&self, column: Column) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |section| section.kind.column() == column)
    }
}
