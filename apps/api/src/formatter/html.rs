//! HTML assembly: header block plus a fixed two-column body with inline styles.
//!
//! Text is inserted verbatim; the renderer receiving this document is trusted
//! with whatever markup the resume text carries.

use std::fmt::Write;

use crate::formatter::document::{
    Column, EntryKind, ResumeDocument, Section, SectionBody, SectionKind,
};
use crate::formatter::entries::{DetailKind, Entry};
use crate::formatter::header::Header;
use crate::formatter::skills::SkillCategory;
use crate::formatter::BULLET;

/// Page and typography rules for print rendering.
pub const STYLESHEET: &str = r#"
@page { size: letter; margin: 0.5in; }
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
    line-height: 1.6;
    color: #2d3748;
    background-color: #fff;
}
.resume { max-width: 7.5in; margin: 0 auto; background-color: white; }
.header {
    margin-bottom: 30px;
    border-bottom: 2px solid #f0f0f0;
    padding-bottom: 20px;
    text-align: center;
}
.name {
    font-size: 28px;
    font-weight: 700;
    color: #2b6cb0;
    margin-bottom: 5px;
    letter-spacing: 0.5px;
}
.header-content {
    display: flex;
    justify-content: center;
    align-items: center;
    flex-wrap: wrap;
    gap: 15px;
    font-size: 14px;
    margin-top: 15px;
}
.header-content div { display: inline-flex; align-items: center; }
.header-content i { margin-right: 5px; color: #3498db; }
.header-content a {
    color: #3498db;
    text-decoration: none;
    display: inline-flex;
    align-items: center;
}
.content { display: grid; grid-template-columns: 65% 35%; gap: 25px; }
.section { margin-bottom: 20px; page-break-inside: avoid; }
.section-title {
    font-size: 16px;
    font-weight: 700;
    color: #2b6cb0;
    margin-bottom: 12px;
    padding-bottom: 4px;
    border-bottom: 1px solid #e2e8f0;
    text-transform: uppercase;
    letter-spacing: 1px;
}
.experience-item, .education-item, .project-item { margin-bottom: 16px; page-break-inside: avoid; }
.job-title, .degree, .project-title {
    font-weight: 600;
    font-size: 14px;
    color: #1a202c;
    margin-bottom: 3px;
}
.company, .school { font-weight: 500; color: #4299e1; font-size: 13px; }
.date { font-size: 12px; color: #718096; margin-bottom: 6px; font-style: italic; }
.job-description p, .project-details p { font-size: 12px; margin-bottom: 4px; line-height: 1.5; }
.achievement { position: relative; padding-left: 12px; }
.bullet { position: absolute; left: 0; color: #4299e1; }
.skills-list, .languages-list, .interests-list { list-style-type: none; padding: 0; margin: 0; }
.skill-item { margin-bottom: 8px; font-size: 12px; line-height: 1.5; word-wrap: break-word; }
.skill-category { font-weight: 600; color: #1a202c; margin-right: 4px; }
.item { margin-bottom: 8px; font-size: 12px; line-height: 1.5; }
.summary { font-size: 12px; line-height: 1.6; margin-bottom: 10px; text-align: justify; }
.project-info { font-size: 12px; color: #718096; font-style: italic; margin-bottom: 5px; }
@media print {
    body { background-color: white; padding: 0; }
    .resume { box-shadow: none; }
}
"#;

/// Which CSS classes an entry section uses, and how plain detail lines are labelled.
struct EntryLayout {
    item_class: &'static str,
    title_class: &'static str,
    details_class: Option<&'static str>,
    /// Classes for the first, second, ... plain detail line.
    plain_roles: &'static [&'static str],
    /// Class for plain lines past `plain_roles`.
    plain_fallback: Option<&'static str>,
}

impl EntryLayout {
    fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::WorkExperience => Self {
                item_class: "experience-item",
                title_class: "job-title",
                details_class: Some("job-description"),
                plain_roles: &["company", "date"],
                plain_fallback: None,
            },
            EntryKind::Education => Self {
                item_class: "education-item",
                title_class: "degree",
                details_class: None,
                plain_roles: &["school", "date"],
                plain_fallback: None,
            },
            EntryKind::Projects => Self {
                item_class: "project-item",
                title_class: "project-title",
                details_class: Some("project-details"),
                plain_roles: &[],
                plain_fallback: Some("project-info"),
            },
        }
    }

    fn plain_class(&self, plain_index: usize) -> Option<&'static str> {
        self.plain_roles
            .get(plain_index)
            .copied()
            .or(self.plain_fallback)
    }
}

/// Renders the full HTML document.
pub fn render(document: &ResumeDocument) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(
        html,
        "<title>Professional Resume - {}</title>",
        document.header.name
    );
    let _ = writeln!(html, "<style>{STYLESHEET}</style>");
    html.push_str("</head>\n<body>\n<div class=\"resume\">\n");

    html.push_str(&render_header(&document.header));

    html.push_str("<div class=\"content\">\n");
    for (column, class) in [(Column::Left, "left-column"), (Column::Right, "right-column")] {
        let _ = writeln!(html, "<div class=\"{class}\">");
        for section in document.column(column) {
            html.push_str(&render_section(section));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}

/// Name plus a single ` | `-joined line of contact details and links.
pub fn render_header(header: &Header) -> String {
    let contact = &header.contact;
    let links = &header.links;

    let mut items: Vec<String> = [
        ("📧", &contact.email),
        ("📞", &contact.phone),
        ("📍", &contact.location),
    ]
    .into_iter()
    .filter_map(|(icon, value)| {
        value
            .as_deref()
            .map(|value| format!("<div><i>{icon}</i> {value}</div>"))
    })
    .collect();

    items.extend(
        [
            ("💻", "GitHub", &links.github),
            ("💼", "LinkedIn", &links.linkedin),
            ("🌐", "Portfolio", &links.portfolio),
        ]
        .into_iter()
        .filter_map(|(icon, label, href)| {
            href.as_deref().map(|href| {
                format!(
                    "<a href=\"{href}\" target=\"_blank\"><i class=\"icon\">{icon}</i> {label}</a>"
                )
            })
        }),
    );

    let mut html = String::from("<div class=\"header\">\n");
    let _ = writeln!(html, "<h1 class=\"name\">{}</h1>", header.name);
    if !items.is_empty() {
        let _ = writeln!(
            html,
            "<div class=\"header-content\">{}</div>",
            items.join(" | ")
        );
    }
    html.push_str("</div>\n");
    html
}

fn render_section(section: &Section) -> String {
    let content = match &section.body {
        SectionBody::Summary(text) => format!("<p class=\"summary\">{text}</p>"),
        SectionBody::Entries(kind, entries) => {
            let layout = EntryLayout::for_kind(*kind);
            entries
                .iter()
                .map(|entry| render_entry(&layout, entry))
                .collect()
        }
        SectionBody::Skills(categories) => format!(
            "<ul class=\"skills-list\">{}</ul>",
            categories.iter().map(render_skill_category).collect::<String>()
        ),
        SectionBody::Items(items) => {
            let list_class = match section.kind {
                SectionKind::Interests => "interests-list",
                _ => "languages-list",
            };
            format!(
                "<ul class=\"{list_class}\"><li class='item'>{}</li></ul>",
                items.join(", ")
            )
        }
    };

    format!(
        "<div class=\"section\"><h2 class=\"section-title\">{}</h2>{content}</div>\n",
        section.kind.title()
    )
}

fn render_entry(layout: &EntryLayout, entry: &Entry) -> String {
    let mut details = String::new();
    let mut plain_index = 0;
    for detail in &entry.details {
        match detail.kind {
            DetailKind::Achievement => {
                let _ = write!(
                    details,
                    "<p class='achievement'><span class='bullet'>{BULLET}</span>{}</p>",
                    detail.text
                );
            }
            DetailKind::Plain => {
                match layout.plain_class(plain_index) {
                    Some(class) => {
                        let _ = write!(details, "<p class='{class}'>{}</p>", detail.text);
                    }
                    None => {
                        let _ = write!(details, "<p>{}</p>", detail.text);
                    }
                }
                plain_index += 1;
            }
        }
    }

    let details = match layout.details_class {
        Some(class) => format!("<div class='{class}'>{details}</div>"),
        None => details,
    };

    format!(
        "<div class=\"{}\"><div class=\"{}\">{}</div>{details}</div>",
        layout.item_class, layout.title_class, entry.title
    )
}

fn render_skill_category(category: &SkillCategory) -> String {
    let skills = category.skills.join(", ");
    if category.is_general() {
        format!("<li class='skill-item'>{skills}</li>")
    } else {
        format!(
            "<li class='skill-item'><span class='skill-category'>{}:</span> {skills}</li>",
            category.display_label()
        )
    }
}
