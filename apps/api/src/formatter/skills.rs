//! Skills parsing: `• Category: a, b` lines switch the active category,
//! `•`/`-` lines add skills, and bare lines continue the last skill.

use serde::Serialize;

use crate::formatter::{strip_marker, BULLET, DASH};

/// Active category before any `• Category:` line is seen.
pub const GENERAL_CATEGORY: &str = "General";

/// Phrases the model likes to put in category labels; removed for display.
const LABEL_NOISE: &[&str] = &["Proficient in", "Experienced with", "Proficient with"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn is_general(&self) -> bool {
        self.name == GENERAL_CATEGORY
    }

    /// Label shown before the skill list, with noise phrases and colons removed.
    pub fn display_label(&self) -> String {
        let mut label = self.name.clone();
        for noise in LABEL_NOISE {
            label = label.replace(noise, "");
        }
        label.trim().trim_end_matches(':').to_string()
    }
}

/// Parses a skills section body into categories in first-seen order.
pub fn parse_skills(body: &str) -> Vec<SkillCategory> {
    let mut parser = SkillsParser::default();
    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        parser.line(line);
    }
    parser.categories
}

struct SkillsParser {
    categories: Vec<SkillCategory>,
    active: String,
    /// `(category index, skill index)` of the last skill added since the last `•` line.
    last: Option<(usize, usize)>,
}

impl Default for SkillsParser {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            active: GENERAL_CATEGORY.to_string(),
            last: None,
        }
    }
}

impl SkillsParser {
    fn line(&mut self, line: &str) {
        if line.starts_with(BULLET) {
            self.last = None;
            let text = strip_marker(line, BULLET);
            match text.split_once(':') {
                Some((category, value)) => {
                    self.active = category.trim().to_string();
                    for skill in value.split(',') {
                        self.add(skill);
                    }
                }
                None => self.add(text),
            }
        } else if line.starts_with(DASH) {
            self.push(strip_marker(line, DASH));
        } else if let Some((category, skill)) = self.last {
            let last = &mut self.categories[category].skills[skill];
            last.push(' ');
            last.push_str(line);
        }
    }

    /// Adds a comma fragment or bullet value; empty ones are skipped.
    fn add(&mut self, skill: &str) {
        let skill = skill.trim();
        if !skill.is_empty() {
            self.push(skill);
        }
    }

    fn push(&mut self, skill: &str) {
        let index = match self
            .categories
            .iter()
            .position(|category| category.name == self.active)
        {
            Some(index) => index,
            None => {
                self.categories.push(SkillCategory {
                    name: self.active.clone(),
                    skills: Vec::new(),
                });
                self.categories.len() - 1
            }
        };

        let skills = &mut self.categories[index].skills;
        skills.push(skill.to_string());
        self.last = Some((index, skills.len() - 1));
    }
}
