//! Contact block shown above the resume body. Values pass through verbatim.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl Contact {
    /// Parses `email | phone | location`; fields are positional and any may be blank.
    pub fn parse(contact_info: &str) -> Self {
        let mut fields = contact_info.split('|').map(str::trim);
        let mut next = || fields.next().filter(|f| !f.is_empty()).map(String::from);
        Self {
            email: next(),
            phone: next(),
            location: next(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl SocialLinks {
    /// Blank strings count as absent.
    pub fn new(
        github: Option<String>,
        linkedin: Option<String>,
        portfolio: Option<String>,
    ) -> Self {
        let present = |link: Option<String>| link.filter(|l| !l.trim().is_empty());
        Self {
            github: present(github),
            linkedin: present(linkedin),
            portfolio: present(portfolio),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub contact: Contact,
    pub links: SocialLinks,
}

impl Header {
    pub fn new(name: impl Into<String>, contact_info: &str) -> Self {
        Self {
            name: name.into(),
            contact: Contact::parse(contact_info),
            links: SocialLinks::default(),
        }
    }

    pub fn with_links(mut self, links: SocialLinks) -> Self {
        self.links = links;
        self
    }
}
