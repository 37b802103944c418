//! HTML fragments for each section region.
//!
//! Plain text fields are escaped. Descriptions and free-form `content` are
//! author-written markup and are inserted as-is.

use std::fmt::Write;

use crate::engine::view::TagControl;
use crate::models::resume::{
    AboutItem, ContactItem, ContentKind, Education, Experience, ExperienceContent, Project, Skill,
};

const LINK_ARROW: &str = r#"<span class="link-arrow">↗</span>"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn paragraph(markup: &str) -> String {
    format!(r#"<p class="entry-body">{markup}</p>"#)
}

fn entry_header(title: &str, subtitle: Option<&str>) -> String {
    let mut header = format!(r#"<header><h3 class="entry-title">{title}</h3>"#);
    if let Some(sub) = subtitle.filter(|s| !s.is_empty()) {
        let _ = write!(header, r#"<p class="entry-subtitle">{sub}</p>"#);
    }
    header.push_str("</header>");
    header
}

fn link(url: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" class="link">{} {LINK_ARROW}</a>"#,
        escape_html(url),
        escape_html(text)
    )
}

/// `a | b`, skipping empty parts.
fn joined_subtitle(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .map(|p| escape_html(p))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn experience_body(content: Option<&ExperienceContent>, kind: ContentKind) -> String {
    match (kind, content) {
        (ContentKind::List, Some(ExperienceContent::Items(items))) => {
            let mut list = String::from(r#"<ul class="entry-list">"#);
            for item in items {
                let _ = write!(list, r#"<li><span class="bullet">›</span>{item}</li>"#);
            }
            list.push_str("</ul>");
            list
        }
        (_, Some(content)) => {
            let text = content.as_text();
            if text.is_empty() {
                String::new()
            } else {
                paragraph(&text)
            }
        }
        (_, None) => String::new(),
    }
}

pub fn experience(entries: &[Experience]) -> String {
    entries
        .iter()
        .map(|exp| {
            let subtitle = joined_subtitle(&[Some(exp.period.as_str()), Some(exp.role.as_str())]);
            format!(
                r#"<section class="entry">{}{}</section>"#,
                entry_header(&escape_html(&exp.company), Some(subtitle.as_str())),
                experience_body(exp.content.as_ref(), exp.kind)
            )
        })
        .collect()
}

pub fn education(entries: &[Education]) -> String {
    entries
        .iter()
        .map(|edu| {
            let subtitle = joined_subtitle(&[Some(edu.period.as_str()), Some(edu.degree.as_str())]);
            let body = edu
                .content
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(paragraph)
                .unwrap_or_default();
            format!(
                r#"<section class="entry">{}{body}</section>"#,
                entry_header(&escape_html(&edu.institution), Some(subtitle.as_str())),
            )
        })
        .collect()
}

pub fn projects(entries: &[&Project]) -> String {
    entries
        .iter()
        .map(|proj| {
            let title = match proj.url.as_deref() {
                Some(url) => link(url, &proj.name),
                None => escape_html(&proj.name),
            };
            let subtitle = joined_subtitle(&[proj.period.as_deref(), proj.tech.as_deref()]);
            format!(
                r#"<section class="entry">{}{}</section>"#,
                entry_header(&title, Some(subtitle.as_str())),
                paragraph(&proj.description)
            )
        })
        .collect()
}

pub fn skills(entries: &[Skill]) -> String {
    entries
        .iter()
        .map(|skill| {
            let level = skill.level.as_deref().map(escape_html);
            let description = skill
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(paragraph)
                .unwrap_or_default();
            let tags: String = skill
                .tags
                .iter()
                .map(|t| format!(r#"<li class="tag">{}</li>"#, escape_html(t)))
                .collect();
            format!(
                r#"<section class="entry">{}{description}<ul class="tag-list">{tags}</ul></section>"#,
                entry_header(&escape_html(&skill.name), level.as_deref()),
            )
        })
        .collect()
}

pub fn contact(items: &[ContactItem]) -> String {
    let lines: String = items
        .iter()
        .map(|item| {
            let inner = match (item.is_link, item.url.as_deref()) {
                (true, Some(url)) => link(url, &item.text),
                _ => escape_html(&item.text),
            };
            format!(r#"<li class="contact-item">{inner}</li>"#)
        })
        .collect();
    format!(r#"<ul class="contact-list">{lines}</ul>"#)
}

/// Plain one-line-per-item contact block used on the cover letter.
pub fn contact_lines(items: &[ContactItem]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<div class="contact-line">{}</div>"#, escape_html(&item.text)))
        .collect()
}

pub fn about(items: &[AboutItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<section class="entry">{}<div class="entry-body">{}</div></section>"#,
                entry_header(&escape_html(&item.title), Some(escape_html(&item.period).as_str())),
                item.description
            )
        })
        .collect()
}

pub fn filters(tags: &[TagControl]) -> String {
    tags.iter()
        .map(|t| {
            let class = if t.active { "tag-button active" } else { "tag-button" };
            let tag = escape_html(&t.tag);
            format!(
                r#"<form method="post" action="/filter" class="inline"><input type="hidden" name="tag" value="{tag}"><button type="submit" class="{class}">{tag}</button></form>"#
            )
        })
        .collect()
}

pub fn languages<'a>(codes: impl IntoIterator<Item = &'a str>, current: &str) -> String {
    codes
        .into_iter()
        .map(|code| {
            let class = if code == current { "lang-button active" } else { "lang-button" };
            let code = escape_html(code);
            format!(
                r#"<form method="post" action="/language" class="inline"><input type="hidden" name="code" value="{code}"><button type="submit" class="{class}">{}</button></form>"#,
                code.to_uppercase()
            )
        })
        .collect()
}

pub fn themes<'a>(names: impl IntoIterator<Item = &'a str>, current: &str) -> String {
    let options: String = names
        .into_iter()
        .map(|name| {
            let selected = if name == current { " selected" } else { "" };
            let name = escape_html(name);
            format!(r#"<option value="{name}"{selected}>{name}</option>"#)
        })
        .collect();
    if options.is_empty() {
        return String::new();
    }
    format!(
        r#"<form method="post" action="/theme" class="inline"><select id="theme-select" name="theme">{options}</select><button type="submit" class="theme-button">✓</button></form>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_list_experience_renders_items() {
        let exp = Experience {
            company: "Acme & Co".to_string(),
            period: "2020".to_string(),
            role: "Dev".to_string(),
            content: Some(ExperienceContent::Items(vec!["One".into(), "Two".into()])),
            kind: ContentKind::List,
        };
        let html = experience(&[exp]);
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains("2020 | Dev"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_text_kind_with_list_content_becomes_paragraph() {
        let exp = Experience {
            company: "Acme".to_string(),
            period: String::new(),
            role: "Dev".to_string(),
            content: Some(ExperienceContent::Items(vec!["One".into(), "Two".into()])),
            kind: ContentKind::Text,
        };
        let html = experience(&[exp]);
        assert!(html.contains(r#"<p class="entry-body">One, Two</p>"#));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_project_without_url_or_tech() {
        let proj = Project {
            name: "bare".to_string(),
            url: None,
            period: Some("2020".to_string()),
            tech: None,
            tags: None,
            description: "Plain.".to_string(),
        };
        let html = projects(&[&proj]);
        assert!(!html.contains("<a "));
        assert!(html.contains(r#"<p class="entry-subtitle">2020</p>"#));
    }

    #[test]
    fn test_skill_with_empty_description_has_no_paragraph() {
        let skill = Skill {
            name: "Rust".to_string(),
            level: Some("Expert".to_string()),
            description: Some(String::new()),
            tags: vec!["Backend".to_string()],
        };
        let html = skills(&[skill]);
        assert!(!html.contains("entry-body"));
        assert!(html.contains(r#"<li class="tag">Backend</li>"#));
    }

    #[test]
    fn test_contact_link_requires_url() {
        let items = vec![
            ContactItem { text: "site".into(), is_link: true, url: Some("https://x.dev".into()) },
            ContactItem { text: "broken".into(), is_link: true, url: None },
        ];
        let html = contact(&items);
        assert!(html.contains(r#"<a href="https://x.dev""#));
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_filters_mark_active_and_escape() {
        let tags = vec![
            TagControl { tag: "All".into(), active: false },
            TagControl { tag: "C++ & co".into(), active: true },
        ];
        let html = filters(&tags);
        assert!(html.contains(r#"value="C++ &amp; co""#));
        assert_eq!(html.matches("tag-button active").count(), 1);
    }

    #[test]
    fn test_themes_empty_without_names() {
        assert_eq!(themes(std::iter::empty(), "default"), "");
        let html = themes(["dark", "default"], "default");
        assert!(html.contains(r#"<option value="default" selected>"#));
        assert!(html.contains(r#"<option value="dark">"#));
    }
}
