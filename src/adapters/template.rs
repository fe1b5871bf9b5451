use crate::domain::model::Participant;
use crate::utils::error::{Result, SantaError};
use regex::{Captures, Regex};

pub const DEFAULT_TEMPLATE: &str = r#"<html>
<body>
<p>Ho ho ho!</p>
<p>This year you are the Secret Santa of <strong>{{name}}</strong>.</p>
<p>Here is {{pronoun}} wishlist:</p>
<ul>
{{#wishlist}}<li>{{.}}</li>
{{/wishlist}}</ul>
</body>
</html>
"#;

const WISHLIST_OPEN: &str = "{{#wishlist}}";
const WISHLIST_CLOSE: &str = "{{/wishlist}}";
const NO_WISHLIST: &str = "(not available)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    pub name: String,
    pub pronoun: &'static str,
    pub wishlist: Vec<String>,
}

impl TemplateData {
    pub fn for_recipient(recipient: &Participant) -> Self {
        let mut wishlist = recipient.wishlist_items();
        if wishlist.is_empty() {
            wishlist.push(NO_WISHLIST.to_string());
        }

        Self {
            name: recipient.name.clone(),
            pronoun: pronoun_for(&recipient.gender),
            wishlist,
        }
    }
}

pub fn pronoun_for(gender: &str) -> &'static str {
    match gender.trim().to_ascii_lowercase().as_str() {
        "male" | "m" => "his",
        "female" | "f" => "her",
        _ => "their",
    }
}

/// Mail body template.
///
/// `{{name}}` and `{{pronoun}}` are replaced by the recipient's values, and
/// the `{{#wishlist}}...{{/wishlist}}` block is repeated once per wishlist
/// item with `{{.}}` standing for the item. `{{name}}` and `{{pronoun}}` also
/// work inside the block. Unknown placeholders stay as they are. Every
/// substituted value is HTML-escaped.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    source: String,
    tokens: Regex,
    placeholders: Regex,
}

impl EmailTemplate {
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();

        let opens = source.matches(WISHLIST_OPEN).count();
        let closes = source.matches(WISHLIST_CLOSE).count();
        if opens != closes {
            return Err(SantaError::TemplateError {
                message: format!(
                    "{} opened {} time(s) but {} closed {} time(s)",
                    WISHLIST_OPEN, opens, WISHLIST_CLOSE, closes
                ),
            });
        }

        // 單次掃描，代入的值不會再被當成 placeholder
        let tokens = compile(r"(?s)\{\{#wishlist\}\}(.*?)\{\{/wishlist\}\}|\{\{\s*(\.|\w+)\s*\}\}")?;
        let placeholders = compile(r"\{\{\s*(\.|\w+)\s*\}\}")?;

        Ok(Self {
            source,
            tokens,
            placeholders,
        })
    }

    pub fn default_template() -> Result<Self> {
        Self::parse(DEFAULT_TEMPLATE)
    }

    pub fn render(&self, data: &TemplateData) -> String {
        self.tokens
            .replace_all(&self.source, |caps: &Captures| {
                if let Some(body) = caps.get(1) {
                    return data
                        .wishlist
                        .iter()
                        .map(|item| self.render_item(body.as_str(), data, item))
                        .collect::<String>();
                }

                substitute(&caps[0], &caps[2], data, None)
            })
            .into_owned()
    }

    fn render_item(&self, body: &str, data: &TemplateData, item: &str) -> String {
        self.placeholders
            .replace_all(body, |caps: &Captures| {
                substitute(&caps[0], &caps[1], data, Some(item))
            })
            .into_owned()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SantaError::TemplateError {
        message: e.to_string(),
    })
}

// `{{.}}` 只在 wishlist 區塊裡有意義，區塊外原樣保留
fn substitute(raw: &str, key: &str, data: &TemplateData, item: Option<&str>) -> String {
    match (key, item) {
        ("name", _) => escape_html(&data.name),
        ("pronoun", _) => data.pronoun.to_string(),
        (".", Some(item)) => escape_html(item),
        _ => raw.to_string(),
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
