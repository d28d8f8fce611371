use serde::Deserialize;

/// A highlight tag as it appears in the export, either a bare name or the
/// `{ "id": .., "name": .. }` object form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Name(String),
    Object {
        #[serde(default)]
        name: String,
    },
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Name(name) => name,
            Tag::Object { name } => name,
        }
    }
}

const TAG_DISPLAY: &[(&str, &str)] = &[
    ("inspiration", "💡 Inspiration"),
    ("ai", "🤖 AI"),
    ("insight", "🤔 Insight"),
];

const UNKNOWN_TAG_EMOJI: &str = "❓";

/// Display string for a tag: the known emoji label, or `❓ <Title Cased>`.
pub fn format_tag(tag: &Tag) -> String {
    let name = tag.name().to_lowercase();

    TAG_DISPLAY
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| format!("{} {}", UNKNOWN_TAG_EMOJI, title_case(&name)))
}

/// Uppercases a character that follows an uncased one and lowercases the
/// rest, so uncased scripts and punctuation both start a new word.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_is_cased = false;

    for c in input.chars() {
        if previous_is_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_cased = c.is_uppercase() || c.is_lowercase();
    }

    out
}
