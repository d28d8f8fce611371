use itertools::Itertools;

use crate::tag::format_tag;
use crate::{BookEntry, Highlight};

/// Day One swaps this token for the file passed with `-a`.
pub const ATTACHMENT_PLACEHOLDER: &str = "[{attachment}]";

/// Renders one book as the markdown body of a journal entry.
///
/// `has_image` adds the cover image placeholder; it should only be set when an
/// image is actually attached to the entry.
pub fn compose_entry(book: &BookEntry, has_image: bool) -> String {
    let mut out = format!("# {}\n\n", book.title);

    out.push_str("## Metadata\n\n");
    let metadata = [
        ("Author", &book.author),
        ("Category", &book.category),
        ("Source", &book.source),
        ("URL", &book.source_url),
    ];
    for (label, value) in metadata {
        if let Some(value) = value {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }
    if let Some(summary) = &book.summary {
        out.push_str(&format!("\nSummary: {}\n", summary));
    }
    out.push('\n');

    if has_image {
        out.push_str(&format!("Cover Image:\n{}\n\n", ATTACHMENT_PLACEHOLDER));
    }

    out.push_str("## Highlights\n\n");
    for highlight in &book.highlights {
        push_highlight(&mut out, highlight);
    }

    out
}

fn push_highlight(out: &mut String, highlight: &Highlight) {
    out.push_str(&format!("> {}\n\n", highlight.text));

    if !highlight.tags.is_empty() {
        let tags = highlight.tags.iter().map(format_tag).join(" ");
        out.push_str(&format!("Tags: {}\n\n", tags));
    }

    if let Some(note) = &highlight.note {
        out.push_str(&format!("Note: {}\n\n", note));
    }
}
