use std::collections::HashSet;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::ReferenceFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMatch {
    pub name: String,
    pub content: String,
}

/// Title of a reference file: its name without the final extension.
pub fn reference_title(name: &str) -> &str {
    let trimmed = name.trim();
    match trimmed.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.trim(),
        _ => trimmed,
    }
}

/// Reference files whose title appears in the text as a whole word, any case.
///
/// Each file name is reported at most once, in reference-list order.
pub fn find_context_matches(text: &str, files: &[ReferenceFile]) -> Vec<ContextMatch> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matches = Vec::new();

    for file in files {
        if seen.contains(file.name.as_str()) {
            continue;
        }
        let title = reference_title(&file.name);
        if title.is_empty() {
            continue;
        }
        let pattern = format!(r"\b{}\b", regex::escape(title));
        let Ok(title_re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
            continue;
        };
        if title_re.is_match(text) {
            seen.insert(file.name.as_str());
            matches.push(ContextMatch {
                name: file.name.clone(),
                content: file.content.clone(),
            });
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ReferenceFile {
        ReferenceFile::new(name, format!("notes on {name}"))
    }

    #[test]
    fn matches_whole_words_case_insensitively() {
        let files = vec![file("Eldoria.md"), file("Kael.txt"), file("Ash")];
        let found = find_context_matches("The road to eldoria was long. Ashes fell.", &files);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Eldoria.md");
        assert_eq!(found[0].content, "notes on Eldoria.md");
    }

    #[test]
    fn duplicate_names_are_reported_once() {
        let files = vec![file("Eldoria.md"), file("Eldoria.md")];
        assert_eq!(find_context_matches("Eldoria burns.", &files).len(), 1);
    }

    #[test]
    fn titles_drop_only_the_last_extension() {
        assert_eq!(reference_title("Eldoria.md"), "Eldoria");
        assert_eq!(reference_title("Dr. Vance.notes.md"), "Dr. Vance.notes");
        assert_eq!(reference_title(".hidden"), ".hidden");
        assert_eq!(reference_title("Kael"), "Kael");
    }
}
