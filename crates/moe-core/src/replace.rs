//! Replace one match or all matches.
//!
//! Both operations are pure: they take the current text and return the new text. Routing the
//! result through history is the caller's job (see [`crate::pane::EditorPane`]).

use crate::chars::CharIndex;
use crate::search::{SearchMatch, SearchOptions, compile_search_regex};
use regex::NoExpand;

/// Result of a replace-all pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// The document text after substitution.
    pub text: String,
    /// Number of occurrences replaced.
    pub replaced: usize,
}

/// Splice `replacement` into `text` over the current match.
///
/// Returns `None` when there is no current match or the match no longer fits the text.
/// The replacement is inserted verbatim.
pub fn replace_one(
    text: &str,
    matches: &[SearchMatch],
    current: Option<usize>,
    replacement: &str,
) -> Option<String> {
    let target = *matches.get(current?)?;
    let index = CharIndex::new(text);
    if target.is_empty() || target.end > index.char_count() {
        return None;
    }

    let range = index.byte_range(target.range());
    let mut out = String::with_capacity(text.len() - range.len() + replacement.len());
    out.push_str(&text[..range.start]);
    out.push_str(replacement);
    out.push_str(&text[range.end..]);
    Some(out)
}

/// Replace every occurrence of `query` in a single global pass.
///
/// Uses the same pattern construction as [`crate::search::find_all`]. In regex mode the
/// replacement may reference capture groups (`$1`, `${name}`); in literal mode it is inserted
/// as-is. Returns `None` when the query is empty, does not compile, or does not occur.
///
/// Zero-width matches are substituted and counted here even though
/// [`crate::search::find_all`] skips them, so `^` inserts a prefix at the start of the text.
pub fn replace_all(
    text: &str,
    query: &str,
    replacement: &str,
    options: SearchOptions,
) -> Option<ReplaceOutcome> {
    let re = match compile_search_regex(query, options) {
        Ok(Some(re)) => re,
        Ok(None) => return None,
        Err(err) => {
            tracing::debug!(%err, query, "replace-all skipped");
            return None;
        }
    };

    let replaced = re.find_iter(text).count();
    if replaced == 0 {
        return None;
    }

    let text = if options.regex {
        re.replace_all(text, replacement).into_owned()
    } else {
        re.replace_all(text, NoExpand(replacement)).into_owned()
    };

    Some(ReplaceOutcome { text, replaced })
}
