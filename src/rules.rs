use crate::models::Rule;

/// Parse rule-definition text into an ordered rule list.
///
/// One rule per line, `KEYWORD => CATEGORY`. Blank lines and `#` comments are
/// skipped; lines without `=>` or with an empty side are dropped without
/// complaint and parsing continues. Source line order is the match priority.
pub fn parse_rules(text: &str) -> Vec<Rule> {
    let mut rules = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((lhs, rhs)) = line.split_once("=>") else {
            continue;
        };
        let keyword = lhs.trim().to_lowercase();
        let category = rhs.trim().to_uppercase();
        if keyword.is_empty() || category.is_empty() {
            continue;
        }
        rules.push(Rule { keyword, category });
    }
    rules
}

/// Ordered token match: every whitespace-separated keyword token must appear
/// as a substring of the description, in order, with each search starting at
/// the end of the previous match. Looser than whole-phrase matching, stricter
/// than bag-of-words. Both arguments are expected pre-lowercased.
pub fn matches(description_lower: &str, keyword_lower: &str) -> bool {
    let mut pos = 0;
    let mut matched_any = false;
    for token in keyword_lower.split_whitespace() {
        match description_lower[pos..].find(token) {
            Some(offset) => {
                pos += offset + token.len();
                matched_any = true;
            }
            None => return false,
        }
    }
    matched_any
}

/// Rewrite rule text so `keyword` maps to `category`: replaces the first line
/// whose parsed keyword matches, or appends a new line. Comments, blank
/// lines, and unrelated rules are left untouched.
pub fn upsert_rule(text: &str, keyword: &str, category: &str) -> String {
    let keyword = keyword.trim();
    let category = category.trim().to_uppercase();
    let needle = keyword.to_lowercase();

    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let mut replaced = false;
    for line in lines.iter_mut() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((lhs, _)) = trimmed.split_once("=>") else {
            continue;
        };
        if lhs.trim().to_lowercase() == needle {
            *line = format!("{keyword} => {category}");
            replaced = true;
            break;
        }
    }
    if !replaced {
        lines.push(format!("{keyword} => {category}"));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
