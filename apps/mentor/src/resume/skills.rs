use std::collections::HashSet;

use crate::resume::normalize::normalize_line;

/// Splits skills lines into individual, normalized, deduplicated tokens.
///
/// Per line, a leading category label (`"Languages:"`) is dropped. The rest is
/// split on commas; when that gives one piece or none it is split on
/// whitespace instead, since resumes list skills either as `"Python, SQL"` or
/// as `"Python SQL"`. First occurrence wins, order is preserved.
pub fn split_skills<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for line in lines {
        for token in split_line(line.as_ref()) {
            let token = normalize_line(token);
            if token.is_empty() {
                continue;
            }
            if seen.insert(token.clone()) {
                skills.push(token);
            }
        }
    }

    skills
}

fn split_line(line: &str) -> Vec<&str> {
    let rest = match line.split_once(':') {
        Some((_label, rest)) => rest,
        None => line,
    };

    let parts: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() <= 1 {
        rest.split_whitespace().collect()
    } else {
        parts
    }
}
