//! Render the `spdx-licenses` identifier module.
//!
//! Output is a pure function of the two identifier lists. Both lists are sorted
//! before rendering, so input order never shows up in the generated text.

use anyhow::{Context, bail};

/// Marker for a license that is not on the SPDX list.
pub const NONSTANDARD: &str = "Nonstandard";

/// Pattern fragment accepting private `LicenseRef-` references.
pub const LICENSE_REF: &str = "LicenseRef-.+";

/// Alternation body for an empty list: a class no character belongs to.
const NEVER_MATCHES: &str = r"[^\x00-\x{10FFFF}]";

const LICENSES_CONST: &str = "LICENSE_IDENTIFIERS";
const EXCEPTIONS_CONST: &str = "EXCEPTION_IDENTIFIERS";

const FOOTER: &str = r#"
static LICENSE_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LICENSE_EXPRESSION_PATTERN).expect("generated license pattern compiles")
});

/// Whether `license` is a valid SPDX license expression: a known license
/// identifier with an optional `+` and an optional `WITH` exception, the
/// [`NONSTANDARD`] marker, or a `LicenseRef-` reference.
pub fn is_match(license: &str) -> bool {
    LICENSE_EXPRESSION.is_match(license)
}

/// Closest known license identifiers to `license` by Levenshtein distance.
///
/// Returns `None` when `license` is already a known identifier, or when even
/// the best match needs as many edits as `license` has characters.
pub fn suggestions(license: &str) -> Option<Vec<&'static str>> {
    let mut by_distance: BTreeMap<usize, Vec<&'static str>> = BTreeMap::new();
    for &identifier in LICENSE_IDENTIFIERS {
        by_distance
            .entry(strsim::levenshtein(identifier, license))
            .or_default()
            .push(identifier);
    }

    let (lowest, identifiers) = by_distance.into_iter().next()?;
    if lowest == 0 || lowest >= license.chars().count() {
        return None;
    }
    Some(identifiers)
}
"#;

/// Render the complete module source for the given lists.
pub fn render(licenses: &[String], exceptions: &[String]) -> String {
    let licenses = sorted(licenses);
    let exceptions = sorted(exceptions);

    let mut out = String::new();

    out.push_str("// This file is generated by spdx-gen, any edits to this file will be discarded.\n");
    out.push_str("// Regenerate it with `cargo run -p spdx-gen-cli`.\n\n");
    out.push_str("use regex::Regex;\nuse std::collections::BTreeMap;\nuse std::sync::LazyLock;\n\n");

    out.push_str("/// Marker for a license that is not on the SPDX list.\n");
    out.push_str(&format!("pub const NONSTANDARD: &str = {NONSTANDARD:?};\n\n"));
    out.push_str("/// Pattern fragment accepting private `LicenseRef-` references.\n");
    out.push_str(&format!("pub const LICENSE_REF: &str = {LICENSE_REF:?};\n\n"));

    out.push_str("/// Software Package Data Exchange (SPDX) standard open-source software\n");
    out.push_str("/// license identifiers.\n");
    push_list(&mut out, LICENSES_CONST, &licenses);
    out.push('\n');

    out.push_str("/// SPDX exception identifiers, valid after `WITH`.\n");
    push_list(&mut out, EXCEPTIONS_CONST, &exceptions);
    out.push('\n');

    out.push_str("/// Anchored SPDX license-expression grammar over the identifier lists.\n");
    out.push_str("pub const LICENSE_EXPRESSION_PATTERN: &str = concat!(\n");
    for fragment in pattern_fragments(&licenses, &exceptions) {
        out.push_str(&format!("    {fragment:?},\n"));
    }
    out.push_str(");\n");

    out.push_str(FOOTER);
    out
}

/// The literal pieces `LICENSE_EXPRESSION_PATTERN` is concatenated from.
///
/// Identifiers are escaped and kept in the given order; one fragment per
/// identifier. The whitespace around `WITH` is ASCII only.
pub fn pattern_fragments(licenses: &[String], exceptions: &[String]) -> Vec<String> {
    let mut fragments = vec![r"\A(?:(?:".to_string()];
    push_alternation(&mut fragments, licenses);
    fragments.push(r")\+?(?:(?-u:\s)WITH(?-u:\s)(?:".to_string());
    push_alternation(&mut fragments, exceptions);
    fragments.push(format!(
        r"))?|{}|{})\z",
        regex::escape(NONSTANDARD),
        LICENSE_REF
    ));
    fragments
}

/// Read the two identifier lists back out of a rendered module.
pub fn extract_identifiers(text: &str) -> anyhow::Result<(Vec<String>, Vec<String>)> {
    let licenses = extract_list(text, LICENSES_CONST)?;
    let exceptions = extract_list(text, EXCEPTIONS_CONST)?;
    Ok((licenses, exceptions))
}

fn sorted(ids: &[String]) -> Vec<String> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids
}

fn push_list(out: &mut String, name: &str, ids: &[String]) {
    out.push_str(&format!("pub const {name}: &[&str] = &[\n"));
    for id in ids {
        out.push_str(&format!("    {id:?},\n"));
    }
    out.push_str("];\n");
}

fn push_alternation(fragments: &mut Vec<String>, ids: &[String]) {
    if ids.is_empty() {
        fragments.push(NEVER_MATCHES.to_string());
        return;
    }
    for (i, id) in ids.iter().enumerate() {
        let sep = if i == 0 { "" } else { "|" };
        fragments.push(format!("{sep}{}", regex::escape(id)));
    }
}

fn extract_list(text: &str, name: &str) -> anyhow::Result<Vec<String>> {
    let opening = format!("pub const {name}: &[&str] = &[");
    let mut lines = text.lines().skip_while(|line| *line != opening);
    if lines.next().is_none() {
        bail!("no `{name}` list found");
    }

    let mut ids = Vec::new();
    for line in lines {
        if line == "];" {
            return Ok(ids);
        }
        let literal = line.trim().trim_end_matches(',');
        let id = unescape_literal(literal)
            .with_context(|| format!("`{name}` entry is not a string literal: {line}"))?;
        ids.push(id);
    }
    bail!("`{name}` list is not terminated")
}

/// Undo the escaping `{:?}` applies to a `str`.
fn unescape_literal(literal: &str) -> Option<String> {
    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {}
            '"' => return None,
            c => {
                out.push(c);
                continue;
            }
        }
        let unescaped = match chars.next()? {
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'u' => {
                let hex = chars.as_str().strip_prefix('{')?;
                let end = hex.find('}')?;
                let c = u32::from_str_radix(&hex[..end], 16)
                    .ok()
                    .and_then(char::from_u32)?;
                chars = hex[end + 1..].chars();
                c
            }
            _ => return None,
        };
        out.push(unescaped);
    }
    Some(out)
}
