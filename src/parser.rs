use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PslError, Result};
use crate::rule::{Rule, Section};

const BEGIN_ICANN: &str = "===BEGIN ICANN DOMAINS===";
const END_ICANN: &str = "===END ICANN DOMAINS===";
const BEGIN_PRIVATE: &str = "===BEGIN PRIVATE DOMAINS===";
const END_PRIVATE: &str = "===END PRIVATE DOMAINS===";

/// Parse rules from Public Suffix List text.
///
/// Rules keep file order, duplicates included. Rules outside any section
/// marker are treated as ICANN rules.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    let mut section = Section::Icann;
    let mut private_count = 0;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if let Some(comment) = line.strip_prefix("//") {
            match comment.trim() {
                BEGIN_PRIVATE => section = Section::Private,
                BEGIN_ICANN | END_ICANN | END_PRIVATE => section = Section::Icann,
                _ => {}
            }
            continue;
        }

        // Each line is only read up to the first whitespace
        let definition = match line.split_whitespace().next() {
            Some(definition) => definition,
            None => continue,
        };

        let rule = Rule::parse_in(definition, section).map_err(|e| match e {
            PslError::InvalidRule(message) => PslError::ParseErrorAtLine {
                line: line_num,
                message,
            },
            other => other,
        })?;

        if rule.is_private() {
            private_count += 1;
        }
        rules.push(rule);
    }

    debug!(
        total = rules.len(),
        private = private_count,
        "parsed public suffix rules"
    );

    Ok(rules)
}

/// Parse rules from a Public Suffix List file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading public suffix list");
    parse_rules(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleKind;

    #[test]
    fn test_parse_simple_rules() {
        let rules = parse_rules("com\nco.uk\n*.ck\n!www.ck").unwrap();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].definition(), "com");
        assert_eq!(rules[1].definition(), "co.uk");
        assert_eq!(rules[2].kind(), RuleKind::Wildcard);
        assert_eq!(rules[3].kind(), RuleKind::Exception);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = r#"
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0.

// ac : https://en.wikipedia.org/wiki/.ac
ac
com.ac


// uk
uk
"#;
        let rules = parse_rules(text).unwrap();
        let defs: Vec<&str> = rules.iter().map(|r| r.definition()).collect();
        assert_eq!(defs, ["ac", "com.ac", "uk"]);
    }

    #[test]
    fn test_parse_reads_up_to_whitespace() {
        let rules = parse_rules("com trailing words\n\tnet\t// note").unwrap();
        let defs: Vec<&str> = rules.iter().map(|r| r.definition()).collect();
        assert_eq!(defs, ["com", "net"]);
    }

    #[test]
    fn test_parse_tracks_sections() {
        let text = r#"
// ===BEGIN ICANN DOMAINS===
com
// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===
blogspot.com
github.io
// ===END PRIVATE DOMAINS===
"#;
        let rules = parse_rules(text).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].section(), Section::Icann);
        assert_eq!(rules[1].section(), Section::Private);
        assert_eq!(rules[2].section(), Section::Private);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let rules = parse_rules("com\nnet\ncom").unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0], rules[2]);
    }

    #[test]
    fn test_parse_invalid_rule_reports_line() {
        let err = parse_rules("com\n\nfoo..bar\n").unwrap_err();
        match err {
            PslError::ParseErrorAtLine { line, .. } => assert_eq!(line, 3),
            other => panic!("expected ParseErrorAtLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_file() {
        use std::io::Write;
        let dir = std::env::temp_dir().join("psl_engine_test");
        let _ = fs::create_dir_all(&dir);
        let file_path = dir.join("test_list.dat");
        let mut f = fs::File::create(&file_path).unwrap();
        writeln!(f, "// test list").unwrap();
        writeln!(f, "com").unwrap();
        writeln!(f, "*.ke").unwrap();
        drop(f);

        let rules = parse_rules_from_file(&file_path).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].definition(), "*.ke");

        let _ = fs::remove_file(&file_path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_rules_from_file("/nonexistent/path/public_suffix_list.dat");
        assert!(matches!(result, Err(PslError::IoError(_))));
    }
}
