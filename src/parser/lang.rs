use std::sync::LazyLock;

use regex::Regex;

/// Per-rule match cap so one repeated token can't drown out everything else.
const MATCH_CAP: usize = 10;

struct Language {
    name: &'static str,
    rules: Vec<(Regex, usize)>,
}

fn lang(name: &'static str, rules: &[(&str, usize)]) -> Language {
    Language {
        name,
        rules: rules
            .iter()
            .map(|(pat, weight)| (Regex::new(pat).unwrap(), *weight))
            .collect(),
    }
}

// Order matters: ties resolve to the earlier entry.
static LANGUAGES: LazyLock<Vec<Language>> = LazyLock::new(|| {
    vec![
        lang(
            "C++",
            &[
                (r"#include\s*<\w+>", 3),
                (r"\bstd::\w+", 3),
                (r"\btemplate\s*<", 4),
                (r"\bnamespace\s+\w+", 3),
                (r"\b\w+::\w+\s*\(", 2),
                (r"\b(?:public|private|protected):", 2),
                (r"\bconst\s+\w+&", 2),
            ],
        ),
        lang(
            "C",
            &[
                (r"#include\s*<\w+\.h>", 3),
                (r"\b(?:printf|fprintf|malloc|free|memcpy)\s*\(", 3),
                (r"\btypedef\s+struct\b", 4),
                (r"\bint\s+main\s*\(\s*(?:void|int)", 2),
            ],
        ),
        lang(
            "Python",
            &[
                (r"(?m)^\s*def\s+\w+\s*\(.*\)\s*:", 4),
                (r"(?m)^\s*import\s+[\w.]+\s*$", 2),
                (r"(?m)^\s*from\s+[\w.]+\s+import\b", 3),
                (r"\bself\.\w+", 2),
                (r"\bprint\s*\(", 1),
                (r"\bNone\b", 1),
                (r"(?m)^\s*(?:elif|except)\b.*:\s*$", 3),
            ],
        ),
        lang(
            "Java",
            &[
                (r"\bpublic\s+(?:static\s+)?(?:final\s+)?class\s+\w+", 4),
                (r"\bSystem\.out\.print", 4),
                (r"(?m)^\s*import\s+java\.", 4),
                (r"\bpublic\s+static\s+void\s+main\b", 4),
                (r"@Override\b", 3),
            ],
        ),
        lang(
            "JavaScript",
            &[
                (r"\bfunction\s*\w*\s*\([^)]*\)\s*\{", 3),
                (r"\b(?:const|let|var)\s+\w+\s*=", 2),
                (r"=>\s*\{", 2),
                (r"\bconsole\.log\s*\(", 4),
                (r"\bdocument\.(?:getElementById|querySelector)", 4),
            ],
        ),
        lang(
            "Bash",
            &[
                (r"(?m)^#!/(?:usr/)?bin/(?:ba)?sh", 6),
                (r"(?m)^\s*\$\s+\w+", 2),
                (r"\b(?:sudo|apt-get|chmod|export)\s+", 2),
                (r"(?m)^\s*echo\s+", 2),
            ],
        ),
        lang(
            "CMake",
            &[
                (r"\bcmake_minimum_required\s*\(", 6),
                (r"\badd_(?:executable|library)\s*\(", 4),
                (r"\bfind_package\s*\(", 3),
                (r"\btarget_link_libraries\s*\(", 4),
            ],
        ),
    ]
});

/// Best-effort guess of the dominant programming language in `text`.
///
/// Weighted regex signals; `None` when nothing scores.
pub fn guess(text: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for language in LANGUAGES.iter() {
        let score = score(language, text);
        if score == 0 {
            continue;
        }
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((language.name, score));
        }
    }
    best.map(|(name, _)| name)
}

fn score(language: &Language, text: &str) -> usize {
    language
        .rules
        .iter()
        .map(|(re, weight)| re.find_iter(text).take(MATCH_CAP).count() * weight)
        .sum()
}
