//! Skill Taxonomy — maps raw skill strings to canonical names via a static
//! synonym table.
//!
//! The taxonomy is constructed once at startup, shared as `Arc<SkillTaxonomy>`
//! in `AppState`, and never mutated afterwards. `normalize` is idempotent:
//! feeding a canonical name back in returns it unchanged.

/// One canonical skill plus its accepted synonym spellings (stored lowercase).
struct TaxonomyEntry {
    canonical: &'static str,
    synonyms: &'static [&'static str],
}

/// Static synonym table. Synonyms must be lowercase; canonicals keep their
/// preferred casing and are returned verbatim on a match.
const BUILTIN_TAXONOMY: &[TaxonomyEntry] = &[
    TaxonomyEntry {
        canonical: "JavaScript",
        synonyms: &["js", "ecmascript", "es6"],
    },
    TaxonomyEntry {
        canonical: "TypeScript",
        synonyms: &["ts"],
    },
    TaxonomyEntry {
        canonical: "Python",
        synonyms: &["python3", "python 3", "py"],
    },
    TaxonomyEntry {
        canonical: "Java",
        synonyms: &["java se", "java ee", "j2ee"],
    },
    TaxonomyEntry {
        canonical: "C++",
        synonyms: &["cpp", "cplusplus", "c plus plus"],
    },
    TaxonomyEntry {
        canonical: "C#",
        synonyms: &["csharp", "c sharp"],
    },
    TaxonomyEntry {
        canonical: "Go",
        synonyms: &["golang"],
    },
    TaxonomyEntry {
        canonical: "Rust",
        synonyms: &["rustlang"],
    },
    TaxonomyEntry {
        canonical: "SQL",
        synonyms: &["structured query language"],
    },
    TaxonomyEntry {
        canonical: "PostgreSQL",
        synonyms: &["postgres", "psql"],
    },
    TaxonomyEntry {
        canonical: "MySQL",
        synonyms: &["my sql"],
    },
    TaxonomyEntry {
        canonical: "MongoDB",
        synonyms: &["mongo", "mongo db"],
    },
    TaxonomyEntry {
        canonical: "Redis",
        synonyms: &[],
    },
    TaxonomyEntry {
        canonical: "Docker",
        synonyms: &["docker containers"],
    },
    TaxonomyEntry {
        canonical: "Kubernetes",
        synonyms: &["k8s", "k8"],
    },
    TaxonomyEntry {
        canonical: "AWS",
        synonyms: &["amazon web services"],
    },
    TaxonomyEntry {
        canonical: "GCP",
        synonyms: &["google cloud", "google cloud platform"],
    },
    TaxonomyEntry {
        canonical: "Azure",
        synonyms: &["microsoft azure"],
    },
    TaxonomyEntry {
        canonical: "React",
        synonyms: &["react.js", "reactjs"],
    },
    TaxonomyEntry {
        canonical: "Angular",
        synonyms: &["angular.js", "angularjs"],
    },
    TaxonomyEntry {
        canonical: "Vue",
        synonyms: &["vue.js", "vuejs"],
    },
    TaxonomyEntry {
        canonical: "Node.js",
        synonyms: &["node", "nodejs"],
    },
    TaxonomyEntry {
        canonical: "Django",
        synonyms: &[],
    },
    TaxonomyEntry {
        canonical: "Flask",
        synonyms: &[],
    },
    TaxonomyEntry {
        canonical: "Spring Boot",
        synonyms: &["springboot", "spring"],
    },
    TaxonomyEntry {
        canonical: "Machine Learning",
        synonyms: &["ml"],
    },
    TaxonomyEntry {
        canonical: "Deep Learning",
        synonyms: &["dl"],
    },
    TaxonomyEntry {
        canonical: "Natural Language Processing",
        synonyms: &["nlp"],
    },
    TaxonomyEntry {
        canonical: "TensorFlow",
        synonyms: &["tensor flow"],
    },
    TaxonomyEntry {
        canonical: "PyTorch",
        synonyms: &["torch", "py torch"],
    },
    TaxonomyEntry {
        canonical: "Scikit-learn",
        synonyms: &["sklearn", "scikit learn"],
    },
    TaxonomyEntry {
        canonical: "Pandas",
        synonyms: &[],
    },
    TaxonomyEntry {
        canonical: "NumPy",
        synonyms: &[],
    },
    TaxonomyEntry {
        canonical: "REST API",
        synonyms: &["rest", "restful", "rest apis", "restful api", "restful apis"],
    },
    TaxonomyEntry {
        canonical: "GraphQL",
        synonyms: &["graph ql"],
    },
    TaxonomyEntry {
        canonical: "CI/CD",
        synonyms: &["cicd", "continuous integration", "continuous delivery"],
    },
    TaxonomyEntry {
        canonical: "Git",
        synonyms: &["git version control"],
    },
    TaxonomyEntry {
        canonical: "Linux",
        synonyms: &["gnu/linux"],
    },
    TaxonomyEntry {
        canonical: "HTML",
        synonyms: &["html5"],
    },
    TaxonomyEntry {
        canonical: "CSS",
        synonyms: &["css3"],
    },
];

/// Immutable mapping from canonical skill name to accepted synonyms.
pub struct SkillTaxonomy {
    entries: &'static [TaxonomyEntry],
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SkillTaxonomy {
    /// Returns the built-in taxonomy.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_TAXONOMY,
        }
    }

    /// Maps a raw skill string to its canonical name.
    ///
    /// Lookup order: exact canonical match (case-insensitive), then synonym
    /// match, then a title-cased copy of the input as the unknown-skill
    /// fallback. Whitespace-only input yields the empty string — callers must
    /// filter those out before set operations.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = raw.trim().to_lowercase();
        if cleaned.is_empty() {
            return String::new();
        }

        for entry in self.entries {
            if entry.canonical.to_lowercase() == cleaned {
                return entry.canonical.to_string();
            }
        }
        for entry in self.entries {
            if entry.synonyms.iter().any(|s| *s == cleaned) {
                return entry.canonical.to_string();
            }
        }

        title_case(raw.trim())
    }

    /// Normalizes a list of raw skills, dropping empties and duplicates while
    /// preserving first-seen order.
    pub fn normalize_all(&self, raw: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(raw.len());
        for skill in raw {
            let normalized = self.normalize(skill);
            if normalized.is_empty() {
                continue;
            }
            if !out.iter().any(|s| s.eq_ignore_ascii_case(&normalized)) {
                out.push(normalized);
            }
        }
        out
    }
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
