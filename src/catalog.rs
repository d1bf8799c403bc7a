// Resource catalog - the fixed, ordered set of template resources
//
// The catalog is enumerated once at startup and never changes afterwards.
// Each entry addresses one text file relative to the configured base URL.
// The config file may replace the built-in list; either way the list the
// app runs with is immutable for the session.

use serde::Deserialize;

/// One displayable template resource
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDescriptor {
    /// Path relative to the base URL, e.g. "prompts/code-review.txt"
    pub identifier: String,
    pub title: String,
    pub description: String,
}

/// The built-in template set, in display order
pub fn builtin() -> Vec<ResourceDescriptor> {
    let entries = [
        (
            "prompts/code-review.txt",
            "Code Review",
            "Structured checklist for reviewing a pull request",
        ),
        (
            "prompts/refactor-plan.txt",
            "Refactor Plan",
            "Step-by-step outline for a safe incremental refactor",
        ),
        (
            "prompts/bug-report.txt",
            "Bug Report",
            "Reproduction, expected/actual, environment details",
        ),
        (
            "prompts/commit-message.txt",
            "Commit Message",
            "Conventional subject line plus body guidance",
        ),
        (
            "prompts/design-doc.txt",
            "Design Doc",
            "Problem statement, constraints, alternatives, decision",
        ),
        (
            "prompts/retrospective.txt",
            "Retrospective",
            "What went well, what didn't, follow-up actions",
        ),
    ];

    entries
        .iter()
        .map(|(identifier, title, description)| ResourceDescriptor {
            identifier: identifier.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Resolve the catalog the app will run with.
///
/// A non-empty list from the config file replaces the built-in set.
/// Duplicate identifiers keep the first occurrence; later ones are dropped
/// with a warning so the identifier stays unique within the set.
pub fn resolve(from_config: Option<Vec<ResourceDescriptor>>) -> Vec<ResourceDescriptor> {
    let list = match from_config {
        Some(list) if !list.is_empty() => list,
        _ => builtin(),
    };

    let mut seen = std::collections::HashSet::new();
    let mut resolved = Vec::with_capacity(list.len());
    for descriptor in list {
        if seen.insert(descriptor.identifier.clone()) {
            resolved.push(descriptor);
        } else {
            tracing::warn!(
                "Duplicate resource identifier {:?} in catalog, keeping first entry",
                descriptor.identifier
            );
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(identifier: &str) -> ResourceDescriptor {
        ResourceDescriptor {
            identifier: identifier.to_string(),
            title: format!("Title for {identifier}"),
            description: String::new(),
        }
    }

    #[test]
    fn builtin_identifiers_are_unique() {
        let catalog = builtin();
        let mut seen = std::collections::HashSet::new();
        for entry in &catalog {
            assert!(
                seen.insert(entry.identifier.clone()),
                "duplicate identifier {:?}",
                entry.identifier
            );
        }
        assert!(!catalog.is_empty());
    }

    #[test]
    fn resolve_defaults_to_builtin() {
        let resolved = resolve(None);
        assert_eq!(resolved.len(), builtin().len());

        // An empty override also falls back
        let resolved = resolve(Some(Vec::new()));
        assert_eq!(resolved.len(), builtin().len());
    }

    #[test]
    fn resolve_prefers_config_list_and_keeps_order() {
        let resolved = resolve(Some(vec![descriptor("b.txt"), descriptor("a.txt")]));
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].identifier, "b.txt");
        assert_eq!(resolved[1].identifier, "a.txt");
    }

    #[test]
    fn resolve_drops_duplicate_identifiers() {
        let resolved = resolve(Some(vec![
            descriptor("a.txt"),
            descriptor("b.txt"),
            descriptor("a.txt"),
        ]));
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].identifier, "a.txt");
        assert_eq!(resolved[1].identifier, "b.txt");
    }
}
