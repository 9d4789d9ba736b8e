//! Deterministic naming of generated units.

/// Grouping key for a method's enclosing scope.
///
/// An absent namespace contributes an empty segment, so top-of-namespace
/// groups key as `.Outer.Inner`. The key is what makes generated unit names
/// collision-free: one distinct key, one generated unit.
pub fn group_key(namespace: Option<&str>, type_chain: &[String]) -> String {
    format!("{}.{}", namespace.unwrap_or_default(), type_chain.join("."))
}

/// Name of the generated unit for a group.
pub fn output_name(namespace: Option<&str>, type_chain: &[String], extension: &str) -> String {
    format!("{}.g.{}", group_key(namespace, type_chain), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_group_key_with_namespace() {
        assert_eq!(group_key(Some("NS"), &chain(&["A"])), "NS.A");
        assert_eq!(
            group_key(Some("NS.Sub"), &chain(&["Outer", "Inner"])),
            "NS.Sub.Outer.Inner"
        );
    }

    #[test]
    fn test_group_key_without_namespace() {
        assert_eq!(group_key(None, &chain(&["A"])), ".A");
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name(Some("NS"), &chain(&["A"]), "cs"), "NS.A.g.cs");
        assert_eq!(
            output_name(Some("NS"), &chain(&["Outer", "Inner"]), "cs"),
            "NS.Outer.Inner.g.cs"
        );
    }

    #[test]
    fn test_output_name_is_stable() {
        let chain = chain(&["Outer", "Inner"]);
        let first = output_name(Some("NS"), &chain, "cs");
        let second = output_name(Some("NS"), &chain, "cs");
        assert_eq!(first, second);
    }
}
