//! Catalog entry and build variant lookup.

use crate::catalog::{BuildCatalog, BuildCatalogEntry, BuildVariant};
use crate::error::BuildError;
use crate::selector::Selector;

/// Case-insensitive comparison used for avatar and build names.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Finds the first catalog entry matching a single-character selector.
///
/// # Errors
///
/// Returns [`BuildError::CharacterNotFound`] if nothing matches. `Selector::All`
/// never resolves to a single entry; iterate the catalog instead.
pub fn resolve<'c>(
    catalog: &'c BuildCatalog,
    selector: &Selector,
) -> Result<&'c BuildCatalogEntry, BuildError> {
    let found = match selector {
        Selector::ById { id, .. } => catalog.iter().find(|entry| entry.avatar_id() == *id),
        Selector::ByName(name) => catalog
            .iter()
            .find(|entry| eq_ignore_case(entry.avatar_name(), name)),
        Selector::All => None,
    };
    found.ok_or_else(|| BuildError::CharacterNotFound(selector.to_string()))
}

/// Result of picking a build variant for an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantSelection<'a> {
    pub variant: &'a BuildVariant,
    /// True when no variant matched and the first one was used instead.
    pub used_fallback: bool,
}

impl VariantSelection<'_> {
    /// Describes the fallback as a non-fatal error, if one happened.
    pub fn fallback_notice(&self, entry: &BuildCatalogEntry, requested: &str) -> Option<BuildError> {
        self.used_fallback.then(|| BuildError::VariantNotFound {
            requested: requested.to_string(),
            character: entry.full_name().to_string(),
            fallback: self.variant.build_name.clone(),
        })
    }
}

/// Picks the variant named `build_name` (case-insensitive), falling back to
/// the entry's first variant.
pub fn select_variant<'a>(entry: &'a BuildCatalogEntry, build_name: &str) -> VariantSelection<'a> {
    match entry
        .builds()
        .iter()
        .find(|variant| eq_ignore_case(&variant.build_name, build_name))
    {
        Some(variant) => VariantSelection {
            variant,
            used_fallback: false,
        },
        None => VariantSelection {
            variant: entry.fallback(),
            used_fallback: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AvatarId;

    fn catalog() -> BuildCatalog {
        BuildCatalog::new(vec![
            BuildCatalogEntry::new(
                AvatarId(1001),
                "March7th",
                "March 7th",
                vec![BuildVariant::new("normal"), BuildVariant::new("Shield")],
            )
            .unwrap(),
            BuildCatalogEntry::new(
                AvatarId(1005),
                "Kafka",
                "Kafka",
                vec![BuildVariant::new("dot")],
            )
            .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_by_id() {
        let catalog = catalog();
        let entry = resolve(&catalog, &Selector::parse("1005")).unwrap();
        assert_eq!(entry.full_name(), "Kafka");
    }

    #[test]
    fn resolves_by_name_ignoring_case() {
        let catalog = catalog();
        let entry = resolve(&catalog, &Selector::parse("MARCH7TH")).unwrap();
        assert_eq!(entry.avatar_id(), AvatarId(1001));
    }

    #[test]
    fn unknown_selector_is_not_found() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, &Selector::parse("himeko")),
            Err(BuildError::CharacterNotFound("himeko".into()))
        );
        assert!(resolve(&catalog, &Selector::parse("9999")).is_err());
        assert!(resolve(&catalog, &Selector::All).is_err());
    }

    #[test]
    fn numeric_name_does_not_match_by_name() {
        let catalog = BuildCatalog::new(vec![
            BuildCatalogEntry::new(AvatarId(7), "1001", "Oddly Named", vec![BuildVariant::new("n")])
                .unwrap(),
        ])
        .unwrap();
        assert!(resolve(&catalog, &Selector::parse("1001")).is_err());
    }

    #[test]
    fn selects_variant_ignoring_case() {
        let catalog = catalog();
        let entry = &catalog.entries()[0];
        let selection = select_variant(entry, "shield");
        assert_eq!(selection.variant.build_name, "Shield");
        assert!(!selection.used_fallback);
        assert!(selection.fallback_notice(entry, "shield").is_none());
    }

    #[test]
    fn non_ascii_names_compare_ignoring_case() {
        assert!(eq_ignore_case("Äther", "äTHER"));
        assert!(!eq_ignore_case("Äther", "ather"));

        let entry = BuildCatalogEntry::new(
            AvatarId(1217),
            "Huohuo",
            "Huohuo",
            vec![BuildVariant::new("normal"), BuildVariant::new("Ätherflut")],
        )
        .unwrap();
        let selection = select_variant(&entry, "ätherflut");
        assert_eq!(selection.variant.build_name, "Ätherflut");
        assert!(!selection.used_fallback);
    }

    #[test]
    fn missing_variant_falls_back_to_first() {
        let catalog = catalog();
        let entry = &catalog.entries()[0];
        let selection = select_variant(entry, "ultra");
        assert_eq!(selection.variant.build_name, "normal");
        assert!(selection.used_fallback);
        assert!(matches!(
            selection.fallback_notice(entry, "ultra"),
            Some(BuildError::VariantNotFound { ref fallback, .. }) if fallback == "normal"
        ));
    }
}
