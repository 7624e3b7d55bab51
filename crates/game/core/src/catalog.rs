//! Build catalog records.
//!
//! A catalog is an ordered list of per-character entries, each holding one or
//! more named build variants. Entries are immutable once constructed and
//! always carry at least one variant, so the first variant is available as a
//! fallback without further checks.

use std::collections::HashSet;

use crate::error::BuildError;
use crate::state::{AvatarId, ItemId};

/// Light cone requested by a build.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EquipmentSpec {
    pub item_id: ItemId,
    pub enhancement_level: u32,
}

/// Relic requested by a build.
///
/// `sub_affixes` uses the compact `affixId:count` / `affixId,count` token
/// format; see [`crate::build::affix::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RelicSpec {
    pub item_id: ItemId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_affix_id: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_affixes: String,
}

/// One named build of a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BuildVariant {
    pub build_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub eidolon_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Option<EquipmentSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub relics: Vec<RelicSpec>,
}

impl BuildVariant {
    pub fn new(build_name: impl Into<String>) -> Self {
        Self {
            build_name: build_name.into(),
            eidolon_level: 0,
            equipment: None,
            relics: Vec::new(),
        }
    }

    pub fn with_eidolon(mut self, eidolon_level: u32) -> Self {
        self.eidolon_level = eidolon_level;
        self
    }

    pub fn with_equipment(mut self, item_id: ItemId, enhancement_level: u32) -> Self {
        self.equipment = Some(EquipmentSpec {
            item_id,
            enhancement_level,
        });
        self
    }

    pub fn with_relic(
        mut self,
        item_id: ItemId,
        primary_affix_id: Option<u32>,
        sub_affixes: impl Into<String>,
    ) -> Self {
        self.relics.push(RelicSpec {
            item_id,
            primary_affix_id,
            sub_affixes: sub_affixes.into(),
        });
        self
    }
}

/// Document shape of a catalog entry, before validation.
#[cfg(feature = "serde")]
#[doc(hidden)]
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDocument {
    avatar_id: AvatarId,
    avatar_name: String,
    full_name: String,
    #[serde(default)]
    skill_level: Option<u32>,
    builds: Vec<BuildVariant>,
}

/// All builds defined for one character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "EntryDocument", into = "EntryDocument")
)]
pub struct BuildCatalogEntry {
    avatar_id: AvatarId,
    avatar_name: String,
    full_name: String,
    skill_level: Option<u32>,
    builds: Vec<BuildVariant>,
}

impl BuildCatalogEntry {
    /// Creates an entry.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::CatalogUnavailable`] if `builds` is empty.
    pub fn new(
        avatar_id: AvatarId,
        avatar_name: impl Into<String>,
        full_name: impl Into<String>,
        builds: Vec<BuildVariant>,
    ) -> Result<Self, BuildError> {
        let avatar_name = avatar_name.into();
        if builds.is_empty() {
            return Err(BuildError::CatalogUnavailable(format!(
                "entry '{}' ({}) defines no builds",
                avatar_name, avatar_id
            )));
        }
        Ok(Self {
            avatar_id,
            avatar_name,
            full_name: full_name.into(),
            skill_level: None,
            builds,
        })
    }

    pub fn with_skill_level(mut self, skill_level: u32) -> Self {
        self.skill_level = Some(skill_level);
        self
    }

    pub fn avatar_id(&self) -> AvatarId {
        self.avatar_id
    }

    pub fn avatar_name(&self) -> &str {
        &self.avatar_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Requested skill level, if the entry sets one.
    pub fn skill_level(&self) -> Option<u32> {
        self.skill_level
    }

    /// Variants in document order. Never empty.
    pub fn builds(&self) -> &[BuildVariant] {
        &self.builds
    }

    /// The designated fallback variant (the first one).
    pub fn fallback(&self) -> &BuildVariant {
        // Non-emptiness is checked on construction.
        &self.builds[0]
    }
}

#[cfg(feature = "serde")]
impl TryFrom<EntryDocument> for BuildCatalogEntry {
    type Error = BuildError;

    fn try_from(doc: EntryDocument) -> Result<Self, Self::Error> {
        let entry = Self::new(doc.avatar_id, doc.avatar_name, doc.full_name, doc.builds)?;
        Ok(Self {
            skill_level: doc.skill_level,
            ..entry
        })
    }
}

#[cfg(feature = "serde")]
impl From<BuildCatalogEntry> for EntryDocument {
    fn from(entry: BuildCatalogEntry) -> Self {
        Self {
            avatar_id: entry.avatar_id,
            avatar_name: entry.avatar_name,
            full_name: entry.full_name,
            skill_level: entry.skill_level,
            builds: entry.builds,
        }
    }
}

/// Ordered collection of catalog entries with unique avatar ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<BuildCatalogEntry>", into = "Vec<BuildCatalogEntry>")
)]
pub struct BuildCatalog {
    entries: Vec<BuildCatalogEntry>,
}

impl BuildCatalog {
    /// Creates a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::CatalogUnavailable`] if two entries share an avatar id.
    pub fn new(entries: Vec<BuildCatalogEntry>) -> Result<Self, BuildError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.avatar_id) {
                return Err(BuildError::CatalogUnavailable(format!(
                    "duplicate entry for avatar {}",
                    entry.avatar_id
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[BuildCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildCatalogEntry> {
        self.entries.iter()
    }
}

impl TryFrom<Vec<BuildCatalogEntry>> for BuildCatalog {
    type Error = BuildError;

    fn try_from(entries: Vec<BuildCatalogEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<BuildCatalog> for Vec<BuildCatalogEntry> {
    fn from(catalog: BuildCatalog) -> Self {
        catalog.entries
    }
}
