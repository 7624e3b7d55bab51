//! [`loadout_core::ItemOracle`] backed by in-memory maps.
use std::collections::{BTreeMap, HashMap};

use loadout_content::ItemCatalog;
use loadout_core::{AffixId, ItemId, ItemOracle, ItemTemplate, SubAffixDefinition};

/// ItemOracle implementation with static item templates and sub-affix groups
pub struct ItemOracleImpl {
    templates: HashMap<ItemId, ItemTemplate>,
    sub_affixes: BTreeMap<(u32, AffixId), SubAffixDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            sub_affixes: BTreeMap::new(),
        }
    }

    /// Builds the oracle from a loaded item catalog.
    pub fn from_catalog(catalog: ItemCatalog) -> Self {
        let mut oracle = Self::new();
        for template in catalog.items {
            oracle.add_template(template);
        }
        for definition in catalog.sub_affixes {
            oracle.add_sub_affix(definition);
        }
        oracle
    }

    /// Add an item template
    pub fn add_template(&mut self, template: ItemTemplate) {
        self.templates.insert(template.id, template);
    }

    /// Add a sub-affix definition to its group
    pub fn add_sub_affix(&mut self, definition: SubAffixDefinition) {
        self.sub_affixes
            .insert((definition.group, definition.affix_id), definition);
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn template(&self, id: ItemId) -> Option<ItemTemplate> {
        self.templates.get(&id).cloned()
    }

    fn sub_affix(&self, group: u32, affix_id: AffixId) -> Option<SubAffixDefinition> {
        self.sub_affixes.get(&(group, affix_id)).copied()
    }

    fn sub_affix_group(&self, group: u32) -> Vec<SubAffixDefinition> {
        self.sub_affixes
            .range((group, AffixId(u32::MIN))..=(group, AffixId(u32::MAX)))
            .map(|(_, definition)| *definition)
            .collect()
    }
}
