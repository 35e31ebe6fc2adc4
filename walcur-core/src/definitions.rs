//! The currency definition table the registry is initialized from.

use crate::chains::{ChainCapabilities, builtin_capabilities};
use std::collections::HashMap;
use std::sync::Arc;
use walcur_sdk::objects::CurrencyDefinition;

/// A definition together with the chain capabilities attached to it.
#[derive(Debug, Clone)]
pub struct DefinitionEntry {
    pub definition: CurrencyDefinition,
    pub capabilities: Option<Arc<dyn ChainCapabilities>>,
}

/// Currency definitions keyed by code.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    entries: HashMap<String, DefinitionEntry>,
}

impl DefinitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from definitions, attaching the built-in chain
    /// capabilities to every crypto currency that has one.
    ///
    /// Later definitions with the same code replace earlier ones.
    pub fn with_builtin_capabilities(definitions: impl IntoIterator<Item = CurrencyDefinition>) -> Self {
        let mut table = Self::new();
        for definition in definitions {
            let capabilities = if definition.is_crypto() {
                builtin_capabilities(&definition.code)
            } else {
                None
            };
            table.insert(definition, capabilities);
        }
        table
    }

    /// Insert a definition, replacing any previous entry with the same code.
    pub fn insert(
        &mut self,
        definition: CurrencyDefinition,
        capabilities: Option<Arc<dyn ChainCapabilities>>,
    ) {
        self.entries.insert(
            definition.code.clone(),
            DefinitionEntry {
                definition,
                capabilities,
            },
        );
    }

    pub fn get(&self, code: &str) -> Option<&DefinitionEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_capabilities_only_for_crypto() {
        let table = DefinitionTable::with_builtin_capabilities([
            CurrencyDefinition::fiat("AED", "UAE Dirham", 2),
            CurrencyDefinition::crypto("BTC", "Bitcoin", 8, "TBTC"),
            CurrencyDefinition::crypto("DOGE", "Dogecoin", 8, "TDOGE"),
        ]);
        assert_eq!(table.len(), 3);
        assert!(table.get("AED").unwrap().capabilities.is_none());
        assert!(table.get("BTC").unwrap().capabilities.is_some());
        assert!(table.get("DOGE").unwrap().capabilities.is_none());
        assert!(table.get("ETH").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = DefinitionTable::new();
        table.insert(CurrencyDefinition::crypto("BTC", "Bitcoin", 8, "TBTC"), None);
        table.insert(CurrencyDefinition::crypto("BTC", "Bitcoin", 6, "TBTC"), None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("BTC").unwrap().definition.divisibility, 6);
    }
}
