//! The Registry - immutable schema lookup.

use crate::builder::validate;
use crate::{EntitySchema, ModelSchema, RelSchema, Resolution, SchemaResult};
use nexus_core::Cardinality;

/// The Registry provides runtime lookup of relation declarations.
/// It is immutable after construction and always internally consistent.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Relation declarations by entity name.
    entities: ModelSchema,
}

impl Registry {
    /// Validate a model schema and wrap it.
    pub fn new(entities: ModelSchema) -> SchemaResult<Self> {
        validate(&entities)?;
        Ok(Self { entities })
    }

    /// Parse and validate a JSON schema document
    /// (`entity -> relationKey -> { targetEntity, cardinality, reciprocal }`).
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let entities: ModelSchema = serde_json::from_str(json)?;
        Self::new(entities)
    }

    /// The underlying model schema.
    pub fn schema(&self) -> &ModelSchema {
        &self.entities
    }

    // ==================== Entity Lookups ====================

    /// Check if an entity is declared.
    pub fn has_entity(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    /// Get all declared entity names.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(|s| s.as_str())
    }

    /// Get the relation declarations of an entity.
    pub fn entity_schema(&self, entity: &str) -> Option<&EntitySchema> {
        self.entities.get(entity)
    }

    // ==================== Relation Lookups ====================

    /// Get a relation declaration by entity and key.
    pub fn rel_schema(&self, entity: &str, key: &str) -> Option<&RelSchema> {
        self.entities.get(entity).and_then(|rels| rels.get(key))
    }

    /// Check if `key` is a declared relation key of `entity`.
    pub fn is_rel(&self, entity: &str, key: &str) -> bool {
        self.rel_schema(entity, key).is_some()
    }

    /// Get the cardinality of a relation key.
    pub fn cardinality(&self, entity: &str, key: &str) -> Option<Cardinality> {
        self.rel_schema(entity, key).map(|schema| schema.cardinality)
    }

    /// Get all relation keys declared on an entity.
    pub fn relation_keys(&self, entity: &str) -> impl Iterator<Item = &str> {
        self.entities
            .get(entity)
            .into_iter()
            .flat_map(|rels| rels.keys().map(|s| s.as_str()))
    }

    // ==================== Resolution ====================

    /// Resolve a relation reference on `entity`.
    ///
    /// A declared key resolves to itself. Otherwise the reference is taken as
    /// a target entity name and must match exactly one declared relation.
    pub fn resolve<'a>(&'a self, entity: &str, reference: &str) -> Resolution<'a> {
        let Some(relations) = self.entities.get(entity) else {
            return Resolution::NotFound;
        };

        if let Some((key, _)) = relations.get_key_value(reference) {
            return Resolution::Found(key.as_str());
        }

        let mut matches = relations
            .iter()
            .filter(|(_, schema)| schema.target_entity == reference)
            .map(|(key, _)| key.as_str());

        match (matches.next(), matches.next()) {
            (Some(key), None) => Resolution::Found(key),
            (Some(_), Some(_)) => Resolution::Ambiguous,
            (None, _) => Resolution::NotFound,
        }
    }

    /// Resolve a reference that must be a declared key (no entity-name lookup).
    pub fn resolve_key<'a>(&'a self, entity: &str, reference: &str) -> Resolution<'a> {
        match self
            .entities
            .get(entity)
            .and_then(|rels| rels.get_key_value(reference))
        {
            Some((key, _)) => Resolution::Found(key.as_str()),
            None => Resolution::NotFound,
        }
    }

    /// `resolve` when `from_entity` is set, `resolve_key` otherwise.
    pub fn resolve_with<'a>(
        &'a self,
        entity: &str,
        reference: &str,
        from_entity: bool,
    ) -> Resolution<'a> {
        if from_entity {
            self.resolve(entity, reference)
        } else {
            self.resolve_key(entity, reference)
        }
    }
}
