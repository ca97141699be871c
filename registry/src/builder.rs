//! SchemaBuilder for constructing an immutable Registry.

use crate::{EntitySchema, ModelSchema, Registry, RelSchema};
use nexus_core::Cardinality;
use thiserror::Error;

/// Errors that can occur during schema construction.
///
/// These are configuration errors: an engine is never built from a schema
/// that produced one.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate entity: {0}")]
    DuplicateEntity(String),

    #[error("Duplicate relation: {rel} on entity {entity}")]
    DuplicateRelation { entity: String, rel: String },

    #[error("Missing reciprocal for {entity}.{rel}: {target}.{reciprocal} is not declared")]
    MissingReciprocal {
        entity: String,
        rel: String,
        target: String,
        reciprocal: String,
    },

    #[error(
        "Asymmetric reciprocal for {entity}.{rel}: {target}.{reciprocal} points at {found_entity}.{found_rel}"
    )]
    AsymmetricReciprocal {
        entity: String,
        rel: String,
        target: String,
        reciprocal: String,
        found_entity: String,
        found_rel: String,
    },

    #[error("Invalid schema document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn missing_reciprocal(entity: &str, rel: &str, schema: &RelSchema) -> Self {
        Self::MissingReciprocal {
            entity: entity.to_string(),
            rel: rel.to_string(),
            target: schema.target_entity.clone(),
            reciprocal: schema.reciprocal.clone(),
        }
    }

    pub fn asymmetric_reciprocal(
        entity: &str,
        rel: &str,
        schema: &RelSchema,
        found: &RelSchema,
    ) -> Self {
        Self::AsymmetricReciprocal {
            entity: entity.to_string(),
            rel: rel.to_string(),
            target: schema.target_entity.clone(),
            reciprocal: schema.reciprocal.clone(),
            found_entity: found.target_entity.clone(),
            found_rel: found.reciprocal.clone(),
        }
    }
}

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    entities: ModelSchema,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity definition.
    pub fn add_entity(&mut self, name: impl Into<String>) -> EntityBuilder<'_> {
        EntityBuilder {
            builder: self,
            name: name.into(),
            relations: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> SchemaResult<Registry> {
        Registry::new(self.entities)
    }
}

/// Builder for a single entity's relation declarations.
pub struct EntityBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    name: String,
    relations: Vec<(String, RelSchema)>,
}

impl<'a> EntityBuilder<'a> {
    /// Declare a relation key.
    pub fn rel(mut self, key: impl Into<String>, schema: RelSchema) -> Self {
        self.relations.push((key.into(), schema));
        self
    }

    /// Declare a one-cardinality relation key.
    pub fn one(
        self,
        key: impl Into<String>,
        target_entity: impl Into<String>,
        reciprocal: impl Into<String>,
    ) -> Self {
        self.rel(key, RelSchema::new(target_entity, Cardinality::One, reciprocal))
    }

    /// Declare a many-cardinality relation key.
    pub fn many(
        self,
        key: impl Into<String>,
        target_entity: impl Into<String>,
        reciprocal: impl Into<String>,
    ) -> Self {
        self.rel(key, RelSchema::new(target_entity, Cardinality::Many, reciprocal))
    }

    /// Finish building this entity.
    pub fn done(self) -> SchemaResult<()> {
        if self.builder.entities.contains_key(&self.name) {
            return Err(SchemaError::DuplicateEntity(self.name));
        }

        let mut entity = EntitySchema::new();
        for (key, schema) in self.relations {
            if entity.contains_key(&key) {
                return Err(SchemaError::DuplicateRelation {
                    entity: self.name,
                    rel: key,
                });
            }
            entity.insert(key, schema);
        }

        self.builder.entities.insert(self.name, entity);
        Ok(())
    }
}

/// Check that every relation has a mutual reciprocal declaration.
///
/// For `E.r -> F` with reciprocal `r'`, `F.r'` must exist, point back at `E`
/// and name `r` as its own reciprocal.
pub(crate) fn validate(schema: &ModelSchema) -> SchemaResult<()> {
    for (entity, relations) in schema {
        for (rel, rel_schema) in relations {
            let reciprocal = schema
                .get(&rel_schema.target_entity)
                .and_then(|target| target.get(&rel_schema.reciprocal))
                .ok_or_else(|| SchemaError::missing_reciprocal(entity, rel, rel_schema))?;

            if reciprocal.target_entity != *entity || reciprocal.reciprocal != *rel {
                return Err(SchemaError::asymmetric_reciprocal(
                    entity,
                    rel,
                    rel_schema,
                    reciprocal,
                ));
            }
        }
    }
    Ok(())
}
