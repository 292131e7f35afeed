use config::EntityConfig;

/// Declared table mapping of a type. An empty name counts as undeclared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMarker {
    pub name: String,
}

/// Marks a type as a persistent entity, optionally with an explicit entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMarker {
    pub name: String,
}

/// Compile-time registration of a persistence-mapped type.
///
/// ```ignore
/// struct OrderLine;
///
/// impl Persistent for OrderLine {
///     const TYPE_NAME: &'static str = "OrderLine";
///     const TABLE: Option<&'static str> = Some("order_lines");
/// }
/// ```
///
/// `Some("")` still marks the type; it just leaves the name to be derived.
pub trait Persistent {
    const TYPE_NAME: &'static str;
    const TABLE: Option<&'static str> = None;
    const ENTITY: Option<&'static str> = None;
}

/// One managed type as seen by the metadata catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMetadata {
    pub type_name: String,
    pub table: Option<TableMarker>,
    pub entity: Option<EntityMarker>,
}

impl EntityMetadata {
    /// An unmarked managed type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            table: None,
            entity: None,
        }
    }

    pub fn of<T: Persistent>() -> Self {
        Self {
            type_name: T::TYPE_NAME.to_string(),
            table: T::TABLE.map(|name| TableMarker {
                name: name.to_string(),
            }),
            entity: T::ENTITY.map(|name| EntityMarker {
                name: name.to_string(),
            }),
        }
    }

    pub fn with_table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(TableMarker { name: name.into() });
        self
    }

    pub fn with_entity(mut self, name: impl Into<String>) -> Self {
        self.entity = Some(EntityMarker { name: name.into() });
        self
    }

    /// Whether the type carries at least one persistence marker
    pub fn is_persistent(&self) -> bool {
        self.table.is_some() || self.entity.is_some()
    }
}

impl From<&EntityConfig> for EntityMetadata {
    fn from(config: &EntityConfig) -> Self {
        Self {
            type_name: config.type_name.clone(),
            table: config.table.clone().map(|name| TableMarker { name }),
            entity: config.entity.clone().map(|name| EntityMarker { name }),
        }
    }
}

/// Ordered registry of managed types. Registration order is enumeration order.
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    types: Vec<EntityMetadata>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from the entity list of a configuration file
    pub fn from_config(entities: &[EntityConfig]) -> Self {
        entities.iter().map(EntityMetadata::from).collect()
    }

    pub fn register<T: Persistent>(&mut self) -> &mut Self {
        self.types.push(EntityMetadata::of::<T>());
        self
    }

    pub fn push(&mut self, metadata: EntityMetadata) -> &mut Self {
        self.types.push(metadata);
        self
    }

    pub fn managed_types(&self) -> impl Iterator<Item = &EntityMetadata> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<EntityMetadata> for EntityCatalog {
    fn from_iter<I: IntoIterator<Item = EntityMetadata>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}
