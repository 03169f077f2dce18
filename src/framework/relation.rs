// Typed References - generic relations keyed by entity kind + object identifier
// A RelationSpec is built once per slot at schema-definition time; the TypedRef
// value carries the discriminator/identifier pair and resolves through the
// kind registry on read.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{EntityKind, ObjectId};
use crate::error::{AppError, AppResult};
use crate::framework::schema::{FieldDefinition, FieldType, FieldValidator};
use crate::infrastructure::kind_registry::{KindRegistry, ResolvedObject};
use crate::infrastructure::store::ObjectStore;

const DISCRIMINATOR: &str = "type_discriminator";
const IDENTIFIER: &str = "object_identifier";
const RESOLVED: &str = "resolved_object";

/// Maximum length of a persisted object identifier
pub const IDENTIFIER_MAX_LEN: usize = 255;

/// Which entity kinds a reference slot may point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindRestriction {
    Any,
    OneOf(Vec<EntityKind>),
}

impl KindRestriction {
    pub fn any() -> Self {
        KindRestriction::Any
    }

    pub fn one_of<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<EntityKind>,
    {
        KindRestriction::OneOf(kinds.into_iter().map(Into::into).collect())
    }

    pub fn allows(&self, kind: &EntityKind) -> bool {
        match self {
            KindRestriction::Any => true,
            KindRestriction::OneOf(kinds) => kinds.contains(kind),
        }
    }
}

/// Configuration of one typed-reference slot, fixed at schema-definition time.
///
/// Field names follow the `{prefix_}type_discriminator` /
/// `{prefix_}object_identifier` / `{prefix_}resolved_object` naming scheme,
/// so two slots with distinct prefixes mixed into one model never collide.
#[derive(Debug, Clone)]
pub struct RelationSpec {
    prefix: Option<String>,
    prefix_verbose: String,
    related_name: Option<String>,
    restriction: KindRestriction,
    is_required: bool,
    discriminator_field: String,
    identifier_field: String,
    resolved_field: String,
}

impl RelationSpec {
    pub fn builder() -> RelationSpecBuilder {
        RelationSpecBuilder::new()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn verbose_name(&self) -> &str {
        &self.prefix_verbose
    }

    /// Disambiguating relation name, present only when requested at build time
    pub fn related_name(&self) -> Option<&str> {
        self.related_name.as_deref()
    }

    pub fn restriction(&self) -> &KindRestriction {
        &self.restriction
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn discriminator_field(&self) -> &str {
        &self.discriminator_field
    }

    pub fn identifier_field(&self) -> &str {
        &self.identifier_field
    }

    pub fn resolved_field(&self) -> &str {
        &self.resolved_field
    }

    /// The three-field schema fragment this slot contributes to a model.
    ///
    /// The two physical fields are optional exactly when the slot is not
    /// required; the resolved field is computed on read and never persisted.
    pub fn fields(&self) -> Vec<FieldDefinition> {
        let mut discriminator = FieldDefinition::new(&self.discriminator_field, FieldType::Kind);
        let mut identifier = FieldDefinition::new(&self.identifier_field, FieldType::String)
            .validate(FieldValidator::MaxLength(IDENTIFIER_MAX_LEN));
        if !self.is_required {
            discriminator = discriminator.optional();
            identifier = identifier.optional();
        }
        if let KindRestriction::OneOf(kinds) = &self.restriction {
            discriminator = discriminator.validate(FieldValidator::OneOf(
                kinds.iter().map(|k| k.as_str().to_string()).collect(),
            ));
        }
        let resolved = FieldDefinition::new(&self.resolved_field, FieldType::Reference)
            .optional()
            .computed();

        vec![discriminator, identifier, resolved]
    }

    /// Validation problems for a discriminator/identifier pair against this slot
    pub fn check(&self, kind: Option<&EntityKind>, object_id: Option<&ObjectId>) -> Vec<String> {
        let mut problems = Vec::new();

        match (kind, object_id) {
            (None, None) => {
                if self.is_required {
                    problems.push(format!("{} is required", self.discriminator_field));
                    problems.push(format!("{} is required", self.identifier_field));
                }
            }
            (Some(_), None) | (None, Some(_)) => {
                problems.push(format!(
                    "{} and {} must be set together",
                    self.discriminator_field, self.identifier_field
                ));
            }
            (Some(_), Some(_)) => {}
        }

        if let Some(kind) = kind {
            if !self.restriction.allows(kind) {
                if let KindRestriction::OneOf(kinds) = &self.restriction {
                    let allowed: Vec<&str> = kinds.iter().map(|k| k.as_str()).collect();
                    problems.push(format!(
                        "{} must be one of: {}",
                        self.discriminator_field,
                        allowed.join(", ")
                    ));
                }
            }
        }

        if let Some(object_id) = object_id {
            if object_id.as_str().len() > IDENTIFIER_MAX_LEN {
                problems.push(format!(
                    "{} must be at most {} characters",
                    self.identifier_field, IDENTIFIER_MAX_LEN
                ));
            }
        }

        problems
    }
}

/// Builder for [`RelationSpec`] - the factory for typed-reference fragments
#[derive(Debug, Clone, Default)]
pub struct RelationSpecBuilder {
    prefix: Option<String>,
    prefix_verbose: Option<String>,
    add_related_name: bool,
    restriction: Option<KindRestriction>,
    is_required: bool,
}

impl RelationSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace the slot's field names under `{prefix}_`
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() {
            self.prefix = Some(prefix);
        }
        self
    }

    /// Human-readable label for the slot, shown in admin-facing surfaces
    pub fn verbose_name(mut self, verbose: impl Into<String>) -> Self {
        self.prefix_verbose = Some(verbose.into());
        self
    }

    /// Request a disambiguating relation name derived from the prefix.
    /// Needed when a model mixes in more than one slot.
    pub fn related_name(mut self) -> Self {
        self.add_related_name = true;
        self
    }

    /// Restrict which entity kinds the slot may point at
    pub fn restrict_to<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<EntityKind>,
    {
        self.restriction = Some(KindRestriction::one_of(kinds));
        self
    }

    /// Require both physical fields to be set at write time
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn build(self) -> AppResult<RelationSpec> {
        if self.add_related_name && self.prefix.is_none() {
            return Err(AppError::Configuration(
                "if a related name is requested, a prefix must be given".to_string(),
            ));
        }

        let p = match &self.prefix {
            Some(prefix) => format!("{}_", prefix),
            None => String::new(),
        };
        let related_name = if self.add_related_name {
            self.prefix.clone()
        } else {
            None
        };

        Ok(RelationSpec {
            discriminator_field: format!("{}{}", p, DISCRIMINATOR),
            identifier_field: format!("{}{}", p, IDENTIFIER),
            resolved_field: format!("{}{}", p, RESOLVED),
            prefix: self.prefix,
            prefix_verbose: self
                .prefix_verbose
                .unwrap_or_else(|| "Related object".to_string()),
            related_name,
            restriction: self.restriction.unwrap_or(KindRestriction::Any),
            is_required: self.is_required,
        })
    }
}

/// Zero-sized marker binding a [`RelationSpec`] to a [`TypedRef`] field,
/// so the prefixed field names are fixed at compile time per slot
pub trait RefSlot: Send + Sync + 'static {
    fn spec() -> &'static RelationSpec;
}

/// Value half of a typed reference: the discriminator/identifier pair.
///
/// Serializes under the slot's prefixed field names, so a model can flatten
/// several slots into one record without key collisions.
pub struct TypedRef<S: RefSlot> {
    pub kind: Option<EntityKind>,
    pub object_id: Option<ObjectId>,
    _slot: PhantomData<S>,
}

impl<S: RefSlot> TypedRef<S> {
    /// An empty reference, valid only for optional slots
    pub fn unset() -> Self {
        Self {
            kind: None,
            object_id: None,
            _slot: PhantomData,
        }
    }

    /// A reference pointing at the record of `kind` identified by `object_id`
    pub fn to(kind: impl Into<EntityKind>, object_id: impl Into<ObjectId>) -> Self {
        Self {
            kind: Some(kind.into()),
            object_id: Some(object_id.into()),
            _slot: PhantomData,
        }
    }

    pub fn spec() -> &'static RelationSpec {
        S::spec()
    }

    pub fn is_set(&self) -> bool {
        self.kind.is_some() && self.object_id.is_some()
    }

    /// Validation problems against the slot spec
    pub fn validate(&self) -> Vec<String> {
        S::spec().check(self.kind.as_ref(), self.object_id.as_ref())
    }

    /// Look up the referenced record through the kind registry.
    ///
    /// A fully-unset pair resolves to `Ok(None)`; a half-set pair is an
    /// error, as is a discriminator with no registered loader.
    pub async fn resolve(
        &self,
        registry: &KindRegistry,
        store: &ObjectStore,
    ) -> AppResult<Option<Box<dyn ResolvedObject>>> {
        let spec = S::spec();
        let (kind, object_id) = match (&self.kind, &self.object_id) {
            (None, None) => return Ok(None),
            (Some(kind), Some(object_id)) => (kind, object_id),
            _ => {
                return Err(AppError::Validation(format!(
                    "{} and {} must be set together",
                    spec.discriminator_field, spec.identifier_field
                )))
            }
        };

        let loader = registry.loader_for(kind).await.ok_or_else(|| {
            AppError::Configuration(format!("no loader registered for kind '{}'", kind))
        })?;
        loader.load(store, object_id).await
    }
}

impl<S: RefSlot> Clone for TypedRef<S> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            object_id: self.object_id.clone(),
            _slot: PhantomData,
        }
    }
}

impl<S: RefSlot> Default for TypedRef<S> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<S: RefSlot> PartialEq for TypedRef<S> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.object_id == other.object_id
    }
}

impl<S: RefSlot> fmt::Debug for TypedRef<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedRef")
            .field(S::spec().discriminator_field(), &self.kind)
            .field(S::spec().identifier_field(), &self.object_id)
            .finish()
    }
}

impl<S: RefSlot> Serialize for TypedRef<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let spec = S::spec();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(spec.discriminator_field(), &self.kind)?;
        map.serialize_entry(spec.identifier_field(), &self.object_id)?;
        map.end()
    }
}

impl<'de, S: RefSlot> Deserialize<'de> for TypedRef<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RefVisitor<S>(PhantomData<S>);

        impl<'de, S: RefSlot> Visitor<'de> for RefVisitor<S> {
            type Value = TypedRef<S>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "a map with '{}' and '{}' entries",
                    S::spec().discriminator_field(),
                    S::spec().identifier_field()
                )
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let spec = S::spec();
                let mut kind: Option<EntityKind> = None;
                let mut object_id: Option<ObjectId> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key == spec.discriminator_field {
                        kind = map.next_value::<Option<EntityKind>>()?;
                    } else if key == spec.identifier_field {
                        object_id = map.next_value::<Option<ObjectId>>()?;
                    } else {
                        // Keys belonging to the enclosing record or to other slots
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(TypedRef {
                    kind,
                    object_id,
                    _slot: PhantomData,
                })
            }
        }

        deserializer.deserialize_map(RefVisitor::<S>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    struct PlainSlot;

    impl RefSlot for PlainSlot {
        fn spec() -> &'static RelationSpec {
            static SPEC: Lazy<RelationSpec> = Lazy::new(|| {
                RelationSpec::builder()
                    .required()
                    .build()
                    .expect("plain slot spec")
            });
            &SPEC
        }
    }

    struct OwnerSlot;

    impl RefSlot for OwnerSlot {
        fn spec() -> &'static RelationSpec {
            static SPEC: Lazy<RelationSpec> = Lazy::new(|| {
                RelationSpec::builder()
                    .prefix("owner")
                    .verbose_name("Owner")
                    .related_name()
                    .restrict_to(["user", "group"])
                    .required()
                    .build()
                    .expect("owner slot spec")
            });
            &SPEC
        }
    }

    #[test]
    fn test_unprefixed_field_names() {
        let spec = RelationSpec::builder().build().unwrap();
        assert_eq!(spec.discriminator_field(), "type_discriminator");
        assert_eq!(spec.identifier_field(), "object_identifier");
        assert_eq!(spec.resolved_field(), "resolved_object");
        assert_eq!(spec.related_name(), None);
    }

    #[test]
    fn test_prefixed_field_names() {
        let spec = RelationSpec::builder()
            .prefix("owner")
            .related_name()
            .build()
            .unwrap();
        assert_eq!(spec.discriminator_field(), "owner_type_discriminator");
        assert_eq!(spec.identifier_field(), "owner_object_identifier");
        assert_eq!(spec.resolved_field(), "owner_resolved_object");
        assert_eq!(spec.related_name(), Some("owner"));
    }

    #[test]
    fn test_related_name_without_prefix_is_a_configuration_error() {
        let result = RelationSpec::builder().related_name().build();
        match result {
            Err(AppError::Configuration(_)) => {}
            other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_prefix_counts_as_no_prefix() {
        let result = RelationSpec::builder().prefix("").related_name().build();
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_two_prefixes_never_collide() {
        let plain = RelationSpec::builder().build().unwrap();
        let owner = RelationSpec::builder().prefix("owner").build().unwrap();

        let mut names: Vec<String> = plain
            .fields()
            .into_iter()
            .chain(owner.fields())
            .map(|f| f.name)
            .collect();
        assert_eq!(names.len(), 6);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_required_slot_rejects_unset_pair() {
        let problems = TypedRef::<PlainSlot>::unset().validate();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("type_discriminator"));
    }

    #[test]
    fn test_half_set_pair_is_inconsistent() {
        let mut reference = TypedRef::<PlainSlot>::unset();
        reference.kind = Some(EntityKind::new_unchecked("idea"));
        let problems = reference.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("must be set together"));
    }

    #[test]
    fn test_restriction_rejects_other_kinds() {
        let reference = TypedRef::<OwnerSlot>::to("idea", "42");
        let problems = reference.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("must be one of: user, group"));
    }

    #[test]
    fn test_restriction_accepts_listed_kinds() {
        let reference = TypedRef::<OwnerSlot>::to("group", "7");
        assert!(reference.validate().is_empty());
    }

    #[test]
    fn test_oversized_identifier_is_rejected() {
        let reference = TypedRef::<PlainSlot>::to("idea", "x".repeat(256));
        let problems = reference.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("at most 255"));
    }

    #[test]
    fn test_serde_uses_prefixed_keys() {
        let reference = TypedRef::<OwnerSlot>::to("user", "17");
        let value = serde_json::to_value(&reference).unwrap();
        assert_eq!(value["owner_type_discriminator"], "user");
        assert_eq!(value["owner_object_identifier"], "17");

        let back: TypedRef<OwnerSlot> = serde_json::from_value(value).unwrap();
        assert_eq!(back, reference);
    }

    #[test]
    fn test_deserialize_ignores_foreign_keys() {
        let value = serde_json::json!({
            "type_discriminator": "idea",
            "object_identifier": "3",
            "owner_type_discriminator": "user",
            "owner_object_identifier": "17",
        });
        let plain: TypedRef<PlainSlot> = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(plain.kind, Some(EntityKind::new_unchecked("idea")));
        let owner: TypedRef<OwnerSlot> = serde_json::from_value(value).unwrap();
        assert_eq!(owner.object_id, Some(ObjectId::new("17")));
    }
}
