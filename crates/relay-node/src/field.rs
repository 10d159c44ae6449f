//! Per-type `id` fields that render global ids.
//!
//! A [`GlobalIdField`] resolves to `encode_global_id(type_name, local_id)`
//! where the type name is either fixed up front or taken from the
//! [`ResolveInfo`] of the object being resolved, and the local id comes from
//! the object's [`Identifiable`] impl or a custom fetcher.

use std::any::Any;
use std::sync::Arc;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, ResolverContext, TypeRef};
use async_graphql::Context;
use tracing::warn;

use relay_globalid::encode_global_id;

use crate::error::{NodeError, NodeResult};

/// A domain object that carries an identifier unique within its type.
pub trait Identifiable {
    fn local_id(&self) -> String;
}

/// Read-only facts about the field being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveInfo<'a> {
    /// Concrete object type that owns the field.
    pub parent_type: &'a str,
    pub field_name: &'a str,
}

impl<'a> ResolveInfo<'a> {
    pub fn new(parent_type: &'a str, field_name: &'a str) -> Self {
        Self {
            parent_type,
            field_name,
        }
    }
}

type LocalIdFetcher<T> =
    Arc<dyn Fn(&T, &Context<'_>, &ResolveInfo<'_>) -> Option<String> + Send + Sync>;

enum LocalIdSource<T> {
    Declared(fn(&T) -> String),
    Fetcher(LocalIdFetcher<T>),
}

impl<T> Clone for LocalIdSource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Declared(f) => Self::Declared(*f),
            Self::Fetcher(f) => Self::Fetcher(f.clone()),
        }
    }
}

/// Builder for the `id: ID!` field of objects backed by `T`.
///
/// The parent value must downcast to `T`; anything else fails with
/// [`NodeError::MissingIdentity`].
pub struct GlobalIdField<T> {
    type_name: Option<String>,
    field_name: String,
    local_id: LocalIdSource<T>,
}

impl<T> Clone for GlobalIdField<T> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            field_name: self.field_name.clone(),
            local_id: self.local_id.clone(),
        }
    }
}

impl<T: Identifiable + Any + Send + Sync> GlobalIdField<T> {
    /// Take the local id from [`Identifiable::local_id`].
    pub fn new() -> Self {
        Self::from_source(LocalIdSource::Declared(T::local_id))
    }
}

impl<T: Identifiable + Any + Send + Sync> Default for GlobalIdField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Any + Send + Sync> GlobalIdField<T> {
    /// Take the local id from `fetcher`. Returning `None` fails the field
    /// with [`NodeError::MissingIdentity`].
    pub fn with_fetcher<F>(fetcher: F) -> Self
    where
        F: Fn(&T, &Context<'_>, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_source(LocalIdSource::Fetcher(Arc::new(fetcher)))
    }

    fn from_source(local_id: LocalIdSource<T>) -> Self {
        Self {
            type_name: None,
            field_name: "id".into(),
            local_id,
        }
    }

    /// Encode ids under a fixed type name instead of the parent type.
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Name of the generated field (default `id`).
    pub fn field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    /// Add the field to `object`, which becomes its parent type.
    pub fn attach(self, object: Object) -> Object {
        let parent_type = object.type_name().to_string();
        object.field(self.into_field(parent_type))
    }

    /// Build the field for objects of type `parent_type`.
    fn into_field(self, parent_type: impl Into<String>) -> Field {
        let parent_type = parent_type.into();
        let field_name = self.field_name.clone();
        Field::new(
            field_name.clone(),
            TypeRef::named_nn(TypeRef::ID),
            move |ctx| {
                let info = ResolveInfo::new(&parent_type, &field_name);
                let token = self.resolve(&ctx, &info);
                FieldFuture::new(async move { Ok(Some(FieldValue::value(token?))) })
            },
        )
        .description("The ID of an object")
    }

    fn resolve(&self, ctx: &ResolverContext<'_>, info: &ResolveInfo<'_>) -> NodeResult<String> {
        let type_name = self.type_name.as_deref().unwrap_or(info.parent_type);
        let Some(object) = ctx.parent_value.downcast_ref::<T>() else {
            warn!(type_name, "parent value is not the declared identifiable type");
            return Err(NodeError::missing_identity(type_name));
        };
        let local_id = match &self.local_id {
            LocalIdSource::Declared(local_id) => local_id(object),
            LocalIdSource::Fetcher(fetcher) => fetcher(object, ctx.ctx, info).ok_or_else(|| {
                warn!(type_name, "local id fetcher returned no id");
                NodeError::missing_identity(type_name)
            })?,
        };
        Ok(encode_global_id(type_name, local_id))
    }
}
