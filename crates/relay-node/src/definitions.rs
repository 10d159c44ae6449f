//! The `Node` interface and its root lookup fields.
//!
//! [`NodeDefinitions`] is built once per schema. It produces:
//!
//! - the interface (`interface Node { id: ID! }`),
//! - the root field `node(id: ID!): Node`.
//!
//! The root field passes the raw `id` argument to the [`NodeFetcher`]
//! untouched. Decoding, validation, and the choice of identifier scheme
//! all belong to the fetcher.

use std::sync::Arc;

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, Interface, InterfaceField, Object, TypeRef,
    ValueAccessor,
};
use async_graphql::{Context, Result, Value};
use tracing::debug;

use crate::config::NodeConfig;
use crate::error::{NodeError, NodeResult};
use crate::fetcher::{IdResolver, NodeFetcher, TypeResolver};
use crate::field::ResolveInfo;

/// Schema elements for global object identification.
#[derive(Clone)]
pub struct NodeDefinitions {
    config: NodeConfig,
    fetcher: Arc<dyn NodeFetcher>,
    type_resolver: Option<TypeResolver>,
    id_resolver: Option<IdResolver>,
}

impl NodeDefinitions {
    /// Definitions with the default names (`Node`, `id`, `node`).
    pub fn new(fetcher: impl NodeFetcher + 'static) -> Self {
        Self {
            config: NodeConfig::default(),
            fetcher: Arc::new(fetcher),
            type_resolver: None,
            id_resolver: None,
        }
    }

    /// Definitions with custom names. Fails if `config` does not validate.
    pub fn with_config(fetcher: impl NodeFetcher + 'static, config: NodeConfig) -> NodeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(fetcher)
        })
    }

    /// Tag fetched objects with the type name returned by `resolver`.
    ///
    /// Without a type resolver the fetcher must return values that already
    /// carry their type (`FieldValue::with_type`).
    pub fn type_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&FieldValue<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.type_resolver = Some(Arc::new(resolver));
        self
    }

    /// Resolve the `id` field of every object passed to
    /// [`implement`](Self::implement) with `resolver`.
    pub fn id_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&FieldValue<'_>, &Context<'_>, &ResolveInfo<'_>) -> Result<String>
            + Send
            + Sync
            + 'static,
    {
        self.id_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// The `Node` interface.
    pub fn interface(&self) -> Interface {
        Interface::new(&self.config.interface_name)
            .description("An object with an ID")
            .field(
                InterfaceField::new(&self.config.id_field, TypeRef::named_nn(TypeRef::ID))
                    .description("The id of the object."),
            )
    }

    /// Declare that `object` implements the interface.
    ///
    /// When an id resolver is configured the object also receives an `id`
    /// field backed by it, replacing any `id` field it already declares.
    pub fn implement(&self, object: Object) -> Object {
        let object = object.implement(&self.config.interface_name);
        let Some(resolver) = self.id_resolver.clone() else {
            return object;
        };

        let parent_type = object.type_name().to_string();
        let field_name = self.config.id_field.clone();
        object.field(
            Field::new(
                field_name.clone(),
                TypeRef::named_nn(TypeRef::ID),
                move |ctx| {
                    let info = ResolveInfo::new(&parent_type, &field_name);
                    let token = resolver(ctx.parent_value, ctx.ctx, &info);
                    FieldFuture::new(async move { Ok(Some(FieldValue::value(token?))) })
                },
            )
            .description("The id of the object."),
        )
    }

    /// `node(id: ID!): Node`
    pub fn node_field(&self) -> Field {
        let fetcher = self.fetcher.clone();
        let type_resolver = self.type_resolver.clone();
        Field::new(
            &self.config.node_field,
            TypeRef::named(&self.config.interface_name),
            move |ctx| {
                let fetcher = fetcher.clone();
                let type_resolver = type_resolver.clone();
                FieldFuture::new(async move {
                    let id = raw_id(ctx.args.try_get("id")?)?;
                    debug!(%id, "resolving node");
                    let Some(value) = fetcher.fetch(&id, ctx.ctx).await? else {
                        debug!(%id, "node not found");
                        return Ok(None);
                    };
                    Ok(Some(resolve_type(value, type_resolver.as_ref())?))
                })
            },
        )
        .description("Fetches an object given its ID")
        .argument(
            InputValue::new("id", TypeRef::named_nn(TypeRef::ID)).description("The ID of an object"),
        )
    }

    /// Tag `value` with its concrete type using the configured type
    /// resolver.
    ///
    /// Resolvers for other fields typed as the interface (a `viewer: Node`,
    /// a connection edge) use this to get the same dispatch as `node`.
    /// Without a type resolver `value` is returned unchanged.
    pub fn resolve_type<'a>(&self, value: FieldValue<'a>) -> NodeResult<FieldValue<'a>> {
        resolve_type(value, self.type_resolver.as_ref())
    }

    /// Add the `node` root field to the query type.
    pub fn extend_query(&self, query: Object) -> Object {
        query.field(self.node_field())
    }
}

/// The argument as the fetcher sees it. `ID` accepts string and integer
/// literals; integers are passed on in their decimal form.
fn raw_id(value: ValueAccessor<'_>) -> Result<String> {
    match value.as_value() {
        Value::String(id) => Ok(id.clone()),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(format!("invalid ID value: {other}").into()),
    }
}

fn resolve_type<'a>(
    value: FieldValue<'a>,
    resolver: Option<&TypeResolver>,
) -> NodeResult<FieldValue<'a>> {
    let Some(resolver) = resolver else {
        return Ok(value);
    };
    let type_name = resolver(&value).ok_or(NodeError::UnresolvedType)?;
    Ok(value.with_type(type_name))
}
