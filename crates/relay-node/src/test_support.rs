//! Fixtures shared by the unit tests: two domain types, an in-memory store
//! that decodes its own ids, and a schema wiring them together.

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, Schema, TypeRef};
use async_graphql::{Context, Result};
use async_trait::async_trait;

use relay_globalid::decode_global_id;

use crate::{GlobalIdField, Identifiable, NodeDefinitions, NodeFetcher};

#[derive(Clone, Debug)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl Identifiable for User {
    fn local_id(&self) -> String {
        self.id.to_string()
    }
}

/// Not `Identifiable`; its id comes from a local-id fetcher.
#[derive(Clone, Debug)]
pub struct Photo {
    pub key: String,
    pub width: i32,
}

pub fn user(id: u64) -> User {
    let name = match id {
        1 => "Ada",
        2 => "Grace",
        _ => "Anonymous",
    };
    User {
        id,
        name: name.into(),
    }
}

pub fn photo(key: &str) -> Photo {
    Photo {
        key: key.into(),
        width: 640,
    }
}

pub struct Store {
    users: Vec<User>,
    photos: Vec<Photo>,
    tag_types: bool,
}

impl Store {
    /// Returns values already tagged with their type.
    pub fn seeded() -> Self {
        Self {
            users: vec![user(1), user(2)],
            photos: vec![photo("p-1"), photo("p-2")],
            tag_types: true,
        }
    }

    /// Returns bare values; a type resolver must tag them.
    pub fn untagged() -> Self {
        Self {
            tag_types: false,
            ..Self::seeded()
        }
    }

    fn tagged(&self, value: FieldValue<'static>, type_name: &'static str) -> FieldValue<'static> {
        if self.tag_types {
            value.with_type(type_name)
        } else {
            value
        }
    }
}

#[async_trait]
impl NodeFetcher for Store {
    async fn fetch(&self, id: &str, _ctx: &Context<'_>) -> Result<Option<FieldValue<'static>>> {
        let Ok(global_id) = decode_global_id(id) else {
            return Ok(None);
        };
        let value = match global_id.type_name() {
            "User" => self
                .users
                .iter()
                .find(|u| u.local_id() == global_id.local_id())
                .map(|u| self.tagged(FieldValue::owned_any(u.clone()), "User")),
            "Photo" => self
                .photos
                .iter()
                .find(|p| p.key == global_id.local_id())
                .map(|p| self.tagged(FieldValue::owned_any(p.clone()), "Photo")),
            _ => None,
        };
        Ok(value)
    }
}

pub fn user_type() -> Object {
    GlobalIdField::<User>::new().attach(Object::new("User")).field(Field::new(
        "name",
        TypeRef::named_nn(TypeRef::STRING),
        |ctx| {
            FieldFuture::new(async move {
                let user = ctx.parent_value.try_downcast_ref::<User>()?;
                Ok(Some(FieldValue::value(user.name.clone())))
            })
        },
    ))
}

pub fn photo_type() -> Object {
    GlobalIdField::<Photo>::with_fetcher(|photo, _ctx, _info| Some(photo.key.clone()))
        .attach(Object::new("Photo"))
        .field(Field::new(
            "width",
            TypeRef::named_nn(TypeRef::INT),
            |ctx| {
                FieldFuture::new(async move {
                    let photo = ctx.parent_value.try_downcast_ref::<Photo>()?;
                    Ok(Some(FieldValue::value(photo.width)))
                })
            },
        ))
}

pub fn schema(defs: &NodeDefinitions) -> Schema {
    let query = defs.extend_query(Object::new("Query"));
    Schema::build("Query", None, None)
        .register(defs.interface())
        .register(defs.implement(user_type()))
        .register(defs.implement(photo_type()))
        .register(query)
        .finish()
        .expect("test schema is valid")
}
