use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;
use sea_orm::prelude::*;

use sea_orm::Iterable;


#[derive(Debug, PartialEq, Eq, Clone, Hash, Ord, PartialOrd)]
pub enum SortableValueWrapper {
    Int(i32)
}

impl From<i32> for SortableValueWrapper {
    fn from(value: i32) -> Self {
        SortableValueWrapper::Int(value)
    }
}

impl TryFrom<sea_orm::Value> for SortableValueWrapper {
    type Error = DbErr;

    fn try_from(value: sea_orm::Value) -> Result<Self, Self::Error> {
        match value {
            sea_orm::Value::Int(Some(val)) => Ok(SortableValueWrapper::Int(val)),
            other => Err(DbErr::Type(format!("Expected integer key, got {:?}", other)))
        }
    }
}

/// Loads the rows for `values` and returns them in the order of `values`,
/// with `None` for every key that has no row.
pub async fn load_many<E, Conn, Col, M, T>(db: &Conn, values: Vec<T>) -> Result<Vec<Option<M>>, DbErr> where E: EntityTrait<Column=Col, Model=M>, M: ModelTrait<Entity = E>, Conn: ConnectionTrait, Col: ColumnTrait, T: Into<sea_orm::Value> + Into<SortableValueWrapper> + Ord + Eq + Hash + Clone + Send + Sync + 'static {
    let keys : Vec<Col> = E::PrimaryKey::iter().map(|e| e.into_column()).collect();

    if keys.len() != 1 {
        return Err(DbErr::Custom("load_many only supports entities with a single primary key".into()));
    }

    let key = keys[0];

    let models = E::find().filter(key.is_in(values.clone())).all(db).await?;

    let mut new_positions = HashMap::new();
    for (i, model) in models.iter().enumerate() {
        new_positions.insert(SortableValueWrapper::try_from(model.get(key))?, i);
    }

    Ok(values.into_iter().map(|value| {
        new_positions.get(&value.into()).map(|pos| models[*pos].clone())
    }).collect())
}


#[async_trait]
pub trait BatchLoad {
    type E: EntityTrait;
    type M;
    async fn batch_load<Conn, T> (db: &Conn, values: Vec<T>) -> Result<Vec<Option<Self::M>>, DbErr> where Conn: sea_orm::ConnectionTrait, T: Into<sea_orm::Value> + Into<SortableValueWrapper> + Ord + Eq + Hash + Clone + Send + Sync + 'static;
}

#[async_trait]
impl<E2: sea_orm::EntityTrait> BatchLoad for E2 {
    type E = E2;
    type M = E2::Model;

    async fn batch_load<Conn, T> (db: &Conn, values: Vec<T>) -> Result<Vec<Option<Self::M>>, DbErr> where Conn: sea_orm::ConnectionTrait, T: Into<sea_orm::Value> + Into<SortableValueWrapper> + Ord + Eq + Hash + Clone + Send + Sync + 'static {
        load_many(db, values).await
    }
}
