use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QueryTrait,
};

use crate::server::model::{
    customer::CustomerFilter,
    order::{NewOrder, OrderChanges, OrderWithRelations},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new order row
    pub async fn create(&self, order: NewOrder) -> Result<entity::pilotes_order::Model, DbErr> {
        entity::pilotes_order::ActiveModel {
            order_number: ActiveValue::Set(order.order_number),
            creation_date: ActiveValue::Set(order.creation_date),
            notified: ActiveValue::Set(false),
            address_id: ActiveValue::Set(order.address_id),
            pilotes_number: ActiveValue::Set(order.pilotes_number.as_str().to_string()),
            total: ActiveValue::Set(order.total),
            customer_id: ActiveValue::Set(order.customer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the mutable fields of an order, leaving creation date, customer and
    /// notified flag untouched
    pub async fn update(
        &self,
        id: i32,
        changes: OrderChanges,
    ) -> Result<entity::pilotes_order::Model, DbErr> {
        entity::pilotes_order::ActiveModel {
            id: ActiveValue::Unchanged(id),
            address_id: ActiveValue::Set(changes.address_id),
            pilotes_number: ActiveValue::Set(changes.pilotes_number.as_str().to_string()),
            total: ActiveValue::Set(changes.total),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Gets an order by its order number together with its address and customer
    pub async fn find_by_number(
        &self,
        order_number: &str,
    ) -> Result<Option<OrderWithRelations>, DbErr> {
        let order = entity::prelude::PilotesOrder::find()
            .filter(entity::pilotes_order::Column::OrderNumber.eq(order_number))
            .one(self.db)
            .await?;

        match order {
            Some(order) => Ok(self.load_relations(vec![order]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Gets every order whose customer fields contain the corresponding filter values.
    ///
    /// Matching is case-sensitive (`instr`, as SQLite `LIKE` ignores ASCII case). Unset
    /// filter fields are unconstrained.
    pub async fn search_by_customer(
        &self,
        filter: &CustomerFilter,
    ) -> Result<Vec<OrderWithRelations>, DbErr> {
        use entity::customer::Column;

        let orders = entity::prelude::PilotesOrder::find()
            .inner_join(entity::prelude::Customer)
            .apply_if(filter.first_name.clone(), |q, v| {
                q.filter(contains(Column::FirstName, v))
            })
            .apply_if(filter.last_name.clone(), |q, v| {
                q.filter(contains(Column::LastName, v))
            })
            .apply_if(filter.telephone.clone(), |q, v| {
                q.filter(contains(Column::Telephone, v))
            })
            .apply_if(filter.email.clone(), |q, v| {
                q.filter(contains(Column::Email, v))
            })
            .order_by_asc(entity::pilotes_order::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(orders).await
    }

    /// Gets unnotified orders created strictly before `cutoff`
    pub async fn find_pending(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<OrderWithRelations>, DbErr> {
        use entity::pilotes_order::Column;

        let orders = entity::prelude::PilotesOrder::find()
            .filter(Column::Notified.eq(false))
            .filter(Column::CreationDate.lt(cutoff))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(orders).await
    }

    /// Flags the given orders as notified, returning the number of updated rows
    pub async fn mark_notified(&self, ids: Vec<i32>) -> Result<u64, DbErr> {
        use entity::pilotes_order::Column;

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::PilotesOrder::update_many()
            .col_expr(Column::Notified, Expr::value(true))
            .filter(Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Attaches address and customer rows to each order, fetching each table once
    async fn load_relations(
        &self,
        orders: Vec<entity::pilotes_order::Model>,
    ) -> Result<Vec<OrderWithRelations>, DbErr> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let address_ids: Vec<i32> = orders.iter().map(|o| o.address_id).collect();
        let customer_ids: Vec<i32> = orders.iter().map(|o| o.customer_id).collect();

        let addresses: HashMap<i32, entity::address::Model> = entity::prelude::Address::find()
            .filter(entity::address::Column::Id.is_in(address_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let customers: HashMap<i32, entity::customer::Model> = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Id.is_in(customer_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        orders
            .into_iter()
            .map(|order| {
                let address = addresses.get(&order.address_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Address {} of order {} not found",
                        order.address_id, order.order_number
                    ))
                })?;
                let customer = customers.get(&order.customer_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Customer {} of order {} not found",
                        order.customer_id, order.order_number
                    ))
                })?;

                Ok(OrderWithRelations {
                    order,
                    address,
                    customer,
                })
            })
            .collect()
    }
}

/// Case-sensitive substring match on a customer column.
fn contains(column: entity::customer::Column, value: String) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(
        Func::cust(Alias::new("instr"))
            .arg(Expr::col((entity::prelude::Customer, column)))
            .arg(value),
    )
    .gt(0)
}
