use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// First value handed out by a fresh sequence.
pub const INITIAL_VALUE: i64 = 100;

const SEQUENCE_ID: i32 = 1;

/// Monotonic counter backing order numbers.
///
/// The counter lives in a single row of `order_sequence`. Run `next_value` inside the
/// transaction that consumes the value so a rolled back save also gives the value back.
pub struct OrderSequenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderSequenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Increments the counter and returns the new value.
    ///
    /// Creates the counter row with `INITIAL_VALUE` on first use.
    ///
    /// # Returns
    /// - `Ok(i64)` - The allocated value
    /// - `Err(DbErr)` - Database error during update or insert
    pub async fn next_value(&self) -> Result<i64, DbErr> {
        use entity::order_sequence::Column;

        let result = entity::prelude::OrderSequence::update_many()
            .col_expr(Column::Value, Expr::col(Column::Value).add(1))
            .filter(Column::Id.eq(SEQUENCE_ID))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            entity::order_sequence::ActiveModel {
                id: ActiveValue::Set(SEQUENCE_ID),
                value: ActiveValue::Set(INITIAL_VALUE),
            }
            .insert(self.db)
            .await?;

            return Ok(INITIAL_VALUE);
        }

        let sequence = entity::prelude::OrderSequence::find_by_id(SEQUENCE_ID)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(
                "Order sequence row not found after increment".to_string(),
            ))?;

        Ok(sequence.value)
    }
}
