pub use super::address::Entity as Address;
pub use super::customer::Entity as Customer;
pub use super::order_sequence::Entity as OrderSequence;
pub use super::pilotes_order::Entity as PilotesOrder;
