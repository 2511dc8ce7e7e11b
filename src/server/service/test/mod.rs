mod customer;
mod order_notifier;
