mod address;
mod order_sequence;
