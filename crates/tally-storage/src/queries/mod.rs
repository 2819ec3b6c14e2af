pub mod transaction_ops;
