pub mod a001_transaction;
