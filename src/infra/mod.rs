pub mod tsa;
