//! 存储侧协作者（persist）
//!
//! saga 状态的持久化不在本 crate 范围内，这里仅保留读取存储载荷时所需的
//! 解码接口，以及针对 PostgreSQL `bytea` 的默认实现。
//!
mod binary_decoder;

pub use binary_decoder::{BinaryDataDecoder, PostgresByteaDecoder};
