//! 二进制载荷解码（BinaryDataDecoder）
//!
//! 存储层读取的二进制列可能以转义文本形式返回，解码器负责还原为原始字节。
//!
use crate::error::{DomainError, DomainResult};

/// 二进制数据解码器
pub trait BinaryDataDecoder: Send + Sync {
    /// 还原存储层返回的转义二进制数据
    fn unescape_binary(&self, payload: &[u8]) -> DomainResult<Vec<u8>>;
}

/// PostgreSQL `bytea` 十六进制输出格式（`\x` 前缀）解码器
///
/// 无 `\x` 前缀的输入视为未转义，原样返回。
#[derive(Clone, Copy, Debug, Default)]
pub struct PostgresByteaDecoder;

impl BinaryDataDecoder for PostgresByteaDecoder {
    fn unescape_binary(&self, payload: &[u8]) -> DomainResult<Vec<u8>> {
        match payload.strip_prefix(br"\x") {
            Some(hex_digits) => Ok(hex::decode(hex_digits)?),
            None => Ok(payload.to_vec()),
        }
    }
}

impl PostgresByteaDecoder {
    /// 解码并要求结果为 UTF-8 文本（如 JSON 载荷）
    pub fn unescape_text(&self, payload: &[u8]) -> DomainResult<String> {
        let bytes = self.unescape_binary(payload)?;
        String::from_utf8(bytes).map_err(|e| DomainError::BinaryDecode {
            reason: e.to_string(),
        })
    }
}
