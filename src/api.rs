//! 便捷调用接口
//!
//! 文件读取和JSON输出。解析本身永远不失败，
//! 这一层是整个库里唯一会返回错误的地方

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Document;
use crate::parser::FountainParser;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("读取剧本文件失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("序列化解析结果失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 解析Fountain文本，返回JSON字符串
pub fn parse_fountain_text(text: &str) -> Result<String, ScriptError> {
    let document = FountainParser::new().parse(text);
    Ok(serde_json::to_string(&document)?)
}

/// 读取并解析Fountain文件
pub fn parse_fountain_file(path: impl AsRef<Path>) -> Result<Document, ScriptError> {
    let contents = fs::read_to_string(path)?;
    Ok(FountainParser::new().parse(&contents))
}
