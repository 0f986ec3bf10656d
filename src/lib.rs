pub mod models;
pub mod utils;
pub mod parser;
pub mod api;

pub use models::{
    Chunk,
    Document,
    Element,
    ElementType,
    Location,
    Scene,
    TitlePageEntry
};

pub use parser::{
    FountainParser,
    split_to_chunks
};

pub use api::{
    ScriptError,
    parse_fountain_text,
    parse_fountain_file
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
///
/// # Returns
///
/// 结构化文档对象
pub fn parse(script: &str) -> Document {
    FountainParser::new().parse(script)
}
