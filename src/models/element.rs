use serde::{Deserialize, Serialize};
use crate::models::chunk::Chunk;
use crate::models::location::Location;
use crate::utils::decode_escape_sentinels;

/// 元素类型，闭集
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Lyrics,
    Synopsis,
    SectionHeading,
    Centered,
    PageBreak,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::SceneHeading => "scene_heading",
            ElementType::Action => "action",
            ElementType::Character => "character",
            ElementType::Dialogue => "dialogue",
            ElementType::Parenthetical => "parenthetical",
            ElementType::Transition => "transition",
            ElementType::Lyrics => "lyrics",
            ElementType::Synopsis => "synopsis",
            ElementType::SectionHeading => "section_heading",
            ElementType::Centered => "centered",
            ElementType::PageBreak => "page_break",
        }
    }
}

/// 剧本元素
///
/// 分类阶段创建后不再改动，唯一例外是双对话联结会重建序列并翻转 `is_dual`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub element_type: ElementType,
    pub text: String,                   // 保留样式标记的原始文本
    pub line: usize,                    // 所在行号（元素首行）
    pub scene_number: Option<String>,   // 场景编号，仅场景标题有效
    pub section_depth: Option<usize>,   // 章节层级，仅章节标题有效，>= 1
    pub is_centered: bool,              // 是否居中
    pub is_dual: bool,                  // 是否属于双对话
    pub location_info: Option<Location>, // 场景位置信息，仅场景标题有效
}

impl Element {
    pub fn new(element_type: ElementType, text: impl Into<String>, line: usize) -> Self {
        Element {
            element_type,
            text: text.into(),
            line,
            scene_number: None,
            section_depth: None,
            is_centered: false,
            is_dual: false,
            location_info: None,
        }
    }

    // 检查元素类型是否匹配
    pub fn is_type(&self, types: &[ElementType]) -> bool {
        types.contains(&self.element_type)
    }

    /// 将元素文本切分成样式分块
    ///
    /// 按需调用，结果不缓存在元素上，重复调用产出相同的序列
    pub fn split_to_chunks(&self) -> Vec<Chunk> {
        crate::parser::chunker::split_to_chunks(&self.text)
    }

    // 获取清理后的文本(去除样式标记和转义哨兵)
    pub fn clean_text(&self) -> String {
        let t = self.text.replace(&['*', '_'][..], "");
        decode_escape_sentinels(&t).trim().to_string()
    }

    // 转换为HTML格式(用于预览)，样式标记交给分块处理
    pub fn to_html(&self) -> String {
        let inner: String = self
            .split_to_chunks()
            .iter()
            .map(|c| c.to_html())
            .collect();
        match self.element_type {
            ElementType::SceneHeading => format!("<div class=\"scene-heading\">{}</div>", inner),
            ElementType::Character => format!("<div class=\"character\">{}</div>", inner),
            ElementType::Dialogue => format!("<div class=\"dialogue\">{}</div>", inner),
            ElementType::Parenthetical => format!("<div class=\"parenthetical\">{}</div>", inner),
            ElementType::Action => format!("<div class=\"action\">{}</div>", inner),
            other => format!("<div class=\"fountain-{}\">{}</div>", other.as_str(), inner),
        }
    }
}
