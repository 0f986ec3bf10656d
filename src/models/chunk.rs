use serde::{Deserialize, Serialize};

/// 样式分块
///
/// 元素文本按 粗体/斜体/下划线 标记切分后的连续片段，
/// 三个样式开关互相独立，八种组合都是合法的
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,        // 已去除样式定界符的文本
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Chunk {
    pub fn new(text: impl Into<String>, bold: bool, italic: bool, underline: bool) -> Self {
        Chunk {
            text: text.into(),
            bold,
            italic,
            underline,
        }
    }

    // 转换为HTML格式(用于预览)
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if self.underline {
            out.push_str("<u>");
        }
        if self.bold {
            out.push_str("<b>");
        }
        if self.italic {
            out.push_str("<i>");
        }
        out.push_str(&self.text);
        if self.italic {
            out.push_str("</i>");
        }
        if self.bold {
            out.push_str("</b>");
        }
        if self.underline {
            out.push_str("</u>");
        }
        out
    }
}
