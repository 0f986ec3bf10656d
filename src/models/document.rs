use serde::{Deserialize, Serialize};
use crate::models::element::{Element, ElementType};

/// 标题页条目
///
/// 保留出现顺序，键重复时各自成条，值为按行拆分的有序列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePageEntry {
    pub key: String, // 小写键名
    pub values: Vec<String>,
}

/// 场景：一个场景标题及其后续元素，按下标引用 Document.elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub heading: String,             // 场景标题文本（清理后）
    pub number: Option<String>,      // 场景编号
    pub elements: Vec<usize>,        // 成员元素下标，含场景标题自身
}

/// 解析产出的结构化文档
///
/// 一次解析构造一次，之后对使用方只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title_page: Vec<TitlePageEntry>,
    pub elements: Vec<Element>,
    pub scenes: Vec<Scene>,
}

impl Document {
    /// 取第一个匹配键的标题页值列表
    pub fn title_values(&self, key: &str) -> Option<&[String]> {
        let key = key.to_lowercase();
        self.title_page
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.values.as_slice())
    }

    // 按类型筛选元素
    pub fn elements_of_type(&self, element_type: ElementType) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| e.element_type == element_type)
            .collect()
    }
}
