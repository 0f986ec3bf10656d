pub mod chunker;
pub mod classifier;
pub mod dual_dialogue;
pub mod normalizer;
pub mod title_page;

pub use chunker::split_to_chunks;

use crate::models::{Document, Element, ElementType, Scene};

/// Fountain解析器
///
/// 串联各阶段：规范化 -> 标题页抽取 -> 块分类 -> 双对话联结。
/// 解析是输入文本的纯函数，不做任何IO，也永远不会失败，
/// 畸形输入按各阶段的宽松规则降级处理。
pub struct FountainParser;

impl FountainParser {
    pub fn new() -> Self {
        FountainParser
    }

    /// 解析Fountain格式文本
    ///
    /// # Arguments
    ///
    /// * `script` - Fountain格式的剧本文本
    ///
    /// # Returns
    ///
    /// 结构化文档
    pub fn parse(&self, script: &str) -> Document {
        let normalized = normalizer::normalize(script);
        let (title_page, body, line_offset) = title_page::extract_title_page(&normalized);
        let elements = classifier::classify(&body, line_offset);
        let elements = dual_dialogue::link_dual_dialogue(elements);
        let scenes = collect_scenes(&elements);
        Document {
            title_page,
            elements,
            scenes,
        }
    }
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}

// 归集场景：从第一个场景标题开始，后续元素都挂在当前场景名下；
// 第一个场景标题之前的元素不属于任何场景
fn collect_scenes(elements: &[Element]) -> Vec<Scene> {
    let mut scenes: Vec<Scene> = Vec::new();
    for (i, el) in elements.iter().enumerate() {
        if el.element_type == ElementType::SceneHeading {
            scenes.push(Scene {
                heading: el.clean_text(),
                number: el.scene_number.clone(),
                elements: vec![i],
            });
        } else if let Some(scene) = scenes.last_mut() {
            scene.elements.push(i);
        }
    }
    scenes
}
