use log::debug;
use crate::models::{Element, ElementType};

/// 双对话联结
///
/// 对分类好的元素序列做一次重建：每遇到带 `^` 标记的角色提示
/// （分类阶段已在该元素上置 `is_dual`），把它后面的
/// 对白/舞台提示连续段，连同紧邻在前的角色及其对白块，
/// 全部标记为双对话。只翻转标记，不增删、不移动元素。
pub fn link_dual_dialogue(elements: Vec<Element>) -> Vec<Element> {
    let mut out = elements;
    let mut idx = 0;
    while idx < out.len() {
        let is_cue = out[idx].element_type == ElementType::Character && out[idx].is_dual;
        if !is_cue {
            idx += 1;
            continue;
        }

        // 向后：右侧角色的对白连续段
        let mut j = idx + 1;
        while j < out.len()
            && matches!(
                out[j].element_type,
                ElementType::Dialogue | ElementType::Parenthetical
            )
        {
            out[j].is_dual = true;
            j += 1;
        }

        // 向前：紧邻的左侧角色与其对白块
        let mut k = idx;
        while k > 0 {
            k -= 1;
            match out[k].element_type {
                ElementType::Dialogue | ElementType::Parenthetical => {
                    out[k].is_dual = true;
                }
                ElementType::Character => {
                    out[k].is_dual = true;
                    debug!("双对话配对: {} <-> {}", out[k].text, out[idx].text);
                    break;
                }
                _ => break,
            }
        }

        idx = j;
    }
    out
}
