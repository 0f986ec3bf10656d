pub mod fountain_constants;

pub use fountain_constants::FountainConstants;
pub use fountain_constants::{BLOCK_REGEX, COMMON_TRANSITIONS};

/// 判断一行是否为全大写
///
/// 不含任何小写字母，且至少有一个大写字母（数字、标点、空格不影响判断）
pub fn is_upper_line(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

// 将转义哨兵还原成字面字符
pub fn decode_escape_sentinels(text: &str) -> String {
    let literals = FountainConstants::sentinel_literals();
    text.chars()
        .map(|c| *literals.get(&c).unwrap_or(&c))
        .collect()
}

// 一行去掉首尾空白后是否以某个强制前缀开头
pub fn is_forced_prefix_line(text: &str) -> bool {
    let t = text.trim();
    match t.chars().next() {
        Some('.') => !t.starts_with(".."),
        Some('!') | Some('@') | Some('~') | Some('>') | Some('#') | Some('=') => true,
        _ => false,
    }
}
