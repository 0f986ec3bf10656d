use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    // 转义哨兵映射：`\x` 在规范化阶段替换成私用区占位字符，
    // 后续的分类和分块不再把它当作标记符号处理
    pub fn escape_sentinels() -> &'static HashMap<char, char> {
        &ESCAPE_SENTINELS
    }

    // 反向映射：占位字符还原成字面字符
    pub fn sentinel_literals() -> &'static HashMap<char, char> {
        &SENTINEL_LITERALS
    }
}

// 原实现沿用的常见转场写法，行内容完全一致时按转场处理
pub const COMMON_TRANSITIONS: [&str; 3] = ["FADE OUT.", "CUT TO BLACK.", "FADE TO BLACK."];

lazy_static! {
    // 私用区字符不会出现在正常剧本文本里
    pub static ref ESCAPE_SENTINELS: HashMap<char, char> = {
        let mut map = HashMap::new();
        map.insert('*', '\u{E700}');
        map.insert('_', '\u{E701}');
        map.insert('#', '\u{E702}');
        map.insert('!', '\u{E703}');
        map.insert('@', '\u{E704}');
        map.insert('~', '\u{E705}');
        map.insert('>', '\u{E706}');
        map.insert('<', '\u{E707}');
        map.insert('.', '\u{E708}');
        map.insert('=', '\u{E709}');
        map.insert('^', '\u{E70A}');
        map.insert('(', '\u{E70B}');
        map.insert(')', '\u{E70C}');
        map
    };

    pub static ref SENTINEL_LITERALS: HashMap<char, char> = {
        ESCAPE_SENTINELS.iter().map(|(&lit, &s)| (s, lit)).collect()
    };

    // 块级元素正则
    pub static ref BLOCK_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("title_page_key", Regex::new(r"^(\w[\w ]*?)\s*:\s*(.*)$").unwrap());
        map.insert("scene_heading", Regex::new(r"(?i)^(int\.?/ext\.?|int|ext|est|i/e)[. ]").unwrap());
        map.insert("scene_number", Regex::new(r"#\s*([^#]*?)\s*#\s*$").unwrap());
        map.insert("scene_location", Regex::new(r"(?i)^(int\.?/ext\.?|int|ext|est|i/e)[. ]\s*(.*)$").unwrap());
        map.insert("scene_time_split", Regex::new(r"(.*?)[\-–—−](.*)").unwrap());
        map.insert("section", Regex::new(r"^(#+)\s+(.*)$").unwrap());
        map.insert("synopsis", Regex::new(r"^=([^=].*)?$").unwrap());
        map.insert("page_break", Regex::new(r"^={3,}$").unwrap());
        map.insert("centered", Regex::new(r"^>\s*(.*?)\s*<$").unwrap());
        map.insert("transition_force", Regex::new(r"^>\s*(.*)$").unwrap());
        map.insert("character", Regex::new(r"^\p{Lu}[^\p{Ll}]*$").unwrap());
        map.insert("character_extension", Regex::new(r"[ \t]*\(.*\)[ \t]*$").unwrap());
        map.insert("parenthetical", Regex::new(r"^\(.*\)$").unwrap());
        map.insert("action_force", Regex::new(r"^!(.*)$").unwrap());
        map.insert("lyric", Regex::new(r"^~\s*(.*)$").unwrap());
        map
    };
}
