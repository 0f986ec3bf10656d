use crate::models::TitlePageEntry;
use crate::utils::{decode_escape_sentinels, BLOCK_REGEX};

/// 标题页抽取
///
/// 从文本开头识别 `key: value` 元数据块，遇到第一个空行结束，
/// 返回 (条目列表, 正文文本, 正文行偏移)。
/// 首行不匹配键模式时整个输入都按正文处理。本阶段不会失败。
pub fn extract_title_page(text: &str) -> (Vec<TitlePageEntry>, String, usize) {
    let key_re = BLOCK_REGEX.get("title_page_key").unwrap();
    let lines: Vec<&str> = text.split('\n').collect();

    let first = lines.first().copied().unwrap_or("");
    if !key_re.is_match(first) {
        return (Vec::new(), text.to_string(), 0);
    }

    let mut entries: Vec<TitlePageEntry> = Vec::new();
    let mut body_start = lines.len();
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            body_start = i + 1;
            break;
        }
        if !line.starts_with(char::is_whitespace) {
            if let Some(caps) = key_re.captures(line) {
                // 键统一小写；重复键各自成条，保留出现顺序
                let key = caps.get(1).unwrap().as_str().trim().to_lowercase();
                let value = caps.get(2).unwrap().as_str().trim();
                let mut values = Vec::new();
                if !value.is_empty() {
                    values.push(decode_escape_sentinels(value));
                }
                entries.push(TitlePageEntry { key, values });
                continue;
            }
            // 块内出现既不是键也不是续行的内容，标题页到此为止
            body_start = i;
            break;
        }
        // 缩进行追加为上一个键的续值，支持多行元数据
        if let Some(entry) = entries.last_mut() {
            entry.values.push(decode_escape_sentinels(line.trim()));
        }
    }

    let body = lines.get(body_start..).unwrap_or(&[]).join("\n");
    (entries, body, body_start)
}
