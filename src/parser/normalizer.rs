use crate::utils::FountainConstants;

/// 行规范化
///
/// 依次：统一换行符，去除 boneyard `/* */` 区段，去除 note `[[ ]]` 区段，
/// 把反斜杠转义替换成哨兵字符。任何输入都不报错，不合法的写法按宽松规则降级。
pub fn normalize(script: &str) -> String {
    let text = unify_line_endings(script);
    let text = strip_spans(&text, "/*", "*/");
    let text = strip_spans(&text, "[[", "]]");
    resolve_escapes(&text)
}

fn unify_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

// 去除 open..close 区段
//
// 区段不嵌套，第一个闭合符结束最早的开启符；缺少闭合符时区段一直吞到文本结尾。
// 区段内的换行保留，空行划分出的块边界不受影响。
fn strip_spans(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        match rest.find(open) {
            None => {
                out.push_str(rest);
                break;
            }
            Some(i) => {
                out.push_str(&rest[..i]);
                let after = &rest[i + open.len()..];
                match after.find(close) {
                    None => {
                        out.extend(after.chars().filter(|&c| c == '\n'));
                        break;
                    }
                    Some(j) => {
                        out.extend(after[..j].chars().filter(|&c| c == '\n'));
                        rest = &after[j + close.len()..];
                    }
                }
            }
        }
    }
    out
}

// `\x` 替换成 x 对应的哨兵；映射外的字符去掉反斜杠保留字面形式，
// 行尾落单的反斜杠原样保留
fn resolve_escapes(text: &str) -> String {
    let sentinels = FountainConstants::escape_sentinels();
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(n) => out.push(*sentinels.get(&n).unwrap_or(&n)),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
