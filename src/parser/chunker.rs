use crate::models::Chunk;
use crate::utils::FountainConstants;

// 定界符切分出的词元
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Stars(usize), // 1=斜体 2=粗体 3=粗斜体
    Underscore,
}

// 样式下标：0=斜体 1=粗体 2=下划线
const STYLE_COUNT: usize = 3;

/// 样式分块
///
/// 把一个元素的文本按 `*` `**` `***` `_` 定界符切成有序分块。
/// 从左到右扫描，定界符按样式独立配对切换；没配上闭合符的
/// 开启符降级成字面字符，转义哨兵始终按字面字符输出。
/// 本操作无副作用，重复调用产出相同结果，也永远不会失败。
pub fn split_to_chunks(text: &str) -> Vec<Chunk> {
    if text.is_empty() {
        return Vec::new();
    }
    let tokens = tokenize(text);
    let dead = pair_delimiters(&tokens);
    emit(&tokens, &dead)
}

fn tokenize(text: &str) -> Vec<Token> {
    let literals = FountainConstants::sentinel_literals();
    let mut tokens: Vec<Token> = Vec::new();
    let mut buf = String::new();
    let mut stars = 0usize;

    for c in text.chars() {
        if c == '*' {
            if !buf.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut buf)));
            }
            stars += 1;
            continue;
        }
        if stars > 0 {
            push_stars(&mut tokens, stars);
            stars = 0;
        }
        if c == '_' {
            if !buf.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut buf)));
            }
            tokens.push(Token::Underscore);
        } else if let Some(&lit) = literals.get(&c) {
            // 转义哨兵还原成字面字符，不参与样式切换
            buf.push(lit);
        } else {
            buf.push(c);
        }
    }
    if stars > 0 {
        push_stars(&mut tokens, stars);
    }
    if !buf.is_empty() {
        tokens.push(Token::Text(buf));
    }
    tokens
}

// 连续 1~3 个星号是定界符，更长的串按字面文本降级
fn push_stars(tokens: &mut Vec<Token>, count: usize) {
    if (1..=3).contains(&count) {
        tokens.push(Token::Stars(count));
    } else {
        tokens.push(Token::Text("*".repeat(count)));
    }
}

// 词元是否切换某个样式；`***` 同时切换粗体和斜体
fn affects(token: &Token, style: usize) -> bool {
    match (token, style) {
        (Token::Stars(1), 0) => true,
        (Token::Stars(2), 1) => true,
        (Token::Stars(3), 0) | (Token::Stars(3), 1) => true,
        (Token::Underscore, 2) => true,
        _ => false,
    }
}

// 按样式独立配对。扫描结束仍然开着的样式，最后那个开启符
// 的对应成分标记为失配，发射阶段按字面字符处理
fn pair_delimiters(tokens: &[Token]) -> Vec<[bool; STYLE_COUNT]> {
    let mut dead = vec![[false; STYLE_COUNT]; tokens.len()];
    for style in 0..STYLE_COUNT {
        let mut open: Option<usize> = None;
        for (i, tok) in tokens.iter().enumerate() {
            if affects(tok, style) {
                open = match open {
                    None => Some(i),
                    Some(_) => None,
                };
            }
        }
        if let Some(i) = open {
            dead[i][style] = true;
        }
    }
    dead
}

fn emit(tokens: &[Token], dead: &[[bool; STYLE_COUNT]]) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut cur = Chunk::default();

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Token::Text(s) => cur.text.push_str(s),
            delim => {
                let mut live = [false; STYLE_COUNT];
                for style in 0..STYLE_COUNT {
                    if affects(delim, style) {
                        if dead[i][style] {
                            // 失配成分按字面字符落回当前分块
                            cur.text.push_str(literal_for(style));
                        } else {
                            live[style] = true;
                        }
                    }
                }
                if live.iter().any(|&l| l) {
                    if !cur.text.is_empty() {
                        chunks.push(cur.clone());
                    }
                    cur.text.clear();
                    if live[0] {
                        cur.italic = !cur.italic;
                    }
                    if live[1] {
                        cur.bold = !cur.bold;
                    }
                    if live[2] {
                        cur.underline = !cur.underline;
                    }
                }
            }
        }
    }
    if !cur.text.is_empty() {
        chunks.push(cur);
    }
    chunks
}

fn literal_for(style: usize) -> &'static str {
    match style {
        0 => "*",
        1 => "**",
        _ => "_",
    }
}
