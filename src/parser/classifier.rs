use log::debug;
use crate::models::{Element, ElementType, Location};
use crate::utils::{is_forced_prefix_line, is_upper_line, BLOCK_REGEX, COMMON_TRANSITIONS};

// 解析状态：普通 / 对话块内
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Normal,
    Dialogue,
}

/// 块分类器
///
/// 逐行扫描正文并产出元素序列。规则按固定优先级自上而下求值：
/// 强制前缀（`.` `!` `@` `~` `>` `#` `=`）先于启发式判断，
/// 场景前缀词先于角色判定，角色先于转场（空行上下文裁决），
/// 兜底类型是动作。空行划分块边界，本身不产出元素。
///
/// `line_offset` 是正文相对完整文本的行偏移，用来报告原始行号。
pub fn classify(body: &str, line_offset: usize) -> Vec<Element> {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut elements: Vec<Element> = Vec::new();
    let mut state = State::Normal;
    // 标题页之后的正文，开头天然带一个空行边界
    let mut blank_before = line_offset > 0;

    for i in 0..lines.len() {
        let trimmed = lines[i].trim();
        let line_no = line_offset + i;

        // 空行：结束当前块和对话状态
        if trimmed.is_empty() {
            state = State::Normal;
            blank_before = true;
            continue;
        }

        let had_blank = blank_before;
        blank_before = false;

        // 对话块内：括号行是舞台提示，其余都是对白
        if state == State::Dialogue {
            if BLOCK_REGEX.get("parenthetical").unwrap().is_match(trimmed) {
                elements.push(Element::new(ElementType::Parenthetical, trimmed, line_no));
            } else if matches!(elements.last(), Some(e) if e.element_type == ElementType::Dialogue)
            {
                // 相邻对白行并入同一元素，内部换行保留
                let last = elements.last_mut().unwrap();
                last.text.push('\n');
                last.text.push_str(trimmed);
            } else {
                elements.push(Element::new(ElementType::Dialogue, trimmed, line_no));
            }
            continue;
        }

        // 强制场景标题：`.` 开头且后面不是第二个 `.`
        if trimmed.len() > 1 && trimmed.starts_with('.') && !trimmed.starts_with("..") {
            let rest = trimmed[1..].trim();
            elements.push(scene_heading_element(rest, line_no));
            continue;
        }

        // 强制动作：`!` 前缀剥掉，总是另起一个元素
        if let Some(caps) = BLOCK_REGEX.get("action_force").unwrap().captures(trimmed) {
            let text = caps.get(1).unwrap().as_str().trim();
            elements.push(Element::new(ElementType::Action, text, line_no));
            continue;
        }

        // 歌词
        if let Some(caps) = BLOCK_REGEX.get("lyric").unwrap().captures(trimmed) {
            let text = caps.get(1).unwrap().as_str();
            elements.push(Element::new(ElementType::Lyrics, text, line_no));
            continue;
        }

        // `>` 前缀：带尾部 `<` 是居中文本，否则是强制转场
        if trimmed.starts_with('>') {
            if let Some(caps) = BLOCK_REGEX.get("centered").unwrap().captures(trimmed) {
                let mut el =
                    Element::new(ElementType::Centered, caps.get(1).unwrap().as_str(), line_no);
                el.is_centered = true;
                elements.push(el);
            } else {
                let text = trimmed[1..].trim();
                elements.push(Element::new(ElementType::Transition, text, line_no));
            }
            continue;
        }

        // 章节标题：`#` 串后必须跟空白；不满足时落到后面的规则
        if trimmed.starts_with('#') {
            if let Some(caps) = BLOCK_REGEX.get("section").unwrap().captures(trimmed) {
                let depth = caps.get(1).unwrap().as_str().chars().count();
                let text = caps.get(2).unwrap().as_str().trim();
                let mut el = Element::new(ElementType::SectionHeading, text, line_no);
                el.section_depth = Some(depth);
                debug!("章节标题: {} (层级 {})", el.text, depth);
                elements.push(el);
                continue;
            }
        }

        // `=` 前缀：整行三个以上 `=` 是分页符，单个 `=` 是概要
        if trimmed.starts_with('=') {
            if BLOCK_REGEX.get("page_break").unwrap().is_match(trimmed) {
                elements.push(Element::new(ElementType::PageBreak, "", line_no));
                continue;
            }
            if let Some(caps) = BLOCK_REGEX.get("synopsis").unwrap().captures(trimmed) {
                let text = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                elements.push(Element::new(ElementType::Synopsis, text, line_no));
                continue;
            }
        }

        // 场景标题：识别到场景前缀词，且前面是空行或文档开头。
        // 前缀词的优先级高于角色和转场的判定
        if (had_blank || i == 0) && BLOCK_REGEX.get("scene_heading").unwrap().is_match(trimmed) {
            let el = scene_heading_element(trimmed, line_no);
            debug!("场景标题: {} (行 {})", el.text, line_no);
            elements.push(el);
            continue;
        }

        // 角色提示：空行之后、全大写（或 `@` 强制），且下一行是对白内容。
        // 下一行为空时全大写行交给转场或动作处理
        if had_blank {
            let next = lines.get(i + 1).copied().unwrap_or("");
            let next_ok = !next.trim().is_empty() && !is_forced_prefix_line(next);
            if next_ok {
                if let Some((text, dual)) = character_cue(trimmed) {
                    let mut el = Element::new(ElementType::Character, text, line_no);
                    el.is_dual = dual;
                    if dual {
                        debug!("双对话角色提示: {} (行 {})", el.text, line_no);
                    }
                    elements.push(el);
                    state = State::Dialogue;
                    continue;
                }
            }
        }

        // 转场：全大写、以 TO: 结尾或属于常见转场写法，前后都是块边界
        let next_blank = lines
            .get(i + 1)
            .map(|l| l.trim().is_empty())
            .unwrap_or(true);
        if (had_blank || i == 0)
            && next_blank
            && is_upper_line(trimmed)
            && (trimmed.ends_with("TO:") || COMMON_TRANSITIONS.contains(&trimmed))
        {
            elements.push(Element::new(ElementType::Transition, trimmed, line_no));
            continue;
        }

        // 默认动作；相邻的动作行并入同一元素
        if !had_blank {
            if let Some(last) = elements.last_mut() {
                if last.element_type == ElementType::Action {
                    last.text.push('\n');
                    last.text.push_str(trimmed);
                    continue;
                }
            }
        }
        elements.push(Element::new(ElementType::Action, trimmed, line_no));
    }

    elements
}

// 判定角色提示行，返回 (角色文本, 是否双对话右侧)
//
// `@` 强制绕过全大写检查；尾部 `^` 与前缀 `@` 从文本中剥掉，
// `(V.O.)` 这类扩展保留在文本里但不参与大小写判断
fn character_cue(trimmed: &str) -> Option<(String, bool)> {
    let forced = trimmed.starts_with('@');
    let mut t = trimmed;
    let is_dual = t.ends_with('^');
    if is_dual {
        t = t.trim_end_matches('^').trim_end();
    }
    let text = if forced { t[1..].trim_start() } else { t };
    if text.is_empty() {
        return None;
    }
    if !forced {
        let ext_re = BLOCK_REGEX.get("character_extension").unwrap();
        let name = ext_re.replace(text, "");
        let name = name.trim();
        if name.is_empty() || !BLOCK_REGEX.get("character").unwrap().is_match(name) {
            return None;
        }
    }
    Some((text.to_string(), is_dual))
}

// 构造场景标题元素：截取尾部 `#..#` 场景编号，解析位置信息
fn scene_heading_element(text: &str, line_no: usize) -> Element {
    let number_re = BLOCK_REGEX.get("scene_number").unwrap();
    let mut text = text.to_string();
    let mut number = None;
    if let Some(caps) = number_re.captures(&text) {
        let n = caps.get(1).unwrap().as_str().trim();
        if !n.is_empty() {
            number = Some(n.to_string());
            text = number_re.replace(&text, "").trim_end().to_string();
        }
    }
    let mut el = Element::new(ElementType::SceneHeading, text.clone(), line_no);
    el.scene_number = number;
    el.location_info = parse_location_information(&text);
    el
}

// 从场景标题解析位置信息；没有场景前缀词的强制标题返回 None
fn parse_location_information(heading: &str) -> Option<Location> {
    let caps = BLOCK_REGEX.get("scene_location").unwrap().captures(heading)?;
    let prefix = caps.get(1).unwrap().as_str().to_uppercase();
    let rest = caps.get(2).unwrap().as_str();

    let interior = prefix.contains('I');
    let exterior = prefix.contains("EX") || prefix.ends_with("/E") || prefix.ends_with("/E.");

    // 地点与时间段以破折号分隔
    let (name, time_of_day) = match BLOCK_REGEX.get("scene_time_split").unwrap().captures(rest) {
        Some(split) => (
            split.get(1).unwrap().as_str().trim().to_string(),
            split.get(2).unwrap().as_str().trim().to_string(),
        ),
        None => (rest.trim().to_string(), String::new()),
    };

    Some(Location {
        name: name.to_uppercase(),
        interior,
        exterior,
        time_of_day: time_of_day.to_uppercase(),
    })
}
