use fountain_document::{parse, parse_fountain_text, ElementType};
use pretty_assertions::assert_eq;

#[test]
fn test_scene_heading_with_scene_number() {
    let document = parse("INT. HOUSE - DAY #1A#\n\nBob walks in.");

    let heading = &document.elements[0];
    assert_eq!(heading.element_type, ElementType::SceneHeading);
    assert_eq!(heading.text, "INT. HOUSE - DAY");
    assert_eq!(heading.scene_number.as_deref(), Some("1A"), "应该截取出场景编号");

    // 位置信息从标题解析
    let location = heading.location_info.as_ref().expect("场景标题应该带位置信息");
    assert_eq!(location.name, "HOUSE");
    assert_eq!(location.time_of_day, "DAY");
    assert!(location.interior);
    assert!(!location.exterior);

    assert_eq!(document.elements[1].element_type, ElementType::Action);
    assert_eq!(document.scenes.len(), 1, "应该归集出一个场景");
    assert_eq!(document.scenes[0].number.as_deref(), Some("1A"));
    assert_eq!(document.scenes[0].elements, vec![0, 1]);
}

#[test]
fn test_forced_scene_heading() {
    let document = parse(".FLASHBACK - THE OLD HOUSE\n\nIt is raining.");

    assert_eq!(document.elements[0].element_type, ElementType::SceneHeading);
    assert_eq!(document.elements[0].text, "FLASHBACK - THE OLD HOUSE");
    // 没有场景前缀词，不解析位置信息
    assert!(document.elements[0].location_info.is_none());

    // 省略号开头的行不是强制场景标题
    let document = parse("...and so it went.");
    assert_eq!(document.elements[0].element_type, ElementType::Action);
}

#[test]
fn test_character_dialogue_pairing() {
    let document = parse("\nBOB\nHello there.\n");

    assert_eq!(document.elements.len(), 2);
    assert_eq!(document.elements[0].element_type, ElementType::Character);
    assert_eq!(document.elements[0].text, "BOB");
    assert_eq!(document.elements[1].element_type, ElementType::Dialogue);
    assert_eq!(document.elements[1].text, "Hello there.");
}

#[test]
fn test_dialogue_block_with_parenthetical() {
    let document = parse("\nBOB (V.O.)\n(beat)\nOkay then.\nFine.\n");

    assert_eq!(document.elements[0].element_type, ElementType::Character);
    assert_eq!(document.elements[0].text, "BOB (V.O.)", "角色扩展保留在文本里");
    assert_eq!(document.elements[1].element_type, ElementType::Parenthetical);
    assert_eq!(document.elements[1].text, "(beat)");
    assert_eq!(document.elements[2].element_type, ElementType::Dialogue);
    assert_eq!(document.elements[2].text, "Okay then.\nFine.", "相邻对白行并入同一元素");
}

#[test]
fn test_forced_character() {
    // `@` 绕过全大写检查，中文角色名也能强制成角色提示
    let document = parse("INT. 公园 - 日\n\n@顾清\n你好。\n\n@McAvoy\nHello.\n");

    assert_eq!(document.elements[1].element_type, ElementType::Character);
    assert_eq!(document.elements[1].text, "顾清");
    assert_eq!(document.elements[2].element_type, ElementType::Dialogue);
    assert_eq!(document.elements[3].element_type, ElementType::Character);
    assert_eq!(document.elements[3].text, "McAvoy");

    // 不带 `@` 的非大写行只是动作
    let document = parse("\n顾清\n你好。\n");
    assert_eq!(document.elements[0].element_type, ElementType::Action);
}

#[test]
fn test_dual_dialogue_marks_both_blocks() {
    let script = "\nBOB\nI say first.\n\nCAROL ^\nAnd me at the same time.\n";
    let document = parse(script);

    assert_eq!(document.elements.len(), 4);
    for (i, el) in document.elements.iter().enumerate() {
        assert!(el.is_dual, "第{}个元素应该标记为双对话", i);
    }
    assert_eq!(document.elements[2].element_type, ElementType::Character);
    assert_eq!(document.elements[2].text, "CAROL", "角色名里的 `^` 应该剥掉");
}

#[test]
fn test_dual_dialogue_leaves_earlier_blocks_alone() {
    let script = "\nANN\nNot part of it.\n\nBOB\nLeft side.\n\nCAROL ^\nRight side.\n";
    let document = parse(script);

    assert!(!document.elements[0].is_dual);
    assert!(!document.elements[1].is_dual);
    for el in &document.elements[2..] {
        assert!(el.is_dual);
    }
}

#[test]
fn test_forced_action_beats_scene_heading() {
    let document = parse("!INT. NOT A SCENE");

    assert_eq!(document.elements.len(), 1);
    assert_eq!(document.elements[0].element_type, ElementType::Action);
    assert_eq!(document.elements[0].text, "INT. NOT A SCENE");
}

#[test]
fn test_title_page_extraction() {
    let document = parse("Title: My Play\nAuthor: Jane\n\nFADE IN:");

    assert_eq!(document.title_page.len(), 2);
    assert_eq!(document.title_page[0].key, "title");
    assert_eq!(document.title_values("title"), Some(&["My Play".to_string()][..]));
    assert_eq!(document.title_values("author"), Some(&["Jane".to_string()][..]));

    assert_eq!(document.elements.len(), 1);
    assert_eq!(document.elements[0].element_type, ElementType::Action);
    assert_eq!(document.elements[0].text, "FADE IN:");
}

#[test]
fn test_title_page_multiline_values_and_duplicate_keys() {
    let script = "Draft date:\n    1st draft\n    2nd draft\nAuthor: Jane\nAuthor: John\n\nAction.";
    let document = parse(script);

    assert_eq!(document.title_page[0].key, "draft date");
    assert_eq!(
        document.title_page[0].values,
        vec!["1st draft".to_string(), "2nd draft".to_string()],
        "缩进续行按顺序追加为值"
    );
    // 重复键各自成条
    assert_eq!(document.title_page[1].values, vec!["Jane".to_string()]);
    assert_eq!(document.title_page[2].values, vec!["John".to_string()]);
}

#[test]
fn test_no_title_page_means_all_body() {
    let document = parse("INT. HOUSE - DAY\n\nAction here.");
    assert!(document.title_page.is_empty());
    assert_eq!(document.elements[0].element_type, ElementType::SceneHeading);
}

#[test]
fn test_boneyard_and_notes_removed() {
    let script = "Action one /* cut this\nand this */ action two.\n\n[[inline note]]Real action.";
    let document = parse(script);

    assert_eq!(document.elements.len(), 2);
    assert_eq!(document.elements[0].element_type, ElementType::Action);
    assert_eq!(document.elements[0].text, "Action one\naction two.");
    assert_eq!(document.elements[1].text, "Real action.");

    for el in &document.elements {
        assert!(!el.text.contains("cut this"), "boneyard内容不应出现在元素里");
        assert!(!el.text.contains("inline note"), "note内容不应出现在元素里");
    }
}

#[test]
fn test_unmatched_boneyard_swallows_to_end() {
    let document = parse("Before.\n\n/* never closed\nINT. GONE - DAY\nmore gone");

    assert_eq!(document.elements.len(), 1);
    assert_eq!(document.elements[0].text, "Before.");
}

#[test]
fn test_escaped_markup_stays_literal() {
    let document = parse("\\*not italics\\* here");

    assert_eq!(document.elements[0].element_type, ElementType::Action);
    let chunks = document.elements[0].split_to_chunks();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "*not italics* here");
    assert!(!chunks[0].italic, "转义的星号不开启样式");

    // 转义的强制前缀也按字面内容处理
    let document = parse("\\!Not forced");
    assert_eq!(document.elements[0].element_type, ElementType::Action);
    assert_eq!(document.elements[0].clean_text(), "!Not forced");
}

#[test]
fn test_page_break_and_synopsis() {
    let document = parse("= A quick synopsis\n\n===\n\n====\n\n== odd");

    assert_eq!(document.elements[0].element_type, ElementType::Synopsis);
    assert_eq!(document.elements[0].text, "A quick synopsis");
    assert_eq!(document.elements[1].element_type, ElementType::PageBreak);
    assert_eq!(document.elements[1].text, "");
    assert_eq!(document.elements[2].element_type, ElementType::PageBreak, "三个以上等号也是分页符");
    assert_eq!(document.elements[3].element_type, ElementType::Action, "两个等号开头的行落回动作");
}

#[test]
fn test_section_headings() {
    let document = parse("# Act One\n\n## Sequence Two\n\n### Deep Three\n\n#NoSpace");

    assert_eq!(document.elements[0].element_type, ElementType::SectionHeading);
    assert_eq!(document.elements[0].text, "Act One");
    assert_eq!(document.elements[0].section_depth, Some(1));
    assert_eq!(document.elements[1].section_depth, Some(2));
    assert_eq!(document.elements[2].section_depth, Some(3));
    assert_eq!(
        document.elements[3].element_type,
        ElementType::Action,
        "`#` 后没有空白不算章节标题"
    );
    assert_eq!(document.elements[3].section_depth, None);
}

#[test]
fn test_centered_text() {
    let document = parse("> THE END <");

    assert_eq!(document.elements[0].element_type, ElementType::Centered);
    assert_eq!(document.elements[0].text, "THE END");
    assert!(document.elements[0].is_centered);
}

#[test]
fn test_transitions() {
    let script = "Some action.\n\nCUT TO:\n\nINT. LAB - NIGHT\n\n> Burn To White\n\nFADE OUT.";
    let document = parse(script);

    assert_eq!(document.elements[1].element_type, ElementType::Transition);
    assert_eq!(document.elements[1].text, "CUT TO:");
    assert_eq!(document.elements[2].element_type, ElementType::SceneHeading);
    assert_eq!(document.elements[3].element_type, ElementType::Transition, "`>` 强制转场");
    assert_eq!(document.elements[3].text, "Burn To White");
    assert_eq!(document.elements[4].element_type, ElementType::Transition, "常见转场写法");
    assert_eq!(document.elements[4].text, "FADE OUT.");
}

#[test]
fn test_transition_with_following_text_is_character() {
    // 后面紧跟非空行时，空行上下文把 TO: 行裁决为角色提示
    let document = parse("\nCUT TO:\nIs what he keeps saying.\n");

    assert_eq!(document.elements[0].element_type, ElementType::Character);
    assert_eq!(document.elements[1].element_type, ElementType::Dialogue);
}

#[test]
fn test_lyrics() {
    let document = parse("~ The hills are alive");

    assert_eq!(document.elements[0].element_type, ElementType::Lyrics);
    assert_eq!(document.elements[0].text, "The hills are alive");
}

#[test]
fn test_action_merging_preserves_line_breaks() {
    let document = parse("First line.\nSecond line.\n\nNew block.");

    assert_eq!(document.elements.len(), 2);
    assert_eq!(document.elements[0].text, "First line.\nSecond line.");
    assert_eq!(document.elements[1].text, "New block.");
}

#[test]
fn test_scene_collection() {
    let script = "Cold open action.\n\nINT. HOUSE - DAY\n\nBob enters.\n\nEXT. YARD - NIGHT #7#\n\nHe leaves.";
    let document = parse(script);

    assert_eq!(document.scenes.len(), 2);
    assert_eq!(document.scenes[0].heading, "INT. HOUSE - DAY");
    assert_eq!(document.scenes[1].number.as_deref(), Some("7"));
    // 第一个场景标题之前的元素不属于任何场景
    assert_eq!(document.scenes[0].elements, vec![1, 2]);
    assert_eq!(document.scenes[1].elements, vec![3, 4]);
}

#[test]
fn test_parse_is_idempotent() {
    let script = "Title: Twice\n\nINT. HOUSE - DAY\n\nBOB\nHello.\n\nCAROL ^\nHi.\n";
    let first = parse(script);
    let second = parse(script);
    assert_eq!(first, second, "同样的输入应该得到结构相等的文档");
}

#[test]
fn test_parse_never_fails_on_junk() {
    // 解析对任何输入都是全函数
    for script in ["", "\n\n\n", "   ", "*** [[ /* ]]", "##", ">>><<<", "\\"] {
        let document = parse(script);
        for el in &document.elements {
            assert!(!el.text.is_empty() || el.element_type == ElementType::PageBreak);
        }
    }
}

#[test]
fn test_json_output() {
    let json = parse_fountain_text("INT. HOUSE - DAY\n\nBob enters.").expect("序列化不应失败");
    assert!(json.contains("\"scene_heading\""));
    assert!(json.contains("\"elements\""));
    assert!(json.contains("\"title_page\""));
}

#[test]
fn test_element_html_preview() {
    let document = parse("\nBOB\nSo **very** well.\n");
    let html = document.elements[1].to_html();
    assert_eq!(html, "<div class=\"dialogue\">So <b>very</b> well.</div>");
}
