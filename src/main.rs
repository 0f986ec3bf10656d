use fountain_document::{parse_fountain_file, ElementType};
use std::collections::HashSet;
use std::env;
use std::fs;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <fountain_file>", args[0]);
        return;
    }

    let file_path = &args[1];

    match parse_fountain_file(file_path) {
        Ok(document) => {
            println!("解析完成！");
            println!("元素数量: {}", document.elements.len());
            println!("场景数量: {}", document.scenes.len());

            let characters: HashSet<String> = document
                .elements_of_type(ElementType::Character)
                .iter()
                .map(|e| e.clean_text())
                .collect();
            println!("角色数量: {}", characters.len());

            if let Some(title) = document.title_values("title") {
                println!("标题: {}", title.join(" "));
            }

            match serde_json::to_string_pretty(&document) {
                Ok(json) => {
                    let json_path = format!("{}.json", file_path);
                    match fs::write(&json_path, json) {
                        Ok(_) => println!("JSON输出已保存到: {}", json_path),
                        Err(e) => println!("写入JSON失败: {}", e),
                    }
                }
                Err(e) => println!("序列化失败: {}", e),
            }
        }
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
