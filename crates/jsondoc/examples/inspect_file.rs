//! Simple inspector for JSON files.

use std::fs;

use jsondoc::{parse, JsonArray, JsonObject};
use serde_json::Value;

fn format_value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("{}", b),
        Value::Number(n) => format!("{}", n),
        Value::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Value::Array(items) => format!("ARRAY[{}]", items.len()),
        Value::Object(map) => format!("OBJECT{{{}}}", map.len()),
    }
}

fn print_object(object: &JsonObject) {
    println!("\n=== Object ({} keys) ===", object.len());
    for (key, value) in object.iter().take(20) {
        println!("  {} = {}", key, format_value(value));
        if let Ok(Some(ts)) = object.get_timestamp(key) {
            if value.is_string() {
                println!("      as timestamp: {}", ts);
            }
        }
    }
    if object.len() > 20 {
        println!("  ... and {} more keys", object.len() - 20);
    }
}

fn print_array(array: &JsonArray) {
    println!("\n=== Array ({} elements) ===", array.len());
    for (i, value) in array.iter().take(20).enumerate() {
        println!("  [{}] {}", i, format_value(value));
    }
    if array.len() > 20 {
        println!("  ... and {} more elements", array.len() - 20);
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample.json".to_string());

    println!("Reading: {}", path);

    let text = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes", text.len());

    let value = parse(&text).expect("Failed to parse");

    match value {
        Value::Object(map) => print_object(&JsonObject::from_map(map)),
        Value::Array(items) => print_array(&JsonArray::from_vec(items)),
        other => println!("Root: {}", format_value(&other)),
    }
}
