use super::ui::{print_kv, print_section};
use clap::ValueEnum;
use serde_json::Value;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a loosely-shaped object as key/value lines, nesting objects as sections.
pub fn print_object(value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                match v {
                    Value::Object(_) => {
                        print_section(key);
                        print_object(v);
                    }
                    _ => print_kv(key, &scalar(v)),
                }
            }
        }
        other => println!("  {}", scalar(other)),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "-".into(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.2}", f),
            _ => n.to_string(),
        },
        Value::Array(items) => format!("[{} items]", items.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{scalar, OutputFormat};
    use clap::ValueEnum;
    use serde_json::json;

    #[test]
    fn output_format_parses() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn scalars_render_compactly() {
        assert_eq!(scalar(&json!(null)), "-");
        assert_eq!(scalar(&json!(1.23456)), "1.23");
        assert_eq!(scalar(&json!(7)), "7");
        assert_eq!(scalar(&json!(["a", "b"])), "[2 items]");
    }
}
