use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use crate::structs::submission_report::ReportCheck;

const INDENT: &[u8] = b"    ";

pub struct ReportLogger {}

impl ReportLogger {

    /// Pretty JSON with object keys sorted at every depth.
    pub fn render_failures(failures: &[&ReportCheck]) -> String {
        Self::render_sorted(failures).unwrap_or_else(|_| format!("{:?}", failures))
    }

    fn render_sorted(failures: &[&ReportCheck]) -> serde_json::Result<String> {
        let sorted = failures
            .iter()
            .map(|check| serde_json::to_value(check).map(sort_keys))
            .collect::<serde_json::Result<Vec<Value>>>()?;

        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        sorted.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn print_failures(failures: &[&ReportCheck]) {
        log::error!("❌ APPINSPECT FAILED! Failures: {}", Self::render_failures(failures));
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(key, value)| (key, sort_keys(value))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value) -> ReportCheck {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn failures_render_as_json_array() {
        let check = check(json!({"name": "check_x", "result": "failure"}));
        let rendered = ReportLogger::render_failures(&[&check]);

        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!([{"name": "check_x", "result": "failure"}]));
    }

    #[test]
    fn keys_are_sorted_at_every_depth() {
        let check = check(json!({
            "result": "failure",
            "name": "check_x",
            "messages": [{"message": "bad", "code": "x", "line": 3}],
            "description": "d"
        }));
        let rendered = ReportLogger::render_failures(&[&check]);

        let position = |key: &str| rendered.find(&format!("\"{key}\"")).unwrap();
        assert!(position("description") < position("messages"));
        assert!(position("messages") < position("name"));
        assert!(position("name") < position("result"));
        assert!(position("code") < position("line"));
        assert!(position("line") < position("message"));
    }

    #[test]
    fn output_uses_four_space_indent() {
        let check = check(json!({"name": "check_x", "result": "failure"}));
        let rendered = ReportLogger::render_failures(&[&check]);
        assert!(rendered.contains("\n    {\n        \"name\""), "{rendered}");
    }
}
