//! 分析结果数据模型

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// 单个组件的分析结果
///
/// `props` 的结构由组件决定，不做静态类型约束
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// 组件 props 的模拟数据
    pub props: Map<String, Value>,
    /// 渲染组件需要的外层包装（router / redux / reactQuery 等）
    pub wrappers: BTreeMap<String, bool>,
    /// LLM 额外返回的顶层字段，原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// 兜底结果：空 props、空 wrappers
    pub fn fallback() -> Self {
        Self::default()
    }

    /// 从任意 JSON 值宽松地提取结果
    ///
    /// 不校验结构：缺失或类型不对的部分当作空，能用的部分全部保留
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            debug!("LLM 返回的顶层不是对象，按空结果处理");
            return Self::default();
        };

        let props = match fields.shift_remove("props") {
            Some(Value::Object(props)) => props,
            Some(other) => {
                debug!("props 不是对象，已忽略: {}", other);
                Map::new()
            }
            None => Map::new(),
        };

        let wrappers = match fields.shift_remove("wrappers") {
            Some(Value::Object(flags)) => flags
                .into_iter()
                .filter_map(|(name, flag)| match as_flag(&flag) {
                    Some(enabled) => Some((name, enabled)),
                    None => {
                        debug!("wrapper {} 不是布尔值，已忽略: {}", name, flag);
                        None
                    }
                })
                .collect(),
            _ => BTreeMap::new(),
        };

        Self {
            props,
            wrappers,
            extra: fields,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.wrappers.is_empty() && self.extra.is_empty()
    }
}

/// 整个批次的输出
///
/// 按输入顺序保存，每个路径只写入一次
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutput {
    entries: Vec<(String, AnalysisResult)>,
}

impl BatchOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条结果，路径已存在时返回 `false` 且不覆盖
    pub fn insert(&mut self, path: impl Into<String>, result: AnalysisResult) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.entries.push((path, result));
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|(p, _)| p == path)
    }

    pub fn get(&self, path: &str) -> Option<&AnalysisResult> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, result)| result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按写入顺序返回所有路径
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

}

/// 布尔值，或 "true" / "false" 字符串
fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) if text.eq_ignore_ascii_case("true") => Some(true),
        Value::String(text) if text.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

impl Serialize for BatchOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, result) in &self.entries {
            map.serialize_entry(path, result)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_never_overwrites() {
        let mut output = BatchOutput::new();
        let mut first = AnalysisResult::fallback();
        first.wrappers.insert("router".to_string(), true);

        assert!(output.insert("A.tsx", first.clone()));
        assert!(!output.insert("A.tsx", AnalysisResult::fallback()));
        assert_eq!(output.len(), 1);
        assert_eq!(output.get("A.tsx"), Some(&first));
    }

    #[test]
    fn test_serialize_keeps_input_order() {
        let mut output = BatchOutput::new();
        output.insert("Zeta.jsx", AnalysisResult::fallback());
        output.insert("Alpha.jsx", AnalysisResult::fallback());

        let text = serde_json::to_string(&output).unwrap();
        assert_eq!(
            text,
            r#"{"Zeta.jsx":{"props":{},"wrappers":{}},"Alpha.jsx":{"props":{},"wrappers":{}}}"#
        );
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let result = AnalysisResult::from_value(json!({ "props": { "title": "X" } }));
        assert_eq!(result.props.get("title"), Some(&json!("X")));
        assert!(result.wrappers.is_empty());
    }

    #[test]
    fn test_off_shape_wrappers_keep_props() {
        let result = AnalysisResult::from_value(json!({
            "props": { "title": "Shoes", "price": 49 },
            "wrappers": { "router": null, "redux": "true", "reactQuery": false }
        }));
        assert_eq!(result.props.get("price"), Some(&json!(49)));
        assert_eq!(result.wrappers.get("router"), None);
        assert_eq!(result.wrappers.get("redux"), Some(&true));
        assert_eq!(result.wrappers.get("reactQuery"), Some(&false));
    }

    #[test]
    fn test_non_object_parts_become_empty() {
        let result = AnalysisResult::from_value(json!({ "props": null, "wrappers": [true] }));
        assert!(result.is_empty());
        assert!(AnalysisResult::from_value(json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_unknown_top_level_keys_are_kept() {
        let result = AnalysisResult::from_value(json!({
            "props": {},
            "wrappers": {},
            "notes": "uses a carousel"
        }));
        assert_eq!(result.extra.get("notes"), Some(&json!("uses a carousel")));

        let text = serde_json::to_string(&result).unwrap();
        assert_eq!(text, r#"{"props":{},"wrappers":{},"notes":"uses a carousel"}"#);
    }
}
