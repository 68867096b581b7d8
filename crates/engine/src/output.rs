//! Rendering of a built graph for the command line.

use std::fmt::{self, Write};

use modelgraph_domain::{TypeModelSet, Variations};

use crate::infrastructure::settings::OutputFormat;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to format summary: {0}")]
    Format(#[from] fmt::Error),

    #[error("Failed to serialize type models: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `set` in the requested format.
pub fn render(set: &TypeModelSet, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Summary => Ok(render_summary(set)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(set)?),
    }
}

/// One line per type: kind, id, alias, base type, mixins, flags.
pub fn render_summary(set: &TypeModelSet) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for model in set {
        let base = set
            .base_type(model)
            .map(|b| b.alias().as_str())
            .unwrap_or("-");
        let mixins = set
            .mixin_types(model)
            .map(|m| m.alias().as_str())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            out,
            "{:<8} {:>6} {:<24} base={:<16} mixins=[{}] properties={}",
            model.item_kind().as_str(),
            model.id(),
            model.alias(),
            base,
            mixins,
            model.properties().len()
        )?;
        if let Some(flags) = variation_flags(model.variations()) {
            write!(out, " varies={}", flags)?;
        }
        if model.is_mixin() {
            out.push_str(" (mixin)");
        }
        out.push('\n');
    }
    Ok(out)
}

fn variation_flags(variations: Variations) -> Option<&'static str> {
    match (variations.varies_by_culture(), variations.varies_by_segment()) {
        (true, true) => Some("culture+segment"),
        (true, false) => Some("culture"),
        (false, true) => Some("segment"),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{content_type, id, FixedResolver};
    use crate::use_cases::type_models::TypeModelBuilder;
    use std::sync::Arc;

    fn sample() -> TypeModelSet {
        let content = vec![
            content_type(1, "base").with_variations(Variations::CultureAndSegment),
            content_type(2, "seo"),
            content_type(3, "article")
                .with_parent(id(1))
                .with_compositions([id(1), id(2)]),
        ];
        TypeModelBuilder::new(Arc::new(FixedResolver::new()))
            .build_all(&content, &[], &[])
            .unwrap()
    }

    #[test]
    fn summary_lists_links_and_flags() {
        let summary = render_summary(&sample()).unwrap();
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("content"));
        assert!(lines[0].ends_with("varies=culture+segment"));
        assert!(!lines[2].contains("varies="));
        assert!(lines[1].ends_with("(mixin)"));
        assert!(lines[2].contains("base=base"));
        assert!(lines[2].contains("mixins=[seo]"));
    }

    #[test]
    fn json_output_is_a_list_of_models() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[2]["base_type"], 1);
        assert_eq!(value[2]["mixin_types"], serde_json::json!([2]));
        assert_eq!(value[1]["is_mixin"], true);
    }
}
