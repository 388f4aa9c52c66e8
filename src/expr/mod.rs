//! Filter expression translation
//!
//! Cost Explorer filters are a small boolean algebra over dimension, tag,
//! and cost-category selectors. On the command line they arrive as the
//! same JSON the service documents (`{"Dimensions": {"Key": "SERVICE",
//! "Values": ["Amazon EC2"]}}`, nestable under `And`/`Or`/`Not`); this
//! module parses that JSON into the SDK's `Expression` tree and renders
//! `Expression` values back to JSON when projecting monitors and
//! subscriptions into output.

use crate::error::{Error, Result};
use aws_sdk_costexplorer::types as ce;
use serde::Deserialize;
use serde_json::{json, Value};

#[cfg(test)]
mod tests;

// ============================================================================
// JSON Definitions
// ============================================================================

/// An expression as written on the command line
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ExpressionDef {
    pub and: Option<Vec<ExpressionDef>>,
    pub or: Option<Vec<ExpressionDef>>,
    pub not: Option<Box<ExpressionDef>>,
    pub dimensions: Option<SelectorDef>,
    pub tags: Option<SelectorDef>,
    pub cost_categories: Option<SelectorDef>,
}

/// A leaf selector: key, values, match options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SelectorDef {
    pub key: Option<String>,
    pub values: Option<Vec<String>>,
    pub match_options: Option<Vec<String>>,
}

impl ExpressionDef {
    fn is_empty(&self) -> bool {
        self.and.is_none()
            && self.or.is_none()
            && self.not.is_none()
            && self.dimensions.is_none()
            && self.tags.is_none()
            && self.cost_categories.is_none()
    }

    /// Convert into the SDK expression tree
    pub fn to_expression(&self) -> Result<ce::Expression> {
        if self.is_empty() {
            return Err(Error::expression(
                "expression must contain one of And, Or, Not, Dimensions, Tags, CostCategories",
            ));
        }

        let mut builder = ce::Expression::builder();

        if let Some(and) = &self.and {
            for inner in and {
                builder = builder.and(inner.to_expression()?);
            }
        }
        if let Some(or) = &self.or {
            for inner in or {
                builder = builder.or(inner.to_expression()?);
            }
        }
        if let Some(not) = &self.not {
            builder = builder.not(not.to_expression()?);
        }
        if let Some(dimensions) = &self.dimensions {
            builder = builder.dimensions(dimensions.to_dimension_values());
        }
        if let Some(tags) = &self.tags {
            builder = builder.tags(tags.to_tag_values());
        }
        if let Some(categories) = &self.cost_categories {
            builder = builder.cost_categories(categories.to_cost_category_values());
        }

        Ok(builder.build())
    }
}

impl SelectorDef {
    fn to_dimension_values(&self) -> ce::DimensionValues {
        let mut builder = ce::DimensionValues::builder();
        if let Some(key) = &self.key {
            builder = builder.key(ce::Dimension::from(key.to_ascii_uppercase().as_str()));
        }
        for value in self.values.iter().flatten() {
            builder = builder.values(value);
        }
        for option in self.match_options.iter().flatten() {
            builder = builder.match_options(ce::MatchOption::from(option.as_str()));
        }
        builder.build()
    }

    fn to_tag_values(&self) -> ce::TagValues {
        let mut builder = ce::TagValues::builder();
        if let Some(key) = &self.key {
            builder = builder.key(key);
        }
        for value in self.values.iter().flatten() {
            builder = builder.values(value);
        }
        for option in self.match_options.iter().flatten() {
            builder = builder.match_options(ce::MatchOption::from(option.as_str()));
        }
        builder.build()
    }

    fn to_cost_category_values(&self) -> ce::CostCategoryValues {
        let mut builder = ce::CostCategoryValues::builder();
        if let Some(key) = &self.key {
            builder = builder.key(key);
        }
        for value in self.values.iter().flatten() {
            builder = builder.values(value);
        }
        for option in self.match_options.iter().flatten() {
            builder = builder.match_options(ce::MatchOption::from(option.as_str()));
        }
        builder.build()
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a command-line filter JSON string into an SDK expression
pub fn parse_expression(input: &str) -> Result<ce::Expression> {
    let def: ExpressionDef = serde_json::from_str(input)
        .map_err(|e| Error::expression(format!("invalid filter JSON: {e}")))?;
    def.to_expression()
}

/// Parse a `TYPE=KEY` group-by spec (e.g. `DIMENSION=SERVICE`, `TAG=team`,
/// `COST_CATEGORY=Environment`)
pub fn parse_group_by(input: &str) -> Result<ce::GroupDefinition> {
    let (kind, key) = input.split_once('=').ok_or_else(|| {
        Error::invalid_argument(
            "group-by",
            format!("expected TYPE=KEY (e.g. DIMENSION=SERVICE), got '{input}'"),
        )
    })?;

    let kind = match kind.to_ascii_uppercase().as_str() {
        "DIMENSION" => ce::GroupDefinitionType::Dimension,
        "TAG" => ce::GroupDefinitionType::Tag,
        "COST_CATEGORY" => ce::GroupDefinitionType::CostCategory,
        other => {
            return Err(Error::invalid_argument(
                "group-by",
                format!("unknown group type '{other}' (expected DIMENSION, TAG, or COST_CATEGORY)"),
            ))
        }
    };

    if key.is_empty() {
        return Err(Error::invalid_argument("group-by", "key must not be empty"));
    }

    Ok(ce::GroupDefinition::builder()
        .r#type(kind)
        .key(key)
        .build())
}

// ============================================================================
// Rendering
// ============================================================================

/// Render an SDK expression back into the JSON shape accepted on the
/// command line, for projection output
pub fn expression_to_json(expression: &ce::Expression) -> Value {
    let mut object = serde_json::Map::new();

    if let Some(and) = &expression.and {
        object.insert(
            "And".to_string(),
            Value::Array(and.iter().map(expression_to_json).collect()),
        );
    }
    if let Some(or) = &expression.or {
        object.insert(
            "Or".to_string(),
            Value::Array(or.iter().map(expression_to_json).collect()),
        );
    }
    if let Some(not) = &expression.not {
        object.insert("Not".to_string(), expression_to_json(not));
    }
    if let Some(dimensions) = &expression.dimensions {
        object.insert(
            "Dimensions".to_string(),
            selector_to_json(
                dimensions.key.as_ref().map(|k| k.as_str().to_string()),
                dimensions.values.as_deref(),
                dimensions.match_options.as_deref(),
            ),
        );
    }
    if let Some(tags) = &expression.tags {
        object.insert(
            "Tags".to_string(),
            selector_to_json(
                tags.key.clone(),
                tags.values.as_deref(),
                tags.match_options.as_deref(),
            ),
        );
    }
    if let Some(categories) = &expression.cost_categories {
        object.insert(
            "CostCategories".to_string(),
            selector_to_json(
                categories.key.clone(),
                categories.values.as_deref(),
                categories.match_options.as_deref(),
            ),
        );
    }

    Value::Object(object)
}

fn selector_to_json(
    key: Option<String>,
    values: Option<&[String]>,
    match_options: Option<&[ce::MatchOption]>,
) -> Value {
    let mut object = serde_json::Map::new();
    if let Some(key) = key {
        object.insert("Key".to_string(), json!(key));
    }
    if let Some(values) = values {
        object.insert("Values".to_string(), json!(values));
    }
    if let Some(options) = match_options {
        object.insert(
            "MatchOptions".to_string(),
            Value::Array(
                options
                    .iter()
                    .map(|o| Value::String(o.as_str().to_string()))
                    .collect(),
            ),
        );
    }
    Value::Object(object)
}
