use moneystack_models::ToolDefinition;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{DispatchError, RegistryError};
use crate::input::ToolInput;
use crate::tool::{ToolKind, ToolSpec};

/// Lookup table from tool name to spec
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolSpec>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in tool, validated
    pub fn standard() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for kind in ToolKind::ALL {
            registry.register(kind.spec())?;
        }
        registry.validate()?;
        Ok(registry)
    }

    /// Register a new tool
    pub fn register(&mut self, spec: ToolSpec) -> Result<(), RegistryError> {
        let name = spec.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RegistryError::DuplicateTool(name));
        }
        self.tools.insert(name, spec);
        Ok(())
    }

    /// Check that every tool kind is present and each schema is coherent
    pub fn validate(&self) -> Result<(), RegistryError> {
        for kind in ToolKind::ALL {
            let spec = self
                .tools
                .get(kind.name())
                .ok_or_else(|| RegistryError::MissingTool(kind.name().to_string()))?;

            let schema_error = |message: String| RegistryError::InvalidSchema {
                tool: kind.name().to_string(),
                message,
            };

            if spec.kind != kind {
                return Err(schema_error(format!("registered under the name of {}", spec.kind)));
            }
            if spec.description.trim().is_empty() {
                return Err(schema_error("description is empty".to_string()));
            }
            if !spec.properties.is_object() {
                return Err(schema_error("properties must be an object".to_string()));
            }
            let properties = spec.property_names();
            if let Some(field) = spec.required.iter().find(|f| !properties.contains(&f.as_str())) {
                return Err(schema_error(format!("required field '{}' has no property", field)));
            }
        }
        Ok(())
    }

    /// Get a tool spec by name
    pub fn get_tool(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Tool names, sorted
    pub fn get_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolve a raw call into typed input
    pub fn resolve(&self, name: &str, input: &Value) -> Result<ToolInput, DispatchError> {
        let spec = self
            .get_tool(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;
        ToolInput::parse(spec, input)
    }

    /// Get all tool definitions in Messages API format
    pub fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        let mut tools: Vec<_> = self.tools.values().collect();
        // Sort by tool name to ensure consistent ordering (critical for prompt caching)
        tools.sort_by_key(|spec| spec.name());
        tools
            .into_iter()
            .map(|spec| ToolDefinition {
                name: spec.name().to_string(),
                description: spec.description.clone(),
                input_schema: spec.input_schema(),
            })
            .collect()
    }
}
