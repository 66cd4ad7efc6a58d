// src/context/mod.rs

use crate::tools::{Tool, ToolResult};
use std::collections::HashMap;

/// Registry of the tools an agent may invoke, keyed by tool name.
pub struct Context {
    pub tools: HashMap<String, Box<dyn Tool + Send + Sync>>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register_tool<T: Tool + Send + Sync + 'static>(mut self, tool: T) -> Self {
        self.tools.insert(tool.name().into(), Box::new(tool));
        self
    }

    pub fn get_tool(&self, name: &str) -> Option<&(dyn Tool + Send + Sync)> {
        self.tools.get(name).map(|boxed| boxed.as_ref())
    }

    /// Dispatches to the named tool. An unknown name is the only failure
    /// this layer itself produces; registered tools report their own.
    pub fn run(&self, name: &str, input: &str) -> ToolResult {
        match self.get_tool(name) {
            Some(tool) => tool.execute(input),
            None => ToolResult::failure(&format!("Tool not found: {name}")),
        }
    }

    /// One `- name: description` line per registered tool.
    pub fn list(&self) -> String {
        self.tools
            .values()
            .map(|t| format!("- {}: {}", t.name(), t.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the input back."
        }

        fn execute(&self, input: &str) -> ToolResult {
            ToolResult::success(input)
        }
    }

    #[test]
    fn registers_and_runs_tools_by_name() {
        let context = Context::new().register_tool(EchoTool);
        let result = context.run("echo", "hello");
        assert!(result.success);
        assert_eq!(result.output.as_deref(), Some("hello"));
    }

    #[test]
    fn run_reports_unknown_tool_names() {
        let context = Context::new().register_tool(EchoTool);
        let result = context.run("evolve", "pikachu");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Tool not found: evolve"));
    }

    #[test]
    fn list_includes_name_and_description() {
        let context = Context::new().register_tool(EchoTool);
        assert_eq!(context.list(), "- echo: Echoes the input back.");
    }
}
