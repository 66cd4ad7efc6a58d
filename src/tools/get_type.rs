use crate::api::{PokeApi, render_type};
use crate::tools::{Tool, ToolResult, ToolSpec};

pub struct GetTypeTool {
    api: PokeApi,
}

impl GetTypeTool {
    pub fn new(api: PokeApi) -> Self {
        Self { api }
    }
}

impl Tool for GetTypeTool {
    fn name(&self) -> &str {
        "get_pokemon_type"
    }

    fn description(&self) -> &str {
        "Gets information about a Pokemon type and lists Pokemon of that type."
    }

    fn execute(&self, input: &str) -> ToolResult {
        let text = match self.api.fetch_type(input) {
            Ok(summary) => render_type(&summary),
            Err(e) => format!("Error fetching type data: {e}"),
        };
        ToolResult::success(&text)
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().into(),
            description: self.description().into(),
            input_hint: "Type name (e.g. 'electric').".into(),
            tags: vec!["pokemon".into(), "type".into(), "lookup".into()],
        }
    }
}
