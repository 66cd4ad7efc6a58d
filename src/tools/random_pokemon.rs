use crate::api::{PokeApi, render_random};
use crate::tools::{Tool, ToolResult, ToolSpec};

pub struct RandomPokemonTool {
    api: PokeApi,
}

impl RandomPokemonTool {
    pub fn new(api: PokeApi) -> Self {
        Self { api }
    }
}

impl Tool for RandomPokemonTool {
    fn name(&self) -> &str {
        "get_random_pokemon"
    }

    fn description(&self) -> &str {
        "Gets information about a random Pokemon."
    }

    fn execute(&self, _input: &str) -> ToolResult {
        let text = match self.api.fetch_random() {
            Ok(summary) => render_random(&summary),
            Err(e) => format!("Error fetching random Pokemon: {e}"),
        };
        ToolResult::success(&text)
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().into(),
            description: self.description().into(),
            input_hint: "Takes no input; pass an empty string.".into(),
            tags: vec!["pokemon".into(), "random".into()],
        }
    }
}
