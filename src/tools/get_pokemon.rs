use crate::api::{PokeApi, render_pokemon};
use crate::tools::{Tool, ToolResult, ToolSpec};

pub struct GetPokemonTool {
    api: PokeApi,
}

impl GetPokemonTool {
    pub fn new(api: PokeApi) -> Self {
        Self { api }
    }
}

impl Tool for GetPokemonTool {
    fn name(&self) -> &str {
        "get_pokemon"
    }

    fn description(&self) -> &str {
        "Gets information about a Pokemon by name or ID from the PokeAPI."
    }

    // Fetch failures are folded into the returned text, so the caller
    // always receives a printable result.
    fn execute(&self, input: &str) -> ToolResult {
        let text = match self.api.fetch_pokemon(input) {
            Ok(summary) => render_pokemon(&summary),
            Err(e) => format!("Error fetching Pokemon data: {e}"),
        };
        ToolResult::success(&text)
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().into(),
            description: self.description().into(),
            input_hint: "Pokemon name or numeric id (e.g. 'pikachu' or '25').".into(),
            tags: vec!["pokemon".into(), "lookup".into()],
        }
    }
}
