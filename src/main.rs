use colored::Colorize;
use pokedex_tools::api::PokeApi;
use pokedex_tools::context::Context;
use pokedex_tools::tools::{GetPokemonTool, GetTypeTool, RandomPokemonTool};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api = PokeApi::new();
    let context = Context::new()
        .register_tool(GetPokemonTool::new(api.clone()))
        .register_tool(GetTypeTool::new(api.clone()))
        .register_tool(RandomPokemonTool::new(api));

    println!("{}", "--- TOOLS ---".cyan().bold());
    println!("{}", context.list());

    for (name, input) in [
        ("get_pokemon", "pikachu"),
        ("get_pokemon_type", "electric"),
        ("get_random_pokemon", ""),
    ] {
        println!("\n{}", format!("--- {name} ---").cyan().bold());
        let result = context.run(name, input);
        if let Some(output) = result.output {
            println!("{output}");
        }
        if let Some(error) = result.error {
            println!("{}", error.red());
        }
    }
}
