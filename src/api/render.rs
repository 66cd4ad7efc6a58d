use super::model::{PokemonSummary, TYPE_MEMBER_CAP, TypeSummary};

pub fn render_pokemon(pokemon: &PokemonSummary) -> String {
    format!(
        "Pokemon: {} (#{})\nType(s): {}\nHeight: {}m\nWeight: {}kg\nAbilities: {}",
        capitalize(&pokemon.name),
        pokemon.id,
        pokemon.types.join(", "),
        pokemon.height_m,
        pokemon.weight_kg,
        pokemon.abilities.join(", ")
    )
}

pub fn render_type(summary: &TypeSummary) -> String {
    format!(
        "Type: {}\nPokemon with this type (first {}): {}",
        capitalize(&summary.name),
        TYPE_MEMBER_CAP,
        summary.member_names.join(", ")
    )
}

/// Abbreviated report for the random lookup: name, id and types only.
pub fn render_random(pokemon: &PokemonSummary) -> String {
    format!(
        "Random Pokemon: {} (#{})\nType(s): {}",
        capitalize(&pokemon.name),
        pokemon.id,
        pokemon.types.join(", ")
    )
}

// Uppercases the first letter only; the rest stays as upstream spells it.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
