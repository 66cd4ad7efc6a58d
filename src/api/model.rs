// src/api/model.rs

use serde::Deserialize;

/// Members beyond this cap are dropped from a type report.
pub const TYPE_MEMBER_CAP: usize = 20;

// Upstream response envelopes. Deserialization is strict: a missing
// required field is a decode error, which the transport layer reports as
// a malformed response. Unknown upstream fields are ignored.

#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TypeResponse {
    pub name: String,
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

/// One Pokemon, projected down to the fields the report needs.
///
/// `height_m` and `weight_kg` are the upstream decimetre/hectogram
/// integers divided by 10. List ordering is upstream ordering.
#[derive(Debug, Clone)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: Vec<String>,
}

impl From<PokemonResponse> for PokemonSummary {
    fn from(response: PokemonResponse) -> Self {
        Self {
            id: response.id,
            name: response.name,
            types: response.types.into_iter().map(|t| t.kind.name).collect(),
            height_m: f64::from(response.height) / 10.0,
            weight_kg: f64::from(response.weight) / 10.0,
            abilities: response
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
        }
    }
}

/// One type plus its first `TYPE_MEMBER_CAP` members, upstream order.
#[derive(Debug, Clone)]
pub struct TypeSummary {
    pub name: String,
    pub member_names: Vec<String>,
}

impl From<TypeResponse> for TypeSummary {
    fn from(response: TypeResponse) -> Self {
        Self {
            name: response.name,
            member_names: response
                .pokemon
                .into_iter()
                .take(TYPE_MEMBER_CAP)
                .map(|m| m.pokemon.name)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pikachu() -> PokemonResponse {
        serde_json::from_value(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
            ],
            "abilities": [
                { "slot": 1, "is_hidden": false, "ability": { "name": "static", "url": "" } },
                { "slot": 3, "is_hidden": true, "ability": { "name": "lightning-rod", "url": "" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn summary_divides_units_by_ten() {
        let summary = PokemonSummary::from(pikachu());
        assert_eq!(summary.height_m, 0.4);
        assert_eq!(summary.weight_kg, 6.0);
    }

    #[test]
    fn summary_preserves_upstream_list_order() {
        let summary = PokemonSummary::from(pikachu());
        assert_eq!(summary.id, 25);
        assert_eq!(summary.types, vec!["electric"]);
        assert_eq!(summary.abilities, vec!["static", "lightning-rod"]);
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let result: Result<PokemonResponse, _> =
            serde_json::from_value(json!({ "id": 25, "name": "pikachu" }));
        assert!(result.is_err());
    }

    #[test]
    fn type_summary_truncates_to_cap() {
        let members: Vec<_> = (0..25)
            .map(|i| json!({ "slot": i, "pokemon": { "name": format!("member-{i}"), "url": "" } }))
            .collect();
        let response: TypeResponse =
            serde_json::from_value(json!({ "name": "electric", "pokemon": members })).unwrap();

        let summary = TypeSummary::from(response);
        assert_eq!(summary.member_names.len(), TYPE_MEMBER_CAP);
        assert_eq!(summary.member_names[0], "member-0");
        assert_eq!(summary.member_names[19], "member-19");
    }

    #[test]
    fn type_summary_keeps_short_lists_whole() {
        let response: TypeResponse = serde_json::from_value(json!({
            "name": "electric",
            "pokemon": [
                { "slot": 1, "pokemon": { "name": "pikachu", "url": "" } },
                { "slot": 2, "pokemon": { "name": "raichu", "url": "" } }
            ]
        }))
        .unwrap();

        let summary = TypeSummary::from(response);
        assert_eq!(summary.member_names, vec!["pikachu", "raichu"]);
    }
}
