// src/integrations/catalog/payload.rs
//
// Wire shapes of the catalog's record endpoint and the mapping from
// payload to Record. Only the fields we read are declared; everything
// else in the response is ignored.

use serde::Deserialize;

use crate::domain::{validate_record, Record, RecordType, Stats};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct RecordPayload {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: Option<SpritesData>,
    types: Vec<TypeSlot>,
    stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize)]
struct SpritesData {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_ref: NamedRef,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: NamedRef,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

/// Parses one record payload.
///
/// `id`, `name`, `types` and `stats` are required. An unknown type name is
/// rejected, an unknown stat name is skipped.
pub fn parse_record(body: &str) -> AppResult<Record> {
    let payload: RecordPayload = serde_json::from_str(body)
        .map_err(|e| AppError::Parse(format!("Invalid catalog payload: {}", e)))?;

    let image_url = payload
        .sprites
        .and_then(|s| s.front_default)
        .unwrap_or_default();

    let types = payload
        .types
        .iter()
        .map(|slot| {
            RecordType::from_api_name(&slot.type_ref.name).ok_or_else(|| {
                AppError::Parse(format!("Unrecognized type name: {}", slot.type_ref.name))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let record = Record::new(
        payload.id,
        payload.name,
        image_url,
        types,
        map_stats(&payload.stats),
    );

    validate_record(&record).map_err(|e| AppError::Parse(e.to_string()))?;
    Ok(record)
}

fn map_stats(slots: &[StatSlot]) -> Stats {
    let mut stats = Stats::default();
    for slot in slots {
        let value = slot.base_stat;
        match slot.stat.name.as_str() {
            "hp" => stats.hp = value,
            "attack" => stats.attack = value,
            "defense" => stats.defense = value,
            "special-attack" => stats.special_attack = value,
            "special-defense" => stats.special_defense = value,
            "speed" => stats.speed = value,
            _ => {}
        }
    }
    stats
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn payload(id: u32, name: &str, types: &[&str], stats: [u32; 6]) -> serde_json::Value {
        let keys = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"];
        json!({
            "id": id,
            "name": name,
            "base_experience": 64,
            "sprites": { "front_default": format!("https://sprites.example/{}.png", id), "back_default": null },
            "types": types.iter().enumerate().map(|(i, t)| json!({
                "slot": i + 1,
                "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{}/", t) }
            })).collect::<Vec<_>>(),
            "stats": keys.iter().zip(stats).map(|(k, v)| json!({
                "base_stat": v,
                "effort": 0,
                "stat": { "name": k, "url": "" }
            })).collect::<Vec<_>>(),
        })
    }

    #[test]
    fn test_parse_full_payload() {
        let body = payload(1, "bulbasaur", &["grass", "poison"], [45, 49, 49, 65, 65, 45]).to_string();
        let record = parse_record(&body).unwrap();

        assert_eq!(record.id(), 1);
        assert_eq!(record.name(), "bulbasaur");
        assert_eq!(record.image_url(), "https://sprites.example/1.png");
        assert_eq!(record.types(), &[RecordType::Grass, RecordType::Poison]);
        assert_eq!(record.stats(), Stats::new(45, 49, 49, 65, 65, 45));
    }

    #[test]
    fn test_name_case_is_preserved() {
        let body = payload(122, "Mr-Mime", &["psychic", "fairy"], [40, 45, 65, 100, 120, 90]).to_string();
        assert_eq!(parse_record(&body).unwrap().name(), "Mr-Mime");
    }

    #[test]
    fn test_missing_sprite_defaults_to_empty() {
        let mut value = payload(4, "charmander", &["fire"], [39, 52, 43, 60, 50, 65]);
        value.as_object_mut().unwrap().remove("sprites");
        assert_eq!(parse_record(&value.to_string()).unwrap().image_url(), "");

        value["sprites"] = json!({ "front_default": null });
        assert_eq!(parse_record(&value.to_string()).unwrap().image_url(), "");
    }

    #[test]
    fn test_unknown_stat_ignored_and_missing_stat_zero() {
        let body = json!({
            "id": 7,
            "name": "squirtle",
            "types": [{ "type": { "name": "water" } }],
            "stats": [
                { "base_stat": 44, "stat": { "name": "hp" } },
                { "base_stat": 99, "stat": { "name": "accuracy" } }
            ]
        })
        .to_string();
        let record = parse_record(&body).unwrap();
        assert_eq!(record.stats(), Stats::new(44, 0, 0, 0, 0, 0));
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let body = payload(9999, "shadowmon", &["shadow"], [1, 1, 1, 1, 1, 1]).to_string();
        assert!(matches!(parse_record(&body), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_missing_required_fields() {
        for field in ["id", "name", "types", "stats"] {
            let mut value = payload(1, "bulbasaur", &["grass"], [1, 2, 3, 4, 5, 6]);
            value.as_object_mut().unwrap().remove(field);
            assert!(
                matches!(parse_record(&value.to_string()), Err(AppError::Parse(_))),
                "missing {} should fail",
                field
            );
        }
    }

    #[test]
    fn test_large_stats_total() {
        let half = u32::MAX / 2;
        let body = payload(1, "bulbasaur", &["grass"], [half, half, 10, 0, 0, 0]).to_string();
        let record = parse_record(&body).unwrap();
        assert_eq!(record.stats().total(), u64::from(half) * 2 + 10);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_record("Not Found"), Err(AppError::Parse(_))));
        assert!(matches!(parse_record(""), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_zero_id_rejected() {
        let body = payload(0, "missingno", &["normal"], [0; 6]).to_string();
        assert!(matches!(parse_record(&body), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_empty_types_tolerated() {
        let body = payload(10, "caterpie", &[], [45, 30, 35, 20, 20, 45]).to_string();
        assert!(parse_record(&body).unwrap().types().is_empty());
    }
}
