//! Integration tests for clothesline-types.

use clothesline_types::constants;
use clothesline_types::{ClothError, ClothId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn cloth_id_from_raw() {
    assert_eq!(ClothId::from(42), ClothId(42));
}

#[test]
fn cloth_id_display() {
    assert_eq!(ClothId(3).to_string(), "cloth#3");
}

#[test]
fn cloth_ids_order_by_creation() {
    assert!(ClothId(1) < ClothId(2));
}

#[test]
fn ids_are_serializable() {
    let id = ClothId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: ClothId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn line_full_display() {
    let err = ClothError::LineFull { capacity: 11 };
    let msg = err.to_string();
    assert!(msg.contains("Exhausted space"));
    assert!(msg.contains("11"));
    assert!(err.is_declined());
}

#[test]
fn unknown_material_lists_alternatives() {
    let err = ClothError::UnknownMaterial {
        name: "Linen".into(),
        available: "Cotton, Denim, Silk".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Linen"));
    assert!(msg.contains("Denim"));
    assert!(!err.is_declined());
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "scenario.toml");
    let err: ClothError = io.into();
    assert!(err.to_string().contains("scenario.toml"));
}

// ─── Constants Tests ──────────────────────────────────────────

#[test]
fn default_constants() {
    assert_eq!(constants::RELAXATION_PASSES, 5);
    assert!(constants::GRAVITY < 0.0);
    assert_eq!(constants::TIME_SCALE, 3.0);
    assert!(constants::MIN_CONSTRAINT_DISTANCE > 0.0);
}
