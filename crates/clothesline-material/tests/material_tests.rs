//! Integration tests for clothesline-material.

use clothesline_material::{MaterialCatalog, MaterialPreset};

fn custom(name: &str) -> MaterialPreset {
    MaterialPreset {
        name: name.into(),
        stiffness: 500.0,
        damping: 0.05,
        mass: 0.15,
        wind_resistance: 1.2,
        water_absorption: 1.0,
    }
}

// ─── Catalog Tests ────────────────────────────────────────────

#[test]
fn default_catalog_has_three_presets() {
    let catalog = MaterialCatalog::with_defaults();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.names(), vec!["Cotton", "Denim", "Silk"]);
}

#[test]
fn silk_values() {
    let catalog = MaterialCatalog::default();
    let silk = catalog.get("Silk").unwrap();
    assert_eq!(silk.stiffness, 300.0);
    assert_eq!(silk.damping, 0.02);
    assert_eq!(silk.mass, 0.1);
    assert_eq!(silk.wind_resistance, 1.5);
    assert_eq!(silk.water_absorption, 1.2);
}

#[test]
fn cotton_and_denim_values() {
    let catalog = MaterialCatalog::default();
    let cotton = catalog.get("Cotton").unwrap();
    assert_eq!((cotton.stiffness, cotton.damping, cotton.mass), (800.0, 0.1, 0.2));
    assert_eq!((cotton.wind_resistance, cotton.water_absorption), (1.0, 1.5));

    let denim = catalog.get("Denim").unwrap();
    assert_eq!((denim.stiffness, denim.damping, denim.mass), (1500.0, 0.2, 0.3));
    assert_eq!((denim.wind_resistance, denim.water_absorption), (0.7, 0.8));
}

#[test]
fn lookup_is_case_sensitive() {
    let catalog = MaterialCatalog::default();
    assert!(catalog.get("silk").is_none());
}

#[test]
fn require_reports_available_names() {
    let catalog = MaterialCatalog::default();
    let err = catalog.require("Linen").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Linen"));
    assert!(msg.contains("Cotton, Denim, Silk"));
}

#[test]
fn custom_material() {
    let mut catalog = MaterialCatalog::empty();
    assert!(catalog.is_empty());
    catalog.register(custom("Wool"));
    assert_eq!(catalog.len(), 1);
    assert!(catalog.require("Wool").is_ok());
}

#[test]
fn register_overwrites_same_name() {
    let mut catalog = MaterialCatalog::with_defaults();
    let mut heavy_silk = custom("Silk");
    heavy_silk.mass = 0.5;
    catalog.register(heavy_silk);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("Silk").unwrap().mass, 0.5);
}

#[test]
fn wind_resistance_ordering() {
    let catalog = MaterialCatalog::default();
    let silk = catalog.get("Silk").unwrap().wind_resistance;
    let cotton = catalog.get("Cotton").unwrap().wind_resistance;
    let denim = catalog.get("Denim").unwrap().wind_resistance;
    assert!(silk > cotton);
    assert!(cotton > denim);
}

// ─── Preset Tests ─────────────────────────────────────────────

#[test]
fn builtin_presets_are_valid() {
    let catalog = MaterialCatalog::default();
    assert!(catalog.iter().all(MaterialPreset::is_valid));
}

#[test]
fn invalid_damping_is_rejected() {
    let mut preset = custom("Bad");
    preset.damping = 1.5;
    assert!(!preset.is_valid());
    preset.damping = f32::NAN;
    assert!(!preset.is_valid());
}

#[test]
fn preset_uses_camel_case_keys() {
    let json = serde_json::to_string(&custom("Wool")).unwrap();
    assert!(json.contains("windResistance"));
    assert!(json.contains("waterAbsorption"));
}

#[test]
fn preset_parses_from_toml() {
    let src = r#"
        name = "Linen"
        stiffness = 1000.0
        damping = 0.15
        mass = 0.25
        wind_resistance = 0.9
        water_absorption = 1.1
    "#;
    let preset: MaterialPreset = toml::from_str(src).unwrap();
    assert_eq!(preset.name, "Linen");
    assert_eq!(preset.wind_resistance, 0.9);
    assert!(preset.is_valid());
}
