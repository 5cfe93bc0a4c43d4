//! Build script: compiles `data/materials.toml` into a static table.
//!
//! The generated file defines `BUILTIN_MATERIALS: &[(&str, &str, f64)]`
//! as `(id, name, price_per_square_meter)` in file order. The catalog is
//! validated here so a bad data file fails the build instead of the
//! first request.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogFile {
    materials: Vec<MaterialRow>,
}

#[derive(Deserialize)]
struct MaterialRow {
    id: String,
    name: String,
    price_per_square_meter: f64,
}

fn main() {
    let data_path = Path::new("data/materials.toml");
    println!("cargo:rerun-if-changed={}", data_path.display());

    let raw = fs::read_to_string(data_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", data_path.display(), e));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", data_path.display(), e));

    assert!(!catalog.materials.is_empty(), "material catalog is empty");

    let mut seen = HashSet::new();
    for row in &catalog.materials {
        assert!(!row.id.is_empty(), "material with empty id: {:?}", row.name);
        assert!(seen.insert(row.id.clone()), "duplicate material id: {}", row.id);
        assert!(
            row.price_per_square_meter.is_finite() && row.price_per_square_meter > 0.0,
            "material {} has non-positive price {}",
            row.id,
            row.price_per_square_meter
        );
    }

    let mut out = String::new();
    out.push_str("// @generated by build.rs from data/materials.toml\n");
    out.push_str("pub const BUILTIN_MATERIALS: &[(&str, &str, f64)] = &[\n");
    for row in &catalog.materials {
        writeln!(
            out,
            "    ({:?}, {:?}, {:?}),",
            row.id, row.name, row.price_per_square_meter
        )
        .expect("writing to a String cannot fail");
    }
    out.push_str("];\n");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("materials_data.rs");
    fs::write(&dest, out).unwrap_or_else(|e| panic!("failed to write {}: {}", dest.display(), e));
}
