use std::path::Path;

fn main() {
    let catalog_path = Path::new("data/breed_mappings.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nBREED CATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the breed mapping file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nBREED CATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nBREED CATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    let breeds = catalog.as_object().unwrap_or_else(|| {
        panic!(
            "\n\nBREED CATALOG BUILD ERROR: Root must be a JSON object keyed by breed\n\
             Got: {catalog}\n"
        );
    });

    let mut eligible = 0;
    for (key, breed) in breeds {
        validate_breed_fields(key, breed);
        if has_quote_id(breed) {
            eligible += 1;
        }
    }

    println!(
        "cargo:warning=Validated breed catalog: {} breeds, {eligible} quotable",
        breeds.len()
    );
}

fn validate_breed_fields(key: &str, breed: &serde_json::Value) {
    assert!(
        !key.trim().is_empty(),
        "\n\nBREED CATALOG BUILD ERROR: Empty breed key\n"
    );
    assert!(
        key.chars().all(|c| !c.is_uppercase()),
        "\n\nBREED CATALOG BUILD ERROR: Breed key '{key}' must be lower-case\n"
    );

    let label = breed.get("label");
    assert!(
        label.and_then(serde_json::Value::as_str).is_some(),
        "\n\nBREED CATALOG BUILD ERROR: Breed '{key}' missing string 'label' field\n"
    );

    let providers = breed.get("providers").unwrap_or_else(|| {
        panic!("\n\nBREED CATALOG BUILD ERROR: Breed '{key}' missing 'providers' field\n");
    });
    let providers = providers.as_object().unwrap_or_else(|| {
        panic!(
            "\n\nBREED CATALOG BUILD ERROR: Breed '{key}' 'providers' must be an object\n\
             Got: {providers}\n"
        );
    });

    for (provider, id) in providers {
        assert!(
            id.is_string(),
            "\n\nBREED CATALOG BUILD ERROR: Breed '{key}' provider '{provider}' id must be a string\n\
             Got: {id}\n"
        );
    }
}

fn has_quote_id(breed: &serde_json::Value) -> bool {
    breed
        .get("providers")
        .and_then(|p| p.get("HealthyPaws"))
        .and_then(serde_json::Value::as_str)
        .is_some_and(|id| !id.is_empty())
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=data/breed_mappings.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
