//! Encode classification targets with a manual and a random mapping.
//!
//! Run with: `cargo run --example encode_targets`

use label_encoder_random::preprocessing::{
    LabelTransformer, ManualMappingEncoder, PreprocessingError, RandomMappingEncoder,
};

fn main() -> Result<(), PreprocessingError> {
    let species: Vec<String> = ["setosa", "versicolor", "virginica", "setosa", "virginica"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    // Random codes starting at 1, reproducible through the seed.
    let mut random = RandomMappingEncoder::<String>::new()
        .with_offset(1)
        .with_seed(2024);
    let codes = random.fit_transform(&species)?;
    println!("classes:         {:?}", random.classes()?);
    println!("random codes:    {:?}", codes);
    println!("decoded:         {:?}", random.inverse_transform(&codes)?);

    // Reuse the generated mapping, extended with a label not seen in training.
    let mut mapping = random.mapping()?.clone();
    mapping.insert("unknown".to_string(), 0);
    let mut manual = ManualMappingEncoder::new(mapping);
    manual.fit(&species)?;
    println!("decoded code 0:  {:?}", manual.inverse_transform(&[0])?);

    match manual.inverse_transform(&[99, 0, 42]) {
        Err(err) => println!("expected error:  {}", err),
        Ok(labels) => println!("unexpected success: {:?}", labels),
    }

    let path = std::env::temp_dir().join("encode_targets_demo.bin");
    random.save_to_file(&path)?;
    let loaded = RandomMappingEncoder::<String>::load_from_file(&path)?;
    println!("reloaded codes:  {:?}", loaded.transform(&species)?);
    std::fs::remove_file(path)?;

    Ok(())
}
