use ogcard::CardConfig;

fn main() {
    let config = CardConfig::default();
    for source in &config.fonts {
        println!("{}", source.progress_label());
    }
    match ogcard::generate(&config) {
        Ok(artifact) => {
            println!(
                "Social card written to {} ({}x{})",
                artifact.path.display(),
                artifact.width,
                artifact.height
            );
        }
        Err(err) => {
            eprintln!("ogcard: {}", err);
            std::process::exit(1);
        }
    }
}
