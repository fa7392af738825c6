use anyhow::Context;
use clap::Command;
use encfix::prelude::*;

fn main() -> anyhow::Result<()> {
    let _ = Command::new("generate-fixtures")
        .version(encfix::VERSION)
        .about("Write test_gbk.txt (GBK) and test_utf8.txt (UTF-8) into the current directory")
        .get_matches();

    encfix::logging::init();

    let generator = Generator::new(GeneratorConfig::default());
    let report = generator
        .run(&FixturePlan::standard())
        .with_context(|| {
            format!(
                "failed to generate fixtures in {}",
                generator.config().output_dir().display()
            )
        })?;

    tracing::info!("Generated {} fixtures", report.written.len());
    Ok(())
}
