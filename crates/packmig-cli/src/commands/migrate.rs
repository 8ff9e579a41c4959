use std::path::Path;

use packmig_core::{MigrationEngine, MigrationRequest};

pub struct Migrate;

impl Migrate {
    pub fn execute(
        from: Option<&str>,
        target: &str,
        keep_tutorial: bool,
        verbose: bool,
        state_file: Option<&Path>,
    ) -> anyhow::Result<()> {
        let store = super::state_store(state_file);
        let engine = MigrationEngine::with_state_store(Box::new(store));

        // No --from: reuse the last migration target as the source, the
        // same way the previous destination seeds the next run's source.
        let source = match from {
            Some(dir) => dir.to_string(),
            None => engine.last_target_dir().unwrap_or_default(),
        };

        if verbose {
            println!("Source: {source}");
            println!("Target: {target}");
            println!("Disable tutorial: {}", !keep_tutorial);
        }

        let request = MigrationRequest {
            source_dir: source,
            target_dir: target.to_string(),
            disable_tutorial: !keep_tutorial,
        };

        let outcome = engine.migrate(&request);

        for warning in &outcome.warnings {
            eprintln!("Warning: {warning}");
        }
        if verbose {
            for name in &outcome.missing {
                println!("Skipped (not present at source): {name}");
            }
        }

        if outcome.ok {
            println!("{}", outcome.message);
            Ok(())
        } else {
            anyhow::bail!("{}", outcome.message);
        }
    }
}
