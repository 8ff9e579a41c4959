use std::path::Path;

use packmig_core::state::StateStore;

pub struct LastTarget;

impl LastTarget {
    pub fn execute(state_file: Option<&Path>) -> anyhow::Result<()> {
        let store = super::state_store(state_file);

        match store.load().last_target_dir {
            Some(dir) => println!("{dir}"),
            None => println!("No migration target saved yet."),
        }

        Ok(())
    }
}
