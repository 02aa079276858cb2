//! Directory search demo
//!
//! Builds the four per-kind indexes from in-memory records, then walks
//! through the create / rename / delete flow the API handlers follow.
//!
//! Run with `RUST_LOG=info` to see every indexed display string.

use trieward::directory::source::StaticSource;
use trieward::{Config, Directory, EntityKind, EntityRecord};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config {
        query_cache_size: 64,
        ..Config::default()
    };
    let directory: Directory = Directory::new(config);

    let locations = StaticSource::new(vec![
        EntityRecord::new("L1".to_string(), "Computer Science Building").with_aliases(["CSB"]),
        EntityRecord::new("L2".to_string(), "Science Library"),
    ]);
    let events = StaticSource::new(vec![
        EntityRecord::new("E1".to_string(), "Evening Social"),
        EntityRecord::new("E2".to_string(), "Evening Seminar"),
    ]);
    let empty = StaticSource::new(Vec::new());

    directory.initialize(EntityKind::Location, &locations)?;
    directory.initialize(EntityKind::Event, &events)?;
    directory.initialize(EntityKind::User, &empty)?;
    directory.initialize(EntityKind::Group, &empty)?;

    println!("'sci'         -> {:?}", directory.search(EntityKind::Location, "sci")?);
    println!("'csb'         -> {:?}", directory.search(EntityKind::Location, "csb")?);
    println!("'evening soc' -> {:?}", directory.search(EntityKind::Event, "evening soc")?);

    // Rename: old tokens stop matching
    directory.upsert(
        EntityKind::Event,
        &EntityRecord::new("E1".to_string(), "Evening Mixer"),
    )?;
    println!("after rename 'social' -> {:?}", directory.search(EntityKind::Event, "social")?);
    println!("after rename 'mix'    -> {:?}", directory.search(EntityKind::Event, "mix")?);

    // Delete
    directory.remove(EntityKind::Location, &"L2".to_string())?;
    println!("after delete 'sci' -> {:?}", directory.search(EntityKind::Location, "sci")?);

    println!("{}", serde_json::to_string_pretty(&directory.stats())?);
    Ok(())
}
