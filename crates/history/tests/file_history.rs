//! Generated builds survive a round trip through the file-backed history.

use loadout_content::{LOL, builtin_registry};
use loadout_core::{BuildGenerator, BuildInput, Role};
use loadout_history::{FileHistoryRepository, HISTORY_CAP, HistoryRepository};

#[test]
fn stored_builds_replay_to_the_same_items() {
    let registry = builtin_registry().unwrap();
    let generator = BuildGenerator::new(&registry);
    let dir = tempfile::tempdir().unwrap();
    let repo = FileHistoryRepository::new(dir.path().join("history.json")).unwrap();

    for seed in ["one", "two", "three"] {
        let build = generator
            .generate(&BuildInput::new(LOL, "garen", Role::Top).with_seed(seed))
            .unwrap();
        repo.add(&build).unwrap();
    }

    let stored = repo.load().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0].seed, "three");

    for build in &stored {
        let replayed = generator
            .generate_from_identifier(&build.identifier)
            .unwrap()
            .unwrap();
        assert_eq!(replayed.item_ids(), build.item_ids());
    }
}

#[test]
fn history_stays_capped() {
    let registry = builtin_registry().unwrap();
    let generator = BuildGenerator::new(&registry);
    let dir = tempfile::tempdir().unwrap();
    let repo = FileHistoryRepository::new(dir.path().join("history.json")).unwrap();

    let mut last = Vec::new();
    for n in 0..HISTORY_CAP + 5 {
        let build = generator
            .generate(&BuildInput::new(LOL, "jinx", Role::Adc).with_seed(format!("cap-{n}")))
            .unwrap();
        last = repo.add(&build).unwrap();
    }

    assert_eq!(last.len(), HISTORY_CAP);
    assert_eq!(last[0].seed, format!("cap-{}", HISTORY_CAP + 4));
    assert_eq!(repo.load().unwrap(), last);
}
