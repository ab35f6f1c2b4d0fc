//! Setup/unique parameter reconciliation within one activity

use emscribe_core::{Activity, MetadataMap, WARNINGS_KEY};
use std::collections::BTreeSet;
use tracing::warn;

/// Compute the activity's shared setup parameters.
///
/// Narrows a candidate key set seeded from the first file: each
/// subsequent file drops any candidate that is absent or whose value
/// differs from the recorded one, so the set only ever shrinks. After the
/// single pass, `setup_params` holds exactly the keys identical verbatim
/// across every member file. A single-file activity has nothing shared to
/// factor out and gets an empty map.
pub fn compute_setup_params(activity: &mut Activity) {
    if activity.files.len() == 1 {
        activity.setup_params = Some(MetadataMap::new());
        return;
    }

    let mut candidates: BTreeSet<String> = activity
        .files
        .iter()
        .flat_map(|f| f.metadata.keys())
        .filter(|k| k.as_str() != WARNINGS_KEY)
        .cloned()
        .collect();

    // Seed from the first file; keys it lacks can never be shared.
    let first = &activity.files[0];
    candidates.retain(|k| first.metadata.contains_key(k));
    let mut setup = MetadataMap::new();
    for key in &candidates {
        if let Some(value) = first.metadata.get(key) {
            setup.insert(key.clone(), value.clone());
        }
    }

    for file in &activity.files[1..] {
        let mut dropped = Vec::new();
        for key in &candidates {
            let matches = match (file.metadata.get(key), setup.get(key)) {
                (Some(theirs), Some(ours)) => theirs == ours,
                _ => false,
            };
            if !matches {
                dropped.push(key.clone());
            }
        }
        for key in dropped {
            candidates.remove(&key);
            setup.remove(&key);
        }
    }

    activity.setup_params = Some(setup);
}

/// Compute each file's unique metadata: the complement of `setup_params`.
///
/// Requires `compute_setup_params` to have run first; invocation out of
/// order indicates a caller bug and is logged and ignored rather than
/// guessed around.
pub fn compute_unique_metadata(activity: &mut Activity) {
    let Some(setup) = activity.setup_params.as_ref() else {
        warn!(
            files = activity.files.len(),
            "unique metadata requested before setup params were computed; skipping"
        );
        return;
    };

    let unique: Vec<MetadataMap> = activity
        .files
        .iter()
        .map(|file| {
            file.metadata
                .iter()
                .filter(|(k, _)| k.as_str() != WARNINGS_KEY && !setup.contains_key(k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .collect();

    activity.unique_meta = Some(unique);
}
