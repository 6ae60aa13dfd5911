use crate::resource::{exists, DataLayout, ResourceAccess};

/// Upper bound on probes, a misbehaving origin that answers "found" for
/// everything would otherwise keep us looping.
pub const MAX_SET_PROBES: u32 = 50;

/// Find the sets available for a topic/level by probing `set1.json`,
/// `set2.json`, … until the first one that is missing.
///
/// Probes run one after the other: whether `set{n+1}` is tried depends on
/// `set{n}` existing. The result is never empty, when nothing is found `[1]`
/// is returned so the page still has a set to try (and to report on).
pub async fn discover_sets<R: ResourceAccess>(
    resources: &R,
    layout: &DataLayout,
    topic: &str,
    level: &str,
) -> Vec<u32> {
    let mut sets = Vec::new();
    for set in 1..=MAX_SET_PROBES {
        let path = layout.set_path(topic, level, set);
        match exists(resources, &path).await {
            Ok(true) => sets.push(set),
            Ok(false) => break,
            Err(e) => {
                tracing::debug!("stopping set discovery: {e}");
                break;
            }
        }
    }

    if sets.is_empty() {
        vec![1]
    } else {
        sets
    }
}
