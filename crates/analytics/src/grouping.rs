use core_types::ToolRecord;
use std::collections::HashMap;

/// Folds active records into groups, keeping groups in first-seen order.
///
/// Insight tie-breaks depend on this order, so a plain `HashMap` iteration
/// order is never exposed.
pub(crate) fn group_active<'a, A, K, F>(tools: &'a [ToolRecord], key: K, mut fold: F) -> Vec<(String, A)>
where
    A: Default,
    K: Fn(&'a ToolRecord) -> String,
    F: FnMut(&mut A, &'a ToolRecord),
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, A)> = Vec::new();

    for tool in tools.iter().filter(|t| t.is_active()) {
        let group_key = key(tool);
        let slot = match index.get(&group_key) {
            Some(&slot) => slot,
            None => {
                index.insert(group_key.clone(), groups.len());
                groups.push((group_key, A::default()));
                groups.len() - 1
            }
        };
        fold(&mut groups[slot].1, tool);
    }

    groups
}
