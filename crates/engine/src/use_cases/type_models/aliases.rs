//! Alias uniqueness across a whole set of models.

use std::collections::HashMap;

use modelgraph_domain::ContentTypeModel;

use super::error::{AliasConflict, BuildError};

/// Fail if two models share an alias, ignoring case.
///
/// When several aliases collide, the one whose first model comes first is
/// reported, listing every model that uses it in order.
pub fn ensure_distinct_aliases(models: &[ContentTypeModel]) -> Result<(), BuildError> {
    let mut groups: Vec<(String, Vec<&ContentTypeModel>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for model in models {
        let key = model.alias().key();
        match positions.get(&key) {
            Some(&position) => groups[position].1.push(model),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![model]));
            }
        }
    }

    match groups.into_iter().find(|(_, members)| members.len() > 1) {
        Some((alias, members)) => Err(BuildError::AliasConflict(AliasConflict::new(
            alias,
            members
                .into_iter()
                .map(|m| (m.item_kind(), m.alias().clone()))
                .collect(),
        ))),
        None => Ok(()),
    }
}
