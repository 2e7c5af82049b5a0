use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A class offered by the gym (Spinning, Yoga, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymClass {
    pub id: i64,
    pub name: String,
}

/// id → display name lookup used when labelling placed sessions.
#[derive(Debug, Default, Clone)]
pub struct ClassDirectory {
    names: HashMap<i64, String>,
}

impl ClassDirectory {
    pub fn new(classes: &[GymClass]) -> Self {
        Self {
            names: classes.iter().map(|c| (c.id, c.name.clone())).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Display name, or `Unknown class #<id>` for a dangling reference.
    pub fn name_of(&self, id: i64) -> String {
        self.get(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unknown class #{id}"))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
