// Resource module
// Stylist model: the owner of one board column

use serde::{Deserialize, Serialize};

/// A stylist whose chair occupies one column in resource-axis view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialty: String,
}

impl Stylist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            specialty: String::new(),
        }
    }
}
