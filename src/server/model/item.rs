use serde::Deserialize;

/// One cart line as submitted by the storefront. Never persisted as-is.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CartItem {
    pub name: String,
    pub quantity: u32,
}

#[cfg(test)]
impl CartItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}
