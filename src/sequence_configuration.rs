//! Configuration types for sequence sources and materializers

/// Sizing for `to_list_with` / `to_hash_set_with`
#[derive(Debug, Clone)]
pub struct MaterializeConfig {
    /// Capacity reserved up front when the source has no fast length
    pub initial_capacity: usize,
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

impl MaterializeConfig {
    pub(crate) fn capacity_for(&self, fast_len: Option<usize>) -> usize {
        fast_len.unwrap_or(self.initial_capacity)
    }
}

/// Line reading configuration for `lines_with`
#[derive(Debug, Clone)]
pub struct LineConfig {
    /// Initial capacity of the per-cursor line buffer
    pub buffer_capacity: usize,
    /// Also end lines at a lone `\r` and treat `\r\n` as one terminator
    pub split_on_carriage_return: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 256,
            split_on_carriage_return: true,
        }
    }
}
