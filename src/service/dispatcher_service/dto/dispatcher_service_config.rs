use std::{collections::HashSet, time::Duration};

pub struct DispatcherServiceConfig {
    pub timeout: Duration,

    /// When set, only these notification types are handed to a channel
    pub allowed_types: Option<HashSet<String>>,
}
