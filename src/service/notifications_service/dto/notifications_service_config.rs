pub struct NotificationsServiceConfig {
    pub max_message_len: usize,
}
