use crate::core::{Greeting, MessageProvider};

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMessageProvider;

impl StaticMessageProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MessageProvider for StaticMessageProvider {
    fn greeting(&self) -> Greeting {
        Greeting::hello_world()
    }
}
