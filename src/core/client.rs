use crate::core::{Greeting, MessageProvider, Result};
use std::io::Write;

pub struct MessengerClient<P: MessageProvider> {
    provider: P,
}

impl<P: MessageProvider> MessengerClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<Greeting> {
        // 取得固定問候訊息
        let greeting = self.provider.greeting();
        tracing::debug!("Provider returned greeting: {}", greeting);

        // 輸出問候訊息
        writeln!(out, "{}", greeting)?;
        out.flush()?;

        Ok(greeting)
    }
}
